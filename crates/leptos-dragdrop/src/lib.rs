//! Leptos DragDrop Utilities
//!
//! Mouse, touch and keyboard drag-and-drop for Leptos.
//! Gesture rules live in [`DragController`]; this module feeds it DOM events
//! and mirrors its state into signals.
//!
//! Drop targets are found by hit-testing: the closest element under the
//! pointer carrying a `data-dnd-target` attribute is the candidate.

pub mod controller;

pub use controller::{ActivationConfig, DragController, DragPhase, Dropped, Point, Sensor, Transition};

use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Attribute marking an element as a drop target
pub const TARGET_ATTR: &str = "data-dnd-target";

/// Clicks right after a drop are ignored for this long
const DRAG_END_SUPPRESS_MS: i32 = 100;

/// Bounds for draggable ids and drop targets kept in signals
pub trait DndKey: Clone + PartialEq + Send + Sync + 'static {}

impl<T> DndKey for T where T: Clone + PartialEq + Send + Sync + 'static {}

/// DnD state signals
pub struct DndSignals<Id: DndKey, Target: DndKey> {
    pub controller_read: ReadSignal<DragController<Id, Target>>,
    pub controller_write: WriteSignal<DragController<Id, Target>>,
    /// Item being dragged (not set while merely pending)
    pub dragging_id: Memo<Option<Id>>,
    pub drop_target: Memo<Option<Target>>,
    /// Pointer position, for drawing the drag overlay
    pub pointer: Memo<Option<Point>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
}

impl<Id: DndKey, Target: DndKey> Clone for DndSignals<Id, Target> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Id: DndKey, Target: DndKey> Copy for DndSignals<Id, Target> {}

pub fn create_dnd_signals<Id: DndKey, Target: DndKey>(config: ActivationConfig) -> DndSignals<Id, Target> {
    let (controller_read, controller_write) = signal(DragController::new(config));
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let dragging_id = Memo::new(move |_| controller_read.with(|c| c.dragging_id().cloned()));
    let drop_target = Memo::new(move |_| controller_read.with(|c| c.over().cloned()));
    let pointer = Memo::new(move |_| controller_read.with(|c| c.pointer()));
    DndSignals {
        controller_read,
        controller_write,
        dragging_id,
        drop_target,
        pointer,
        drag_just_ended_read,
        drag_just_ended_write,
    }
}

impl<Id: DndKey, Target: DndKey> DndSignals<Id, Target> {
    fn sensor_untracked(&self) -> Option<Sensor> {
        self.controller_read.with_untracked(|c| c.sensor())
    }

    fn is_idle_untracked(&self) -> bool {
        self.controller_read.with_untracked(|c| matches!(c.phase(), DragPhase::Idle))
    }

    /// True right after a drop; click handlers should bail out
    pub fn drag_just_ended(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn schedule(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(win) = web_sys::window() {
        let cb = Closure::once_into_js(f);
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
    }
}

/// End drag operation
pub fn end_drag<Id: DndKey, Target: DndKey>(dnd: &DndSignals<Id, Target>) {
    dnd.controller_write.update(|c| c.cancel());
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    schedule(DRAG_END_SUPPRESS_MS, move || clear.set(false));
}

/// Presses on form controls never start a drag
fn is_interactive(target: Option<web_sys::EventTarget>) -> bool {
    target.is_some_and(|t| {
        t.dyn_ref::<web_sys::HtmlInputElement>().is_some() || t.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
    })
}

/// Create mousedown handler for draggable items
/// Records a pending drag; the controller activates it once the pointer moves far enough
pub fn make_on_mousedown<Id: DndKey, Target: DndKey>(
    dnd: DndSignals<Id, Target>,
    item_id: Id,
) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_interactive(ev.target()) {
            return;
        }
        let at = Point::new(ev.client_x() as f64, ev.client_y() as f64);
        let id = item_id.clone();
        dnd.controller_write.update(|c| {
            c.press(id, Sensor::Mouse, at, now_ms());
        });
    }
}

/// Create touchstart handler for draggable items
/// Starts the hold timer; a touch held still past the delay becomes a drag
pub fn make_on_touchstart<Id: DndKey, Target: DndKey>(
    dnd: DndSignals<Id, Target>,
    item_id: Id,
) -> impl Fn(web_sys::TouchEvent) + Clone + 'static {
    move |ev: web_sys::TouchEvent| {
        if is_interactive(ev.target()) {
            return;
        }
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let at = Point::new(touch.client_x() as f64, touch.client_y() as f64);
        let id = item_id.clone();
        let delay = dnd.controller_read.with_untracked(|c| c.config().touch_delay_ms);
        dnd.controller_write.update(|c| {
            c.press(id, Sensor::Touch, at, now_ms());
        });

        schedule(delay.ceil() as i32, move || {
            if let Some(Transition::Started(_)) = dnd.controller_write.try_update(|c| c.tick(now_ms())) {
                log::debug!("[DND] Touch drag started");
            }
        });
    }
}

/// Create keydown handler for drag handles
/// Space or Enter picks the item up; the global handler takes over from there
pub fn make_on_keydown<Id: DndKey, Target: DndKey>(
    dnd: DndSignals<Id, Target>,
    item_id: Id,
) -> impl Fn(web_sys::KeyboardEvent) + Clone + 'static {
    move |ev: web_sys::KeyboardEvent| {
        if !matches!(ev.key().as_str(), " " | "Enter") || !dnd.is_idle_untracked() {
            return;
        }
        let id = item_id.clone();
        let started = dnd
            .controller_write
            .try_update(|c| c.press(id, Sensor::Keyboard, Point::default(), now_ms()));
        if let Some(Transition::Started(_)) = started {
            // Keep the document handler from dropping on the same key press
            ev.prevent_default();
            ev.stop_propagation();
            log::debug!("[DND] Keyboard drag started");
        }
    }
}

/// Key of the closest drop target under a viewport point
fn hit_test(doc: &web_sys::Document, x: f64, y: f64) -> Option<String> {
    doc.element_from_point(x as f32, y as f32)?
        .closest(&format!("[{}]", TARGET_ATTR))
        .ok()??
        .get_attribute(TARGET_ATTR)
}

fn pointer_moved<Id: DndKey, Target: DndKey>(
    dnd: &DndSignals<Id, Target>,
    doc: &web_sys::Document,
    resolve: &dyn Fn(&str) -> Option<Target>,
    x: f64,
    y: f64,
) {
    match dnd.sensor_untracked() {
        None | Some(Sensor::Keyboard) => return,
        Some(_) => {}
    }
    let at = Point::new(x, y);
    let target = hit_test(doc, x, y).and_then(|key| resolve(&key));
    let transition = dnd.controller_write.try_update(|c| {
        let transition = c.movement(at, now_ms());
        c.hover(target);
        transition
    });
    match transition {
        Some(Transition::Started(_)) => log::debug!("[DND] Drag started"),
        Some(Transition::Aborted) => log::debug!("[DND] Touch moved before hold, not a drag"),
        _ => {}
    }
}

/// Moving with the primary button up: a mouseup was missed
fn mouse_button_lost<Id: DndKey, Target: DndKey>(dnd: &DndSignals<Id, Target>) {
    if dnd.sensor_untracked() != Some(Sensor::Mouse) {
        return;
    }
    let was_dragging = dnd.controller_read.with_untracked(|c| c.is_dragging());
    dnd.controller_write.update(|c| {
        c.mouse_released_elsewhere();
    });
    if was_dragging {
        end_drag(dnd);
    }
    log::debug!("[DND] Mouse released outside the page, gesture dropped");
}

fn finish<Id: DndKey, Target: DndKey>(dnd: &DndSignals<Id, Target>, on_drop: &dyn Fn(Dropped<Id, Target>)) {
    let dropped = dnd.controller_write.try_update(|c| c.release()).flatten();
    if let Some(drop) = dropped {
        end_drag(dnd);
        on_drop(drop);
    }
    // No drag: the click fires naturally on the element
}

fn pointer_released<Id: DndKey, Target: DndKey>(dnd: &DndSignals<Id, Target>, on_drop: &dyn Fn(Dropped<Id, Target>)) {
    match dnd.sensor_untracked() {
        None | Some(Sensor::Keyboard) => {}
        Some(_) => finish(dnd, on_drop),
    }
}

/// Bind document-level handlers driving every drag.
///
/// - `resolve_target` maps a `data-dnd-target` value to a target
/// - `keyboard_targets` lists the targets the arrow keys cycle through
/// - `on_drop` receives every finished drag, including drops outside any target
///
/// Bind once, from a component that lives as long as the signals.
pub fn bind_global_handlers<Id, Target, R, K, F>(
    dnd: DndSignals<Id, Target>,
    resolve_target: R,
    keyboard_targets: K,
    on_drop: F,
) where
    Id: DndKey,
    Target: DndKey,
    R: Fn(&str) -> Option<Target> + 'static,
    K: Fn() -> Vec<Target> + 'static,
    F: Fn(Dropped<Id, Target>) + 'static,
{
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("[DND] No document, drag-and-drop disabled");
        return;
    };
    let resolve_target = Rc::new(resolve_target);
    let on_drop = Rc::new(on_drop);

    let on_mousemove = {
        let resolve = resolve_target.clone();
        let doc = doc.clone();
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
            if ev.buttons() & 1 == 0 {
                mouse_button_lost(&dnd);
                return;
            }
            pointer_moved(&dnd, &doc, resolve.as_ref(), ev.client_x() as f64, ev.client_y() as f64);
        })
    };
    let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
    on_mousemove.forget();

    let on_touchmove = {
        let resolve = resolve_target.clone();
        let doc = doc.clone();
        Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
            let Some(touch) = ev.touches().get(0) else {
                return;
            };
            pointer_moved(&dnd, &doc, resolve.as_ref(), touch.client_x() as f64, touch.client_y() as f64);
            if dnd.controller_read.with_untracked(|c| c.is_dragging()) {
                // Stop the page from scrolling under the drag
                ev.prevent_default();
            }
        })
    };
    let options = web_sys::AddEventListenerOptions::new();
    options.set_passive(false);
    let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        on_touchmove.as_ref().unchecked_ref(),
        &options,
    );
    on_touchmove.forget();

    let on_mouseup = {
        let on_drop = on_drop.clone();
        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            pointer_released(&dnd, on_drop.as_ref());
        })
    };
    let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
    on_mouseup.forget();

    let on_touchend = {
        let on_drop = on_drop.clone();
        Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
            pointer_released(&dnd, on_drop.as_ref());
        })
    };
    let _ = doc.add_event_listener_with_callback("touchend", on_touchend.as_ref().unchecked_ref());
    let _ = doc.add_event_listener_with_callback("touchcancel", on_touchend.as_ref().unchecked_ref());
    on_touchend.forget();

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let Some(sensor) = dnd.sensor_untracked() else {
            return;
        };
        let key = ev.key();
        if key == "Escape" {
            end_drag(&dnd);
            log::debug!("[DND] Drag cancelled");
            return;
        }
        if sensor != Sensor::Keyboard {
            return;
        }
        match key.as_str() {
            "ArrowDown" | "ArrowRight" | "ArrowUp" | "ArrowLeft" => {
                ev.prevent_default();
                let forward = matches!(key.as_str(), "ArrowDown" | "ArrowRight");
                let targets = keyboard_targets();
                dnd.controller_write.update(|c| {
                    c.cycle_target(&targets, forward);
                });
            }
            " " | "Enter" => {
                ev.prevent_default();
                finish(&dnd, on_drop.as_ref());
            }
            _ => {}
        }
    });
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}
