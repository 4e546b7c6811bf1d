//! Modal Component
//!
//! Overlay dialog. Closes on Escape, on overlay click and from the close
//! button; body scrolling is locked while it is mounted.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use super::button::{Button, ButtonVariant};
use super::icons::XIcon;

/// Shown when a folder name fails validation
pub fn name_error_message(max_len: usize) -> String {
    format!("El nombre debe tener entre 1 y {} caracteres", max_len)
}

fn lock_body_scroll(locked: bool) {
    let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "unset" });
    }
}

#[component]
pub fn Modal(#[prop(into)] title: String, #[prop(into)] on_close: Callback<()>, children: Children) -> impl IntoView {
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    lock_body_scroll(true);
    on_cleanup(move || {
        escape.remove();
        lock_body_scroll(false);
    });

    let on_overlay_click = move |ev: web_sys::MouseEvent| {
        // Only clicks on the overlay itself, not bubbled from the dialog
        let on_overlay = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => JsValue::from(target) == JsValue::from(current),
            _ => false,
        };
        if on_overlay {
            on_close.run(());
        }
    };

    view! {
        <div class="modal-overlay" on:click=on_overlay_click>
            <div class="modal-container">
                <div class="modal-content modal-md" role="dialog" aria-modal="true">
                    <div class="modal-header">
                        <h3 class="modal-title">{title}</h3>
                        <Button
                            variant=ButtonVariant::Icon
                            class="modal-close-button"
                            aria_label="Cerrar"
                            on_click=move |_| on_close.run(())
                        >
                            <XIcon size=20 />
                        </Button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </div>
    }
}
