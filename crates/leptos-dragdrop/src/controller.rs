//! Drag State Machine
//!
//! Toolkit-independent: callers feed it presses, movements, clock ticks and
//! releases; it decides when a press becomes a drag and what a release drops
//! onto. `Id` identifies draggables, `Target` identifies drop targets.

/// Input source of a gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sensor {
    Mouse,
    Touch,
    Keyboard,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Activation thresholds per sensor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivationConfig {
    /// Mouse travel (px) before a press becomes a drag
    pub mouse_distance: f64,
    /// Touch hold (ms) before a press becomes a drag
    pub touch_delay_ms: f64,
    /// Touch travel (px) tolerated during the hold
    pub touch_tolerance: f64,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            mouse_distance: 8.0,
            touch_delay_ms: 200.0,
            touch_tolerance: 5.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DragPhase<Id> {
    Idle,
    /// Pressed, activation constraint not met yet
    Pending {
        id: Id,
        sensor: Sensor,
        origin: Point,
        since_ms: f64,
    },
    Dragging {
        id: Id,
        sensor: Sensor,
    },
}

/// What a call changed
#[derive(Clone, Debug, PartialEq)]
pub enum Transition<Id> {
    None,
    Started(Id),
    /// A pending press was abandoned (touch moved during the hold)
    Aborted,
}

/// A finished drag
#[derive(Clone, Debug, PartialEq)]
pub struct Dropped<Id, Target> {
    pub id: Id,
    /// `None` when released outside every target
    pub target: Option<Target>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragController<Id, Target> {
    phase: DragPhase<Id>,
    over: Option<Target>,
    pointer: Option<Point>,
    config: ActivationConfig,
}

impl<Id: Clone + PartialEq, Target: Clone + PartialEq> Default for DragController<Id, Target> {
    fn default() -> Self {
        Self::new(ActivationConfig::default())
    }
}

impl<Id: Clone + PartialEq, Target: Clone + PartialEq> DragController<Id, Target> {
    pub fn new(config: ActivationConfig) -> Self {
        Self {
            phase: DragPhase::Idle,
            over: None,
            pointer: None,
            config,
        }
    }

    pub fn config(&self) -> ActivationConfig {
        self.config
    }

    pub fn phase(&self) -> &DragPhase<Id> {
        &self.phase
    }

    pub fn dragging_id(&self) -> Option<&Id> {
        match &self.phase {
            DragPhase::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn sensor(&self) -> Option<Sensor> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Pending { sensor, .. } | DragPhase::Dragging { sensor, .. } => Some(*sensor),
        }
    }

    /// Current drop target under the pointer (or keyboard cursor)
    pub fn over(&self) -> Option<&Target> {
        self.over.as_ref()
    }

    /// Last known pointer position while dragging
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Begin a gesture. Keyboard presses activate immediately; mouse and
    /// touch wait for their constraint. Ignored unless idle.
    pub fn press(&mut self, id: Id, sensor: Sensor, at: Point, now_ms: f64) -> Transition<Id> {
        if !matches!(self.phase, DragPhase::Idle) {
            return Transition::None;
        }
        if sensor == Sensor::Keyboard {
            return self.activate(id, sensor, None);
        }
        self.phase = DragPhase::Pending {
            id,
            sensor,
            origin: at,
            since_ms: now_ms,
        };
        Transition::None
    }

    /// Pointer moved
    pub fn movement(&mut self, at: Point, now_ms: f64) -> Transition<Id> {
        let (id, sensor, origin, since_ms) = match &self.phase {
            DragPhase::Idle => return Transition::None,
            DragPhase::Dragging { .. } => {
                self.pointer = Some(at);
                return Transition::None;
            }
            DragPhase::Pending {
                id,
                sensor,
                origin,
                since_ms,
            } => (id.clone(), *sensor, *origin, *since_ms),
        };

        let travelled = origin.distance(&at);
        match sensor {
            Sensor::Mouse if travelled > self.config.mouse_distance => self.activate(id, sensor, Some(at)),
            Sensor::Touch if now_ms - since_ms >= self.config.touch_delay_ms => self.activate(id, sensor, Some(at)),
            Sensor::Touch if travelled > self.config.touch_tolerance => {
                self.reset();
                Transition::Aborted
            }
            _ => Transition::None,
        }
    }

    /// Clock tick: a touch held still past the delay activates
    pub fn tick(&mut self, now_ms: f64) -> Transition<Id> {
        match &self.phase {
            DragPhase::Pending {
                id,
                sensor: Sensor::Touch,
                origin,
                since_ms,
            } if now_ms - since_ms >= self.config.touch_delay_ms => {
                let (id, origin) = (id.clone(), *origin);
                self.activate(id, Sensor::Touch, Some(origin))
            }
            _ => Transition::None,
        }
    }

    /// Pointer entered a target (`Some`) or left every target (`None`).
    /// Only tracked while dragging.
    pub fn hover(&mut self, target: Option<Target>) {
        if self.is_dragging() {
            self.over = target;
        }
    }

    /// Keyboard: step the cursor through `targets`, wrapping around
    pub fn cycle_target(&mut self, targets: &[Target], forward: bool) -> Option<&Target> {
        if !self.is_dragging() || targets.is_empty() {
            return None;
        }
        let len = targets.len();
        let current = self.over.as_ref().and_then(|t| targets.iter().position(|x| x == t));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.over = Some(targets[next].clone());
        self.over.as_ref()
    }

    /// Pointer released. A drag produces a drop onto the current target; a
    /// pending press (a click) produces nothing.
    pub fn release(&mut self) -> Option<Dropped<Id, Target>> {
        let phase = std::mem::replace(&mut self.phase, DragPhase::Idle);
        let target = self.over.take();
        self.pointer = None;
        match phase {
            DragPhase::Dragging { id, .. } => Some(Dropped { id, target }),
            _ => None,
        }
    }

    /// The mouse button is up but its mouseup never arrived (released
    /// outside the window). Drops a mouse gesture without a drop; returns
    /// true when one was in progress.
    pub fn mouse_released_elsewhere(&mut self) -> bool {
        if self.sensor() != Some(Sensor::Mouse) {
            return false;
        }
        self.reset();
        true
    }

    /// Abort whatever is in progress
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Force a drag to start, bypassing activation constraints
    pub fn start(&mut self, id: Id) -> Transition<Id> {
        self.reset();
        self.activate(id, Sensor::Keyboard, None)
    }

    /// Finish the active drag onto `target`
    pub fn end(&mut self, target: Option<Target>) -> Option<Dropped<Id, Target>> {
        if !self.is_dragging() {
            self.reset();
            return None;
        }
        self.over = target;
        self.release()
    }

    fn activate(&mut self, id: Id, sensor: Sensor, at: Option<Point>) -> Transition<Id> {
        self.phase = DragPhase::Dragging { id: id.clone(), sensor };
        self.over = None;
        self.pointer = at;
        Transition::Started(id)
    }

    fn reset(&mut self) {
        self.phase = DragPhase::Idle;
        self.over = None;
        self.pointer = None;
    }
}
