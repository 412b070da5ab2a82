use crate::ui::NucleusUiState;
use log::debug;

/// Pointer events scoped to the nucleus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
    Click,
}

/// Whether an event should continue on to the camera controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Applies a nucleus pointer event. Nucleus events never reach the camera.
pub fn dispatch(state: &mut NucleusUiState, event: PointerEvent) -> Propagation {
    match event {
        PointerEvent::Enter => state.set_hovered(true),
        PointerEvent::Leave => state.set_hovered(false),
        PointerEvent::Click => state.toggle_expanded(),
    }
    debug!("Nucleus {event:?} -> {state:?}");
    Propagation::Stop
}

/// Turns per-move hit tests into enter/leave edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverTracker {
    over: bool,
}

impl HoverTracker {
    pub fn update(&mut self, hit: bool) -> Option<PointerEvent> {
        let edge = match (self.over, hit) {
            (false, true) => Some(PointerEvent::Enter),
            (true, false) => Some(PointerEvent::Leave),
            _ => None,
        };
        self.over = hit;
        edge
    }

    pub fn is_over(&self) -> bool {
        self.over
    }
}
