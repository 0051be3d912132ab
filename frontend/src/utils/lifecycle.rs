use leptos::*;
use std::{cell::Cell, rc::Rc};

/// Flag that stays set while the owning view is mounted.
///
/// Async work started by a view checks it before touching view state, so a
/// late response after navigation is dropped instead of applied.
#[derive(Clone, Debug)]
pub struct ViewLiveness(Rc<Cell<bool>>);

impl ViewLiveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn retire(&self) {
        self.0.set(false);
    }
}

impl Default for ViewLiveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Liveness flag retired when the current reactive owner is cleaned up.
pub fn use_view_liveness() -> ViewLiveness {
    let liveness = ViewLiveness::new();
    let on_dispose = liveness.clone();
    on_cleanup(move || on_dispose.retire());
    liveness
}
