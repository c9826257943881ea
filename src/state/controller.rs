use super::drag::{DragSession, Handle};
use crate::model::SelectionAction;

struct ActiveDrag<G> {
    session: DragSession,
    guard: G,
}

/// Holds at most one drag session together with the guard that keeps its
/// document listeners registered. Dropping the guard releases them, so every
/// way a session ends (`end`, a replacing `begin`, dropping the controller)
/// releases the listeners.
pub struct DragController<G> {
    active: Option<ActiveDrag<G>>,
}

impl<G> Default for DragController<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> DragController<G> {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active_handle(&self) -> Option<Handle> {
        self.active.as_ref().map(|a| a.session.handle())
    }

    /// Starts `session`. A session that was still running is replaced and its
    /// guard handed back to the caller.
    pub fn begin(&mut self, session: DragSession, guard: G) -> Option<G> {
        self.active
            .replace(ActiveDrag { session, guard })
            .map(|old| old.guard)
    }

    /// Selection update for a pointer move; `None` once the drag has ended.
    pub fn on_move(&self, pointer_x: f64) -> Option<SelectionAction> {
        self.active.as_ref()?.session.action_for(pointer_x)
    }

    /// Ends the session and returns its guard. Calling it again is a no-op.
    pub fn end(&mut self) -> Option<G> {
        self.active.take().map(|a| a.guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Selection;
    use crate::state::drag::tests::rendered;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingGuard(Rc<Cell<u32>>);

    impl Drop for CountingGuard {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn session(handle: Handle) -> DragSession {
        let g = rendered(0.0, 200.0, 0.0, Selection::new(30, 75));
        DragSession::begin(handle, 100.0, g).unwrap()
    }

    #[test]
    fn end_releases_once() {
        let released = Rc::new(Cell::new(0));
        let mut ctl = DragController::new();
        ctl.begin(session(Handle::Left), CountingGuard(released.clone()));
        assert_eq!(ctl.active_handle(), Some(Handle::Left));

        drop(ctl.end());
        assert_eq!(released.get(), 1);
        assert!(ctl.end().is_none());
        assert_eq!(released.get(), 1);
        assert_eq!(ctl.active_handle(), None);
    }

    #[test]
    fn moves_after_end_are_ignored() {
        let mut ctl: DragController<()> = DragController::new();
        ctl.begin(session(Handle::Track), ());
        assert!(ctl.on_move(120.0).is_some());
        ctl.end();
        assert_eq!(ctl.on_move(120.0), None);
        assert_eq!(ctl.on_move(-40.0), None);
    }

    #[test]
    fn new_drag_replaces_running_one() {
        let released = Rc::new(Cell::new(0));
        let mut ctl = DragController::new();
        ctl.begin(session(Handle::Left), CountingGuard(released.clone()));
        let old = ctl.begin(session(Handle::Right), CountingGuard(released.clone()));
        assert!(old.is_some());
        drop(old);
        assert_eq!(released.get(), 1);
        assert_eq!(ctl.active_handle(), Some(Handle::Right));
        assert!(matches!(ctl.on_move(300.0), Some(SelectionAction::MoveMax(100))));
    }

    #[test]
    fn dropping_controller_releases_listeners() {
        let released = Rc::new(Cell::new(0));
        {
            let mut ctl = DragController::new();
            ctl.begin(session(Handle::Track), CountingGuard(released.clone()));
        }
        assert_eq!(released.get(), 1);
    }
}
