//! Global session-expired handler
//!
//! Lets any flow report an unrecoverable session without knowing about the
//! router. The app registers a callback that redirects to the login view.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

thread_local! {
    /// Global session-expired callback
    static SESSION_EXPIRED_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Set the global session-expired callback
pub fn set_session_expired_callback(callback: Rc<dyn Fn()>) {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the session-expired callback
pub fn clear_session_expired_callback() {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Trigger the session-expired callback, if one is registered
pub fn trigger_session_expired() {
    // Clone out of the cell so the callback may replace itself
    let callback = SESSION_EXPIRED_CALLBACK.with(|cb| cb.borrow().clone());
    match callback {
        Some(callback) => callback(),
        None => debug!("session expired with no handler registered"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn trigger_runs_registered_callback() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        set_session_expired_callback(Rc::new(move || counter.set(counter.get() + 1)));

        trigger_session_expired();
        trigger_session_expired();
        assert_eq!(hits.get(), 2);

        clear_session_expired_callback();
        trigger_session_expired();
        assert_eq!(hits.get(), 2);
    }
}
