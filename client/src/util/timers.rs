//! Debounce and delayed callbacks over `gloo-timers`.
//!
//! Timers only exist in the browser; on the server scheduling is a no-op.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

/// Runs the most recently scheduled callback once input has been quiet for
/// the given delay. Scheduling again cancels the pending callback.
#[derive(Clone, Default)]
pub struct Debouncer {
    #[cfg(feature = "hydrate")]
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        #[cfg(feature = "hydrate")]
        {
            let pending = Rc::clone(&self.pending);
            let timeout = Timeout::new(delay_ms, move || {
                pending.borrow_mut().take();
                callback();
            });
            // Replacing drops the previous timer, which cancels it.
            *self.pending.borrow_mut() = Some(timeout);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, callback);
        }
    }
}

/// Run `callback` once after `delay_ms`.
pub fn after(delay_ms: u32, callback: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        Timeout::new(delay_ms, callback).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, callback);
    }
}
