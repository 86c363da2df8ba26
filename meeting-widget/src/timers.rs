/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! One-shot timer abstraction.
//!
//! The browser front-end backs this with `gloo_timers::callback::Timeout`;
//! tests use [`ManualTimers`], a virtual clock advanced by hand.

use std::time::Duration;

/// Schedules one-shot callbacks on the current thread's event loop.
///
/// Dropping the returned handle cancels the callback if it has not fired
/// yet. Dropping a handle whose callback already fired is a no-op.
pub trait TimerService {
    type Handle;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

#[cfg(any(test, feature = "testing"))]
pub use manual::{ManualTimeout, ManualTimers};

#[cfg(any(test, feature = "testing"))]
mod manual {
    use super::TimerService;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    type Pending = BTreeMap<(Duration, u64), Box<dyn FnOnce()>>;

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        pending: Pending,
    }

    /// Deterministic timer queue driven by [`ManualTimers::advance`].
    #[derive(Clone, Default)]
    pub struct ManualTimers {
        clock: Rc<RefCell<Clock>>,
    }

    /// Cancels its entry on drop.
    pub struct ManualTimeout {
        key: (Duration, u64),
        clock: Weak<RefCell<Clock>>,
    }

    impl Drop for ManualTimeout {
        fn drop(&mut self) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().pending.remove(&self.key);
            }
        }
    }

    impl ManualTimers {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> Duration {
            self.clock.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().pending.len()
        }

        /// Move the clock forward, firing due callbacks in deadline order.
        ///
        /// Callbacks may schedule or cancel other timers; anything that lands
        /// inside the advanced window fires in the same call.
        pub fn advance(&self, by: Duration) {
            let target = self.now() + by;
            loop {
                let due = {
                    let mut clock = self.clock.borrow_mut();
                    let key = match clock.pending.keys().next() {
                        Some(key) if key.0 <= target => *key,
                        _ => break,
                    };
                    clock.now = key.0;
                    clock.pending.remove(&key)
                };
                if let Some(callback) = due {
                    callback();
                }
            }
            self.clock.borrow_mut().now = target;
        }

        pub fn advance_ms(&self, ms: u64) {
            self.advance(Duration::from_millis(ms));
        }
    }

    impl TimerService for ManualTimers {
        type Handle = ManualTimeout;

        fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> ManualTimeout {
            let mut clock = self.clock.borrow_mut();
            let key = (clock.now + delay, clock.next_id);
            clock.next_id += 1;
            clock.pending.insert(key, callback);
            ManualTimeout {
                key,
                clock: Rc::downgrade(&self.clock),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn fires_at_deadline_and_not_before() {
        let timers = ManualTimers::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        let log = fired.clone();
        let _handle = timers.schedule(
            Duration::from_millis(3000),
            Box::new(move || log.borrow_mut().push("hide")),
        );

        timers.advance_ms(2999);
        assert!(fired.borrow().is_empty());
        timers.advance_ms(1);
        assert_eq!(*fired.borrow(), vec!["hide"]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let timers = ManualTimers::new();
        let fired = Rc::new(RefCell::new(0));
        let count = fired.clone();
        let handle = timers.schedule(
            Duration::from_millis(10),
            Box::new(move || *count.borrow_mut() += 1),
        );
        drop(handle);
        timers.advance_ms(100);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn dropping_a_fired_handle_is_harmless() {
        let timers = ManualTimers::new();
        let handle = timers.schedule(Duration::from_millis(5), Box::new(|| {}));
        timers.advance_ms(5);
        drop(handle);
        assert_eq!(timers.pending(), 0);
        assert_eq!(timers.now(), Duration::from_millis(5));
    }
}
