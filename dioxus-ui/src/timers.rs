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

use std::time::Duration;

use gloo_timers::callback::Timeout;
use meeting_widget::TimerService;

/// Browser timers. The returned [`Timeout`] clears itself when dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlooTimers;

impl TimerService for GlooTimers {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }
}
