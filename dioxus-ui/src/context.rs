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

//! Context providers for the widget.
//!
//! The meeting source/adapter and the participant details are owned by the
//! embedding application and shared with every widget through Dioxus's
//! context system.

use std::rc::Rc;

use meeting_widget::{MeetingAdapter, ParticipantContext};

/// The meeting source and adapter shared by every widget in the tree.
#[derive(Clone)]
pub struct MeetingsCtx(Rc<dyn MeetingAdapter>);

impl MeetingsCtx {
    pub fn new(adapter: impl MeetingAdapter + 'static) -> Self {
        Self(Rc::new(adapter))
    }

    pub fn adapter(&self) -> Rc<dyn MeetingAdapter> {
        self.0.clone()
    }
}

impl PartialEq for MeetingsCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Participant name and meeting passcode, shared between the widget and the
/// pre-join and authentication views.
pub type ParticipantCtx = ParticipantContext;
