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

//! Session hook and core-to-Dioxus callback bridge
//!
//! The core session reports changes through a framework-agnostic callback.
//! This hook turns that into a revision signal so the owning component
//! re-renders, and ties the session's lifetime to the component's.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use meeting_widget::{MeetingSession, MeetingWidgetConfig, RenderPlan};

use crate::context::{MeetingsCtx, ParticipantCtx};
use crate::timers::GlooTimers;

type SharedSession = Rc<RefCell<MeetingSession<GlooTimers>>>;

/// A mounted widget session.
#[derive(Clone)]
pub struct SessionHandle {
    session: SharedSession,
    meetings: MeetingsCtx,
    revision: Signal<u64>,
}

impl SessionHandle {
    /// Compose the current view. Reading the revision subscribes the calling
    /// component to every change the session reports.
    pub fn render_plan(&self) -> RenderPlan {
        let _ = *self.revision.read();
        MeetingSession::render_plan(&self.session, self.meetings.adapter())
    }

    pub fn set_viewport_width(&self, width: f64) {
        self.session.borrow_mut().set_viewport_width(width);
    }
}

pub fn use_meeting_session(config: MeetingWidgetConfig) -> SessionHandle {
    let meetings = use_context::<MeetingsCtx>();
    // Re-provided from this scope so the pre-join and authentication views
    // read the same participant details the session was seeded with.
    let inherited = try_use_context::<ParticipantCtx>();
    let participant = use_context_provider(move || inherited.unwrap_or_default());
    let revision = use_signal(|| 0u64);

    let session: SharedSession = use_hook(|| {
        let on_change = meeting_widget::Callback::from(move |()| {
            let mut revision = revision;
            *revision.write() += 1;
        });
        Rc::new(RefCell::new(MeetingSession::new(
            config.clone(),
            participant,
            GlooTimers,
            on_change,
        )))
    });

    // Subscribes after the first render, and again whenever the meeting id
    // prop changes.
    {
        let session = session.clone();
        let meetings = meetings.clone();
        use_effect(use_reactive(
            (&config.meeting_id,),
            move |(meeting_id,)| {
                let adapter = meetings.adapter();
                if meeting_id.as_deref() != session.borrow().meeting_id() {
                    MeetingSession::retarget(&session, &*adapter, meeting_id);
                } else if !session.borrow().is_attached() {
                    MeetingSession::attach(&session, &*adapter);
                }
            },
        ));
    }

    {
        let session = session.clone();
        use_drop(move || session.borrow_mut().teardown());
    }

    SessionHandle {
        session,
        meetings,
        revision,
    }
}
