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

//! The widget's view of whatever owns the meeting.
//!
//! Two seams:
//! - [`MeetingSource`] pushes immutable [`MeetingSnapshot`]s to subscribers.
//! - [`MeetingsAdapter`] receives fire-and-forget requests (toggle the roster,
//!   clear the password flag, ...). Their effect is only ever observed through
//!   the next snapshot; the widget never edits a snapshot itself.
//!
//! [`InMemoryMeetings`] implements both for the demo binary and for tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use meeting_widget_types::{ConnectionState, MeetingControl, MeetingSnapshot};

use crate::callback::Callback;

/// Live subscription handle. Dropping it unsubscribes.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

pub trait MeetingSource {
    /// Deliver every future snapshot of `meeting_id`, in publication order.
    /// Sources that already know the meeting deliver its current snapshot
    /// before returning.
    fn subscribe(&self, meeting_id: &str, on_snapshot: Callback<Rc<MeetingSnapshot>>)
        -> Subscription;
}

pub trait MeetingsAdapter {
    fn toggle_roster(&self, meeting_id: &str);
    fn toggle_settings(&self, meeting_id: &str);
    fn clear_password_required_flag(&self, meeting_id: &str);

    fn join_meeting(&self, meeting_id: &str, passcode: Option<&str>) {
        log::debug!(
            "join requested for {meeting_id} (passcode supplied: {}), no handler",
            passcode.is_some()
        );
    }

    /// Route a control-bar press. Only the roster and settings toggles are
    /// part of the required surface; everything else is optional.
    fn control_action(&self, meeting_id: &str, control: MeetingControl) {
        match control {
            MeetingControl::MemberRoster => self.toggle_roster(meeting_id),
            MeetingControl::Settings => self.toggle_settings(meeting_id),
            MeetingControl::JoinMeeting => self.join_meeting(meeting_id, None),
            other => log::debug!("no handler for control {other} on {meeting_id}"),
        }
    }
}

/// Everything the widget needs from its surroundings.
pub trait MeetingAdapter: MeetingSource + MeetingsAdapter {}

impl<T: MeetingSource + MeetingsAdapter + ?Sized> MeetingAdapter for T {}

/// A request received by [`InMemoryMeetings`], recorded in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterCall {
    ToggleRoster(String),
    ToggleSettings(String),
    ClearPasswordRequired(String),
    Join {
        meeting_id: String,
        passcode: Option<String>,
    },
    Control(String, MeetingControl),
}

struct Subscriber {
    key: u64,
    meeting_id: String,
    callback: Callback<Rc<MeetingSnapshot>>,
}

#[derive(Default)]
struct Registry {
    meetings: HashMap<String, Rc<MeetingSnapshot>>,
    passwords: HashMap<String, String>,
    subscribers: Vec<Subscriber>,
    next_key: u64,
    calls: Vec<AdapterCall>,
}

/// Single-threaded meeting store that publishes snapshots to subscribers.
#[derive(Clone, Default)]
pub struct InMemoryMeetings {
    inner: Rc<RefCell<Registry>>,
}

impl InMemoryMeetings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or replace a meeting and publish it.
    pub fn insert(&self, snapshot: MeetingSnapshot) {
        let snapshot = Rc::new(snapshot);
        self.inner
            .borrow_mut()
            .meetings
            .insert(snapshot.id.clone(), snapshot.clone());
        self.publish(snapshot);
    }

    /// Joining `meeting_id` will require this passcode.
    pub fn require_password(&self, meeting_id: &str, password: &str) {
        self.inner
            .borrow_mut()
            .passwords
            .insert(meeting_id.to_string(), password.to_string());
    }

    pub fn snapshot(&self, meeting_id: &str) -> Option<Rc<MeetingSnapshot>> {
        self.inner.borrow().meetings.get(meeting_id).cloned()
    }

    pub fn calls(&self) -> Vec<AdapterCall> {
        self.inner.borrow().calls.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Apply `edit` to a copy of the current snapshot and publish the result
    /// if anything changed. Returns `false` for unknown meetings and for
    /// state changes after the meeting was left.
    pub fn update(&self, meeting_id: &str, edit: impl FnOnce(&mut MeetingSnapshot)) -> bool {
        let Some(current) = self.snapshot(meeting_id) else {
            log::warn!("update for unknown meeting {meeting_id}");
            return false;
        };
        let mut next = (*current).clone();
        edit(&mut next);
        if next == *current {
            return false;
        }
        if current.has_left() && next.connection_state != current.connection_state {
            log::warn!(
                "meeting {meeting_id} already left, ignoring transition to {:?}",
                next.connection_state
            );
            return false;
        }
        self.insert(next);
        true
    }

    fn record(&self, call: AdapterCall) {
        self.inner.borrow_mut().calls.push(call);
    }

    fn publish(&self, snapshot: Rc<MeetingSnapshot>) {
        let callbacks: Vec<_> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.meeting_id == snapshot.id)
            .map(|s| s.callback.clone())
            .collect();
        for callback in callbacks {
            callback.emit(snapshot.clone());
        }
    }
}

impl MeetingSource for InMemoryMeetings {
    fn subscribe(
        &self,
        meeting_id: &str,
        on_snapshot: Callback<Rc<MeetingSnapshot>>,
    ) -> Subscription {
        let (key, current) = {
            let mut registry = self.inner.borrow_mut();
            let key = registry.next_key;
            registry.next_key += 1;
            registry.subscribers.push(Subscriber {
                key,
                meeting_id: meeting_id.to_string(),
                callback: on_snapshot.clone(),
            });
            (key, registry.meetings.get(meeting_id).cloned())
        };
        log::info!("subscribed to meeting {meeting_id}");

        if let Some(snapshot) = current {
            on_snapshot.emit(snapshot);
        }

        let registry = Rc::downgrade(&self.inner);
        let meeting_id = meeting_id.to_string();
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().subscribers.retain(|s| s.key != key);
                log::info!("unsubscribed from meeting {meeting_id}");
            }
        })
    }
}

impl MeetingsAdapter for InMemoryMeetings {
    fn toggle_roster(&self, meeting_id: &str) {
        self.record(AdapterCall::ToggleRoster(meeting_id.to_string()));
        self.update(meeting_id, |m| m.roster_visible = !m.roster_visible);
    }

    fn toggle_settings(&self, meeting_id: &str) {
        self.record(AdapterCall::ToggleSettings(meeting_id.to_string()));
        self.update(meeting_id, |m| m.settings_visible = !m.settings_visible);
    }

    fn clear_password_required_flag(&self, meeting_id: &str) {
        self.record(AdapterCall::ClearPasswordRequired(meeting_id.to_string()));
        self.update(meeting_id, |m| m.password_required = false);
    }

    fn join_meeting(&self, meeting_id: &str, passcode: Option<&str>) {
        self.record(AdapterCall::Join {
            meeting_id: meeting_id.to_string(),
            passcode: passcode.map(str::to_string),
        });
        let expected = self.inner.borrow().passwords.get(meeting_id).cloned();
        let accepted = match (&expected, passcode) {
            (None, _) => true,
            (Some(expected), Some(given)) => expected == given,
            (Some(_), None) => false,
        };
        self.update(meeting_id, |m| {
            if m.connection_state != Some(ConnectionState::NotJoined) {
                return;
            }
            if accepted {
                m.connection_state = Some(ConnectionState::Joined);
                m.password_required = false;
            } else {
                m.password_required = true;
            }
        });
    }

    fn control_action(&self, meeting_id: &str, control: MeetingControl) {
        self.record(AdapterCall::Control(meeting_id.to_string(), control));
        match control {
            MeetingControl::MuteAudio => {
                self.update(meeting_id, |m| {
                    m.local_audio.stream_present = !m.local_audio.stream_present
                });
            }
            MeetingControl::MuteVideo => {
                self.update(meeting_id, |m| {
                    m.local_video.stream_present = !m.local_video.stream_present
                });
            }
            MeetingControl::LeaveMeeting => {
                self.update(meeting_id, |m| {
                    m.connection_state = Some(ConnectionState::Left)
                });
            }
            MeetingControl::MemberRoster => self.toggle_roster(meeting_id),
            MeetingControl::Settings => self.toggle_settings(meeting_id),
            MeetingControl::JoinMeeting => self.join_meeting(meeting_id, None),
            MeetingControl::ShareScreen => {
                log::debug!("screen sharing is not simulated for {meeting_id}")
            }
        }
    }
}
