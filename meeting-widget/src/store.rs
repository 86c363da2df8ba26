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

//! Local UI state: everything the widget owns that cannot be derived from a
//! meeting snapshot.
//!
//! # Ownership
//! - [`LocalUiState`] is owned by one widget instance and mutated only by
//!   user interaction inside it (switching authentication panels) or by the
//!   toast scheduler.
//! - [`ParticipantContext`] is shared with the pre-join child. The widget
//!   seeds it once per mount from its configuration; the child reads it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Toast visibility, shared between the store and the toast scheduler's
/// pending timer so that an expiry lands without borrowing the widget.
#[derive(Debug, Clone, Default)]
pub struct ToastFlag(Rc<Cell<bool>>);

impl ToastFlag {
    pub fn get(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, visible: bool) {
        self.0.set(visible);
    }
}

impl PartialEq for ToastFlag {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

/// Which authentication panel the password overlay is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPanel {
    #[default]
    Guest,
    Host,
}

impl AuthPanel {
    pub fn aria_label(&self) -> &'static str {
        match self {
            AuthPanel::Guest => "Meeting guest authentication",
            AuthPanel::Host => "Meeting host authentication",
        }
    }
}

#[derive(Debug, Default)]
struct ParticipantDetails {
    participant_name: String,
    meeting_passcode: String,
}

/// Participant name and passcode shared with the pre-join flow.
#[derive(Debug, Clone, Default)]
pub struct ParticipantContext {
    inner: Rc<RefCell<ParticipantDetails>>,
}

impl PartialEq for ParticipantContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ParticipantContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the stored value actually changed.
    pub fn set_participant_name(&self, name: &str) -> bool {
        let mut details = self.inner.borrow_mut();
        if details.participant_name == name {
            return false;
        }
        details.participant_name = name.to_string();
        true
    }

    /// Returns `true` when the stored value actually changed.
    pub fn set_meeting_passcode(&self, passcode: &str) -> bool {
        let mut details = self.inner.borrow_mut();
        if details.meeting_passcode == passcode {
            return false;
        }
        details.meeting_passcode = passcode.to_string();
        true
    }

    pub fn participant_name(&self) -> String {
        self.inner.borrow().participant_name.clone()
    }

    pub fn meeting_passcode(&self) -> String {
        self.inner.borrow().meeting_passcode.clone()
    }
}

/// State owned by a single widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalUiState {
    toast: ToastFlag,
    pub auth_panel: AuthPanel,
    /// Passcode supplied by the embedding page at mount; suppresses the
    /// authentication overlay and is forwarded silently instead.
    supplied_passcode: Option<String>,
    participant: ParticipantContext,
    auth_overlay_open: bool,
}

impl LocalUiState {
    /// Build the store for a fresh mount and seed the shared participant
    /// context with whatever the embedding page supplied.
    pub fn mount(
        participant: ParticipantContext,
        participant_name: Option<&str>,
        meeting_passcode: Option<&str>,
    ) -> Self {
        let supplied_passcode = meeting_passcode
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        if let Some(passcode) = &supplied_passcode {
            participant.set_meeting_passcode(passcode);
        }
        if let Some(name) = participant_name.filter(|n| !n.is_empty()) {
            participant.set_participant_name(name);
        }
        Self {
            toast: ToastFlag::default(),
            auth_panel: AuthPanel::Guest,
            supplied_passcode,
            participant,
            auth_overlay_open: false,
        }
    }

    pub fn toast_visible(&self) -> bool {
        self.toast.get()
    }

    /// Handle given to the toast scheduler.
    pub fn toast_flag(&self) -> ToastFlag {
        self.toast.clone()
    }

    pub fn passcode_supplied(&self) -> bool {
        self.supplied_passcode.is_some()
    }

    pub fn participant(&self) -> &ParticipantContext {
        &self.participant
    }

    /// "I am the host". Only meaningful from the guest panel.
    pub fn switch_to_host(&mut self) -> bool {
        if self.auth_panel == AuthPanel::Host {
            return false;
        }
        self.auth_panel = AuthPanel::Host;
        true
    }

    /// Back action from the host panel.
    pub fn back_to_guest(&mut self) -> bool {
        if self.auth_panel == AuthPanel::Guest {
            return false;
        }
        self.auth_panel = AuthPanel::Guest;
        true
    }

    /// Track whether the authentication overlay is on screen.
    ///
    /// An overlay that opens again after having been torn down starts on the
    /// guest panel. Closing it leaves the stored panel untouched.
    pub fn sync_auth_overlay(&mut self, open: bool) {
        if open && !self.auth_overlay_open {
            self.auth_panel = AuthPanel::Guest;
        }
        self.auth_overlay_open = open;
    }

    /// Return to the freshly-mounted state while keeping the supplied
    /// configuration. Used when the widget is pointed at another meeting.
    pub fn reset(&mut self) {
        self.toast.set(false);
        self.auth_panel = AuthPanel::Guest;
        self.auth_overlay_open = false;
    }
}
