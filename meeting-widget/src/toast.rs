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

//! Media-state toast ("Muted, Camera on") shown for a fixed window after
//! microphone, camera or connection state changes.
//!
//! # Cancel-and-replace
//! At most one hide timer is pending at any time. Every re-trigger drops the
//! previous handle (which cancels it) before scheduling the next one, so two
//! changes 500 ms apart produce a single hide, three seconds after the second.
//! Tearing the scheduler down drops the last handle as well.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use meeting_widget_types::{ConnectionState, LocalMedia, MeetingSnapshot};

use crate::callback::Callback;
use crate::store::ToastFlag;
use crate::timers::TimerService;

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

pub fn toast_text(audio: LocalMedia, video: LocalMedia) -> String {
    format!(
        "{}, {}",
        if audio.stream_present { "Unmuted" } else { "Muted" },
        if video.stream_present {
            "Camera on"
        } else {
            "Camera off"
        }
    )
}

/// The inputs a toast reacts to. Anything else in a snapshot (roster,
/// settings, password flag) is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MediaSignals {
    audio: LocalMedia,
    video: LocalMedia,
    state: Option<ConnectionState>,
}

impl From<&MeetingSnapshot> for MediaSignals {
    fn from(snapshot: &MeetingSnapshot) -> Self {
        Self {
            audio: snapshot.local_audio,
            video: snapshot.local_video,
            state: snapshot.connection_state,
        }
    }
}

/// Outcome of feeding a snapshot to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastChange {
    Unchanged,
    /// A new display window started (possibly replacing a running one).
    Shown,
    Hidden,
}

pub struct ToastScheduler<T: TimerService> {
    timers: T,
    visible: ToastFlag,
    /// Bumped on every cancel so a callback from a superseded cycle can never
    /// hide the toast of the current one.
    generation: Rc<Cell<u64>>,
    pending: Option<T::Handle>,
    text: Option<String>,
    last_signals: Option<MediaSignals>,
    on_hide: Callback<()>,
}

impl<T: TimerService> ToastScheduler<T> {
    pub fn new(timers: T, visible: ToastFlag, on_hide: Callback<()>) -> Self {
        Self {
            timers,
            visible,
            generation: Rc::new(Cell::new(0)),
            pending: None,
            text: None,
            last_signals: None,
            on_hide,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    /// Text captured when the current window started. Streams changing
    /// mid-display start a new window instead of editing this one.
    pub fn text(&self) -> Option<&str> {
        if self.visible.get() {
            self.text.as_deref()
        } else {
            None
        }
    }

    /// React to a newly delivered snapshot.
    ///
    /// The first snapshot in which a meeting exists counts as a change. No
    /// toast is scheduled while the meeting object is absent, and leaving the
    /// meeting cancels whatever is pending.
    pub fn observe(&mut self, snapshot: &MeetingSnapshot) -> ToastChange {
        let signals = MediaSignals::from(snapshot);
        if self.last_signals == Some(signals) {
            return ToastChange::Unchanged;
        }
        self.last_signals = Some(signals);

        match signals.state {
            None | Some(ConnectionState::Left) => {
                if self.hide() {
                    ToastChange::Hidden
                } else {
                    ToastChange::Unchanged
                }
            }
            Some(_) => {
                self.show(toast_text(signals.audio, signals.video));
                ToastChange::Shown
            }
        }
    }

    /// Start a new display window, replacing any pending one.
    pub fn show(&mut self, text: String) {
        self.cancel_pending();

        let expected = self.generation.get();
        let generation = self.generation.clone();
        let visible = self.visible.clone();
        let on_hide = self.on_hide.clone();
        let handle = self.timers.schedule(
            TOAST_DURATION,
            Box::new(move || {
                if generation.get() != expected {
                    return;
                }
                visible.set(false);
                log::debug!("media-state toast expired");
                on_hide.emit(());
            }),
        );

        log::debug!("media-state toast shown: {text}");
        self.text = Some(text);
        self.visible.set(true);
        self.pending = Some(handle);
    }

    /// Cancel the pending window and hide immediately. Returns `true` when
    /// the toast was visible.
    pub fn hide(&mut self) -> bool {
        self.cancel_pending();
        let was_visible = self.visible.get();
        self.visible.set(false);
        self.text = None;
        was_visible
    }

    /// Forget everything observed so far; the next snapshot with a meeting
    /// counts as a change again.
    pub fn reset(&mut self) {
        self.hide();
        self.last_signals = None;
    }

    fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("media-state toast timer cancelled");
        }
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}
