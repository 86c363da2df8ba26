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

//! One mounted widget: latest snapshot, viewport width, local UI state and
//! the toast scheduler, wired to a meeting source.
//!
//! # Flow
//! 1. [`MeetingSession::attach`] subscribes to the configured meeting.
//! 2. Every delivered snapshot replaces the previous one and is fed to the
//!    toast scheduler.
//! 3. [`MeetingSession::descriptor`] re-runs the resolver on demand; nothing
//!    derived is cached.
//! 4. `on_change` fires once per observable change so the front-end can
//!    re-render.
//!
//! The session is single-threaded and shared as `Rc<RefCell<..>>`. Callbacks
//! handed out to children hold a `Weak` so they never keep a torn-down
//! session alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use meeting_widget_types::{ConnectionState, MeetingSnapshot};

use crate::adapter::{MeetingSource, MeetingsAdapter, Subscription};
use crate::callback::Callback;
use crate::composer::{compose, AuthActions, ComposeInputs, RenderPlan};
use crate::config::MeetingWidgetConfig;
use crate::resolver::{resolve, ViewDescriptor};
use crate::store::{AuthPanel, LocalUiState, ParticipantContext};
use crate::timers::TimerService;
use crate::toast::ToastScheduler;

pub struct MeetingSession<T: TimerService> {
    config: MeetingWidgetConfig,
    snapshot: Rc<MeetingSnapshot>,
    viewport_width: Option<f64>,
    ui: LocalUiState,
    toast: ToastScheduler<T>,
    subscription: Option<Subscription>,
    on_change: Callback<()>,
}

impl<T: TimerService + 'static> MeetingSession<T> {
    pub fn new(
        config: MeetingWidgetConfig,
        participant: ParticipantContext,
        timers: T,
        on_change: Callback<()>,
    ) -> Self {
        let ui = LocalUiState::mount(
            participant,
            config.participant_name.as_deref(),
            config.meeting_password_or_pin.as_deref(),
        );
        let toast = ToastScheduler::new(timers, ui.toast_flag(), on_change.clone());
        let snapshot = Rc::new(MeetingSnapshot::not_created(
            config.meeting_id.clone().unwrap_or_default(),
        ));
        Self {
            config,
            snapshot,
            viewport_width: None,
            ui,
            toast,
            subscription: None,
            on_change,
        }
    }

    /// Build a session and subscribe it in one go.
    pub fn mount<S: MeetingSource + ?Sized>(
        config: MeetingWidgetConfig,
        participant: ParticipantContext,
        timers: T,
        on_change: Callback<()>,
        source: &S,
    ) -> Rc<RefCell<Self>> {
        let session = Rc::new(RefCell::new(Self::new(config, participant, timers, on_change)));
        Self::attach(&session, source);
        session
    }

    /// Subscribe to the configured meeting. Without a meeting id the session
    /// stays on the loading view.
    pub fn attach<S: MeetingSource + ?Sized>(this: &Rc<RefCell<Self>>, source: &S) {
        let Some(meeting_id) = this.borrow().config.meeting_id.clone() else {
            log::info!("no meeting id configured, staying on the loading view");
            return;
        };

        let weak = Rc::downgrade(this);
        let subscription = source.subscribe(
            &meeting_id,
            Callback::from(move |snapshot: Rc<MeetingSnapshot>| {
                if let Some(session) = weak.upgrade() {
                    session.borrow_mut().apply_snapshot(snapshot);
                }
            }),
        );
        this.borrow_mut().subscription = Some(subscription);
    }

    /// Point the widget at a different meeting. Everything tied to the old
    /// meeting is dropped before the new subscription starts.
    pub fn retarget<S: MeetingSource + ?Sized>(
        this: &Rc<RefCell<Self>>,
        source: &S,
        meeting_id: Option<String>,
    ) {
        {
            let mut session = this.borrow_mut();
            if session.config.meeting_id == meeting_id {
                return;
            }
            log::info!(
                "meeting id changed from {:?} to {:?}",
                session.config.meeting_id,
                meeting_id
            );
            session.subscription = None;
            session.toast.reset();
            session.ui.reset();
            session.snapshot = Rc::new(MeetingSnapshot::not_created(
                meeting_id.clone().unwrap_or_default(),
            ));
            session.config.meeting_id = meeting_id;
        }
        let placeholder = this.borrow().snapshot.clone();
        Self::attach(this, source);

        // A snapshot delivered during attach has already been reported.
        let (delivered, on_change) = {
            let session = this.borrow();
            (
                !Rc::ptr_eq(&placeholder, &session.snapshot),
                session.on_change.clone(),
            )
        };
        if !delivered {
            on_change.emit(());
        }
    }

    pub fn apply_snapshot(&mut self, snapshot: Rc<MeetingSnapshot>) {
        if self.config.meeting_id.as_deref() != Some(snapshot.id.as_str()) {
            log::warn!("ignoring snapshot for foreign meeting {}", snapshot.id);
            return;
        }
        if snapshot.connection_state == Some(ConnectionState::Unknown)
            && self.snapshot.connection_state != Some(ConnectionState::Unknown)
        {
            log::warn!(
                "meeting {} reported an unrecognised connection state, showing waiting-for-host",
                snapshot.id
            );
        }
        if *snapshot == *self.snapshot {
            return;
        }

        self.snapshot = snapshot;
        self.toast.observe(&self.snapshot);
        let auth_open = self.descriptor().show_auth_overlay;
        self.ui.sync_auth_overlay(auth_open);
        self.on_change.emit(());
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        let width = width.max(0.0);
        if self
            .viewport_width
            .is_some_and(|current| (width - current).abs() < f64::EPSILON)
        {
            return;
        }
        self.viewport_width = Some(width);
        self.on_change.emit(());
    }

    pub fn switch_to_host_panel(&mut self) {
        if self.ui.switch_to_host() {
            self.on_change.emit(());
        }
    }

    pub fn back_to_guest_panel(&mut self) {
        if self.ui.back_to_guest() {
            self.on_change.emit(());
        }
    }

    pub fn descriptor(&self) -> ViewDescriptor {
        // An unmeasured root is never compact.
        let width = self.viewport_width.unwrap_or(f64::INFINITY);
        resolve(&self.snapshot, &self.ui, width)
    }

    pub fn snapshot(&self) -> Rc<MeetingSnapshot> {
        self.snapshot.clone()
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn meeting_id(&self) -> Option<&str> {
        self.config.meeting_id.as_deref()
    }

    pub fn auth_panel(&self) -> AuthPanel {
        self.ui.auth_panel
    }

    pub fn toast_visible(&self) -> bool {
        self.toast.is_visible()
    }

    pub fn toast_text(&self) -> Option<&str> {
        self.toast.text()
    }

    pub fn participant(&self) -> &ParticipantContext {
        self.ui.participant()
    }

    pub fn config(&self) -> &MeetingWidgetConfig {
        &self.config
    }

    /// Compose the current view. Authentication panel transitions are bound
    /// to this session through a weak reference.
    pub fn render_plan<A>(this: &Rc<RefCell<Self>>, adapter: Rc<A>) -> RenderPlan
    where
        A: MeetingsAdapter + ?Sized + 'static,
    {
        let auth_actions = AuthActions {
            switch_to_host: weak_action(Rc::downgrade(this), Self::switch_to_host_panel),
            back_to_guest: weak_action(Rc::downgrade(this), Self::back_to_guest_panel),
        };
        let session = this.borrow();
        let view = session.descriptor();
        compose(
            &view,
            ComposeInputs {
                meeting_id: &session.snapshot.id,
                config: &session.config,
                auth_panel: session.ui.auth_panel,
                toast_text: session.toast.text(),
                joined: session
                    .snapshot
                    .connection_state
                    .is_some_and(|s| s.is_active()),
                adapter,
                auth_actions,
            },
        )
    }

    /// Unsubscribe and cancel the pending toast timer. Safe to call twice.
    pub fn teardown(&mut self) {
        if self.subscription.take().is_some() {
            log::debug!("meeting widget torn down");
        }
        self.toast.hide();
    }
}

fn weak_action<T, F>(session: Weak<RefCell<MeetingSession<T>>>, action: F) -> Callback<()>
where
    T: TimerService + 'static,
    F: Fn(&mut MeetingSession<T>) + 'static,
{
    Callback::from(move |()| {
        if let Some(session) = session.upgrade() {
            action(&mut *session.borrow_mut());
        }
    })
}
