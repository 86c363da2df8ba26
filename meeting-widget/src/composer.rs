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

//! Turns a [`ViewDescriptor`] into a [`RenderPlan`]: the list of child views
//! to draw and the narrowed props each one receives.
//!
//! No child gets the snapshot or the local UI state. Overlays get the meeting
//! id and an `on_close` that asks the adapter to clear the flag upstream;
//! nothing here clears a flag itself.

use std::rc::Rc;

use meeting_widget_types::{MeetingControl, VideoLayout};

use crate::adapter::MeetingsAdapter;
use crate::callback::Callback;
use crate::config::MeetingWidgetConfig;
use crate::controls::{CollapseRange, ControlsFn, TabIndexesFn};
use crate::resolver::{InnerMeetingVariant, PrimaryView, ViewDescriptor};
use crate::store::AuthPanel;

pub const ROOT_CLASS: &str = "meeting-widget";
pub const LEFT_MESSAGE: &str = "You've successfully left the meeting";

/// Element class for a part of the widget, e.g. `meeting-widget__body`.
pub fn element_class(element: &str) -> String {
    format!("{ROOT_CLASS}__{element}")
}

/// Root class list: base class, optional caller class, modifiers.
pub fn root_classes(class_name: Option<&str>, compact: bool) -> String {
    let mut classes = vec![ROOT_CLASS.to_string()];
    if let Some(extra) = class_name.filter(|c| !c.trim().is_empty()) {
        classes.push(extra.trim().to_string());
    }
    if compact {
        classes.push(format!("{ROOT_CLASS}--roster-only"));
    }
    classes.join(" ")
}

#[derive(Debug, Clone, PartialEq)]
pub struct InnerMeetingProps {
    pub variant: InnerMeetingVariant,
    pub meeting_id: String,
    pub layout: Option<VideoLayout>,
}

/// Props for a dismissible overlay (roster, settings).
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayProps {
    pub meeting_id: String,
    pub on_close: Callback<()>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlBarProps {
    pub meeting_id: String,
    pub is_active: bool,
    pub controls: ControlsFn,
    pub tab_indexes: TabIndexesFn,
    pub collapse_range: CollapseRange,
    pub on_control: Callback<MeetingControl>,
}

impl ControlBarProps {
    pub fn controls(&self) -> Vec<MeetingControl> {
        self.controls.emit(self.is_active)
    }

    pub fn tab_indexes(&self) -> Vec<i32> {
        self.tab_indexes.emit(self.is_active)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthOverlayProps {
    pub meeting_id: String,
    pub panel: AuthPanel,
    pub aria_label: &'static str,
    pub on_close: Callback<()>,
    /// Present on the host panel only.
    pub on_back: Option<Callback<()>>,
    /// Present on the guest panel only.
    pub switch_to_host: Option<Callback<()>>,
    pub style: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LivePlan {
    pub inner: InnerMeetingProps,
    pub roster: Option<OverlayProps>,
    pub toast: Option<String>,
    pub control_bar: ControlBarProps,
    pub settings: Option<OverlayProps>,
    pub authentication: Option<AuthOverlayProps>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanBody {
    Loading,
    Left { message: &'static str },
    Live(Box<LivePlan>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub root_class: String,
    pub style: Option<String>,
    pub body: PlanBody,
}

/// Transitions of the local authentication panel, supplied by the owner of
/// the local UI state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthActions {
    pub switch_to_host: Callback<()>,
    pub back_to_guest: Callback<()>,
}

/// Everything besides the descriptor that children may need.
pub struct ComposeInputs<'a, A: MeetingsAdapter + ?Sized> {
    pub meeting_id: &'a str,
    pub config: &'a MeetingWidgetConfig,
    pub auth_panel: AuthPanel,
    pub toast_text: Option<&'a str>,
    pub joined: bool,
    pub adapter: Rc<A>,
    pub auth_actions: AuthActions,
}

fn adapter_call<A, F>(adapter: &Rc<A>, meeting_id: &str, call: F) -> Callback<()>
where
    A: MeetingsAdapter + ?Sized + 'static,
    F: Fn(&A, &str) + 'static,
{
    let adapter = adapter.clone();
    let meeting_id = meeting_id.to_string();
    Callback::from(move |()| call(&adapter, &meeting_id))
}

pub fn compose<A>(view: &ViewDescriptor, inputs: ComposeInputs<'_, A>) -> RenderPlan
where
    A: MeetingsAdapter + ?Sized + 'static,
{
    let root_class = root_classes(inputs.config.class_name.as_deref(), view.compact_layout);
    let style = inputs.config.style.clone();

    let body = match (view.primary, view.inner_meeting_variant) {
        (PrimaryView::Loading, _) => PlanBody::Loading,
        (PrimaryView::LeftNotice, _) => PlanBody::Left {
            message: LEFT_MESSAGE,
        },
        (PrimaryView::Live, variant) => {
            PlanBody::Live(Box::new(compose_live(view, variant, &inputs)))
        }
    };

    RenderPlan {
        root_class,
        style,
        body,
    }
}

fn compose_live<A>(
    view: &ViewDescriptor,
    variant: Option<InnerMeetingVariant>,
    inputs: &ComposeInputs<'_, A>,
) -> LivePlan
where
    A: MeetingsAdapter + ?Sized + 'static,
{
    let meeting_id = inputs.meeting_id;
    let adapter = &inputs.adapter;

    let roster = view.show_roster.then(|| OverlayProps {
        meeting_id: meeting_id.to_string(),
        on_close: adapter_call(adapter, meeting_id, |a, id| a.toggle_roster(id)),
    });
    let settings = view.show_settings_overlay.then(|| OverlayProps {
        meeting_id: meeting_id.to_string(),
        on_close: adapter_call(adapter, meeting_id, |a, id| a.toggle_settings(id)),
    });
    let authentication = view.show_auth_overlay.then(|| {
        let panel = inputs.auth_panel;
        AuthOverlayProps {
            meeting_id: meeting_id.to_string(),
            panel,
            aria_label: panel.aria_label(),
            on_close: adapter_call(adapter, meeting_id, |a, id| {
                a.clear_password_required_flag(id)
            }),
            on_back: (panel == AuthPanel::Host).then(|| inputs.auth_actions.back_to_guest.clone()),
            switch_to_host: (panel == AuthPanel::Guest)
                .then(|| inputs.auth_actions.switch_to_host.clone()),
            style: inputs.config.style.clone(),
        }
    });

    let on_control = {
        let adapter = adapter.clone();
        let meeting_id = meeting_id.to_string();
        Callback::from(move |control: MeetingControl| {
            adapter.control_action(&meeting_id, control)
        })
    };

    LivePlan {
        inner: InnerMeetingProps {
            variant: variant.unwrap_or(InnerMeetingVariant::WaitingForHost),
            meeting_id: meeting_id.to_string(),
            layout: inputs.config.layout,
        },
        roster,
        toast: view
            .show_toast
            .then(|| inputs.toast_text.unwrap_or_default().to_string()),
        control_bar: ControlBarProps {
            meeting_id: meeting_id.to_string(),
            is_active: inputs.joined,
            controls: inputs.config.controls.clone(),
            tab_indexes: inputs.config.controls_tab_indexes.clone(),
            collapse_range: inputs.config.controls_collapse_range,
            on_control,
        },
        settings,
        authentication,
    }
}
