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

//! Control-bar composition: which controls, in which tab order, and which of
//! them fold into the overflow menu when the bar runs out of room.

use std::ops::Range;

use meeting_widget_types::MeetingControl;

use crate::callback::Callback;

/// Horizontal room one control button occupies, in CSS pixels.
pub const CONTROL_WIDTH_PX: f64 = 64.0;

/// Maps "is the meeting active" to the ordered control list.
pub type ControlsFn = Callback<bool, Vec<MeetingControl>>;
/// Maps "is the meeting active" to one tab index per control.
pub type TabIndexesFn = Callback<bool, Vec<i32>>;

pub fn default_controls() -> ControlsFn {
    Callback::from(|is_active: bool| {
        if is_active {
            vec![
                MeetingControl::MuteAudio,
                MeetingControl::MuteVideo,
                MeetingControl::ShareScreen,
                MeetingControl::MemberRoster,
                MeetingControl::Settings,
                MeetingControl::LeaveMeeting,
            ]
        } else {
            vec![
                MeetingControl::MuteAudio,
                MeetingControl::MuteVideo,
                MeetingControl::Settings,
                MeetingControl::JoinMeeting,
            ]
        }
    })
}

pub fn default_tab_indexes() -> TabIndexesFn {
    Callback::from(|is_active: bool| {
        if is_active {
            vec![1, 2, 3, 4, 5, 6]
        } else {
            vec![2, 3, 4, 1]
        }
    })
}

/// Index range of the controls allowed to collapse.
///
/// Both ends may be negative to count from the end of the list. `end` is
/// exclusive, so the default `0..-1` lets everything but the last control
/// collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseRange {
    pub start: i32,
    pub end: i32,
}

impl Default for CollapseRange {
    fn default() -> Self {
        Self { start: 0, end: -1 }
    }
}

impl CollapseRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Concrete indices for a list of `len` controls. Out-of-range ends are
    /// clamped; an inverted range resolves to an empty one.
    pub fn resolve(&self, len: usize) -> Range<usize> {
        let absolute = |index: i32| -> usize {
            let len = len as i64;
            let index = i64::from(index);
            let index = if index < 0 { len + index } else { index };
            index.clamp(0, len) as usize
        };
        let start = absolute(self.start);
        let end = absolute(self.end).max(start);
        start..end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSlot {
    pub control: MeetingControl,
    pub tab_index: Option<i32>,
}

/// The control bar after fitting it into the available width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlBarArrangement {
    pub visible: Vec<ControlSlot>,
    /// Controls moved to the overflow menu, in their original order.
    pub collapsed: Vec<ControlSlot>,
}

impl ControlBarArrangement {
    pub fn has_overflow(&self) -> bool {
        !self.collapsed.is_empty()
    }
}

/// Fit `controls` into `available_width`.
///
/// When everything fits nothing collapses. Otherwise controls inside
/// `range` fold into the overflow menu from the end of the range backwards
/// until the remaining buttons plus the overflow button fit, or the range is
/// exhausted.
pub fn arrange_controls(
    controls: &[MeetingControl],
    tab_indexes: &[i32],
    range: CollapseRange,
    available_width: f64,
) -> ControlBarArrangement {
    let slots: Vec<ControlSlot> = controls
        .iter()
        .enumerate()
        .map(|(i, control)| ControlSlot {
            control: *control,
            tab_index: tab_indexes.get(i).copied(),
        })
        .collect();

    let capacity = (available_width.max(0.0) / CONTROL_WIDTH_PX).floor() as usize;
    if slots.len() <= capacity {
        return ControlBarArrangement {
            visible: slots,
            collapsed: Vec::new(),
        };
    }

    let collapsible = range.resolve(slots.len());
    let mut collapsed_indices = Vec::new();
    for index in collapsible.rev() {
        collapsed_indices.push(index);
        let remaining = slots.len() - collapsed_indices.len() + 1;
        if remaining <= capacity {
            break;
        }
    }

    let (collapsed, visible): (Vec<_>, Vec<_>) = slots
        .into_iter()
        .enumerate()
        .partition(|(i, _)| collapsed_indices.contains(i));
    ControlBarArrangement {
        visible: visible.into_iter().map(|(_, slot)| slot).collect(),
        collapsed: collapsed.into_iter().map(|(_, slot)| slot).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(slots: &[ControlSlot]) -> Vec<MeetingControl> {
        slots.iter().map(|s| s.control).collect()
    }

    #[test]
    fn defaults_depend_on_activity() {
        assert_eq!(default_controls().emit(true).len(), 6);
        assert_eq!(
            default_controls().emit(false).last(),
            Some(&MeetingControl::JoinMeeting)
        );
        assert_eq!(default_tab_indexes().emit(false), vec![2, 3, 4, 1]);
    }

    #[test]
    fn negative_ends_count_from_the_back() {
        assert_eq!(CollapseRange::default().resolve(6), 0..5);
        assert_eq!(CollapseRange::new(-3, -1).resolve(6), 3..5);
        assert_eq!(CollapseRange::new(1, 4).resolve(6), 1..4);
    }

    #[test]
    fn out_of_range_and_inverted_ranges_are_clamped() {
        assert_eq!(CollapseRange::new(-10, 100).resolve(4), 0..4);
        assert_eq!(CollapseRange::new(3, 1).resolve(4), 3..3);
        assert_eq!(CollapseRange::default().resolve(0), 0..0);
    }

    #[test]
    fn nothing_collapses_when_everything_fits() {
        let controls = default_controls().emit(true);
        let arranged = arrange_controls(
            &controls,
            &default_tab_indexes().emit(true),
            CollapseRange::default(),
            6.0 * CONTROL_WIDTH_PX,
        );
        assert!(!arranged.has_overflow());
        assert_eq!(arranged.visible[5].tab_index, Some(6));
    }

    #[test]
    fn collapses_from_the_end_of_the_range() {
        let controls = default_controls().emit(true);
        let arranged = arrange_controls(
            &controls,
            &default_tab_indexes().emit(true),
            CollapseRange::default(),
            4.0 * CONTROL_WIDTH_PX,
        );
        // Three buttons plus the overflow button fill four slots.
        assert_eq!(
            ids(&arranged.visible),
            vec![
                MeetingControl::MuteAudio,
                MeetingControl::MuteVideo,
                MeetingControl::LeaveMeeting,
            ]
        );
        assert_eq!(
            ids(&arranged.collapsed),
            vec![
                MeetingControl::ShareScreen,
                MeetingControl::MemberRoster,
                MeetingControl::Settings,
            ]
        );
    }

    #[test]
    fn controls_outside_the_range_never_collapse() {
        let controls = default_controls().emit(false);
        let arranged = arrange_controls(&controls, &[], CollapseRange::new(0, 1), 0.0);
        assert_eq!(ids(&arranged.collapsed), vec![MeetingControl::MuteAudio]);
        assert_eq!(arranged.visible.len(), 3);
        assert_eq!(arranged.visible[0].tab_index, None);
    }
}
