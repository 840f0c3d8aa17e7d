// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

use super::{AlarmRequest, Notice, TimeModel};

pub const DEFAULT_MESSAGE: &str = "Wake up for class!";
pub const NO_TIME_SELECTED: &str = "No time selected";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenPhase {
    NoTimeSelected,
    TimeSelected,
}

/// Result of one time picker invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerOutcome {
    Confirmed(TimeModel),
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenAction {
    SelectionConfirmed(TimeModel),
    SelectionCancelled,
    EditMessage(String),
    Submit,
}

impl From<PickerOutcome> for ScreenAction {
    fn from(outcome: PickerOutcome) -> Self {
        match outcome {
            PickerOutcome::Confirmed(time) => Self::SelectionConfirmed(time),
            PickerOutcome::Cancelled => Self::SelectionCancelled,
        }
    }
}

/// Side effect requested by [`ScreenState::apply`], performed by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Dispatch(AlarmRequest),
    Notify(Notice),
}

/// Everything the alarm screen remembers. This is also the recovery snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenState {
    pub selected: Option<TimeModel>,
    pub message: String,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self { selected: None, message: DEFAULT_MESSAGE.into() }
    }
}

impl ScreenState {
    pub fn phase(&self) -> ScreenPhase {
        match self.selected {
            Some(_) => ScreenPhase::TimeSelected,
            None => ScreenPhase::NoTimeSelected,
        }
    }

    pub fn hour(&self) -> i32 {
        self.selected.map_or(TimeModel::UNSET, |time| time.hour())
    }

    pub fn minute(&self) -> i32 {
        self.selected.map_or(TimeModel::UNSET, |time| time.minute())
    }

    pub fn display_text(&self) -> String {
        match self.selected {
            Some(time) => format!("Selected Time: {}", time.to_24h_string()),
            None => NO_TIME_SELECTED.into(),
        }
    }

    pub fn apply(&mut self, action: ScreenAction) -> Option<Effect> {
        match action {
            ScreenAction::SelectionConfirmed(time) => {
                self.selected = Some(time);
                None
            }
            ScreenAction::SelectionCancelled => {
                self.selected = None;
                None
            }
            ScreenAction::EditMessage(message) => {
                self.message = message;
                None
            }
            ScreenAction::Submit => Some(match self.selected {
                Some(time) => Effect::Dispatch(AlarmRequest {
                    hour: time.hour(),
                    minute: time.minute(),
                    message: self.message.clone(),
                    new_task: true,
                }),
                None => Effect::Notify(Notice::SelectTimeFirst),
            }),
        }
    }

    pub fn to_snapshot(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// What the view shows for a given [`ScreenState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenModel {
    pub display_text: String,
    pub message: String,
    pub hour: i32,
    pub minute: i32,
    pub can_set_alarm: bool,
}

impl From<&ScreenState> for ScreenModel {
    fn from(state: &ScreenState) -> Self {
        Self {
            display_text: state.display_text(),
            message: state.message.clone(),
            hour: state.hour(),
            minute: state.minute(),
            can_set_alarm: state.phase() == ScreenPhase::TimeSelected,
        }
    }
}
