// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::time::Duration;

use crate::error::AlarmError;

/// How long a transient notice stays on screen.
pub const NOTICE_DURATION: Duration = Duration::from_millis(2000);

/// Short, auto-dismissing status messages shown at the bottom of the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    SelectTimeFirst,
    AlarmSet { hour: i32, minute: i32 },
    NoAlarmApp,
    TimePickerFailed,
    DispatchFailed,
}

impl Notice {
    pub fn text(&self) -> String {
        match self {
            Self::SelectTimeFirst => "Please select a time first".into(),
            // unpadded: "Alarm set for 7:5"
            Self::AlarmSet { hour, minute } => format!("Alarm set for {hour}:{minute}"),
            Self::NoAlarmApp => "No alarm app available".into(),
            Self::TimePickerFailed => "Failed to open time picker".into(),
            Self::DispatchFailed => "Failed to set alarm".into(),
        }
    }

    /// Error shown when a dispatch fails.
    pub fn for_dispatch_error(error: &AlarmError) -> Self {
        match error {
            AlarmError::NoAlarmHandler => Self::NoAlarmApp,
            _ => Self::DispatchFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texts() {
        assert_eq!(Notice::SelectTimeFirst.text(), "Please select a time first");
        assert_eq!(Notice::AlarmSet { hour: 7, minute: 30 }.text(), "Alarm set for 7:30");
        assert_eq!(Notice::AlarmSet { hour: 7, minute: 5 }.text(), "Alarm set for 7:5");
        assert_eq!(Notice::NoAlarmApp.text(), "No alarm app available");
        assert_eq!(Notice::TimePickerFailed.text(), "Failed to open time picker");
        assert_eq!(Notice::DispatchFailed.text(), "Failed to set alarm");
    }

    #[test]
    fn test_for_dispatch_error() {
        assert_eq!(Notice::for_dispatch_error(&AlarmError::NoAlarmHandler), Notice::NoAlarmApp);
        assert_eq!(
            Notice::for_dispatch_error(&AlarmError::Platform { message: "boom".into() }),
            Notice::DispatchFailed
        );
    }
}
