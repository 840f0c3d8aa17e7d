// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Intent action understood by system alarm applications.
pub const ACTION_SET_ALARM: &str = "android.intent.action.SET_ALARM";
pub const EXTRA_HOUR: &str = "android.intent.extra.alarm.HOUR";
pub const EXTRA_MINUTES: &str = "android.intent.extra.alarm.MINUTES";
pub const EXTRA_MESSAGE: &str = "android.intent.extra.alarm.MESSAGE";
/// `Intent.FLAG_ACTIVITY_NEW_TASK`
pub const FLAG_ACTIVITY_NEW_TASK: i32 = 0x1000_0000;

/// The request handed over to the system alarm application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlarmRequest {
    pub hour: i32,
    pub minute: i32,
    pub message: String,
    /// Start the receiving activity in its own task.
    pub new_task: bool,
}

impl AlarmRequest {
    pub fn flags(&self) -> i32 {
        if self.new_task { FLAG_ACTIVITY_NEW_TASK } else { 0 }
    }
}
