// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Failures reported by the platform boundaries of the alarm screen.
///
/// None of these are fatal: the controller turns them into a transient notice
/// (or a log line) and leaves the screen state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[non_exhaustive]
pub enum AlarmError {
    /// The time picker could not be presented.
    #[display("the time picker could not be opened")]
    DialogUnavailable,
    /// No installed application accepts the set-alarm request.
    #[display("no application can handle the alarm request")]
    NoAlarmHandler,
    /// Any other failure while talking to the platform.
    #[display("platform call failed: {message}")]
    Platform { message: String },
    /// The recovery snapshot could not be encoded or decoded.
    #[display("invalid screen snapshot: {message}")]
    Snapshot { message: String },
}

impl std::error::Error for AlarmError {}

impl From<serde_json::Error> for AlarmError {
    fn from(error: serde_json::Error) -> Self {
        Self::Snapshot { message: error.to_string() }
    }
}

#[cfg(target_os = "android")]
impl From<jni::errors::Error> for AlarmError {
    fn from(error: jni::errors::Error) -> Self {
        Self::Platform { message: error.to_string() }
    }
}
