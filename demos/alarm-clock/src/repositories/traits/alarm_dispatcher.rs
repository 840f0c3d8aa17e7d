// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::error::AlarmError;
use crate::models::AlarmRequest;

/// Hands an alarm request over to whatever application handles alarms.
pub trait AlarmDispatcher {
    /// `Err(AlarmError::NoAlarmHandler)` when nothing accepts the request.
    fn dispatch(&self, request: &AlarmRequest) -> Result<(), AlarmError>;
}
