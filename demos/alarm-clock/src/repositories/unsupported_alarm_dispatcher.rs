// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use super::traits;
use crate::error::AlarmError;
use crate::models::AlarmRequest;

/// Dispatcher for platforms without a system alarm application.
#[derive(Clone, Copy, Default)]
pub struct UnsupportedAlarmDispatcher;

impl traits::AlarmDispatcher for UnsupportedAlarmDispatcher {
    fn dispatch(&self, request: &AlarmRequest) -> Result<(), AlarmError> {
        log::warn!(
            "No alarm handler on this platform, dropping alarm for {}:{} ({:?})",
            request.hour,
            request.minute,
            request.message
        );
        Err(AlarmError::NoAlarmHandler)
    }
}
