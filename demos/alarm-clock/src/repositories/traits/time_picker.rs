// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::callback::OneShot;
use crate::error::AlarmError;
use crate::models::{PickerOutcome, TimeModel};

/// A modal time picker.
///
/// After a successful `open`, `on_result` is resolved exactly once, either with
/// the confirmed time or as cancelled. When the picker cannot be shown, `open`
/// fails with [`AlarmError::DialogUnavailable`] and `on_result` is dropped
/// without being called.
pub trait TimePicker {
    fn open(&self, initial: TimeModel, on_result: OneShot<PickerOutcome>)
    -> Result<(), AlarmError>;
}
