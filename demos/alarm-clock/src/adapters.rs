// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

pub mod alarm_adapter;
pub mod notice_adapter;

mod time_picker_adapter;
pub use time_picker_adapter::SlintTimePicker;
