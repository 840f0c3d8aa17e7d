// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod alarm_controller;
pub use alarm_controller::*;
