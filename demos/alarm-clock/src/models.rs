// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod alarm_request;
pub use alarm_request::*;

mod notice;
pub use notice::{NOTICE_DURATION, Notice};

mod screen_model;
pub use screen_model::*;

mod time_model;
pub use time_model::TimeModel;
