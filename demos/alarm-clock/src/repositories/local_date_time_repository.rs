// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::Timelike;

use super::traits;
use crate::models::TimeModel;

/// Wall clock in the device's local time zone.
#[derive(Clone, Copy, Default)]
pub struct LocalDateTimeRepository;

impl traits::DateTimeRepository for LocalDateTimeRepository {
    fn current_time(&self) -> TimeModel {
        let now = chrono::Local::now();
        TimeModel::new(now.hour() as i32, now.minute() as i32).unwrap_or_default()
    }
}
