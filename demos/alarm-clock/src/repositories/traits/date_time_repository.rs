// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::models::TimeModel;

pub trait DateTimeRepository {
    fn current_time(&self) -> TimeModel;
}
