// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use super::traits;
use crate::models::TimeModel;

#[derive(Clone)]
pub struct MockDateTimeRepository {
    current_time: TimeModel,
}

impl MockDateTimeRepository {
    pub fn new(current_time: TimeModel) -> Self {
        Self { current_time }
    }
}

impl traits::DateTimeRepository for MockDateTimeRepository {
    fn current_time(&self) -> TimeModel {
        self.current_time
    }
}
