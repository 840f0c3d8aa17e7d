// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use super::traits;
use crate::error::AlarmError;
use crate::models::AlarmRequest;

/// Records every request and answers with a fixed result.
#[derive(Clone)]
pub struct MockAlarmDispatcher {
    requests: Rc<RefCell<Vec<AlarmRequest>>>,
    result: Result<(), AlarmError>,
}

impl MockAlarmDispatcher {
    pub fn new(result: Result<(), AlarmError>) -> Self {
        Self { requests: Default::default(), result }
    }

    pub fn requests(&self) -> Vec<AlarmRequest> {
        self.requests.borrow().clone()
    }
}

impl traits::AlarmDispatcher for MockAlarmDispatcher {
    fn dispatch(&self, request: &AlarmRequest) -> Result<(), AlarmError> {
        self.requests.borrow_mut().push(request.clone());
        self.result.clone()
    }
}
