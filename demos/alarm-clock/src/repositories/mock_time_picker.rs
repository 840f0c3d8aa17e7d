// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use super::traits;
use crate::callback::OneShot;
use crate::error::AlarmError;
use crate::models::{PickerOutcome, TimeModel};

/// A picker the test resolves by hand with [`Self::confirm`] or [`Self::cancel`].
#[derive(Clone)]
pub struct MockTimePicker {
    available: bool,
    pending: Rc<RefCell<Option<OneShot<PickerOutcome>>>>,
    opened_with: Rc<Cell<Option<TimeModel>>>,
}

impl MockTimePicker {
    pub fn new() -> Self {
        Self { available: true, pending: Default::default(), opened_with: Default::default() }
    }

    pub fn unavailable() -> Self {
        Self { available: false, ..Self::new() }
    }

    pub fn opened_with(&self) -> Option<TimeModel> {
        self.opened_with.get()
    }

    pub fn is_open(&self) -> bool {
        self.pending.borrow().is_some()
    }

    pub fn confirm(&self, hour: i32, minute: i32) {
        let time = TimeModel::new(hour, minute).expect("valid test time");
        self.resolve(PickerOutcome::Confirmed(time));
    }

    pub fn cancel(&self) {
        self.resolve(PickerOutcome::Cancelled);
    }

    fn resolve(&self, outcome: PickerOutcome) {
        let pending = self.pending.borrow_mut().take().expect("picker is not open");
        pending.resolve(outcome);
    }
}

impl traits::TimePicker for MockTimePicker {
    fn open(
        &self,
        initial: TimeModel,
        on_result: OneShot<PickerOutcome>,
    ) -> Result<(), AlarmError> {
        if !self.available {
            return Err(AlarmError::DialogUnavailable);
        }
        self.opened_with.set(Some(initial));

        let previous = self.pending.borrow_mut().replace(on_result);
        if let Some(previous) = previous {
            previous.resolve(PickerOutcome::Cancelled);
        }
        Ok(())
    }
}
