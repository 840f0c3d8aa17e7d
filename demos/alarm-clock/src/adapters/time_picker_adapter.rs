// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use slint::*;

use crate::{
    callback::OneShot,
    error::AlarmError,
    models::{PickerOutcome, TimeModel},
    repositories::traits::TimePicker,
    ui,
};

type Pending = Rc<RefCell<Option<OneShot<PickerOutcome>>>>;

/// [`TimePicker`] backed by the `TimePickerPopup` of the main window.
#[derive(Clone)]
pub struct SlintTimePicker {
    view_handle: Weak<ui::MainWindow>,
    pending: Pending,
}

impl SlintTimePicker {
    pub fn new(view_handle: &ui::MainWindow) -> Self {
        let pending = Pending::default();
        let adapter = view_handle.global::<ui::TimePickerAdapter>();

        adapter.on_accepted({
            let pending = pending.clone();

            move |hour, minute| {
                let outcome = match TimeModel::new(hour, minute) {
                    Some(time) => PickerOutcome::Confirmed(time),
                    None => {
                        log::warn!("Time picker returned {hour}:{minute}, treating as cancelled");
                        PickerOutcome::Cancelled
                    }
                };
                resolve(&pending, outcome);
            }
        });

        adapter.on_canceled({
            let pending = pending.clone();

            move || resolve(&pending, PickerOutcome::Cancelled)
        });

        Self { view_handle: view_handle.as_weak(), pending }
    }
}

impl TimePicker for SlintTimePicker {
    fn open(
        &self,
        initial: TimeModel,
        on_result: OneShot<PickerOutcome>,
    ) -> Result<(), AlarmError> {
        let view = self.view_handle.upgrade().ok_or(AlarmError::DialogUnavailable)?;

        // every open gets exactly one answer
        let previous = self.pending.borrow_mut().take();
        if let Some(previous) = previous {
            previous.resolve(PickerOutcome::Cancelled);
        }

        *self.pending.borrow_mut() = Some(on_result);
        view.invoke_open_time_picker(initial.hour(), initial.minute());
        Ok(())
    }
}

fn resolve(pending: &Pending, outcome: PickerOutcome) {
    let on_result = pending.borrow_mut().take();

    match on_result {
        Some(on_result) => on_result.resolve(outcome),
        None => log::debug!("Ignoring time picker result {outcome:?}, nothing is waiting for it"),
    }
}
