// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

pub mod ui {
    slint::include_modules!();
}

mod adapters;
use adapters::*;

mod callback;
pub use callback::*;

pub mod controllers;
pub mod error;
pub mod models;
pub mod repositories;

#[cfg(target_os = "android")]
mod android;

use repositories::traits::{AlarmDispatcher, StateStore};
#[cfg(not(target_os = "android"))]
use slint::ComponentHandle;

/// Creates the main window and wires it to a new controller.
///
/// A state saved in `store` by a previous instance is restored before the
/// window is shown.
pub fn init(
    store: impl StateStore + 'static,
    dispatcher: impl AlarmDispatcher + 'static,
) -> Result<(ui::MainWindow, controllers::AlarmController), slint::PlatformError> {
    let view_handle = ui::MainWindow::new()?;

    let controller = controllers::AlarmController::new(
        repositories::date_time_repo(),
        SlintTimePicker::new(&view_handle),
        dispatcher,
        store,
    );
    alarm_adapter::connect(&view_handle, &controller);
    notice_adapter::connect(&view_handle, &controller);

    controller.restore_state();

    Ok((view_handle, controller))
}

#[cfg(not(target_os = "android"))]
pub fn main() -> Result<(), slint::PlatformError> {
    let (main_window, _controller) =
        init(repositories::MemoryStateStore::new(), repositories::UnsupportedAlarmDispatcher)?;

    main_window.run()
}
