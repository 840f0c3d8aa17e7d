// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;

use crate::{controllers::AlarmController, models::ScreenModel, ui};

// one place to implement connection between adapter (view) and controller
pub fn connect(view_handle: &ui::MainWindow, controller: &AlarmController) {
    let adapter = view_handle.global::<ui::AlarmAdapter>();

    adapter.on_select_time({
        let controller = controller.clone();

        move || controller.select_time()
    });

    adapter.on_message_edited({
        let controller = controller.clone();

        move |text| controller.edit_message(text.as_str())
    });

    adapter.on_set_alarm({
        let controller = controller.clone();

        move || controller.set_alarm()
    });

    controller.on_refresh({
        let view_handle = view_handle.as_weak();

        move |screen| {
            if let Some(view) = view_handle.upgrade() {
                apply_screen(&view, screen);
            }
        }
    });

    apply_screen(view_handle, &controller.screen());
}

fn apply_screen(view_handle: &ui::MainWindow, screen: &ScreenModel) {
    let adapter = view_handle.global::<ui::AlarmAdapter>();

    adapter.set_display_text(screen.display_text.as_str().into());
    adapter.set_can_set_alarm(screen.can_set_alarm);

    // the line edit is bound to this property, only touch it when it differs
    if adapter.get_message().as_str() != screen.message {
        adapter.set_message(screen.message.as_str().into());
    }
}
