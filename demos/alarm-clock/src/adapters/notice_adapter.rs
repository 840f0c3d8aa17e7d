// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;

use crate::{
    controllers::AlarmController,
    models::{NOTICE_DURATION, Notice},
    ui,
};

pub fn connect(view_handle: &ui::MainWindow, controller: &AlarmController) {
    let timer = Timer::default();

    controller.on_notice({
        let view_handle = view_handle.as_weak();

        move |notice| {
            if let Some(view) = view_handle.upgrade() {
                show(&view, &timer, notice);
            }
        }
    });
}

// a new notice replaces the visible one and restarts the dismiss timer
fn show(view_handle: &ui::MainWindow, timer: &Timer, notice: &Notice) {
    let text = notice.text();
    log::debug!("Notice: {text}");

    let adapter = view_handle.global::<ui::NoticeAdapter>();
    adapter.set_text(text.into());
    adapter.set_visible(true);

    timer.start(TimerMode::SingleShot, NOTICE_DURATION, {
        let view_handle = view_handle.as_weak();

        move || {
            if let Some(view) = view_handle.upgrade() {
                view.global::<ui::NoticeAdapter>().set_visible(false);
            }
        }
    });
}
