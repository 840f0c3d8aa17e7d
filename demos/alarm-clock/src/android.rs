// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use core::cell::OnceCell;
use std::rc::Rc;

use slint::ComponentHandle;
use slint::android::android_activity::{MainEvent, PollEvent};

use crate::{controllers::AlarmController, repositories::MemoryStateStore};

mod intent_alarm_dispatcher;
pub use intent_alarm_dispatcher::IntentAlarmDispatcher;

#[unsafe(no_mangle)]
fn android_main(android_app: slint::android::AndroidApp) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            })
            .with_tag("alarm-clock"),
    );

    // the activity's saved instance state survives rotation and other
    // configuration changes
    let store = match android_app.saved_state() {
        Some(snapshot) => MemoryStateStore::with_snapshot(snapshot),
        None => MemoryStateStore::new(),
    };
    let controller: Rc<OnceCell<AlarmController>> = Rc::default();

    // initialize android before creating main window
    let init = slint::android::init_with_event_listener(android_app.clone(), {
        let controller = controller.clone();
        let store = store.clone();

        move |event| {
            if let PollEvent::Main(MainEvent::SaveState { saver, .. }) = event {
                let Some(controller) = controller.get() else {
                    return;
                };
                controller.save_state();
                if let Some(snapshot) = store.snapshot() {
                    saver.store(&snapshot);
                }
            }
        }
    });
    if let Err(e) = init {
        log::error!("Failed to initialize the android backend: {e}");
        return;
    }

    let (main_window, alarm_controller) =
        match crate::init(store, IntentAlarmDispatcher::new(android_app)) {
            Ok(created) => created,
            Err(e) => {
                log::error!("Failed to create the main window: {e}");
                return;
            }
        };
    let _ = controller.set(alarm_controller);

    if let Err(e) = main_window.run() {
        log::error!("Event loop terminated with an error: {e}");
    }
}
