// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod alarm_dispatcher;
pub use alarm_dispatcher::AlarmDispatcher;

mod date_time_repository;
pub use date_time_repository::DateTimeRepository;

mod state_store;
pub use state_store::StateStore;

mod time_picker;
pub use time_picker::TimePicker;
