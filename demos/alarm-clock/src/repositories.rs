// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod local_date_time_repository;
pub use local_date_time_repository::*;

mod memory_state_store;
pub use memory_state_store::*;

mod unsupported_alarm_dispatcher;
pub use unsupported_alarm_dispatcher::*;

#[cfg(test)]
mod mock_alarm_dispatcher;
#[cfg(test)]
pub use mock_alarm_dispatcher::*;

#[cfg(test)]
mod mock_date_time_repository;
#[cfg(test)]
pub use mock_date_time_repository::*;

#[cfg(test)]
mod mock_time_picker;
#[cfg(test)]
pub use mock_time_picker::*;

pub mod traits;

pub fn date_time_repo() -> impl traits::DateTimeRepository + Clone {
    LocalDateTimeRepository
}
