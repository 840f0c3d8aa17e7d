// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::error::AlarmError;
use crate::models::ScreenState;

/// Short-lived storage that carries the screen state over a teardown and
/// recreation of the view.
pub trait StateStore {
    fn save(&self, state: &ScreenState) -> Result<(), AlarmError>;

    /// Returns the saved state, if any, and forgets it.
    fn take(&self) -> Result<Option<ScreenState>, AlarmError>;
}
