// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use super::traits;
use crate::error::AlarmError;
use crate::models::ScreenState;

/// Keeps the encoded snapshot in memory. Used where the platform has no
/// saved-state mechanism of its own.
#[derive(Clone, Default)]
pub struct MemoryStateStore {
    snapshot: Rc<RefCell<Option<Vec<u8>>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Vec<u8>) -> Self {
        Self { snapshot: Rc::new(RefCell::new(Some(snapshot))) }
    }

    /// The encoded state from the last `save`, if it was not taken yet.
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.snapshot.borrow().clone()
    }
}

impl traits::StateStore for MemoryStateStore {
    fn save(&self, state: &ScreenState) -> Result<(), AlarmError> {
        *self.snapshot.borrow_mut() = Some(state.to_snapshot()?);
        Ok(())
    }

    fn take(&self) -> Result<Option<ScreenState>, AlarmError> {
        match self.snapshot.borrow_mut().take() {
            Some(bytes) => Ok(Some(ScreenState::from_snapshot(&bytes)?)),
            None => Ok(None),
        }
    }
}
