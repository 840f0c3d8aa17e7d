// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;

type Handler<Arguments> = RefCell<Option<Box<dyn FnMut(&Arguments)>>>;

/// A handler slot that the view fills in after the controller was created.
///
/// Invoking an empty slot is a no-op, so controllers can run before any view
/// is connected (for example while restoring a saved snapshot).
pub struct Callback<Arguments: ?Sized> {
    handler: Handler<Arguments>,
}

impl<Arguments: ?Sized> Default for Callback<Arguments> {
    fn default() -> Self {
        Self { handler: Default::default() }
    }
}

impl<Arguments: ?Sized> Callback<Arguments> {
    pub fn on(&self, f: impl FnMut(&Arguments) + 'static) {
        *self.handler.borrow_mut() = Some(Box::new(f));
    }

    pub fn invoke(&self, arguments: &Arguments) {
        // taken out while running so the handler may call back into the controller
        let Some(mut handler) = self.handler.borrow_mut().take() else {
            return;
        };

        handler(arguments);

        let mut slot = self.handler.borrow_mut();
        if slot.is_none() {
            *slot = Some(handler);
        }
    }
}

/// Completion handler that is consumed by its first and only invocation.
pub struct OneShot<T> {
    handler: Box<dyn FnOnce(T)>,
}

impl<T> OneShot<T> {
    pub fn new(handler: impl FnOnce(T) + 'static) -> Self {
        Self { handler: Box::new(handler) }
    }

    pub fn resolve(self, value: T) {
        (self.handler)(value)
    }
}
