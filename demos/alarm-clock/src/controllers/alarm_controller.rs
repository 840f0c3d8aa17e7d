// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use crate::callback::{Callback, OneShot};
use crate::models::{Effect, Notice, PickerOutcome, ScreenAction, ScreenModel, ScreenState};
use crate::repositories::traits::{AlarmDispatcher, DateTimeRepository, StateStore, TimePicker};

/// Drives the alarm screen: owns its state, feeds user actions through
/// [`ScreenState::apply`] and performs the resulting effects.
#[derive(Clone)]
pub struct AlarmController {
    state: Rc<RefCell<ScreenState>>,
    clock: Rc<dyn DateTimeRepository>,
    picker: Rc<dyn TimePicker>,
    dispatcher: Rc<dyn AlarmDispatcher>,
    store: Rc<dyn StateStore>,
    refresh_callback: Rc<Callback<ScreenModel>>,
    notice_callback: Rc<Callback<Notice>>,
}

impl AlarmController {
    pub fn new(
        clock: impl DateTimeRepository + 'static,
        picker: impl TimePicker + 'static,
        dispatcher: impl AlarmDispatcher + 'static,
        store: impl StateStore + 'static,
    ) -> Self {
        Self {
            state: Rc::new(RefCell::new(ScreenState::default())),
            clock: Rc::new(clock),
            picker: Rc::new(picker),
            dispatcher: Rc::new(dispatcher),
            store: Rc::new(store),
            refresh_callback: Rc::new(Callback::default()),
            notice_callback: Rc::new(Callback::default()),
        }
    }

    pub fn screen(&self) -> ScreenModel {
        ScreenModel::from(&*self.state.borrow())
    }

    pub fn state(&self) -> ScreenState {
        self.state.borrow().clone()
    }

    pub fn on_refresh(&self, callback: impl FnMut(&ScreenModel) + 'static) {
        self.refresh_callback.on(callback);
    }

    pub fn on_notice(&self, callback: impl FnMut(&Notice) + 'static) {
        self.notice_callback.on(callback);
    }

    pub fn select_time(&self) {
        let initial = self.clock.current_time();

        let on_result = OneShot::new({
            let controller = self.clone();
            move |outcome: PickerOutcome| controller.apply(outcome.into())
        });

        if let Err(e) = self.picker.open(initial, on_result) {
            log::warn!("Cannot show the time picker: {e}");
            self.notify(Notice::TimePickerFailed);
        }
    }

    pub fn edit_message(&self, message: &str) {
        self.apply(ScreenAction::EditMessage(message.into()));
    }

    pub fn set_alarm(&self) {
        self.apply(ScreenAction::Submit);
    }

    pub fn save_state(&self) {
        if let Err(e) = self.store.save(&self.state.borrow()) {
            log::warn!("Failed to save the alarm screen state: {e}");
        }
    }

    /// Replaces the current state with the saved one, if there is any.
    pub fn restore_state(&self) {
        match self.store.take() {
            Ok(Some(saved)) => {
                log::debug!("Restoring alarm screen state {saved:?}");
                *self.state.borrow_mut() = saved;
                self.refresh();
            }
            Ok(None) => {}
            Err(e) => log::warn!("Discarding saved alarm screen state: {e}"),
        }
    }

    pub fn refresh(&self) {
        let screen = self.screen();
        self.refresh_callback.invoke(&screen);
    }

    fn apply(&self, action: ScreenAction) {
        log::debug!("{action:?}");

        let refresh = !matches!(action, ScreenAction::Submit);
        let effect = self.state.borrow_mut().apply(action);

        if refresh {
            self.refresh();
        }

        match effect {
            Some(Effect::Dispatch(request)) => {
                log::info!("Requesting alarm at {}:{}", request.hour, request.minute);

                match self.dispatcher.dispatch(&request) {
                    Ok(()) => {
                        self.notify(Notice::AlarmSet { hour: request.hour, minute: request.minute })
                    }
                    Err(e) => {
                        log::error!("Alarm request failed: {e}");
                        self.notify(Notice::for_dispatch_error(&e));
                    }
                }
            }
            Some(Effect::Notify(notice)) => self.notify(notice),
            None => {}
        }
    }

    fn notify(&self, notice: Notice) {
        self.notice_callback.invoke(&notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlarmError;
    use crate::models::{AlarmRequest, ScreenPhase, TimeModel};
    use crate::repositories::{
        MemoryStateStore, MockAlarmDispatcher, MockDateTimeRepository, MockTimePicker,
    };

    struct Fixture {
        controller: AlarmController,
        picker: MockTimePicker,
        dispatcher: MockAlarmDispatcher,
        notices: Rc<RefCell<Vec<Notice>>>,
        refreshes: Rc<RefCell<Vec<ScreenModel>>>,
    }

    fn fixture_with(
        picker: MockTimePicker,
        result: Result<(), AlarmError>,
        store: MemoryStateStore,
    ) -> Fixture {
        let dispatcher = MockAlarmDispatcher::new(result);
        let controller = AlarmController::new(
            MockDateTimeRepository::new(TimeModel::new(13, 37).unwrap()),
            picker.clone(),
            dispatcher.clone(),
            store,
        );

        let notices = Rc::new(RefCell::new(Vec::new()));
        controller.on_notice({
            let notices = notices.clone();
            move |notice| notices.borrow_mut().push(notice.clone())
        });

        let refreshes = Rc::new(RefCell::new(Vec::new()));
        controller.on_refresh({
            let refreshes = refreshes.clone();
            move |screen| refreshes.borrow_mut().push(screen.clone())
        });

        Fixture { controller, picker, dispatcher, notices, refreshes }
    }

    fn fixture() -> Fixture {
        fixture_with(MockTimePicker::new(), Ok(()), MemoryStateStore::new())
    }

    #[test]
    fn test_picker_opens_with_current_time() {
        let f = fixture();
        f.controller.select_time();

        assert!(f.picker.is_open());
        assert_eq!(f.picker.opened_with(), TimeModel::new(13, 37));
    }

    #[test]
    fn test_select_time() {
        let f = fixture();
        f.controller.select_time();
        f.picker.confirm(7, 30);

        let screen = f.controller.screen();
        assert_eq!(f.controller.state().phase(), ScreenPhase::TimeSelected);
        assert_eq!(screen.display_text, "Selected Time: 07:30");
        assert!(screen.can_set_alarm);
        assert_eq!(f.refreshes.borrow().last(), Some(&screen));
    }

    #[test]
    fn test_cancel_selection() {
        let f = fixture();
        f.controller.select_time();
        f.picker.confirm(7, 30);

        f.controller.select_time();
        f.picker.cancel();

        let screen = f.controller.screen();
        assert_eq!((screen.hour, screen.minute), (-1, -1));
        assert_eq!(screen.display_text, "No time selected");
        assert!(!screen.can_set_alarm);
    }

    #[test]
    fn test_reopen_cancels_pending_picker() {
        let f = fixture();
        f.controller.select_time();
        f.picker.confirm(9, 45);

        f.controller.select_time();
        f.controller.select_time();

        assert!(f.picker.is_open());
        assert_eq!(f.controller.state().phase(), ScreenPhase::NoTimeSelected);

        f.picker.confirm(10, 0);
        assert_eq!(f.controller.screen().display_text, "Selected Time: 10:00");
    }

    #[test]
    fn test_picker_unavailable() {
        let f = fixture_with(MockTimePicker::unavailable(), Ok(()), MemoryStateStore::new());
        let before = f.controller.state();

        f.controller.select_time();

        assert_eq!(*f.notices.borrow(), vec![Notice::TimePickerFailed]);
        assert_eq!(f.controller.state(), before);
    }

    #[test]
    fn test_set_alarm_without_time() {
        let f = fixture();
        f.controller.set_alarm();

        assert!(f.dispatcher.requests().is_empty());
        assert_eq!(*f.notices.borrow(), vec![Notice::SelectTimeFirst]);
    }

    #[test]
    fn test_set_alarm() {
        let f = fixture();
        f.controller.select_time();
        f.picker.confirm(7, 30);
        f.controller.edit_message("Wake up for class!");
        f.controller.set_alarm();

        assert_eq!(
            f.dispatcher.requests(),
            vec![AlarmRequest {
                hour: 7,
                minute: 30,
                message: "Wake up for class!".into(),
                new_task: true
            }]
        );

        let notices = f.notices.borrow();
        assert_eq!(*notices, vec![Notice::AlarmSet { hour: 7, minute: 30 }]);
        let text = notices[0].text();
        assert!(text.contains('7') && text.contains("30"));
    }

    #[test]
    fn test_set_alarm_without_handler() {
        let f =
            fixture_with(MockTimePicker::new(), Err(AlarmError::NoAlarmHandler), MemoryStateStore::new());
        f.controller.select_time();
        f.picker.confirm(6, 15);
        f.controller.set_alarm();

        assert_eq!(*f.notices.borrow(), vec![Notice::NoAlarmApp]);
        assert_eq!(f.controller.state().phase(), ScreenPhase::TimeSelected);

        // retry without picking the time again
        f.controller.set_alarm();
        assert_eq!(f.dispatcher.requests().len(), 2);
    }

    #[test]
    fn test_set_alarm_platform_failure() {
        let f = fixture_with(
            MockTimePicker::new(),
            Err(AlarmError::Platform { message: "java.lang.SecurityException".into() }),
            MemoryStateStore::new(),
        );
        f.controller.select_time();
        f.picker.confirm(8, 0);
        let before = f.controller.state();

        f.controller.set_alarm();

        assert_eq!(*f.notices.borrow(), vec![Notice::DispatchFailed]);
        assert_eq!(f.controller.state(), before);
    }

    #[test]
    fn test_empty_message() {
        let f = fixture();
        f.controller.select_time();
        f.picker.confirm(0, 0);
        f.controller.edit_message("");
        f.controller.set_alarm();

        assert_eq!(f.dispatcher.requests()[0].message, "");
    }

    #[test]
    fn test_save_and_restore() {
        let store = MemoryStateStore::new();

        let f = fixture_with(MockTimePicker::new(), Ok(()), store.clone());
        f.controller.select_time();
        f.picker.confirm(21, 5);
        f.controller.edit_message("Call mum");
        f.controller.save_state();
        let saved = f.controller.state();

        let recreated = fixture_with(MockTimePicker::new(), Ok(()), store);
        recreated.controller.restore_state();

        assert_eq!(recreated.controller.state(), saved);
        assert_eq!(
            recreated.refreshes.borrow().last().map(|s| s.display_text.clone()),
            Some("Selected Time: 21:05".to_string())
        );
    }

    #[test]
    fn test_restore_corrupt_snapshot() {
        let f = fixture_with(
            MockTimePicker::new(),
            Ok(()),
            MemoryStateStore::with_snapshot(b"garbage".to_vec()),
        );
        f.controller.restore_state();

        assert_eq!(f.controller.state(), ScreenState::default());
        assert!(f.notices.borrow().is_empty());
    }
}
