// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use jni::objects::{JObject, JString, JValue};
use jni::JNIEnv;
use slint::android::AndroidApp;

use crate::{
    error::AlarmError,
    models::{ACTION_SET_ALARM, AlarmRequest, EXTRA_HOUR, EXTRA_MESSAGE, EXTRA_MINUTES},
    repositories::traits::AlarmDispatcher,
};

/// Sends `ACTION_SET_ALARM` intents to the system alarm application.
#[derive(Clone)]
pub struct IntentAlarmDispatcher {
    app: AndroidApp,
}

impl IntentAlarmDispatcher {
    pub fn new(app: AndroidApp) -> Self {
        Self { app }
    }

    fn with_jni_env<R>(
        &self,
        f: impl FnOnce(&mut JNIEnv, &JObject) -> Result<R, AlarmError>,
    ) -> Result<R, AlarmError> {
        // Safety: as documented in android-activity to obtain a jni::JavaVM
        let vm = unsafe { jni::JavaVM::from_raw(self.app.vm_as_ptr() as *mut _) }?;
        let activity = unsafe { JObject::from_raw(self.app.activity_as_ptr() as *mut _) };
        let mut env = vm.attach_current_thread()?;
        f(&mut env, &activity)
    }
}

impl AlarmDispatcher for IntentAlarmDispatcher {
    fn dispatch(&self, request: &AlarmRequest) -> Result<(), AlarmError> {
        self.with_jni_env(|env, activity| {
            // local references created for the request are released with the frame
            env.with_local_frame(16, |env| match start_alarm_activity(env, activity, request) {
                Ok(()) => Ok(()),
                Err(jni::errors::Error::JavaException) => Err(take_exception(env)),
                Err(e) => {
                    // failed lookups may leave their exception pending
                    let _ = env.exception_clear();
                    Err(e.into())
                }
            })
        })
    }
}

fn start_alarm_activity(
    env: &mut JNIEnv,
    activity: &JObject,
    request: &AlarmRequest,
) -> Result<(), jni::errors::Error> {
    let intent = build_intent(env, request)?;

    let context = env
        .call_method(activity, "getApplicationContext", "()Landroid/content/Context;", &[])?
        .l()?;

    env.call_method(
        &context,
        "startActivity",
        "(Landroid/content/Intent;)V",
        &[JValue::Object(&intent)],
    )?;
    Ok(())
}

fn build_intent<'local>(
    env: &mut JNIEnv<'local>,
    request: &AlarmRequest,
) -> Result<JObject<'local>, jni::errors::Error> {
    let action = env.new_string(ACTION_SET_ALARM)?;
    let intent =
        env.new_object("android/content/Intent", "(Ljava/lang/String;)V", &[JValue::Object(&action)])?;

    for (key, value) in [(EXTRA_HOUR, request.hour), (EXTRA_MINUTES, request.minute)] {
        let key = env.new_string(key)?;
        env.call_method(
            &intent,
            "putExtra",
            "(Ljava/lang/String;I)Landroid/content/Intent;",
            &[JValue::Object(&key), JValue::Int(value)],
        )?;
    }

    let key = env.new_string(EXTRA_MESSAGE)?;
    let message = env.new_string(&request.message)?;
    env.call_method(
        &intent,
        "putExtra",
        "(Ljava/lang/String;Ljava/lang/String;)Landroid/content/Intent;",
        &[JValue::Object(&key), JValue::Object(&message)],
    )?;

    env.call_method(
        &intent,
        "addFlags",
        "(I)Landroid/content/Intent;",
        &[JValue::Int(request.flags())],
    )?;

    Ok(intent)
}

/// Clears the pending Java exception and maps it to an [`AlarmError`].
///
/// Nothing is left pending on return, even when describing the exception
/// throws again.
fn take_exception(env: &mut JNIEnv) -> AlarmError {
    let error = env.exception_occurred().and_then(|throwable| {
        env.exception_clear()?;
        describe_exception(env, &throwable)
    });
    let _ = env.exception_clear();

    error.unwrap_or_else(|e| AlarmError::Platform { message: e.to_string() })
}

fn describe_exception(env: &mut JNIEnv, throwable: &JObject) -> Result<AlarmError, jni::errors::Error> {
    if env.is_instance_of(throwable, "android/content/ActivityNotFoundException")? {
        return Ok(AlarmError::NoAlarmHandler);
    }

    let description = env.call_method(throwable, "toString", "()Ljava/lang/String;", &[])?.l()?;
    let description = JString::from(description);
    let message: String = env.get_string(&description)?.into();
    Ok(AlarmError::Platform { message })
}
