// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// A time of day with minute precision.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTime")]
pub struct TimeModel {
    hour: u8,
    minute: u8,
}

impl TimeModel {
    /// Hour and minute reported to the view while no time is selected.
    pub const UNSET: i32 = -1;

    /// Returns `None` unless `hour` is in 0..=23 and `minute` in 0..=59.
    pub fn new(hour: i32, minute: i32) -> Option<Self> {
        let hour = u8::try_from(hour).ok().filter(|h| *h < 24)?;
        let minute = u8::try_from(minute).ok().filter(|m| *m < 60)?;
        Some(Self { hour, minute })
    }

    pub fn hour(&self) -> i32 {
        self.hour.into()
    }

    pub fn minute(&self) -> i32 {
        self.minute.into()
    }

    /// Always 24-hour and zero padded, e.g. `07:05`.
    pub fn to_24h_string(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[derive(Deserialize)]
struct RawTime {
    hour: i32,
    minute: i32,
}

impl TryFrom<RawTime> for TimeModel {
    type Error = String;

    fn try_from(raw: RawTime) -> Result<Self, Self::Error> {
        Self::new(raw.hour, raw.minute)
            .ok_or_else(|| format!("time {}:{} is out of range", raw.hour, raw.minute))
    }
}
