use serde::{Deserialize, Serialize};
use std::fmt;

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;

///
/// Interval
///
/// Calendar interval in the engine's three-part layout. Months and days
/// are kept apart from the sub-day part because their length in
/// microseconds depends on the anchor date.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Interval {
    pub months: i32,
    pub days: i32,
    pub micros: i64,
}

impl Interval {
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(months: i32, days: i32, micros: i64) -> Self {
        Self {
            months,
            days,
            micros,
        }
    }

    #[must_use]
    pub const fn from_years(years: i32) -> Self {
        Self::new(years.saturating_mul(12), 0, 0)
    }

    #[must_use]
    pub const fn from_months(months: i32) -> Self {
        Self::new(months, 0, 0)
    }

    #[must_use]
    pub const fn from_days(days: i32) -> Self {
        Self::new(0, days, 0)
    }

    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self::new(0, 0, micros)
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.months == 0 && self.days == 0 && self.micros == 0
    }
}

// `1 year 2 months 3 days 04:05:06.5`, `00:00:00` when empty.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        let years = self.months / 12;
        let months = self.months % 12;
        if years != 0 {
            parts.push(counted(i64::from(years), "year"));
        }
        if months != 0 {
            parts.push(counted(i64::from(months), "month"));
        }
        if self.days != 0 {
            parts.push(counted(i64::from(self.days), "day"));
        }
        if self.micros != 0 || parts.is_empty() {
            parts.push(clock(self.micros));
        }

        f.write_str(&parts.join(" "))
    }
}

fn counted(n: i64, unit: &str) -> String {
    if n == 1 || n == -1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn clock(micros: i64) -> String {
    let sign = if micros < 0 { "-" } else { "" };
    let micros = micros.unsigned_abs();

    let hours = micros / MICROS_PER_HOUR.unsigned_abs();
    let minutes = (micros / MICROS_PER_MINUTE.unsigned_abs()) % 60;
    let seconds = (micros / MICROS_PER_SECOND.unsigned_abs()) % 60;
    let fraction = micros % MICROS_PER_SECOND.unsigned_abs();

    let mut out = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");
    if fraction != 0 {
        let digits = format!("{fraction:06}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}
