use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

pub(super) fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `HH:MM:SS` plus the fraction truncated to `digits`, trailing zeros trimmed.
pub(super) fn format_time(time: NaiveTime, digits: u32) -> String {
    let mut out = time.format("%H:%M:%S").to_string();
    push_fraction(&mut out, time.nanosecond(), digits);

    out
}

pub(super) fn format_timestamp(ts: NaiveDateTime, digits: u32) -> String {
    format!("{} {}", format_date(ts.date()), format_time(ts.time(), digits))
}

/// `+HH` or `+HH:MM`.
pub(super) fn format_utc_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let minutes = minutes.unsigned_abs();
    let (hours, minutes) = (minutes / 60, minutes % 60);

    if minutes == 0 {
        format!("{sign}{hours:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}")
    }
}

fn push_fraction(out: &mut String, nanos: u32, digits: u32) {
    // leap seconds are carried as nanos >= 1e9
    let nanos = nanos % NANOS_PER_SECOND;
    let digits = digits.min(9);
    if digits == 0 {
        return;
    }

    let truncated = nanos / 10u32.pow(9 - digits);
    if truncated == 0 {
        return;
    }

    let fraction = format!("{truncated:0width$}", width = digits as usize);
    out.push('.');
    out.push_str(fraction.trim_end_matches('0'));
}
