use chrono::{Datelike, DateTime, FixedOffset, Local, Locale, Months, Offset, SecondsFormat, TimeZone, Utc};

use crate::locale;

/// Source of "now" for the relative timestamp, plus the offset used to show
/// absolute times to the reader.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
    fn local_offset(&self, at: &DateTime<Utc>) -> FixedOffset;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_offset(&self, at: &DateTime<Utc>) -> FixedOffset {
        Local.offset_from_utc_datetime(&at.naive_utc()).fix()
    }
}

const ABSOLUTE_PATTERN: &str = "%-d de %B às %H:%Mh ";

/// Long absolute form, e.g. "3 de maio às 20:00h ". The trailing space is part
/// of the pattern.
pub fn format_absolute<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.format_localized(ABSOLUTE_PATTERN, Locale::pt_BR).to_string()
}

/// Machine readable form: UTC with millisecond precision and a `Z` suffix.
pub fn iso_8601<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    time.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Coarse distance between two instants, bucketed the way feed UIs usually
/// phrase it ("about 2 hours", "almost 3 years").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    LessThanXMinutes(i64),
    XMinutes(i64),
    AboutXHours(i64),
    XDays(i64),
    AboutXMonths(i64),
    XMonths(i64),
    AboutXYears(i64),
    OverXYears(i64),
    AlmostXYears(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Past,
    Future,
}

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Month and year buckets count calendar months on the reader's calendar,
/// given by `offset`.
pub fn distance(
    time: &DateTime<Utc>,
    now: &DateTime<Utc>,
    offset: FixedOffset,
) -> (Distance, Direction) {
    let (earlier, later, direction) = if time > now {
        (now, time, Direction::Future)
    } else {
        (time, now, Direction::Past)
    };

    let seconds = (*later - *earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    let distance = if minutes < 2 {
        if minutes == 0 {
            Distance::LessThanXMinutes(1)
        } else {
            Distance::XMinutes(minutes)
        }
    } else if minutes < 45 {
        Distance::XMinutes(minutes)
    } else if minutes < 90 {
        Distance::AboutXHours(1)
    } else if minutes < MINUTES_IN_DAY {
        Distance::AboutXHours(round_div(minutes, 60))
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        Distance::XDays(1)
    } else if minutes < MINUTES_IN_MONTH {
        Distance::XDays(round_div(minutes, MINUTES_IN_DAY))
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        Distance::AboutXMonths(round_div(minutes, MINUTES_IN_MONTH))
    } else {
        let months =
            whole_months_between(&earlier.with_timezone(&offset), &later.with_timezone(&offset));
        if months < 12 {
            Distance::XMonths(round_div(minutes, MINUTES_IN_MONTH))
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => Distance::AboutXYears(years),
                3..=8 => Distance::OverXYears(years),
                _ => Distance::AlmostXYears(years + 1),
            }
        }
    };

    (distance, direction)
}

/// Relative form with a suffix, e.g. "há cerca de 2 horas".
pub fn format_relative(time: &DateTime<Utc>, now: &DateTime<Utc>, offset: FixedOffset) -> String {
    let (distance, direction) = distance(time, now, offset);
    locale::relative_time(distance, direction)
}

// Rounds half up, which is what the thresholds above are tuned for.
fn round_div(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}

// A month only counts once the same day and time is reached again. Stepping
// back from `later` clamps to the end of shorter months (Mar 31 -> Feb 28).
fn whole_months_between(earlier: &DateTime<FixedOffset>, later: &DateTime<FixedOffset>) -> i64 {
    let months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if months <= 0 {
        return 0;
    }

    let stepped_back = u32::try_from(months)
        .ok()
        .and_then(|m| later.checked_sub_months(Months::new(m)));
    match stepped_back {
        Some(start) if start < *earlier => months - 1,
        _ => months,
    }
}
