//! Wall-clock resolution for local times around DST transitions.
//!
//! A local time can map to one instant, to two (the repeated hour when clocks
//! fall back), or to none (the hour skipped when clocks spring forward). A
//! skipped time shifts forward to the first instant after the gap.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, ScheduleError};

/// How a local wall-clock time maps onto real instants in a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallClock {
    /// The local time occurs exactly once.
    Single(DateTime<Utc>),
    /// The local time occurs twice (fall-back fold).
    Ambiguous {
        earliest: DateTime<Utc>,
        latest: DateTime<Utc>,
    },
    /// The local time never occurs (spring-forward gap). `next` is the
    /// instant the clocks jump at, the first one after the gap.
    Skipped { next: DateTime<Utc> },
}

impl WallClock {
    /// The first instant showing this wall-clock time, or the end of the gap
    /// when it is never shown.
    pub fn earliest(&self) -> DateTime<Utc> {
        match self {
            WallClock::Single(instant) => *instant,
            WallClock::Ambiguous { earliest, .. } => *earliest,
            WallClock::Skipped { next } => *next,
        }
    }
}

/// Resolve a local wall-clock time in `tz`.
pub fn resolve(tz: Tz, local: NaiveDateTime) -> WallClock {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => WallClock::Single(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(a, b) => WallClock::Ambiguous {
            earliest: a.with_timezone(&Utc),
            latest: b.with_timezone(&Utc),
        },
        LocalResult::None => WallClock::Skipped {
            next: first_instant_reaching(tz, local),
        },
    }
}

/// Largest UTC offset magnitude is 14h; a 26h search radius also covers a
/// whole skipped day.
const GAP_SEARCH_HOURS: i64 = 26;

/// Binary search for the first instant whose local time in `tz` is at or
/// after `local`. Local time only moves forward within the search radius
/// around a gap, so the predicate is monotone.
fn first_instant_reaching(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    let radius = Duration::hours(GAP_SEARCH_HOURS);
    let floor = local.and_utc() - radius;
    let reaches =
        |secs: i64| (floor + Duration::seconds(secs)).with_timezone(&tz).naive_local() >= local;

    let (mut low, mut high) = (0, 2 * radius.num_seconds());
    while low < high {
        let mid = low + (high - low) / 2;
        if reaches(mid) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    floor + Duration::seconds(low)
}

/// The calendar day an instant falls on in `tz`.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Parse an IANA timezone name such as `"America/New_York"`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| ScheduleError::InvalidTimezone(name.to_string()))
}
