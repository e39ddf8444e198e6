//! Fixed-width time slots for one calendar day.
//!
//! Slot boundaries are wall-clock times: `window.start + k * step` in the
//! caller's zone, each resolved independently. On a DST transition day this
//! keeps labels on the half hour at the cost of slots that are not 30 real
//! minutes long, or that disappear:
//!
//! - a boundary inside a spring-forward gap shifts forward to the end of the
//!   gap, so the slot before it stretches to the jump and slots lying wholly
//!   inside the gap collapse to nothing and are dropped;
//! - a boundary inside a fall-back fold resolves to its earliest instant.
//!
//! Either way consecutive slots stay contiguous.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::display::ClockFormat;
use crate::dst;

/// Daily window slots are generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub step_minutes: u32,
}

impl SlotWindow {
    pub fn new(start: NaiveTime, end: NaiveTime, step_minutes: u32) -> Self {
        Self {
            start,
            end,
            step_minutes,
        }
    }

    /// Local `(start, end)` pairs for `date`, before zone resolution.
    ///
    /// The last pair is clipped to the window end when the window is not a
    /// whole number of steps.
    fn local_bounds(&self, date: NaiveDate) -> Vec<(NaiveDateTime, NaiveDateTime)> {
        if self.step_minutes == 0 || self.start >= self.end {
            return Vec::new();
        }

        let step = Duration::minutes(i64::from(self.step_minutes));
        let first = date.and_time(self.start);
        let last = date.and_time(self.end);

        std::iter::successors(Some(first), |s| Some(*s + step))
            .take_while(|s| *s < last)
            .map(|s| (s, (s + step).min(last)))
            .collect()
    }
}

impl Default for SlotWindow {
    /// 08:00 to 18:00 in 30-minute steps.
    fn default() -> Self {
        Self {
            start: NaiveTime::MIN + Duration::hours(8),
            end: NaiveTime::MIN + Duration::hours(18),
            step_minutes: 30,
        }
    }
}

/// A half-open interval `[start, end)` with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Local clock time of `start`.
    pub label: String,
}

impl TimeSlot {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Slots from 08:00 to 18:00 local time, 30 minutes each, 24-hour labels.
pub fn generate_time_slots(date: NaiveDate, tz: Tz) -> Vec<TimeSlot> {
    generate_time_slots_with(date, tz, &SlotWindow::default(), ClockFormat::default())
}

/// Slots for an arbitrary window and label style.
///
/// Returns an empty list when the window is inverted or has a zero step.
pub fn generate_time_slots_with(
    date: NaiveDate,
    tz: Tz,
    window: &SlotWindow,
    clock: ClockFormat,
) -> Vec<TimeSlot> {
    window
        .local_bounds(date)
        .into_iter()
        .filter_map(|(local_start, local_end)| {
            let start = dst::resolve(tz, local_start).earliest();
            let end = dst::resolve(tz, local_end).earliest();
            (start < end).then(|| TimeSlot {
                start,
                end,
                label: clock.format(start, tz),
            })
        })
        .collect()
}
