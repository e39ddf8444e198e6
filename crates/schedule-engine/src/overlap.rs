//! Slot membership and overlap detection.
//!
//! Two spans overlap when `a.start < b.end && b.start < a.end`. Spans that only
//! touch (one ends exactly when the other starts) do NOT overlap.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::Appointment;
use crate::query::sort_by_start_time;
use crate::timeslot::TimeSlot;

/// Anything with a half-open `[start, end)` time span.
pub trait Span {
    fn start(&self) -> DateTime<Utc>;
    fn end(&self) -> DateTime<Utc>;
}

impl Span for Appointment {
    fn start(&self) -> DateTime<Utc> {
        self.start_time
    }

    fn end(&self) -> DateTime<Utc> {
        self.end_time
    }
}

impl Span for TimeSlot {
    fn start(&self) -> DateTime<Utc> {
        self.start
    }

    fn end(&self) -> DateTime<Utc> {
        self.end
    }
}

impl<T: Span + ?Sized> Span for &T {
    fn start(&self) -> DateTime<Utc> {
        (**self).start()
    }

    fn end(&self) -> DateTime<Utc> {
        (**self).end()
    }
}

/// True iff `appointment` is active at some instant of `slot`.
pub fn overlaps(slot: &impl Span, appointment: &impl Span) -> bool {
    appointment.start() < slot.end() && appointment.end() > slot.start()
}

/// Appointments active during `slot`, in input order.
pub fn appointments_for_slot<'a>(
    slot: &TimeSlot,
    appointments: &'a [Appointment],
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|appointment| overlaps(slot, *appointment))
        .collect()
}

/// A pair of overlapping spans, `first` starting no later than `second`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlap<A> {
    pub first: A,
    pub second: A,
    pub overlap_minutes: i64,
}

/// Every overlapping pair in `items`.
///
/// Pairs come out ordered by the start of `first`, then of `second`. The
/// overlap length is `min(ends) - max(starts)`.
pub fn find_overlaps<A: Span + Clone>(items: &[A]) -> Vec<Overlap<A>> {
    let sorted = sort_by_start_time(items);
    let mut found = Vec::new();

    for (i, a) in sorted.iter().enumerate() {
        for b in &sorted[i + 1..] {
            // Sorted by start: once b starts at or after a ends, nothing later
            // can overlap a either.
            if b.start() >= a.end() {
                break;
            }
            let overlap_start = a.start().max(b.start());
            let overlap_end = a.end().min(b.end());
            found.push(Overlap {
                first: a.clone(),
                second: b.clone(),
                overlap_minutes: (overlap_end - overlap_start).num_minutes(),
            });
        }
    }

    found
}
