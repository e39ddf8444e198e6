//! Tests for the slot overlap predicate and pairwise overlap detection.

use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use schedule_engine::model::{Appointment, AppointmentType};
use schedule_engine::timeslot::TimeSlot;
use schedule_engine::{appointments_for_slot, find_overlaps, generate_time_slots, overlaps};

/// Helper to create an appointment on 2026-03-02 from hour/minute pairs.
fn appt(id: &str, start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Appointment {
    Appointment::new(
        id,
        "doc-1",
        "pat-1",
        Utc.with_ymd_and_hms(2026, 3, 2, start_hour, start_min, 0)
            .unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 2, end_hour, end_min, 0)
            .unwrap(),
        AppointmentType::Checkup,
    )
    .unwrap()
}

fn slot(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> TimeSlot {
    TimeSlot {
        start: Utc
            .with_ymd_and_hms(2026, 3, 2, start_hour, start_min, 0)
            .unwrap(),
        end: Utc
            .with_ymd_and_hms(2026, 3, 2, end_hour, end_min, 0)
            .unwrap(),
        label: format!("{:02}:{:02}", start_hour, start_min),
    }
}

#[test]
fn appointment_inside_slot_overlaps() {
    assert!(overlaps(&slot(9, 0, 9, 30), &appt("a", 9, 5, 9, 25)));
}

#[test]
fn appointment_spanning_slot_overlaps() {
    assert!(overlaps(&slot(9, 0, 9, 30), &appt("a", 8, 0, 11, 0)));
}

#[test]
fn appointment_ending_at_slot_start_does_not_overlap() {
    assert!(!overlaps(&slot(9, 0, 9, 30), &appt("a", 8, 30, 9, 0)));
}

#[test]
fn appointment_starting_at_slot_end_does_not_overlap() {
    assert!(!overlaps(&slot(9, 0, 9, 30), &appt("a", 9, 30, 10, 0)));
}

#[test]
fn generated_nine_oclock_slot_matches_first_two_of_three() {
    let a1 = appt("A1", 9, 0, 9, 30);
    let a2 = appt("A2", 9, 15, 9, 45);
    let a3 = appt("A3", 10, 0, 10, 30);
    let appointments = vec![a1, a2, a3];

    let slots = generate_time_slots(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), Tz::UTC);
    let nine = slots.iter().find(|s| s.label == "09:00").unwrap();

    let active: Vec<&str> = appointments_for_slot(nine, &appointments)
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(active, vec!["A1", "A2"]);
}

#[test]
fn appointments_for_slot_keeps_input_order() {
    let appointments = vec![appt("late", 9, 20, 9, 50), appt("early", 8, 45, 9, 10)];
    let active: Vec<&str> = appointments_for_slot(&slot(9, 0, 9, 30), &appointments)
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(active, vec!["late", "early"]);
}

#[test]
fn two_overlapping_appointments_detected() {
    let appointments = vec![appt("A1", 9, 0, 9, 30), appt("A2", 9, 15, 9, 45)];

    let found = find_overlaps(&appointments);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first.id, "A1");
    assert_eq!(found[0].second.id, "A2");
    assert_eq!(found[0].overlap_minutes, 15);
}

#[test]
fn adjacent_appointments_not_an_overlap() {
    let appointments = vec![appt("A1", 9, 0, 10, 0), appt("A2", 10, 0, 11, 0)];
    assert!(find_overlaps(&appointments).is_empty());
}

#[test]
fn non_adjacent_pairs_are_all_listed() {
    // Long appointment overlaps both later ones; they do not overlap each other.
    let appointments = vec![
        appt("long", 9, 0, 12, 0),
        appt("short", 9, 30, 10, 0),
        appt("late", 11, 0, 11, 30),
    ];

    let found = find_overlaps(&appointments);
    let pairs: Vec<(&str, &str, i64)> = found
        .iter()
        .map(|o| (o.first.id.as_str(), o.second.id.as_str(), o.overlap_minutes))
        .collect();

    assert_eq!(pairs, vec![("long", "short", 30), ("long", "late", 30)]);
}

#[test]
fn unsorted_input_is_sorted_before_pairing() {
    let appointments = vec![appt("A2", 9, 15, 9, 45), appt("A1", 9, 0, 9, 30)];

    let found = find_overlaps(&appointments);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first.id, "A1");
}

#[test]
fn find_overlaps_accepts_references() {
    let owned = vec![appt("A1", 9, 0, 10, 0), appt("A2", 9, 30, 10, 30)];
    let refs: Vec<&Appointment> = owned.iter().collect();

    let found = find_overlaps(&refs);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].overlap_minutes, 30);
}

#[test]
fn empty_list_has_no_overlaps() {
    let found = find_overlaps::<Appointment>(&[]);
    assert!(found.is_empty());
}
