//! Tests for badge colors, clock labels and durations.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use schedule_engine::display::{
    date_heading, day_label, doctor_heading, duration_minutes, humanize, patient_badge,
    patient_hash, status_badge, time_range_label, type_badge, BadgeColor, NO_DOCTOR,
    PATIENT_PALETTE,
};
use schedule_engine::model::{AppointmentStatus, AppointmentType, Doctor};
use schedule_engine::ClockFormat;

#[test]
fn patient_hash_sums_code_units() {
    // 'p' 112 + 'a' 97 + 't' 116 + '-' 45 + '1' 49
    assert_eq!(patient_hash("pat-1"), 419);
    assert_eq!(patient_hash(""), 0);
}

#[test]
fn patient_badge_is_deterministic() {
    assert_eq!(patient_badge("pat-1"), BadgeColor::Lime);
    assert_eq!(patient_badge("pat-2"), BadgeColor::Cyan);
    assert_eq!(patient_badge("pat-3"), BadgeColor::Sky);
    assert_eq!(patient_badge("pat-1"), patient_badge("pat-1"));
}

#[test]
fn patient_badge_always_in_palette() {
    for id in ["", "x", "pat-999", "ünïcødé", "a-very-long-patient-identifier-0001"] {
        assert!(PATIENT_PALETTE.contains(&patient_badge(id)));
    }
}

#[test]
fn type_and_status_palettes() {
    assert_eq!(type_badge(AppointmentType::Checkup), BadgeColor::Blue);
    assert_eq!(type_badge(AppointmentType::Consultation), BadgeColor::Emerald);
    assert_eq!(type_badge(AppointmentType::FollowUp), BadgeColor::Amber);
    assert_eq!(type_badge(AppointmentType::Procedure), BadgeColor::Violet);

    assert_eq!(status_badge(AppointmentStatus::Scheduled), BadgeColor::Slate);
    assert_eq!(status_badge(AppointmentStatus::Completed), BadgeColor::Green);
    assert_eq!(status_badge(AppointmentStatus::Cancelled), BadgeColor::Rose);
    assert_eq!(status_badge(AppointmentStatus::NoShow), BadgeColor::Orange);
}

#[test]
fn every_type_and_status_has_its_own_badge() {
    let type_badges: Vec<BadgeColor> = AppointmentType::ALL
        .iter()
        .map(|t| type_badge(*t))
        .collect();
    let status_badges: Vec<BadgeColor> = AppointmentStatus::ALL
        .iter()
        .map(|s| status_badge(*s))
        .collect();

    for badges in [&type_badges, &status_badges] {
        for (i, badge) in badges.iter().enumerate() {
            assert!(!badges[i + 1..].contains(badge), "{:?} repeated", badge);
        }
    }
    for badge in &type_badges {
        assert!(!status_badges.contains(badge));
    }
}

#[test]
fn wire_names_match_serde() {
    for kind in AppointmentType::ALL {
        assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
    }
    for status in AppointmentStatus::ALL {
        assert_eq!(serde_json::to_value(status).unwrap(), status.to_string());
    }
}

#[test]
fn css_class_string() {
    assert_eq!(
        BadgeColor::Amber.css_class(),
        "bg-amber-100 text-amber-800 ring-amber-200"
    );
}

#[test]
fn duration_rounds_to_nearest_minute() {
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();

    assert_eq!(duration_minutes(start, start + Duration::minutes(45)), 45);
    assert_eq!(duration_minutes(start, start + Duration::seconds(29 * 60 + 30)), 30);
    assert_eq!(duration_minutes(start, start + Duration::seconds(29 * 60 + 29)), 29);
}

#[test]
fn duration_never_negative() {
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
    assert_eq!(duration_minutes(start, start - Duration::minutes(10)), 0);
    assert_eq!(duration_minutes(start, start), 0);
}

#[test]
fn humanize_replaces_first_hyphen() {
    assert_eq!(humanize("follow-up"), "follow up");
    assert_eq!(humanize("no-show"), "no show");
    assert_eq!(humanize("checkup"), "checkup");
    assert_eq!(humanize("a-b-c"), "a b-c");
}

#[test]
fn time_range_in_zone() {
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 14, 0, 0).unwrap();
    let end = start + Duration::minutes(30);
    let new_york: Tz = "America/New_York".parse().unwrap();

    assert_eq!(
        time_range_label(start, end, Tz::UTC, ClockFormat::TwentyFourHour),
        "14:00 - 14:30"
    );
    assert_eq!(
        time_range_label(start, end, new_york, ClockFormat::TwelveHour),
        "09:00 AM - 09:30 AM"
    );
}

#[test]
fn clock_format_parsing() {
    assert_eq!("24h".parse::<ClockFormat>(), Ok(ClockFormat::TwentyFourHour));
    assert_eq!("12H".parse::<ClockFormat>(), Ok(ClockFormat::TwelveHour));
    assert_eq!(" 12 ".parse::<ClockFormat>(), Ok(ClockFormat::TwelveHour));
    assert_eq!(
        "AM/PM".parse::<ClockFormat>(),
        Err("Unknown clock format: 'AM/PM'. Available formats: 24h, 12h".to_string())
    );
    assert_eq!(ClockFormat::TwelveHour.to_string(), "12h");
}

#[test]
fn date_labels() {
    let monday = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    assert_eq!(day_label(monday), "Mon Mar 2");
    assert_eq!(date_heading(monday), "Mon Mar 02 2026");
}

#[test]
fn doctor_heading_with_placeholder() {
    let doctor = Doctor {
        id: "doc-1".to_string(),
        name: "Sarah Chen".to_string(),
        specialty: "Cardiology".to_string(),
    };
    assert_eq!(doctor_heading(Some(&doctor)), "Dr. Sarah Chen - Cardiology");
    assert_eq!(doctor_heading(None), NO_DOCTOR);
}
