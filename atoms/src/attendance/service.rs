use chrono::{DateTime, Utc};

use super::model::{AttendanceRecord, CleanupSummary, UpdateAttendancePayload};
use crate::document::Document;

/// Bucket a finished session by its length.
pub fn status_for_hours(hours: f64) -> &'static str {
    if hours < 4.0 {
        "early-departure"
    } else if hours < 8.0 {
        "half-day"
    } else {
        "present"
    }
}

fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

fn open_record_exists(doc: &Document, user_id: &str, date: &str) -> bool {
    doc.attendance
        .iter()
        .any(|r| r.user_id == user_id && r.date == date && r.clock_in.is_some() && r.clock_out.is_none())
}

/// Open a new session. Refused while an earlier session for the same
/// (user, date) is still open; allowed again once that one is closed.
pub fn clock_in(
    doc: &mut Document,
    user_id: &str,
    date: &str,
    now: DateTime<Utc>,
) -> Result<AttendanceRecord, String> {
    if open_record_exists(doc, user_id, date) {
        return Err("Already clocked in for this date".to_string());
    }
    let record = AttendanceRecord {
        record_id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        date: date.to_string(),
        clock_in: Some(now.to_rfc3339()),
        clock_out: None,
        work_hours: 0.0,
        status: "present".to_string(),
        approved: false,
    };
    doc.attendance.push(record.clone());
    Ok(record)
}

/// Close the open session for (user, date): stamp clock_out, compute
/// hours from the millisecond gap and bucket the status.
pub fn clock_out(
    doc: &mut Document,
    user_id: &str,
    date: &str,
    now: DateTime<Utc>,
) -> Result<AttendanceRecord, String> {
    let record = doc
        .attendance
        .iter_mut()
        .find(|r| {
            r.user_id == user_id && r.date == date && r.clock_in.is_some() && r.clock_out.is_none()
        })
        .ok_or_else(|| "No open attendance record for this date".to_string())?;

    let clock_in_raw = record.clock_in.as_deref().unwrap_or_default();
    let clock_in = DateTime::parse_from_rfc3339(clock_in_raw)
        .map_err(|e| format!("Stored clock_in is unreadable: {}", e))?;

    let millis = (now.timestamp_millis() - clock_in.timestamp_millis()).max(0);
    let hours = round_hours(millis as f64 / 3_600_000.0);

    record.clock_out = Some(now.to_rfc3339());
    record.work_hours = hours;
    record.status = status_for_hours(hours).to_string();
    Ok(record.clone())
}

pub fn list_records(
    doc: &Document,
    user_id: Option<&str>,
    date: Option<&str>,
) -> Vec<AttendanceRecord> {
    doc.attendance
        .iter()
        .filter(|r| user_id.map_or(true, |u| r.user_id == u))
        .filter(|r| date.map_or(true, |d| r.date == d))
        .cloned()
        .collect()
}

pub fn update_record(
    doc: &mut Document,
    record_id: &str,
    payload: UpdateAttendancePayload,
) -> Result<AttendanceRecord, String> {
    let record = doc
        .attendance
        .iter_mut()
        .find(|r| r.record_id == record_id)
        .ok_or_else(|| "Attendance record not found".to_string())?;

    if let Some(approved) = payload.approved {
        record.approved = approved;
    }
    if let Some(status) = payload.status {
        record.status = status;
    }
    Ok(record.clone())
}

/// Maintenance pass: drop records that never got a clock_in, then drop
/// later duplicates of the (user_id, date, clock_in) key, keeping the
/// first occurrence in array order.
pub fn cleanup(doc: &mut Document) -> CleanupSummary {
    let before = doc.attendance.len();

    doc.attendance.retain(|r| r.clock_in.is_some());

    let mut seen: Vec<(String, String, String)> = Vec::new();
    doc.attendance.retain(|r| {
        let key = (
            r.user_id.clone(),
            r.date.clone(),
            r.clock_in.clone().unwrap_or_default(),
        );
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });

    let remaining = doc.attendance.len();
    CleanupSummary {
        removed: before - remaining,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 3, hour, minute, 0).unwrap()
    }

    #[test]
    fn clock_in_creates_open_present_record() {
        let mut doc = Document::default();
        let record = clock_in(&mut doc, "u1", "2026-08-03", at(9, 0)).unwrap();
        assert!(record.clock_in.is_some());
        assert!(record.clock_out.is_none());
        assert_eq!(record.status, "present");
        assert!(!record.approved);
    }

    #[test]
    fn double_clock_in_fails_without_state_change() {
        let mut doc = Document::default();
        clock_in(&mut doc, "u1", "2026-08-03", at(9, 0)).unwrap();
        let err = clock_in(&mut doc, "u1", "2026-08-03", at(10, 0)).unwrap_err();
        assert_eq!(err, "Already clocked in for this date");
        assert_eq!(doc.attendance.len(), 1);
    }

    #[test]
    fn new_session_allowed_after_clock_out() {
        let mut doc = Document::default();
        clock_in(&mut doc, "u1", "2026-08-03", at(9, 0)).unwrap();
        clock_out(&mut doc, "u1", "2026-08-03", at(12, 0)).unwrap();
        clock_in(&mut doc, "u1", "2026-08-03", at(13, 0)).unwrap();
        assert_eq!(doc.attendance.len(), 2);
    }

    #[test]
    fn clock_out_without_open_record_fails() {
        let mut doc = Document::default();
        let err = clock_out(&mut doc, "u1", "2026-08-03", at(17, 0)).unwrap_err();
        assert_eq!(err, "No open attendance record for this date");
    }

    #[test]
    fn three_and_a_half_hours_is_early_departure() {
        let mut doc = Document::default();
        clock_in(&mut doc, "u1", "2026-08-03", at(9, 0)).unwrap();
        let record = clock_out(&mut doc, "u1", "2026-08-03", at(12, 30)).unwrap();
        assert_eq!(record.work_hours, 3.5);
        assert_eq!(record.status, "early-departure");
    }

    #[test]
    fn six_hours_is_half_day() {
        let mut doc = Document::default();
        clock_in(&mut doc, "u1", "2026-08-03", at(9, 0)).unwrap();
        let record = clock_out(&mut doc, "u1", "2026-08-03", at(15, 0)).unwrap();
        assert_eq!(record.work_hours, 6.0);
        assert_eq!(record.status, "half-day");
    }

    #[test]
    fn nine_hours_is_present() {
        let mut doc = Document::default();
        clock_in(&mut doc, "u1", "2026-08-03", at(8, 0)).unwrap();
        let record = clock_out(&mut doc, "u1", "2026-08-03", at(17, 0)).unwrap();
        assert_eq!(record.work_hours, 9.0);
        assert_eq!(record.status, "present");
    }

    #[test]
    fn work_hours_rounded_to_two_decimals() {
        let mut doc = Document::default();
        clock_in(&mut doc, "u1", "2026-08-03", at(9, 0)).unwrap();
        // 7h10m = 7.1666... hours
        let record = clock_out(&mut doc, "u1", "2026-08-03", at(16, 10)).unwrap();
        assert_eq!(record.work_hours, 7.17);
    }

    #[test]
    fn cleanup_drops_invalid_and_duplicate_records() {
        let mut doc = Document::default();
        let keeper = AttendanceRecord {
            record_id: "a".to_string(),
            user_id: "u1".to_string(),
            date: "2026-08-03".to_string(),
            clock_in: Some("2026-08-03T09:00:00+00:00".to_string()),
            clock_out: None,
            work_hours: 0.0,
            status: "present".to_string(),
            approved: false,
        };
        let mut duplicate = keeper.clone();
        duplicate.record_id = "b".to_string();
        let no_clock_in = AttendanceRecord {
            record_id: "c".to_string(),
            user_id: "u2".to_string(),
            date: "2026-08-03".to_string(),
            clock_in: None,
            clock_out: None,
            work_hours: 0.0,
            status: "present".to_string(),
            approved: false,
        };
        doc.attendance = vec![keeper, duplicate, no_clock_in];

        let summary = cleanup(&mut doc);
        assert_eq!(summary.removed, 2);
        assert_eq!(summary.remaining, 1);
        assert_eq!(doc.attendance[0].record_id, "a");
    }
}
