//! Per-inspector workload aggregation.
//!
//! Pure counting over caller-supplied snapshots: active case load plus
//! appointment volume for the calendar week containing `now`. Weeks run
//! Monday through Sunday in local wall-clock time.

use chrono::{Datelike, Days, NaiveDateTime, NaiveTime};

use crate::model::{Appointment, Case, CaseStatus, Inspector, WorkloadItem};

/// Bounds of the Monday-based week containing `now`, as the half-open
/// interval `[monday 00:00, next monday 00:00)`.
pub fn week_bounds(now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let days_from_monday = u64::from(now.weekday().num_days_from_monday());
    let monday = now.date() - Days::new(days_from_monday);
    let start = monday.and_time(NaiveTime::MIN);
    let end = (monday + Days::new(7)).and_time(NaiveTime::MIN);
    (start, end)
}

/// One `WorkloadItem` per active inspector, ordered by inspector id.
///
/// `active_cases` counts cases assigned to the inspector whose status is not
/// `Closed`. `appointments_this_week` counts appointments starting inside the
/// week containing `now`, regardless of status. Inspectors with no activity
/// still appear with zero counts.
pub fn compute_workload(
    inspectors: &[Inspector],
    cases: &[Case],
    appointments: &[Appointment],
    now: NaiveDateTime,
) -> Vec<WorkloadItem> {
    let (week_start, week_end) = week_bounds(now);

    let mut items: Vec<WorkloadItem> = inspectors
        .iter()
        .filter(|ins| ins.active)
        .map(|ins| {
            let active_cases = cases
                .iter()
                .filter(|c| c.assigned_inspector == Some(ins.id) && c.status != CaseStatus::Closed)
                .count() as u32;

            let appointments_this_week = appointments
                .iter()
                .filter(|a| a.inspector_id == Some(ins.id))
                .filter(|a| a.start_time >= week_start && a.start_time < week_end)
                .count() as u32;

            WorkloadItem {
                inspector_id: ins.id,
                inspector_name: ins.name.clone(),
                active_cases,
                appointments_this_week,
            }
        })
        .collect();

    items.sort_by_key(|item| item.inspector_id);
    items
}

/// Active case count for a single inspector, same definition as
/// [`compute_workload`].
pub fn active_case_count(cases: &[Case], inspector_id: i64) -> u32 {
    cases
        .iter()
        .filter(|c| c.assigned_inspector == Some(inspector_id) && c.status != CaseStatus::Closed)
        .count() as u32
}
