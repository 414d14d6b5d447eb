//! Manager day view: every active inspector with that day's appointments and
//! their current case load. Read-only composition over the snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Appointment, Case, Inspector, InspectorId};
use crate::workload::active_case_count;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewInspector {
    pub inspector_id: InspectorId,
    pub inspector_name: String,
    pub active_cases: u32,
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub day: NaiveDate,
    pub inspectors: Vec<OverviewInspector>,
}

/// Compose the schedule overview for one calendar day.
///
/// Inspectors are ordered by id; each inspector's appointments are the ones
/// starting on `day`, ordered by start time.
pub fn schedule_overview(
    day: NaiveDate,
    inspectors: &[Inspector],
    cases: &[Case],
    appointments: &[Appointment],
) -> Overview {
    let mut active: Vec<&Inspector> = inspectors.iter().filter(|ins| ins.active).collect();
    active.sort_by_key(|ins| ins.id);

    let inspectors = active
        .into_iter()
        .map(|ins| {
            let mut day_appointments: Vec<Appointment> = appointments
                .iter()
                .filter(|a| a.inspector_id == Some(ins.id) && a.start_time.date() == day)
                .cloned()
                .collect();
            day_appointments.sort_by_key(|a| (a.start_time, a.id));

            OverviewInspector {
                inspector_id: ins.id,
                inspector_name: ins.name.clone(),
                active_cases: active_case_count(cases, ins.id),
                appointments: day_appointments,
            }
        })
        .collect();

    Overview { day, inspectors }
}
