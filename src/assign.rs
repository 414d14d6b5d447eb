//! Appointment assignment: single commits, reschedules, reassigns, and the
//! batch auto-assignment planner.
//!
//! Everything here is pure over the snapshot the host supplies. The overlap
//! invariant (one inspector, no two non-closed appointments with intersecting
//! `[start, end)` intervals) is re-checked on every write path; the host must
//! still commit with an atomic check-and-insert, since two concurrent
//! requests can race past any snapshot-level check.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, ScheduleError};
use crate::model::{
    Appointment, AppointmentId, AppointmentStatus, AssignmentResult, Case, CaseId, Inspector,
    InspectorId,
};
use crate::suggest::{MAX_SUGGESTIONS, Strategy, Target, suggest};

/// Insert payload for an appointment the host has not persisted yet. The id
/// is allocated by the persistence layer on commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub case_id: CaseId,
    pub inspector_id: InspectorId,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

fn intervals_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether `[start, end)` is free for `inspector_id` against every slot-
/// blocking appointment in the snapshot. `exclude` skips the appointment
/// being rescheduled so it does not conflict with itself.
pub fn slot_is_free(
    appointments: &[Appointment],
    inspector_id: InspectorId,
    start: NaiveDateTime,
    end: NaiveDateTime,
    exclude: Option<AppointmentId>,
) -> bool {
    appointments
        .iter()
        .filter(|a| a.inspector_id == Some(inspector_id) && a.status.blocks_slot())
        .filter(|a| Some(a.id) != exclude)
        .all(|a| !intervals_overlap(a.start_time, a.end_time, start, end))
}

fn ensure_slot_free(
    appointments: &[Appointment],
    inspector_id: InspectorId,
    start: NaiveDateTime,
    end: NaiveDateTime,
    exclude: Option<AppointmentId>,
) -> Result<()> {
    if slot_is_free(appointments, inspector_id, start, end, exclude) {
        Ok(())
    } else {
        Err(ScheduleError::SchedulingConflict {
            inspector_id,
            start,
            end,
        })
    }
}

fn validate_window(start: NaiveDateTime, end: NaiveDateTime) -> Result<()> {
    if start >= end {
        return Err(ScheduleError::InvalidArgument(format!(
            "start_time {start} must precede end_time {end}"
        )));
    }
    Ok(())
}

fn find_inspector<'a>(inspectors: &'a [Inspector], id: InspectorId) -> Result<&'a Inspector> {
    inspectors
        .iter()
        .find(|ins| ins.id == id)
        .ok_or_else(|| ScheduleError::InvalidArgument(format!("unknown inspector {id}")))
}

/// Directly assign one case to one inspector for the given window.
///
/// Returns the appointment the host should insert. The case's location is
/// carried onto the appointment so the day view can render it without a join.
pub fn assign_case(
    case_id: CaseId,
    inspector_id: InspectorId,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    notes: Option<String>,
    inspectors: &[Inspector],
    cases: &[Case],
    appointments: &[Appointment],
) -> Result<NewAppointment> {
    validate_window(start_time, end_time)?;
    find_inspector(inspectors, inspector_id)?;
    if !cases.iter().any(|c| c.id == case_id) {
        return Err(ScheduleError::InvalidArgument(format!(
            "unknown case {case_id}"
        )));
    }
    ensure_slot_free(appointments, inspector_id, start_time, end_time, None)?;

    Ok(NewAppointment {
        case_id,
        inspector_id,
        start_time,
        end_time,
        status: AppointmentStatus::Pending,
        notes,
    })
}

/// Move an appointment to a new window (optionally a new inspector) and
/// re-check the overlap invariant against the latest snapshot.
pub fn reschedule(
    appointment: &Appointment,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
    inspector_id: Option<InspectorId>,
    inspectors: &[Inspector],
    appointments: &[Appointment],
) -> Result<Appointment> {
    validate_window(start_time, end_time)?;
    let target = match inspector_id {
        Some(id) => find_inspector(inspectors, id)?.id,
        None => appointment.inspector_id.ok_or_else(|| {
            ScheduleError::InvalidArgument(format!(
                "appointment {} has no inspector to keep",
                appointment.id
            ))
        })?,
    };
    ensure_slot_free(
        appointments,
        target,
        start_time,
        end_time,
        Some(appointment.id),
    )?;

    let mut updated = appointment.clone();
    updated.start_time = start_time;
    updated.end_time = end_time;
    updated.inspector_id = Some(target);
    Ok(updated)
}

/// Hand an appointment to a different inspector, keeping its window.
pub fn reassign(
    appointment: &Appointment,
    inspector_id: InspectorId,
    inspectors: &[Inspector],
    appointments: &[Appointment],
) -> Result<Appointment> {
    find_inspector(inspectors, inspector_id)?;
    ensure_slot_free(
        appointments,
        inspector_id,
        appointment.start_time,
        appointment.end_time,
        Some(appointment.id),
    )?;

    let mut updated = appointment.clone();
    updated.inspector_id = Some(inspector_id);
    Ok(updated)
}

#[derive(Debug, Clone)]
pub struct AutoAssignOptions {
    pub strategy: Strategy,
    /// Base start for the batch; slots are staggered from here. Defaults to
    /// the `now` passed to [`auto_assign`].
    pub start_time: Option<NaiveDateTime>,
    pub duration_minutes: i64,
    /// Under `proximity`, candidates farther than this from the case are
    /// discarded.
    pub max_radius_km: Option<f64>,
}

impl Default for AutoAssignOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Proximity,
            start_time: None,
            duration_minutes: 60,
            max_radius_km: None,
        }
    }
}

/// Why a case in a batch could not be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    UnknownCase,
    MissingCoordinates,
    OutsideRadius,
    SlotConflict,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedCase {
    pub case_id: CaseId,
    pub reason: SkipReason,
}

/// Result of one batch run. `assigned` and `appointments` are parallel: entry
/// `i` of each describes the same case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoAssignOutcome {
    pub assigned: Vec<AssignmentResult>,
    pub appointments: Vec<NewAppointment>,
    pub skipped: Vec<SkippedCase>,
}

/// Batch-assign unassigned cases, one scorer call per case in input order.
///
/// Slots are staggered sequentially from the base start time, one duration
/// apart, matching how the dispatch desk books a morning's worth of visits.
/// A case whose ranked inspectors are all booked (or all outside
/// `max_radius_km`) is reported in `skipped`, never silently dropped; the
/// batch keeps going. Assignments made earlier in the batch count toward
/// load and occupy slots for the rest of it.
pub fn auto_assign(
    case_ids: &[CaseId],
    options: &AutoAssignOptions,
    now: NaiveDateTime,
    inspectors: &[Inspector],
    cases: &[Case],
    appointments: &[Appointment],
) -> Result<AutoAssignOutcome> {
    if options.duration_minutes <= 0 {
        return Err(ScheduleError::InvalidArgument(format!(
            "duration_minutes must be positive, got {}",
            options.duration_minutes
        )));
    }
    if !inspectors.iter().any(|ins| ins.active) {
        return Err(ScheduleError::NoEligibleInspectors);
    }

    let base_start = options.start_time.unwrap_or(now);
    let duration = Duration::minutes(options.duration_minutes);

    // Local copies so assignments made earlier in the batch influence load
    // scoring and slot checks for later cases.
    let mut cases: Vec<Case> = cases.to_vec();
    let mut committed: Vec<NewAppointment> = Vec::new();

    let mut outcome = AutoAssignOutcome {
        assigned: Vec::new(),
        appointments: Vec::new(),
        skipped: Vec::new(),
    };

    for (slot_index, &case_id) in case_ids.iter().enumerate() {
        if !cases.iter().any(|c| c.id == case_id) {
            warn!(case_id, "auto-assign: unknown case in batch");
            outcome.skipped.push(SkippedCase {
                case_id,
                reason: SkipReason::UnknownCase,
            });
            continue;
        }

        let ranked = match suggest(
            Target::Case(case_id),
            options.strategy,
            MAX_SUGGESTIONS as i64,
            inspectors,
            &cases,
        ) {
            Ok(ranked) => ranked,
            Err(ScheduleError::UnresolvableTarget(_)) => {
                outcome.skipped.push(SkippedCase {
                    case_id,
                    reason: SkipReason::MissingCoordinates,
                });
                continue;
            }
            Err(err) => return Err(err),
        };

        let within_radius: Vec<_> = match (options.strategy, options.max_radius_km) {
            (Strategy::Proximity, Some(radius)) => ranked
                .into_iter()
                .filter(|s| s.score <= radius)
                .collect(),
            _ => ranked,
        };
        if within_radius.is_empty() {
            outcome.skipped.push(SkippedCase {
                case_id,
                reason: SkipReason::OutsideRadius,
            });
            continue;
        }

        let slot_start = base_start + duration * (slot_index as i32);
        let slot_end = slot_start + duration;

        // Walk the ranking until an inspector with a free slot turns up.
        let chosen = within_radius.into_iter().find(|s| {
            slot_is_free(appointments, s.inspector_id, slot_start, slot_end, None)
                && committed.iter().all(|n| {
                    n.inspector_id != s.inspector_id
                        || !intervals_overlap(n.start_time, n.end_time, slot_start, slot_end)
                })
        });

        let Some(best) = chosen else {
            outcome.skipped.push(SkippedCase {
                case_id,
                reason: SkipReason::SlotConflict,
            });
            continue;
        };

        debug!(
            case_id,
            inspector_id = best.inspector_id,
            score = best.score,
            "auto-assign: committed"
        );

        if let Some(case) = cases.iter_mut().find(|c| c.id == case_id) {
            case.assigned_inspector = Some(best.inspector_id);
        }

        committed.push(NewAppointment {
            case_id,
            inspector_id: best.inspector_id,
            start_time: slot_start,
            end_time: slot_end,
            status: AppointmentStatus::Pending,
            notes: Some(format!("auto-assign:{}", options.strategy.as_str())),
        });
        outcome.assigned.push(AssignmentResult {
            case_id,
            inspector_id: best.inspector_id,
            reason: best.reason,
            score: best.score,
        });
    }

    outcome.appointments = committed;
    Ok(outcome)
}
