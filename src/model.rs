//! Domain entities and wire shapes shared across the planner.
//!
//! These mirror the JSON exchanged with the host REST layer. The planner only
//! ever reads snapshots of these and emits new values; persistence is the
//! host's job.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::geo::Coord;

pub type InspectorId = i64;
pub type CaseId = i64;
pub type AppointmentId = i64;

/// A field inspector available for visit assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspector {
    pub id: InspectorId,
    pub name: String,
    pub active: bool,
    /// Home base used for proximity scoring and route anchoring.
    pub home: Option<Coord>,
    /// Linked login account, when the inspector can sign in themselves.
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    New,
    Scheduled,
    Visited,
    Reported,
    Closed,
}

/// A fraud case under investigation. Owned by the case-management service;
/// the planner reads its location/status and reports assignments back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub status: CaseStatus,
    /// Derived from the case's building; absent when the building has no
    /// usable coordinates.
    pub location: Option<Coord>,
    pub assigned_inspector: Option<InspectorId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Accepted,
    Rejected,
    Closed,
}

impl AppointmentStatus {
    /// Whether an appointment in this status still occupies its time slot.
    pub fn blocks_slot(self) -> bool {
        !matches!(self, AppointmentStatus::Closed | AppointmentStatus::Rejected)
    }
}

/// A scheduled visit. Never deleted, only status-transitioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub case_id: CaseId,
    pub inspector_id: Option<InspectorId>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: AppointmentStatus,
    pub location: Option<Coord>,
    pub notes: Option<String>,
}

/// Why a candidate was ranked where it was. Serializes to the wire strings
/// the manager UI displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreReason {
    DistanceKm,
    BalancedLoad,
}

/// Ranked candidate produced by the suggestion scorer. Ephemeral, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub inspector_id: InspectorId,
    pub inspector_name: String,
    /// Lower is better under both strategies.
    pub score: f64,
    pub reason: ScoreReason,
}

/// One stop in an inspector's daily route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub id: AppointmentId,
    pub coord: Coord,
    pub case_id: CaseId,
    pub start: Option<NaiveDateTime>,
}

/// Per-inspector activity aggregate over the current week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadItem {
    pub inspector_id: InspectorId,
    pub inspector_name: String,
    pub active_cases: u32,
    pub appointments_this_week: u32,
}

/// Outcome of one case inside an auto-assignment batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub case_id: CaseId,
    pub inspector_id: InspectorId,
    pub reason: ScoreReason,
    pub score: f64,
}
