//! Error taxonomy for the planner core.
//!
//! Every variant is recoverable by the caller; the host REST layer maps them
//! to 4xx responses with the display string as the `detail` message.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::model::{CaseId, InspectorId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Malformed input: bad strategy, out-of-range top_k, missing required
    /// coordinates for the chosen strategy.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No active inspector qualifies for the requested operation.
    #[error("no eligible inspectors")]
    NoEligibleInspectors,

    /// The case cannot be resolved to coordinates and the strategy needs them.
    #[error("case {0} cannot be resolved to usable coordinates")]
    UnresolvableTarget(CaseId),

    /// The requested slot collides with an existing non-closed appointment.
    #[error("inspector {inspector_id} is already booked between {start} and {end}")]
    SchedulingConflict {
        inspector_id: InspectorId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
