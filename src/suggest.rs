//! Suggestion scorer: ranks candidate inspectors for a target case.
//!
//! Two strategies, both "lower score is better": `proximity` ranks by
//! haversine distance from the inspector's home base, `load` ranks by current
//! active case count with distance as a tiebreaker when the target has
//! coordinates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::geo::{Coord, distance_km};
use crate::model::{Case, CaseId, Inspector, ScoreReason, Suggestion};
use crate::workload::active_case_count;

/// Hard cap on returned suggestions; `top_k` above this is clamped.
pub const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Proximity,
    /// Balance by active case count. Accepts `"balanced"` on the wire too.
    #[serde(alias = "balanced")]
    Load,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Proximity => "proximity",
            Strategy::Load => "load",
        }
    }
}

impl FromStr for Strategy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "proximity" => Ok(Strategy::Proximity),
            "load" | "balanced" => Ok(Strategy::Load),
            other => Err(ScheduleError::InvalidArgument(format!(
                "unknown strategy: {other}"
            ))),
        }
    }
}

/// What the scorer is ranking against: explicit coordinates or a case to be
/// resolved from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    At(Coord),
    Case(CaseId),
}

/// Rank active inspectors for `target` and return at most `top_k` entries.
///
/// `top_k` must be positive; values above [`MAX_SUGGESTIONS`] are clamped.
/// Fewer eligible inspectors than `top_k` is not an error. Under `proximity`
/// an inspector without a home base cannot be scored and is excluded; if that
/// excludes everyone, the call fails with `NoEligibleInspectors` rather than
/// inventing zero distances.
pub fn suggest(
    target: Target,
    strategy: Strategy,
    top_k: i64,
    inspectors: &[Inspector],
    cases: &[Case],
) -> Result<Vec<Suggestion>> {
    if top_k <= 0 {
        return Err(ScheduleError::InvalidArgument(format!(
            "top_k must be positive, got {top_k}"
        )));
    }
    let limit = (top_k as usize).min(MAX_SUGGESTIONS);

    let target_coord = resolve_target(target, strategy, cases)?;

    let active: Vec<&Inspector> = inspectors.iter().filter(|ins| ins.active).collect();
    if active.is_empty() {
        return Err(ScheduleError::NoEligibleInspectors);
    }

    let mut scored = match strategy {
        Strategy::Proximity => {
            // resolve_target guarantees coordinates under proximity.
            let Some(coord) = target_coord else {
                return Err(ScheduleError::InvalidArgument(
                    "proximity strategy requires target coordinates".to_string(),
                ));
            };
            let candidates: Vec<_> = active
                .into_iter()
                .filter_map(|ins| {
                    ins.home.map(|home| {
                        let d = distance_km(home, coord);
                        (d, d, ins)
                    })
                })
                .collect();
            if candidates.is_empty() {
                return Err(ScheduleError::NoEligibleInspectors);
            }
            candidates
        }
        Strategy::Load => active
            .into_iter()
            .map(|ins| {
                let load = f64::from(active_case_count(cases, ins.id));
                // Distance only breaks ties; inspectors we cannot place sort last
                // among equals.
                let tiebreak = match (target_coord, ins.home) {
                    (Some(coord), Some(home)) => distance_km(home, coord),
                    _ => f64::INFINITY,
                };
                (load, tiebreak, ins)
            })
            .collect(),
    };

    scored.sort_by(|a, b| {
        a.0.total_cmp(&b.0)
            .then(a.1.total_cmp(&b.1))
            .then(a.2.id.cmp(&b.2.id))
    });

    let reason = match strategy {
        Strategy::Proximity => ScoreReason::DistanceKm,
        Strategy::Load => ScoreReason::BalancedLoad,
    };

    debug!(
        candidates = scored.len(),
        limit,
        ?strategy,
        "ranked suggestion candidates"
    );

    Ok(scored
        .into_iter()
        .take(limit)
        .map(|(score, _, ins)| Suggestion {
            inspector_id: ins.id,
            inspector_name: ins.name.clone(),
            score,
            reason,
        })
        .collect())
}

/// Resolve the target to coordinates if possible.
///
/// A case without usable coordinates is fatal under `proximity` and a valid
/// fallback (pure load ranking) under `load`. An unknown case id is always
/// fatal.
fn resolve_target(target: Target, strategy: Strategy, cases: &[Case]) -> Result<Option<Coord>> {
    match target {
        Target::At(coord) => Ok(Some(coord)),
        Target::Case(case_id) => {
            let case = cases
                .iter()
                .find(|c| c.id == case_id)
                .ok_or(ScheduleError::UnresolvableTarget(case_id))?;
            match (case.location, strategy) {
                (Some(coord), _) => Ok(Some(coord)),
                (None, Strategy::Load) => Ok(None),
                (None, Strategy::Proximity) => Err(ScheduleError::UnresolvableTarget(case_id)),
            }
        }
    }
}
