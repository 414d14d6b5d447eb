//! inspection-planner core
//!
//! Pure scheduling engine for municipal fraud-inspection dispatch: suggestion
//! scoring, route clustering/ordering, workload aggregation, and overlap-safe
//! appointment assignment. The host REST layer supplies entity snapshots and
//! persists the results; nothing here touches the network or a database.

pub mod assign;
pub mod error;
pub mod geo;
pub mod model;
pub mod overview;
pub mod route;
pub mod suggest;
pub mod workload;
