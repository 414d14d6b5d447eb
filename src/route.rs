//! Daily route engine: proximity clustering and stop ordering.
//!
//! Clustering is single-linkage under a fixed radius: a stop joins a cluster
//! if it is within the radius of any member. Ordering is a greedy
//! nearest-neighbor walk anchored at the inspector's home base when known.
//! This is a deliberate approximation, not an optimal TSP solve; daily stop
//! counts are small (typically under 20) and determinism matters more than
//! the last few hundred meters.

use chrono::NaiveDateTime;
use rayon::prelude::*;
use tracing::debug;

use crate::geo::{Coord, distance_km};
use crate::model::RoutePoint;

#[derive(Debug, Clone)]
pub struct RouteOptions {
    /// Two stops closer than this are considered part of the same cluster.
    pub cluster_radius_km: f64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            cluster_radius_km: 1.5,
        }
    }
}

/// Output of [`build_route`]: a partition of the stops into proximity
/// clusters, and a single visitation order across all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub clusters: Vec<Vec<RoutePoint>>,
    pub ordered: Vec<RoutePoint>,
}

/// Cluster and order an inspector's stops for one day.
///
/// Empty input yields an empty plan. Output is deterministic for identical
/// input, including the order points are supplied in.
pub fn build_route(home: Option<Coord>, points: &[RoutePoint], options: &RouteOptions) -> RoutePlan {
    if points.is_empty() {
        return RoutePlan {
            clusters: Vec::new(),
            ordered: Vec::new(),
        };
    }

    let clusters = cluster(points, options.cluster_radius_km);
    let ordered = order(home, points);

    debug!(
        stops = points.len(),
        clusters = clusters.len(),
        anchored_at_home = home.is_some(),
        "built daily route"
    );

    RoutePlan { clusters, ordered }
}

/// Single-linkage grouping: connect every pair under the radius, then take
/// connected components. Clusters appear in first-member input order and keep
/// their members in input order.
fn cluster(points: &[RoutePoint], radius_km: f64) -> Vec<Vec<RoutePoint>> {
    let n = points.len();

    let dist: Vec<Vec<f64>> = points
        .par_iter()
        .map(|p| points.iter().map(|q| distance_km(p.coord, q.coord)).collect())
        .collect();

    let mut parent: Vec<usize> = (0..n).collect();
    for i in 0..n {
        for j in (i + 1)..n {
            if dist[i][j] <= radius_km {
                union(&mut parent, i, j);
            }
        }
    }

    let mut clusters: Vec<Vec<RoutePoint>> = Vec::new();
    let mut cluster_of_root: Vec<Option<usize>> = vec![None; n];
    for (i, point) in points.iter().enumerate() {
        let root = find(&mut parent, i);
        match cluster_of_root[root] {
            Some(idx) => clusters[idx].push(point.clone()),
            None => {
                cluster_of_root[root] = Some(clusters.len());
                clusters.push(vec![point.clone()]);
            }
        }
    }
    clusters
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        // Attach the larger root under the smaller one so component roots
        // are stable with respect to input order.
        let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
        parent[hi] = lo;
    }
}

/// Greedy nearest-neighbor walk. Anchored at `home` when provided, otherwise
/// the earliest-start stop opens the route. Ties break by earlier start time,
/// then by appointment id.
fn order(home: Option<Coord>, points: &[RoutePoint]) -> Vec<RoutePoint> {
    let mut remaining: Vec<&RoutePoint> = points.iter().collect();
    let mut ordered: Vec<RoutePoint> = Vec::with_capacity(points.len());

    let mut position = match home {
        Some(coord) => coord,
        None => {
            let Some(first) = take_min(&mut remaining, |a, b| {
                start_key(a)
                    .cmp(&start_key(b))
                    .then(a.id.cmp(&b.id))
            }) else {
                return ordered;
            };
            let coord = first.coord;
            ordered.push(first.clone());
            coord
        }
    };

    while let Some(next) = take_min(&mut remaining, |a, b| {
        distance_km(position, a.coord)
            .total_cmp(&distance_km(position, b.coord))
            .then(start_key(a).cmp(&start_key(b)))
            .then(a.id.cmp(&b.id))
    }) {
        position = next.coord;
        ordered.push(next.clone());
    }

    ordered
}

/// Stops without a start time sort before any timed stop.
fn start_key(p: &RoutePoint) -> NaiveDateTime {
    p.start.unwrap_or(NaiveDateTime::MIN)
}

/// Remove and return the minimum element under `cmp`. The first of equal
/// elements wins, which keeps the walk deterministic.
fn take_min<'a>(
    remaining: &mut Vec<&'a RoutePoint>,
    mut cmp: impl FnMut(&RoutePoint, &RoutePoint) -> std::cmp::Ordering,
) -> Option<&'a RoutePoint> {
    if remaining.is_empty() {
        return None;
    }
    let mut best = 0;
    for i in 1..remaining.len() {
        if cmp(remaining[i], remaining[best]).is_lt() {
            best = i;
        }
    }
    Some(remaining.remove(best))
}
