//! Test fixtures for inspection-planner.
//!
//! Provides realistic test data including:
//! - Real Beirut-area locations (the original deployment's service area)
//! - Builders for inspectors, cases, and appointments

#![allow(dead_code)]

pub mod beirut_locations;

pub use beirut_locations::*;

use chrono::{NaiveDate, NaiveDateTime};

use inspection_planner::geo::Coord;
use inspection_planner::model::{Appointment, AppointmentStatus, Case, CaseStatus, Inspector};

/// Shorthand for a wall-clock timestamp in tests.
pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Builder for inspectors with sensible defaults: active, no home base.
#[derive(Debug, Clone)]
pub struct TestInspector(Inspector);

impl TestInspector {
    pub fn new(id: i64) -> Self {
        Self(Inspector {
            id,
            name: format!("Inspector {id}"),
            active: true,
            home: None,
            user_id: None,
        })
    }

    pub fn named(mut self, name: &str) -> Self {
        self.0.name = name.to_string();
        self
    }

    pub fn home(mut self, lat: f64, lng: f64) -> Self {
        self.0.home = Some(Coord::new(lat, lng));
        self
    }

    pub fn home_at(self, location: &Location) -> Self {
        self.home(location.lat, location.lng)
    }

    pub fn inactive(mut self) -> Self {
        self.0.active = false;
        self
    }

    pub fn build(self) -> Inspector {
        self.0
    }
}

/// Builder for cases. Defaults: status `New`, unassigned, no location.
#[derive(Debug, Clone)]
pub struct TestCase(Case);

impl TestCase {
    pub fn new(id: i64) -> Self {
        Self(Case {
            id,
            status: CaseStatus::New,
            location: None,
            assigned_inspector: None,
        })
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.0.location = Some(Coord::new(lat, lng));
        self
    }

    pub fn located_at(self, location: &Location) -> Self {
        self.at(location.lat, location.lng)
    }

    pub fn status(mut self, status: CaseStatus) -> Self {
        self.0.status = status;
        self
    }

    pub fn assigned_to(mut self, inspector_id: i64) -> Self {
        self.0.assigned_inspector = Some(inspector_id);
        self
    }

    pub fn build(self) -> Case {
        self.0
    }
}

/// Builder for appointments. Defaults: pending, one hour long.
#[derive(Debug, Clone)]
pub struct TestAppointment(Appointment);

impl TestAppointment {
    pub fn new(id: i64, inspector_id: i64, start: NaiveDateTime) -> Self {
        Self(Appointment {
            id,
            case_id: id,
            inspector_id: Some(inspector_id),
            start_time: start,
            end_time: start + chrono::Duration::hours(1),
            status: AppointmentStatus::Pending,
            location: None,
            notes: None,
        })
    }

    pub fn case(mut self, case_id: i64) -> Self {
        self.0.case_id = case_id;
        self
    }

    pub fn until(mut self, end: NaiveDateTime) -> Self {
        self.0.end_time = end;
        self
    }

    pub fn status(mut self, status: AppointmentStatus) -> Self {
        self.0.status = status;
        self
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.0.location = Some(Coord::new(lat, lng));
        self
    }

    pub fn build(self) -> Appointment {
        self.0
    }
}
