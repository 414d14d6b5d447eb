//! Real Beirut-area locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. The original deployment covered
//! greater Beirut, so distances between these points are the ones the
//! dispatch desk actually sees (hundreds of meters within a district, a few
//! kilometers between districts).

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

// ============================================================================
// Central districts (dense, good for clustering scenarios)
// ============================================================================

pub const HAMRA: Location = Location::new("Hamra", 33.8959, 35.4797);
pub const VERDUN: Location = Location::new("Verdun", 33.8791, 35.4884);
pub const ACHRAFIEH: Location = Location::new("Achrafieh", 33.8869, 35.5131);
pub const GEMMAYZE: Location = Location::new("Gemmayze", 33.8956, 35.5147);
pub const BADARO: Location = Location::new("Badaro", 33.8698, 35.5157);

// ============================================================================
// Eastern suburbs
// ============================================================================

pub const BOURJ_HAMMOUD: Location = Location::new("Bourj Hammoud", 33.8936, 35.5419);
pub const SIN_EL_FIL: Location = Location::new("Sin el Fil", 33.8745, 35.5385);
pub const DEKWANEH: Location = Location::new("Dekwaneh", 33.8672, 35.5488);
pub const JDEIDEH: Location = Location::new("Jdeideh", 33.8926, 35.5655);

// ============================================================================
// Southern suburbs and outliers
// ============================================================================

pub const CHIYAH: Location = Location::new("Chiyah", 33.8500, 35.5140);
pub const HADATH: Location = Location::new("Hadath", 33.8320, 35.5090);
pub const AIRPORT: Location = Location::new("Beirut Airport", 33.8209, 35.4884);
pub const JOUNIEH: Location = Location::new("Jounieh", 33.9808, 35.6178);
pub const TRIPOLI: Location = Location::new("Tripoli", 34.4367, 35.8497);
