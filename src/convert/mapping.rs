//! Column header mapping for the solar system spreadsheet.

/// Number of leading spreadsheet columns (A through Z) that are exported.
pub const MAX_COLUMNS: usize = 26;

/// Abbreviated spreadsheet header to canonical CSV header, in sheet order.
pub const COLUMN_MAPPING: [(&str, &str); MAX_COLUMNS] = [
    ("Region", "region"),
    ("Body", "body"),
    ("Type", "type"),
    ("Atmo", "atmosphere"),
    ("Surface T", "surface_temperature"),
    ("AP", "aphelion_apogee"),
    ("PE", "perihelion_perogee"),
    ("SMA", "semi_major_axis"),
    ("EC", "eccentricity"),
    ("OP", "orbital_period"),
    ("MA", "mean_anomaly"),
    ("IN", "inclination"),
    ("LAN", "longitude_of_ascending_node"),
    ("APE", "argument_of_perihelion"),
    ("M", "mass"),
    ("D", "diameter"),
    ("R", "radius"),
    ("C", "circumference"),
    ("SG", "surface_gravity"),
    ("EV", "escape_velocity"),
    ("RP", "rotational_period"),
    ("AT", "axial_tilt"),
    ("TH", "total_hexes"),
    ("HE", "hexes_at_equator"),
    ("HP", "hexes_at_poles"),
    ("LB", "latitude_bands"),
];

/// Look up the canonical name for a source header.
///
/// Matching is exact: `"sma"` and `"SMA "` are not mapped.
pub fn canonical_name(source: &str) -> Option<&'static str> {
    COLUMN_MAPPING
        .iter()
        .find(|(from, _)| *from == source)
        .map(|(_, to)| *to)
}
