use crate::format::{group_decimal, group_digits};

/// Descriptive facts about the body shown in the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialBodyInfo {
    pub name: &'static str,
    /// Classification, e.g. "Planet"
    pub kind: &'static str,
    pub details: &'static str,
    /// Distance from the Sun in km
    pub distance_km: u64,
    pub circumference_km: u64,
    /// Days per orbit
    pub day_count: u32,
    pub rotation_speed_kmh: f64,
    /// Mean surface temperature in °C
    pub temperature_c: f64,
    pub surface_area_km2: u64,
}

pub const EARTH: CelestialBodyInfo = CelestialBodyInfo {
    name: "Earth",
    kind: "Planet",
    details: "Earth is the third planet from the Sun and the only astronomical object known to harbor life. \
While large amounts of water can be found throughout the Solar System, only Earth sustains liquid surface water. \
About 71% of Earth's surface is made up of the ocean, dwarfing Earth's polar ice, lakes and rivers. \
The remaining 29% of Earth's surface is land, consisting of continents and islands. \
Earth's surface layer is formed of several slowly moving tectonic plates, interacting to produce mountain ranges, volcanoes and earthquakes. \
Earth's liquid outer core generates the magnetic field that shapes Earth's magnetosphere, deflecting destructive solar winds.",
    distance_km: 149_597_870_700,
    circumference_km: 40_075,
    day_count: 365,
    rotation_speed_kmh: 1674.4,
    temperature_c: 14.7,
    surface_area_km2: 510_100_000,
};

impl CelestialBodyInfo {
    /// Labelled, display-formatted figures in panel order
    pub fn facts(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Distance From the Sun", format!("{} KM", group_digits(self.distance_km))),
            ("Circumference", format!("{} KM", group_digits(self.circumference_km))),
            ("Day Count", self.day_count.to_string()),
            (
                "Rotation Speed",
                format!("{} KM/H", group_decimal(self.rotation_speed_kmh, 1)),
            ),
            ("Temperature", format!("{} DEG C", group_decimal(self.temperature_c, 1))),
            ("Surface Area", format!("{} SQ KM", group_digits(self.surface_area_km2))),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earth_facts() {
        let facts = EARTH.facts();
        assert_eq!(facts.len(), 6);
        assert_eq!(facts[0], ("Distance From the Sun", "149.597.870.700 KM".to_string()));
        assert_eq!(facts[1].1, "40.075 KM");
        assert_eq!(facts[2].1, "365");
        assert_eq!(facts[3].1, "1.674,4 KM/H");
        assert_eq!(facts[4].1, "14,7 DEG C");
        assert_eq!(facts[5].1, "510.100.000 SQ KM");
    }

    #[test]
    fn test_details_has_no_line_breaks() {
        assert!(!EARTH.details.contains('\n'));
        assert!(EARTH.details.starts_with("Earth is the third planet"));
    }
}
