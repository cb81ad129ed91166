use crate::config::ConfigError;

/// Location of the simulated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    /// Decimal degrees, north positive
    pub latitude: f64,
    /// Decimal degrees, east positive
    pub longitude: f64,
    /// m above sea level
    pub altitude: f64,
}

impl Site {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self, ConfigError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ConfigError::Site(
                "Latitude must be between -90 and 90".to_string(),
            ));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ConfigError::Site(
                "Longitude must be between -180 and 180".to_string(),
            ));
        }

        if altitude.is_nan() || altitude < 0.0 {
            return Err(ConfigError::Site("Altitude must be >= 0 m".to_string()));
        }

        Ok(Site {
            latitude,
            longitude,
            altitude,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_site_coords_are_within_ranges() {
        assert!(Site::new(45.5, -73.6, 30.0).is_ok());
        assert!(Site::new(-90.0, 180.0, 0.0).is_ok());

        // Latitude out of range
        assert!(Site::new(-100.0, 0.0, 0.0).is_err());
        assert!(Site::new(91.0, 0.0, 0.0).is_err());

        // Longitude out of range
        assert!(Site::new(0.0, -200.0, 0.0).is_err());
        assert!(Site::new(0.0, 180.5, 0.0).is_err());

        // Below sea level or undefined
        assert!(Site::new(0.0, 0.0, -10.0).is_err());
        assert!(Site::new(0.0, 0.0, f64::NAN).is_err());
    }
}
