use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::config::Site;

/// Solar position for one UTC timestamp at one site.
///
/// Angles are in degrees. The zenith angle is not clamped at the horizon:
/// night points report values above 90.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub zenith_angle_deg: f64,
    pub azimuth_angle_deg: f64,
    pub elevation_deg: f64,
    pub declination_deg: f64,
    pub hour_angle_deg: f64,
}

impl SolarPosition {
    /// # Arguments
    /// * `datetime` - UTC time
    /// * `site` - latitude and longitude in decimal degrees
    pub fn calculate(datetime: NaiveDateTime, site: &Site) -> Self {
        let day_of_year = datetime.ordinal() as f64;
        let hour = datetime.num_seconds_from_midnight() as f64 / 3600.0;

        // Local solar noon in UTC hours
        let solar_noon = 12.0 - site.longitude / 15.0;

        let declination = (23.45 * (360.0 * (284.0 + day_of_year) / 365.0).to_radians().sin())
            .to_radians();
        let latitude = site.latitude.to_radians();

        let hour_angle_deg = (solar_noon - hour) * 15.0;
        let hour_angle = hour_angle_deg.to_radians();

        let elevation = (latitude.sin() * declination.sin()
            + latitude.cos() * declination.cos() * hour_angle.cos())
        .asin();
        let azimuth = (declination.cos() * hour_angle.sin() / elevation.cos())
            .clamp(-1.0, 1.0)
            .asin();

        let elevation_deg = elevation.to_degrees();

        SolarPosition {
            zenith_angle_deg: 90.0 - elevation_deg,
            azimuth_angle_deg: azimuth.to_degrees(),
            elevation_deg,
            declination_deg: declination.to_degrees(),
            hour_angle_deg,
        }
    }

    pub fn is_daylight(&self) -> bool {
        self.zenith_angle_deg < 90.0
    }
}

/// Solar zenith angles of `datetimes` at `site`, in degrees.
pub fn zenith_angles(datetimes: &[NaiveDateTime], site: &Site) -> Vec<f64> {
    datetimes
        .iter()
        .map(|datetime| SolarPosition::calculate(*datetime, site).zenith_angle_deg)
        .collect()
}
