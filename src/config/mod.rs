use chrono::{Duration, Months, NaiveDate, NaiveDateTime};

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::select::{REFERENCE_ALBEDO, REFERENCE_OZONE_COLUMN_DU};
use crate::solar::zenith_angles;
use crate::state::AtmosphericState;
use crate::strategy::Strategy;

pub mod error;
pub use error::ConfigError;

pub mod site;
pub use site::Site;

pub mod timestep;
pub use timestep::TimeStep;

const VALID_HOURLY_INCREMENTS: [u8; 7] = [1, 2, 3, 4, 6, 8, 12];

/// Run configuration: time range, site and photolysis options.
#[derive(Debug, Clone)]
pub struct Config {
    start_date: NaiveDate,
    end_date: NaiveDate,
    frequency: TimeStep,
    hourly_increment: u8,
    site: Site,
    strategy: Strategy,
    ozone_column: f64,
    albedo: f64,
    reference_library: Option<PathBuf>,
}

// Dates must parse and be in order, the hourly increment must divide a day
// and the site and surface values must be physical.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            start_date: String,
            end_date: String,
            frequency: TimeStep,
            hourly_increment: u8,
            site: SiteHelper,
            #[serde(default)]
            strategy: Strategy,
            ozone_column: Option<f64>,
            albedo: Option<f64>,
            reference_library: Option<PathBuf>,
        }

        #[derive(Deserialize)]
        struct SiteHelper {
            latitude: f64,
            longitude: f64,
            #[serde(default)]
            altitude: f64,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        let start_date = NaiveDate::parse_from_str(&helper.start_date, "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("Invalid start_date format: {}", e)))?;

        let end_date = NaiveDate::parse_from_str(&helper.end_date, "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("Invalid end_date format: {}", e)))?;

        let site = Site::new(
            helper.site.latitude,
            helper.site.longitude,
            helper.site.altitude,
        )
        .map_err(D::Error::custom)?;

        let mut config = Config::new(
            start_date,
            end_date,
            helper.frequency,
            helper.hourly_increment,
            site,
        )
        .map_err(D::Error::custom)?
        .with_strategy(helper.strategy)
        .map_err(D::Error::custom)?;

        if let Some(ozone_column) = helper.ozone_column {
            config = config
                .with_ozone_column(ozone_column)
                .map_err(D::Error::custom)?;
        }
        if let Some(albedo) = helper.albedo {
            config = config.with_albedo(albedo).map_err(D::Error::custom)?;
        }
        config.reference_library = helper.reference_library;

        Ok(config)
    }
}

impl Config {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        frequency: TimeStep,
        hourly_increment: u8,
        site: Site,
    ) -> Result<Self, ConfigError> {
        if start_date > end_date {
            return Err(ConfigError::DateOrder);
        }

        if !VALID_HOURLY_INCREMENTS.contains(&hourly_increment) {
            return Err(ConfigError::HourlyIncrement);
        }

        Ok(Self {
            start_date,
            end_date,
            frequency,
            hourly_increment,
            site,
            strategy: Strategy::default(),
            ozone_column: REFERENCE_OZONE_COLUMN_DU,
            albedo: REFERENCE_ALBEDO,
            reference_library: None,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader)?;

        Ok(config)
    }

    /// Only strategies driven by solar geometry and site values can run from a config.
    pub fn with_strategy(mut self, strategy: Strategy) -> Result<Self, ConfigError> {
        if strategy == Strategy::BottomUp {
            return Err(ConfigError::UnsupportedStrategy(strategy));
        }
        self.strategy = strategy;
        Ok(self)
    }

    pub fn with_ozone_column(mut self, ozone_column: f64) -> Result<Self, ConfigError> {
        if !(ozone_column.is_finite() && ozone_column > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "ozone_column",
                expected: "a positive number of DU",
                value: ozone_column,
            });
        }
        self.ozone_column = ozone_column;
        Ok(self)
    }

    pub fn with_albedo(mut self, albedo: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&albedo) {
            return Err(ConfigError::OutOfRange {
                field: "albedo",
                expected: "between 0 and 1",
                value: albedo,
            });
        }
        self.albedo = albedo;
        Ok(self)
    }

    pub fn hourly_increment(&self) -> u8 {
        self.hourly_increment
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn reference_library(&self) -> Option<&Path> {
        self.reference_library.as_deref()
    }

    /// Dates from `start_date` to `end_date` inclusive, stepped by `frequency`.
    pub fn dates(&self) -> Dates {
        Dates {
            current: Some(self.start_date),
            end_date: self.end_date,
            frequency: self.frequency,
        }
    }

    /// State for the selector: SZA at each timestamp plus the site's altitude,
    /// ozone column and albedo.
    pub fn atmospheric_state(&self, datetimes: &[NaiveDateTime]) -> AtmosphericState {
        AtmosphericState::new()
            .with_sza(zenith_angles(datetimes, &self.site))
            .with_altitude(self.site.altitude)
            .with_ozone_column(self.ozone_column)
            .with_albedo(self.albedo)
    }
}

#[derive(Debug, Clone)]
pub struct Dates {
    current: Option<NaiveDate>,
    end_date: NaiveDate,
    frequency: TimeStep,
}

fn increment_date(current_date: NaiveDate, frequency: TimeStep) -> Option<NaiveDate> {
    match frequency {
        TimeStep::Daily => current_date.checked_add_signed(Duration::days(1)),
        TimeStep::Weekly => current_date.checked_add_signed(Duration::weeks(1)),
        TimeStep::Monthly => current_date.checked_add_months(Months::new(1)),
    }
}

impl Iterator for Dates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current_date = self.current.filter(|date| *date <= self.end_date)?;
        self.current = increment_date(current_date, self.frequency);
        Some(current_date)
    }
}
