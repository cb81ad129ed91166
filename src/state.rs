//! Atmospheric inputs for one photolysis call.
//!
//! Each field is either a scalar, broadcast to every point, or a series with
//! one value per simulation point. Only the fields a strategy needs are
//! validated; the others are ignored.

use crate::error::{PhotolysisError, Result};
use crate::strategy::Strategy;

#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    Scalar(f64),
    Series(Vec<f64>),
}

impl Profile {
    /// Length of a series, `None` for a scalar.
    pub fn len(&self) -> Option<usize> {
        match self {
            Profile::Scalar(_) => None,
            Profile::Series(values) => Some(values.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    pub fn resolve(&self, points: usize) -> Vec<f64> {
        match self {
            Profile::Scalar(value) => vec![*value; points],
            Profile::Series(values) => values.clone(),
        }
    }
}

impl From<f64> for Profile {
    fn from(value: f64) -> Self {
        Profile::Scalar(value)
    }
}

impl From<Vec<f64>> for Profile {
    fn from(values: Vec<f64>) -> Self {
        Profile::Series(values)
    }
}

impl From<&[f64]> for Profile {
    fn from(values: &[f64]) -> Self {
        Profile::Series(values.to_vec())
    }
}

/// Actinic flux spectra on a shared wavelength grid, one spectrum per point.
#[derive(Debug, Clone, PartialEq)]
pub struct ActinicFlux {
    wavelengths: Vec<f64>,
    spectra: Vec<Vec<f64>>,
}

impl ActinicFlux {
    /// # Parameters
    /// - `wavelengths`: strictly increasing grid in nm
    /// - `spectra`: photons cm-2 s-1 nm-1, each the length of `wavelengths`
    pub fn new(wavelengths: Vec<f64>, spectra: Vec<Vec<f64>>) -> Result<Self> {
        if wavelengths.len() < 2 {
            return Err(PhotolysisError::shape("flux wavelengths", 2, wavelengths.len()));
        }
        if wavelengths.iter().any(|wl| !wl.is_finite()) {
            return Err(PhotolysisError::engine(
                "spectral integration",
                "flux wavelengths must be finite",
            ));
        }
        if wavelengths.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(PhotolysisError::engine(
                "spectral integration",
                "flux wavelengths must be strictly increasing",
            ));
        }
        for (i, spectrum) in spectra.iter().enumerate() {
            if spectrum.len() != wavelengths.len() {
                return Err(PhotolysisError::shape(
                    format!("flux spectrum {i}"),
                    wavelengths.len(),
                    spectrum.len(),
                ));
            }
        }

        Ok(Self {
            wavelengths,
            spectra,
        })
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn spectra(&self) -> &[Vec<f64>] {
        &self.spectra
    }

    pub fn points(&self) -> usize {
        self.spectra.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtmosphericState {
    /// Solar zenith angle, degrees
    pub sza: Option<Profile>,
    /// Altitude, m
    pub altitude: Option<Profile>,
    /// Overhead ozone column, DU
    pub ozone_column: Option<Profile>,
    /// Surface albedo, 0-1
    pub albedo: Option<Profile>,
    /// Temperature, K
    pub temperature: Option<Profile>,
    /// Pressure, mbar
    pub pressure: Option<Profile>,
    pub flux: Option<ActinicFlux>,
}

/// Table parameterization inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct McmInputs {
    pub sza: Vec<f64>,
}

/// Reference-spectrum interpolation inputs, all the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct HybridInputs {
    pub sza: Vec<f64>,
    pub altitude: Vec<f64>,
    pub ozone_column: Vec<f64>,
    pub albedo: Vec<f64>,
}

impl HybridInputs {
    pub fn points(&self) -> usize {
        self.sza.len()
    }
}

/// Spectral integration inputs, temperature and pressure resolved to the flux point count.
#[derive(Debug, Clone, PartialEq)]
pub struct BottomUpInputs<'a> {
    pub flux: &'a ActinicFlux,
    pub temperature: Vec<f64>,
    pub pressure: Vec<f64>,
}

impl AtmosphericState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sza(mut self, sza: impl Into<Profile>) -> Self {
        self.sza = Some(sza.into());
        self
    }

    pub fn with_altitude(mut self, altitude: impl Into<Profile>) -> Self {
        self.altitude = Some(altitude.into());
        self
    }

    pub fn with_ozone_column(mut self, ozone_column: impl Into<Profile>) -> Self {
        self.ozone_column = Some(ozone_column.into());
        self
    }

    pub fn with_albedo(mut self, albedo: impl Into<Profile>) -> Self {
        self.albedo = Some(albedo.into());
        self
    }

    pub fn with_temperature(mut self, temperature: impl Into<Profile>) -> Self {
        self.temperature = Some(temperature.into());
        self
    }

    pub fn with_pressure(mut self, pressure: impl Into<Profile>) -> Self {
        self.pressure = Some(pressure.into());
        self
    }

    pub fn with_flux(mut self, flux: ActinicFlux) -> Self {
        self.flux = Some(flux);
        self
    }

    pub fn mcm_inputs(&self) -> Result<McmInputs> {
        let sza = required(&self.sza, "sza", Strategy::Mcm)?;
        let points = common_points(&[("sza", sza)], None)?;

        Ok(McmInputs {
            sza: sza.resolve(points),
        })
    }

    pub fn hybrid_inputs(&self) -> Result<HybridInputs> {
        let sza = required(&self.sza, "sza", Strategy::Hybrid)?;
        let altitude = required(&self.altitude, "altitude", Strategy::Hybrid)?;
        let ozone_column = required(&self.ozone_column, "ozone_column", Strategy::Hybrid)?;
        let albedo = required(&self.albedo, "albedo", Strategy::Hybrid)?;

        let points = common_points(
            &[
                ("sza", sza),
                ("altitude", altitude),
                ("ozone_column", ozone_column),
                ("albedo", albedo),
            ],
            None,
        )?;

        Ok(HybridInputs {
            sza: sza.resolve(points),
            altitude: altitude.resolve(points),
            ozone_column: ozone_column.resolve(points),
            albedo: albedo.resolve(points),
        })
    }

    pub fn bottom_up_inputs(&self) -> Result<BottomUpInputs<'_>> {
        let flux = self.flux.as_ref().ok_or(PhotolysisError::MissingInput {
            strategy: Strategy::BottomUp,
            field: "flux",
        })?;
        let temperature = required(&self.temperature, "temperature", Strategy::BottomUp)?;
        let pressure = required(&self.pressure, "pressure", Strategy::BottomUp)?;

        let points = common_points(
            &[("temperature", temperature), ("pressure", pressure)],
            Some(("flux", flux.points())),
        )?;

        Ok(BottomUpInputs {
            flux,
            temperature: temperature.resolve(points),
            pressure: pressure.resolve(points),
        })
    }
}

fn required<'a>(
    field: &'a Option<Profile>,
    name: &'static str,
    strategy: Strategy,
) -> Result<&'a Profile> {
    field.as_ref().ok_or(PhotolysisError::MissingInput {
        strategy,
        field: name,
    })
}

// The first series (or the anchor) fixes the point count; scalars alone give one point.
fn common_points(fields: &[(&str, &Profile)], anchor: Option<(&str, usize)>) -> Result<usize> {
    let mut expected = anchor.map(|(_, points)| points);

    for (name, profile) in fields {
        let Some(found) = profile.len() else {
            continue;
        };
        match expected {
            None => expected = Some(found),
            Some(points) if points != found => {
                return Err(PhotolysisError::shape(*name, points, found));
            }
            Some(_) => {}
        }
    }

    Ok(expected.unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_broadcast_to_series_length() {
        let state = AtmosphericState::new()
            .with_sza(vec![0.0, 30.0, 60.0])
            .with_altitude(1000.0)
            .with_ozone_column(vec![300.0, 310.0, 320.0])
            .with_albedo(0.1);

        let inputs = state.hybrid_inputs().unwrap();
        assert_eq!(inputs.points(), 3);
        assert_eq!(inputs.altitude, vec![1000.0; 3]);
        assert_eq!(inputs.albedo, vec![0.1; 3]);
        assert_eq!(inputs.ozone_column, vec![300.0, 310.0, 320.0]);
    }

    #[test]
    fn test_all_scalars_give_one_point() {
        let state = AtmosphericState::new().with_sza(45.0);
        let inputs = state.mcm_inputs().unwrap();
        assert_eq!(inputs.sza, vec![45.0]);
    }

    #[test]
    fn test_series_length_mismatch() {
        let state = AtmosphericState::new()
            .with_sza(vec![0.0, 30.0, 60.0])
            .with_altitude(vec![0.0, 500.0])
            .with_ozone_column(350.0)
            .with_albedo(0.01);

        let err = state.hybrid_inputs().unwrap_err();
        match err {
            PhotolysisError::ShapeMismatch {
                field,
                expected,
                found,
            } => {
                assert_eq!(field, "altitude");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_input_names_field() {
        let state = AtmosphericState::new().with_sza(vec![10.0]).with_albedo(0.2);

        let err = state.hybrid_inputs().unwrap_err();
        assert!(matches!(
            err,
            PhotolysisError::MissingInput {
                strategy: Strategy::Hybrid,
                field: "altitude"
            }
        ));
        assert!(err.to_string().contains("'altitude'"));

        let err = AtmosphericState::new().mcm_inputs().unwrap_err();
        assert!(matches!(
            err,
            PhotolysisError::MissingInput {
                strategy: Strategy::Mcm,
                field: "sza"
            }
        ));
    }

    #[test]
    fn test_bottom_up_follows_flux_points() {
        let flux = ActinicFlux::new(
            vec![300.0, 310.0, 320.0],
            vec![vec![1.0, 2.0, 3.0], vec![2.0, 3.0, 4.0]],
        )
        .unwrap();
        let state = AtmosphericState::new()
            .with_flux(flux)
            .with_temperature(298.0)
            .with_pressure(vec![1013.0, 900.0]);

        let inputs = state.bottom_up_inputs().unwrap();
        assert_eq!(inputs.temperature, vec![298.0, 298.0]);
        assert_eq!(inputs.pressure, vec![1013.0, 900.0]);

        let bad = state.clone().with_pressure(vec![1013.0]);
        assert!(matches!(
            bad.bottom_up_inputs().unwrap_err(),
            PhotolysisError::ShapeMismatch { expected: 2, found: 1, .. }
        ));

        let no_flux = AtmosphericState::new()
            .with_temperature(298.0)
            .with_pressure(1013.0);
        assert!(matches!(
            no_flux.bottom_up_inputs().unwrap_err(),
            PhotolysisError::MissingInput { field: "flux", .. }
        ));
    }

    #[test]
    fn test_flux_validation() {
        assert!(ActinicFlux::new(vec![300.0], vec![]).is_err());
        assert!(ActinicFlux::new(vec![310.0, 300.0], vec![]).is_err());
        assert!(ActinicFlux::new(vec![300.0, 310.0], vec![vec![1.0]]).is_err());
        assert!(ActinicFlux::new(vec![f64::NAN, 310.0], vec![]).is_err());
        assert!(ActinicFlux::new(vec![300.0, f64::INFINITY], vec![]).is_err());
    }
}
