use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::channels::ChannelSet;
use crate::engines::SpectralIntegration;
use crate::error::{PhotolysisError, Result};
use crate::state::BottomUpInputs;

const ENGINE: &str = "spectral integration";

fn default_reference_temperature() -> f64 {
    298.0
}

/// Absorption cross-section and quantum yield of one photolysis channel.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChannelSpectrum {
    /// nm, strictly increasing
    pub wavelengths: Vec<f64>,
    /// cm2 at `reference_temperature`
    pub cross_section: Vec<f64>,
    /// Relative change of the cross-section per K
    #[serde(default)]
    pub temperature_coefficient: Option<Vec<f64>>,
    #[serde(default = "default_reference_temperature")]
    pub reference_temperature: f64,
    pub quantum_yield: Vec<f64>,
    /// Stern-Volmer quenching per mbar
    #[serde(default)]
    pub quenching: f64,
}

impl ChannelSpectrum {
    fn validate(&self, channel: &str) -> Result<()> {
        let n = self.wavelengths.len();
        if n < 2 {
            return Err(PhotolysisError::shape(format!("{channel} wavelengths"), 2, n));
        }
        if self.wavelengths.iter().any(|wl| !wl.is_finite()) {
            return Err(PhotolysisError::engine(
                ENGINE,
                format!("{channel} wavelengths must be finite"),
            ));
        }
        if self.wavelengths.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(PhotolysisError::engine(
                ENGINE,
                format!("{channel} wavelengths must be strictly increasing"),
            ));
        }
        if self.cross_section.len() != n {
            return Err(PhotolysisError::shape(
                format!("{channel} cross_section"),
                n,
                self.cross_section.len(),
            ));
        }
        if self.quantum_yield.len() != n {
            return Err(PhotolysisError::shape(
                format!("{channel} quantum_yield"),
                n,
                self.quantum_yield.len(),
            ));
        }
        if let Some(coefficient) = &self.temperature_coefficient
            && coefficient.len() != n
        {
            return Err(PhotolysisError::shape(
                format!("{channel} temperature_coefficient"),
                n,
                coefficient.len(),
            ));
        }
        Ok(())
    }
}

/// Linear interpolation of (x, y) onto `grid`, zero outside the tabulated range.
fn interp_onto(x: &[f64], y: &[f64], grid: &[f64]) -> Vec<f64> {
    let last = x.len() - 1;
    grid.iter()
        .map(|&wl| {
            if wl < x[0] || wl > x[last] {
                return 0.0;
            }
            let idx = x.partition_point(|&v| v <= wl).saturating_sub(1).min(last - 1);
            let ratio = (wl - x[idx]) / (x[idx + 1] - x[idx]);
            (1.0 - ratio) * y[idx] + ratio * y[idx + 1]
        })
        .collect()
}

/// Bottom-up J-values from a database of channel spectra.
#[derive(Debug, Clone, Default)]
pub struct SpectralIntegrator {
    channels: BTreeMap<String, ChannelSpectrum>,
}

impl SpectralIntegrator {
    pub fn new(channels: BTreeMap<String, ChannelSpectrum>) -> Result<Self> {
        for (channel, spectrum) in &channels {
            spectrum.validate(channel)?;
        }
        Ok(Self { channels })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let channels: BTreeMap<String, ChannelSpectrum> = serde_json::from_reader(reader)?;

        Self::new(channels)
    }

    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }
}

impl SpectralIntegration for SpectralIntegrator {
    fn integrate(&self, inputs: &BottomUpInputs<'_>) -> Result<ChannelSet> {
        let grid = inputs.flux.wavelengths();
        let points = inputs.flux.points();
        for (name, values) in [
            ("temperature", &inputs.temperature),
            ("pressure", &inputs.pressure),
        ] {
            if values.len() != points {
                return Err(PhotolysisError::shape(name, points, values.len()));
            }
        }

        let mut set = ChannelSet::new(points);
        for (channel, spectrum) in &self.channels {
            let sigma = interp_onto(&spectrum.wavelengths, &spectrum.cross_section, grid);
            let phi = interp_onto(&spectrum.wavelengths, &spectrum.quantum_yield, grid);
            let slope = spectrum
                .temperature_coefficient
                .as_ref()
                .map(|b| interp_onto(&spectrum.wavelengths, b, grid));

            let values: Vec<f64> = inputs
                .flux
                .spectra()
                .iter()
                .zip(inputs.temperature.iter().zip(&inputs.pressure))
                .map(|(flux, (&temperature, &pressure))| {
                    let dt = temperature - spectrum.reference_temperature;
                    let quench = 1.0 / (1.0 + spectrum.quenching * pressure);

                    let integrand: Vec<f64> = (0..grid.len())
                        .map(|k| {
                            let scale = slope.as_ref().map_or(1.0, |b| 1.0 + b[k] * dt);
                            (sigma[k] * scale).max(0.0) * phi[k] * quench * flux[k]
                        })
                        .collect();

                    // Trapezoid rule over the flux grid
                    grid.windows(2)
                        .zip(integrand.windows(2))
                        .map(|(wl, f)| 0.5 * (f[0] + f[1]) * (wl[1] - wl[0]))
                        .sum()
                })
                .collect();

            set.insert(channel.clone(), values)?;
        }

        Ok(set)
    }
}
