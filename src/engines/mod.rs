//! Engines producing numbered J-values.
//!
//! The selector only sees the three traits below; the structs in the
//! submodules are reference implementations of them.

pub mod bottom_up;
pub mod hybrid;
pub mod mcm;

pub use bottom_up::{ChannelSpectrum, SpectralIntegrator};
pub use hybrid::ReferenceLibrary;
pub use mcm::McmParameterization;

use crate::channels::ChannelSet;
use crate::error::Result;
use crate::state::{BottomUpInputs, HybridInputs};

/// Published parameterization of J-values as a function of solar zenith angle only.
pub trait TableParameterization: Sync {
    fn evaluate(&self, sza: &[f64]) -> Result<ChannelSet>;
}

/// Integration of cross-section x quantum yield x actinic flux over wavelength.
pub trait SpectralIntegration: Sync {
    fn integrate(&self, inputs: &BottomUpInputs<'_>) -> Result<ChannelSet>;
}

/// Interpolation in a precomputed library of reference-atmosphere J-values.
pub trait ReferenceSpectrumInterpolation: Sync {
    fn interpolate(&self, inputs: &HybridInputs) -> Result<ChannelSet>;
}

#[derive(Clone, Copy)]
pub struct Engines<'a> {
    pub table: &'a dyn TableParameterization,
    pub spectral: &'a dyn SpectralIntegration,
    pub reference: &'a dyn ReferenceSpectrumInterpolation,
}

impl<'a> Engines<'a> {
    pub fn new(
        table: &'a dyn TableParameterization,
        spectral: &'a dyn SpectralIntegration,
        reference: &'a dyn ReferenceSpectrumInterpolation,
    ) -> Self {
        Self {
            table,
            spectral,
            reference,
        }
    }
}

/// Recording engines for selector and pipeline tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::remap::{MAPPING_TABLE, Source};
    use std::sync::Mutex;

    /// Deterministic channel values: each channel gets a distinct offset per point.
    pub fn synthetic_set(channels: &[&str], points: usize, seed: f64) -> ChannelSet {
        let mut set = ChannelSet::new(points);
        for (c, channel) in channels.iter().enumerate() {
            let values = (0..points)
                .map(|p| seed * (c as f64 + 1.0) * 1e-5 + p as f64 * 1e-6)
                .collect();
            set.insert(*channel, values).unwrap();
        }
        set
    }

    pub fn channels_for(source: Source) -> Vec<&'static str> {
        let mut channels: Vec<&'static str> = MAPPING_TABLE
            .iter()
            .filter(|entry| entry.source == source)
            .flat_map(|entry| entry.terms.iter().map(|term| term.channel))
            .collect();
        channels.sort_unstable();
        channels.dedup();
        channels
    }

    pub fn all_channels() -> Vec<&'static str> {
        let mut channels = channels_for(Source::Primary);
        channels.extend(channels_for(Source::Auxiliary));
        channels
    }

    #[derive(Default)]
    pub struct RecordingTable {
        pub calls: Mutex<Vec<Vec<f64>>>,
    }

    impl TableParameterization for RecordingTable {
        fn evaluate(&self, sza: &[f64]) -> Result<ChannelSet> {
            self.calls.lock().unwrap().push(sza.to_vec());
            Ok(synthetic_set(&channels_for(Source::Primary), sza.len(), 1.0))
        }
    }

    #[derive(Default)]
    pub struct RecordingSpectral {
        pub calls: Mutex<Vec<(usize, Vec<f64>, Vec<f64>)>>,
    }

    impl SpectralIntegration for RecordingSpectral {
        fn integrate(&self, inputs: &BottomUpInputs<'_>) -> Result<ChannelSet> {
            self.calls.lock().unwrap().push((
                inputs.flux.points(),
                inputs.temperature.clone(),
                inputs.pressure.clone(),
            ));
            Ok(synthetic_set(&all_channels(), inputs.flux.points(), 2.0))
        }
    }

    #[derive(Default)]
    pub struct RecordingReference {
        pub calls: Mutex<Vec<HybridInputs>>,
    }

    impl ReferenceSpectrumInterpolation for RecordingReference {
        fn interpolate(&self, inputs: &HybridInputs) -> Result<ChannelSet> {
            self.calls.lock().unwrap().push(inputs.clone());
            Ok(synthetic_set(&all_channels(), inputs.points(), 3.0))
        }
    }

    #[derive(Default)]
    pub struct Recorders {
        pub table: RecordingTable,
        pub spectral: RecordingSpectral,
        pub reference: RecordingReference,
    }

    impl Recorders {
        pub fn engines(&self) -> Engines<'_> {
            Engines::new(&self.table, &self.spectral, &self.reference)
        }

        pub fn total_calls(&self) -> usize {
            self.table.calls.lock().unwrap().len()
                + self.spectral.calls.lock().unwrap().len()
                + self.reference.calls.lock().unwrap().len()
        }
    }
}
