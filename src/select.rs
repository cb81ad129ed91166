use log::debug;

use crate::channels::ChannelSet;
use crate::engines::Engines;
use crate::error::{PhotolysisError, Result};
use crate::state::{AtmosphericState, HybridInputs};
use crate::strategy::Strategy;

/// Reference atmosphere of the hybrid pass behind the MCM strategy.
pub const REFERENCE_ALTITUDE_M: f64 = 500.0;
pub const REFERENCE_OZONE_COLUMN_DU: f64 = 350.0;
pub const REFERENCE_ALBEDO: f64 = 0.01;

/// Raw channel sets feeding the remapper.
///
/// Strategies with a single engine pass share one set for both roles.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSources {
    primary: ChannelSet,
    auxiliary: Option<ChannelSet>,
}

impl ChannelSources {
    pub fn primary(&self) -> &ChannelSet {
        &self.primary
    }

    pub fn auxiliary(&self) -> &ChannelSet {
        self.auxiliary.as_ref().unwrap_or(&self.primary)
    }

    pub fn is_shared(&self) -> bool {
        self.auxiliary.is_none()
    }
}

/// Hybrid inputs at the reference atmosphere, broadcast to the shape of `sza`.
pub fn reference_atmosphere(sza: &[f64]) -> HybridInputs {
    HybridInputs {
        sza: sza.to_vec(),
        altitude: vec![REFERENCE_ALTITUDE_M; sza.len()],
        ozone_column: vec![REFERENCE_OZONE_COLUMN_DU; sza.len()],
        albedo: vec![REFERENCE_ALBEDO; sza.len()],
    }
}

/// Runs the engines `strategy` needs and returns the primary and auxiliary channel sets.
///
/// Required inputs are checked before any engine is invoked. Under
/// [`Strategy::Mcm`] the auxiliary pass always uses the reference atmosphere;
/// altitude, ozone and albedo in `state` are ignored.
pub fn select(
    state: &AtmosphericState,
    strategy: Strategy,
    engines: &Engines<'_>,
) -> Result<ChannelSources> {
    debug!("selecting photolysis strategy {strategy}");

    match strategy {
        Strategy::Mcm => {
            let inputs = state.mcm_inputs()?;
            let reference = reference_atmosphere(&inputs.sza);
            debug!(
                "hybrid pass at reference atmosphere: {REFERENCE_ALTITUDE_M} m, {REFERENCE_OZONE_COLUMN_DU} DU, albedo {REFERENCE_ALBEDO}"
            );

            let primary = engines.table.evaluate(&inputs.sza)?;
            let auxiliary = engines.reference.interpolate(&reference)?;
            if auxiliary.points() != primary.points() {
                return Err(PhotolysisError::shape(
                    "auxiliary channels",
                    primary.points(),
                    auxiliary.points(),
                ));
            }

            Ok(ChannelSources {
                primary,
                auxiliary: Some(auxiliary),
            })
        }
        Strategy::BottomUp => {
            let inputs = state.bottom_up_inputs()?;
            let primary = engines.spectral.integrate(&inputs)?;
            Ok(ChannelSources {
                primary,
                auxiliary: None,
            })
        }
        Strategy::Hybrid => {
            let inputs = state.hybrid_inputs()?;
            let primary = engines.reference.interpolate(&inputs)?;
            Ok(ChannelSources {
                primary,
                auxiliary: None,
            })
        }
    }
}
