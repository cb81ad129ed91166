//! Caller-facing entry points: strategy selection followed by remapping.

use log::info;

use crate::channels::NamedRates;
use crate::engines::Engines;
use crate::error::Result;
use crate::remap::{MAPPING_TABLE, remap};
use crate::select::select;
use crate::state::AtmosphericState;
use crate::strategy::Strategy;

/// Named photolysis rates for `state` under `strategy`.
///
/// Every output of [`MAPPING_TABLE`] is present in the result, in table order.
pub fn photolysis_rates(
    state: &AtmosphericState,
    strategy: Strategy,
    engines: &Engines<'_>,
) -> Result<NamedRates> {
    let sources = select(state, strategy, engines)?;
    let rates = remap(sources.primary(), sources.auxiliary(), MAPPING_TABLE)?;
    info!(
        "computed {} photolysis rates at {} points with strategy {strategy}",
        rates.len(),
        rates.points()
    );
    Ok(rates)
}

/// Same as [`photolysis_rates`], with the strategy given as a caller flag.
///
/// `None` selects MCM. An unrecognized flag fails before any engine runs.
pub fn photolysis_rates_for_flag(
    state: &AtmosphericState,
    flag: Option<&str>,
    engines: &Engines<'_>,
) -> Result<NamedRates> {
    let strategy = Strategy::from_flag(flag)?;
    photolysis_rates(state, strategy, engines)
}
