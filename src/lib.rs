//! Photolysis rate coefficients for a chemical mechanism.
//!
//! One of three strategies computes numbered J-values from an
//! [`AtmosphericState`]; the remapper then turns them into the named rates
//! listed in [`MAPPING_TABLE`].

pub mod channels;
pub mod config;
pub mod date_gen;
pub mod engines;
pub mod error;
pub mod pipeline;
pub mod remap;
pub mod select;
pub mod solar;
pub mod state;
pub mod strategy;

pub use channels::{ChannelSet, NamedRates};
pub use engines::Engines;
pub use error::{PhotolysisError, Result};
pub use pipeline::{photolysis_rates, photolysis_rates_for_flag};
pub use remap::MAPPING_TABLE;
pub use select::{ChannelSources, select};
pub use state::{ActinicFlux, AtmosphericState, Profile};
pub use strategy::Strategy;
