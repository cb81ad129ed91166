use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;
use std::fmt;
use std::str::FromStr;

use crate::error::PhotolysisError;

/// How the numbered J-values are computed before remapping.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// MCM table parameterization, gaps filled by a reference-atmosphere hybrid pass.
    #[default]
    Mcm,
    /// Spectral integration over a supplied actinic flux.
    BottomUp,
    /// Interpolation in a library of reference-atmosphere spectra.
    Hybrid,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Mcm, Strategy::BottomUp, Strategy::Hybrid];

    pub fn code(self) -> u8 {
        match self {
            Strategy::Mcm => 0,
            Strategy::BottomUp => 1,
            Strategy::Hybrid => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Mcm => "MCM",
            Strategy::BottomUp => "BOTTOMUP",
            Strategy::Hybrid => "HYBRID",
        }
    }

    /// Resolves an optional caller flag, defaulting to [`Strategy::Mcm`].
    pub fn from_flag(flag: Option<&str>) -> Result<Self, PhotolysisError> {
        flag.map_or(Ok(Strategy::default()), |flag| flag.parse())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<i64> for Strategy {
    type Error = PhotolysisError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Strategy::Mcm),
            1 => Ok(Strategy::BottomUp),
            2 => Ok(Strategy::Hybrid),
            _ => Err(PhotolysisError::InvalidStrategy {
                value: code.to_string(),
            }),
        }
    }
}

// Accepts the legacy numeric codes as strings too, so "0" and "MCM" resolve alike.
impl FromStr for Strategy {
    type Err = PhotolysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Strategy::try_from(code);
        }

        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PhotolysisError::InvalidStrategy {
                value: s.to_string(),
            })
    }
}

impl<'de> Deserialize<'de> for Strategy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum StrategyHelper {
            Code(i64),
            Name(String),
        }

        match StrategyHelper::deserialize(deserializer)? {
            StrategyHelper::Code(code) => Strategy::try_from(code).map_err(D::Error::custom),
            StrategyHelper::Name(name) => name.parse().map_err(D::Error::custom),
        }
    }
}
