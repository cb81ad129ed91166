use std::collections::BTreeMap;
use std::fmt;

use crate::error::{PhotolysisError, Result};

/// Numbered J-values produced by one engine invocation, keyed by channel id ("J1", "Jn14").
///
/// Every channel holds one value per simulation point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelSet {
    points: usize,
    channels: BTreeMap<String, Vec<f64>>,
}

impl ChannelSet {
    pub fn new(points: usize) -> Self {
        Self {
            points,
            channels: BTreeMap::new(),
        }
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn insert(&mut self, channel: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let channel = channel.into();
        if values.len() != self.points {
            return Err(PhotolysisError::shape(channel, self.points, values.len()));
        }
        self.channels.insert(channel, values);
        Ok(())
    }

    pub fn get(&self, channel: &str) -> Option<&[f64]> {
        self.channels.get(channel).map(Vec::as_slice)
    }

    pub fn contains(&self, channel: &str) -> bool {
        self.channels.contains_key(channel)
    }

    pub fn channel_ids(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

/// Named photolysis rates in mapping-table order.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRates {
    points: usize,
    rates: Vec<(&'static str, Vec<f64>)>,
}

impl NamedRates {
    pub(crate) fn with_capacity(points: usize, capacity: usize) -> Self {
        Self {
            points,
            rates: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, values: Vec<f64>) {
        self.rates.push((name, values));
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.rates
            .iter()
            .find(|(rate, _)| *rate == name)
            .map(|(_, values)| values.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rates.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[f64])> {
        self.rates
            .iter()
            .map(|(name, values)| (*name, values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl fmt::Display for NamedRates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} rates over {} points", self.rates.len(), self.points)?;
        for (name, values) in &self.rates {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = if values.is_empty() {
                f64::NAN
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            };
            writeln!(
                f,
                "  {name:<14} min: {min:.4e}  max: {max:.4e}  mean: {mean:.4e} s-1"
            )?;
        }
        Ok(())
    }
}
