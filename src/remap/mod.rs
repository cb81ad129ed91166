//! Remapping of numbered engine channels onto named mechanism rates.

use log::trace;

use crate::channels::{ChannelSet, NamedRates};
use crate::error::{PhotolysisError, Result};

pub mod table;

pub use table::MAPPING_TABLE;

/// Which raw channel set an entry draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Result of the selected strategy.
    Primary,
    /// Hybrid evaluation, for rates the primary strategy cannot produce.
    Auxiliary,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub channel: &'static str,
    pub coefficient: f64,
}

/// One named rate: the weighted sum of its terms drawn from `source`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMappingEntry {
    pub output: &'static str,
    pub source: Source,
    pub terms: &'static [Term],
}

impl ChannelMappingEntry {
    pub fn evaluate(&self, primary: &ChannelSet, auxiliary: &ChannelSet) -> Result<Vec<f64>> {
        let set = match self.source {
            Source::Primary => primary,
            Source::Auxiliary => auxiliary,
        };

        let mut total: Option<Vec<f64>> = None;
        for term in self.terms {
            let values = set
                .get(term.channel)
                .ok_or_else(|| PhotolysisError::UnknownChannel {
                    channel: term.channel.to_string(),
                    output: self.output,
                })?;

            match total.as_mut() {
                None => total = Some(values.iter().map(|v| term.coefficient * v).collect()),
                // A ChannelSet holds one length for all channels.
                Some(acc) => {
                    for (a, v) in acc.iter_mut().zip(values) {
                        *a += term.coefficient * v;
                    }
                }
            }
        }

        total.ok_or(PhotolysisError::EmptyMappingEntry {
            output: self.output,
        })
    }
}

/// Evaluates every entry of `table` in declaration order.
///
/// Fails on the first entry whose channel is missing from its source set;
/// no partial result is returned.
pub fn remap(
    primary: &ChannelSet,
    auxiliary: &ChannelSet,
    table: &[ChannelMappingEntry],
) -> Result<NamedRates> {
    let mut rates = NamedRates::with_capacity(primary.points(), table.len());

    for entry in table {
        let values = entry.evaluate(primary, auxiliary)?;
        trace!(
            "{} <- {:?} {:?}",
            entry.output,
            entry.source,
            entry
                .terms
                .iter()
                .map(|term| (term.channel, term.coefficient))
                .collect::<Vec<_>>()
        );
        rates.push(entry.output, values);
    }

    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::testing::{all_channels, channels_for, synthetic_set};

    fn set_from(pairs: &[(&str, Vec<f64>)]) -> ChannelSet {
        let points = pairs.first().map_or(0, |(_, values)| values.len());
        let mut set = ChannelSet::new(points);
        for (channel, values) in pairs {
            set.insert(*channel, values.clone()).unwrap();
        }
        set
    }

    fn output(name: &str) -> &'static ChannelMappingEntry {
        MAPPING_TABLE
            .iter()
            .find(|entry| entry.output == name)
            .unwrap()
    }

    #[test]
    fn test_sum_entries_are_elementwise_sums() {
        let inputs = [
            vec![0.0, 0.0, 0.0],
            vec![1.5e-6, 2.5e-5, 3.0e-4],
            vec![1.0e300, 5.0e299, 1.0e-300],
        ];

        for a in &inputs {
            for b in &inputs {
                let primary = set_from(&[
                    ("J18", a.clone()),
                    ("J19", b.clone()),
                    ("J23", b.clone()),
                    ("J24", a.clone()),
                    ("J31", a.clone()),
                    ("J32", b.clone()),
                ]);
                let auxiliary = ChannelSet::new(3);

                let macr = output("JMACR").evaluate(&primary, &auxiliary).unwrap();
                let mvk = output("JMVK").evaluate(&primary, &auxiliary).unwrap();
                let glyx = output("JGLYX").evaluate(&primary, &auxiliary).unwrap();

                for i in 0..3 {
                    assert_eq!(macr[i], a[i] + b[i]);
                    assert_eq!(mvk[i], b[i] + a[i]);
                    assert_eq!(glyx[i], a[i] + b[i]);
                }
            }
        }
    }

    #[test]
    fn test_scaled_nitrates_follow_reference_channel() {
        let reference = vec![0.0, 3.2e-7, 1.0e-6, 4.0e-5];
        let auxiliary = set_from(&[("Jn14", reference.clone())]);
        let primary = ChannelSet::new(4);

        for (name, factor) in [("JIHN1", 1.0), ("JIHN2", 4.3), ("JIHN3", 1.6), ("JIHN4", 10.0)] {
            let values = output(name).evaluate(&primary, &auxiliary).unwrap();
            for (value, r) in values.iter().zip(&reference) {
                assert_eq!(*value, factor * r, "{name}");
            }
        }
    }

    #[test]
    fn test_identity_entry_copies_channel() {
        let primary = set_from(&[("J4", vec![8.1e-3, 0.0])]);
        let values = output("JNO2")
            .evaluate(&primary, &ChannelSet::new(2))
            .unwrap();
        assert_eq!(values, vec![8.1e-3, 0.0]);
    }

    #[test]
    fn test_auxiliary_entries_ignore_primary() {
        let primary = set_from(&[("Jn12", vec![9.9])]);
        let auxiliary = set_from(&[("Jn12", vec![1.0e-3]), ("Jn1", vec![2.0]), ("Jn2", vec![0.5])]);

        let brno3 = output("JBrNO3_Br").evaluate(&primary, &auxiliary).unwrap();
        assert_eq!(brno3, vec![1.0e-3]);

        let hno4 = output("JHNO4").evaluate(&primary, &auxiliary).unwrap();
        assert_eq!(hno4, vec![2.5]);
    }

    #[test]
    fn test_unknown_channel_names_channel_and_output() {
        let mut primary = synthetic_set(&channels_for(Source::Primary), 2, 1.0);
        let auxiliary = synthetic_set(&channels_for(Source::Auxiliary), 2, 1.0);
        assert!(remap(&primary, &auxiliary, MAPPING_TABLE).is_ok());

        primary = synthetic_set(
            &channels_for(Source::Primary)
                .into_iter()
                .filter(|channel| *channel != "J19")
                .collect::<Vec<_>>(),
            2,
            1.0,
        );

        let err = remap(&primary, &auxiliary, MAPPING_TABLE).unwrap_err();
        match &err {
            PhotolysisError::UnknownChannel { channel, output } => {
                assert_eq!(channel, "J19");
                assert_eq!(*output, "JMACR");
            }
            other => panic!("unexpected error: {other}"),
        }
        let message = err.to_string();
        assert!(message.contains("J19") && message.contains("JMACR"), "{message}");
    }

    #[test]
    fn test_entry_without_terms_is_a_table_error() {
        let entry = ChannelMappingEntry {
            output: "JEMPTY",
            source: Source::Primary,
            terms: &[],
        };
        let set = synthetic_set(&all_channels(), 2, 1.0);

        let err = remap(&set, &set, &[entry]).unwrap_err();
        assert!(matches!(
            err,
            PhotolysisError::EmptyMappingEntry { output: "JEMPTY" }
        ));
        assert!(err.to_string().contains("JEMPTY"), "{err}");
    }

    #[test]
    fn test_missing_channel_is_not_read_from_other_source() {
        // Jn14 present only in the primary set must not satisfy an auxiliary entry.
        let primary = set_from(&[("Jn14", vec![1.0])]);
        let auxiliary = ChannelSet::new(1);
        let err = output("JIHN1").evaluate(&primary, &auxiliary).unwrap_err();
        assert!(matches!(
            err,
            PhotolysisError::UnknownChannel { output: "JIHN1", .. }
        ));
    }

    #[test]
    fn test_remap_preserves_table_order() {
        let set = synthetic_set(&all_channels(), 1, 1.0);
        let rates = remap(&set, &set, MAPPING_TABLE).unwrap();

        let names: Vec<&str> = rates.names().collect();
        let expected: Vec<&str> = MAPPING_TABLE.iter().map(|entry| entry.output).collect();
        assert_eq!(names, expected);
    }
}
