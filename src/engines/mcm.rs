//! MCM v3.3.1 photolysis parameterization.
//!
//! J = l * cos(χ)^m * exp(-n * sec(χ)), with χ the solar zenith angle.
//! Parameters are fitted to clear-sky two-stream calculations at 0.5 km,
//! 350 DU ozone and 0.1 albedo (Saunders et al., 2003; Jenkin et al., 1997).

use crate::channels::ChannelSet;
use crate::engines::TableParameterization;
use crate::error::Result;

/// (channel, l [s-1], m, n)
const MCM_PARAMETERS: [(&str, f64, f64, f64); 35] = [
    ("J1", 6.073e-05, 1.743, 0.474),
    ("J2", 4.775e-04, 0.298, 0.080),
    ("J3", 1.041e-05, 0.723, 0.279),
    ("J4", 1.165e-02, 0.244, 0.267),
    ("J5", 2.485e-02, 0.168, 0.108),
    ("J6", 1.747e-01, 0.155, 0.125),
    ("J7", 2.644e-03, 0.261, 0.288),
    ("J8", 9.312e-07, 1.230, 0.307),
    ("J11", 4.642e-05, 0.762, 0.353),
    ("J12", 6.853e-05, 0.477, 0.323),
    ("J13", 7.344e-06, 1.202, 0.417),
    ("J14", 2.879e-05, 1.067, 0.358),
    ("J15", 2.792e-05, 0.805, 0.338),
    ("J16", 1.675e-05, 0.805, 0.338),
    ("J17", 7.914e-05, 0.764, 0.364),
    ("J18", 1.482e-06, 0.396, 0.298),
    ("J19", 1.482e-06, 0.396, 0.298),
    ("J20", 7.600e-04, 0.396, 0.298),
    ("J21", 7.992e-07, 1.578, 0.271),
    ("J22", 5.804e-06, 1.092, 0.377),
    ("J23", 1.836e-05, 0.395, 0.296),
    ("J24", 1.836e-05, 0.395, 0.296),
    ("J31", 6.845e-05, 0.130, 0.201),
    ("J32", 1.032e-05, 0.130, 0.201),
    ("J33", 3.802e-05, 0.644, 0.312),
    ("J34", 1.537e-04, 0.170, 0.208),
    ("J35", 3.326e-04, 0.148, 0.215),
    ("J41", 7.649e-06, 0.682, 0.279),
    ("J51", 1.588e-06, 1.154, 0.318),
    ("J52", 1.907e-06, 1.244, 0.335),
    ("J53", 2.485e-06, 1.196, 0.328),
    ("J54", 4.095e-06, 1.111, 0.316),
    ("J55", 1.135e-05, 0.974, 0.309),
    ("J56", 4.365e-05, 1.089, 0.323),
    ("J57", 3.363e-06, 1.296, 0.322),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct McmParameterization;

impl McmParameterization {
    pub fn channels() -> impl Iterator<Item = &'static str> {
        MCM_PARAMETERS.iter().map(|(channel, ..)| *channel)
    }

    fn rate(sza_deg: f64, l: f64, m: f64, n: f64) -> f64 {
        if sza_deg >= 90.0 {
            return 0.0;
        }
        let cos_sza = sza_deg.to_radians().cos();
        l * cos_sza.powf(m) * (-n / cos_sza).exp()
    }
}

impl TableParameterization for McmParameterization {
    fn evaluate(&self, sza: &[f64]) -> Result<ChannelSet> {
        let mut set = ChannelSet::new(sza.len());
        for (channel, l, m, n) in MCM_PARAMETERS {
            let values = sza.iter().map(|&x| Self::rate(x, l, m, n)).collect();
            set.insert(channel, values)?;
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overhead_sun_matches_formula() {
        let set = McmParameterization.evaluate(&[0.0]).unwrap();
        let jno2 = set.get("J4").unwrap()[0];
        let expected = 1.165e-02 * (-0.267_f64).exp();
        assert!((jno2 - expected).abs() < 1e-12, "{jno2}");
    }

    #[test]
    fn test_rates_decrease_with_zenith_angle() {
        let set = McmParameterization
            .evaluate(&[0.0, 30.0, 60.0, 85.0])
            .unwrap();
        for channel in McmParameterization::channels() {
            let values = set.get(channel).unwrap();
            assert!(
                values.windows(2).all(|pair| pair[1] < pair[0]),
                "{channel}: {values:?}"
            );
        }
    }

    #[test]
    fn test_night_is_zero() {
        let set = McmParameterization.evaluate(&[90.0, 120.0]).unwrap();
        for channel in McmParameterization::channels() {
            assert_eq!(set.get(channel).unwrap(), &[0.0, 0.0]);
        }
    }

    #[test]
    fn test_empty_input() {
        let set = McmParameterization.evaluate(&[]).unwrap();
        assert_eq!(set.points(), 0);
        assert_eq!(set.len(), MCM_PARAMETERS.len());
    }
}
