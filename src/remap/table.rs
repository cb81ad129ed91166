//! Named photolysis rates of the downstream mechanism.
//!
//! Primary channels use MCM v3.3.1 numbering (J1 to J57). Auxiliary channels
//! use the reference-spectrum library numbering:
//!
//! | channel | reaction |
//! |---|---|
//! | Jn1, Jn2 | HO2NO2 -> HO2 + NO2, OH + NO3 |
//! | Jn3, Jn4 | N2O5 -> NO3 + NO2, NO3 + NO + O |
//! | Jn5, Jn6 | PAN -> CH3CO3 + NO2, CH3O2 + NO3 |
//! | Jn7 | Cl2 -> 2 Cl |
//! | Jn8 | ClNO2 -> Cl + NO2 |
//! | Jn9, Jn10 | ClNO3 -> Cl + NO3, ClO + NO2 |
//! | Jn11 | Br2 -> 2 Br |
//! | Jn12, Jn13 | BrNO3 -> Br + NO3, BrO + NO2 |
//! | Jn14 | reference hydroxy nitrate (HOCH2CH2ONO2) |
//! | Jn15 | HOBr -> OH + Br |
//! | Jn16 | HOCl -> OH + Cl |
//! | Jn17 | BrO -> Br + O |

use super::{ChannelMappingEntry, Source, Term};

macro_rules! coefficient {
    () => {
        1.0
    };
    ($value:literal) => {
        $value
    };
}

macro_rules! entry {
    ($output:literal, $source:ident, [$($channel:literal $(* $factor:literal)?),+ $(,)?]) => {
        ChannelMappingEntry {
            output: $output,
            source: Source::$source,
            terms: &[$(Term {
                channel: $channel,
                coefficient: coefficient!($($factor)?),
            }),+],
        }
    };
}

pub static MAPPING_TABLE: &[ChannelMappingEntry] = &[
    // Direct MCM channels
    entry!("JO1D", Primary, ["J1"]),
    entry!("JO3P", Primary, ["J2"]),
    entry!("JH2O2", Primary, ["J3"]),
    entry!("JNO2", Primary, ["J4"]),
    entry!("JNO3_NO", Primary, ["J5"]),
    entry!("JNO3_NO2", Primary, ["J6"]),
    entry!("JHONO", Primary, ["J7"]),
    entry!("JHNO3", Primary, ["J8"]),
    entry!("JHCHO_H", Primary, ["J11"]),
    entry!("JHCHO_H2", Primary, ["J12"]),
    entry!("JCH3CHO", Primary, ["J13"]),
    entry!("JC2H5CHO", Primary, ["J14"]),
    entry!("JC3H7CHO_HCO", Primary, ["J15"]),
    entry!("JC3H7CHO_C2H4", Primary, ["J16"]),
    entry!("JIPRCHO", Primary, ["J17"]),
    // MACR -> CH3C=CH2 + HCO, CH2=C(CH3)CO + H
    entry!("JMACR", Primary, ["J18", "J19"]),
    entry!("JC5HPALD", Primary, ["J20"]),
    entry!("JACETONE", Primary, ["J21"]),
    entry!("JMEK", Primary, ["J22"]),
    // MVK -> CH3CH=CH2 + CO, CH3CO + CH2=CH
    entry!("JMVK", Primary, ["J23", "J24"]),
    // GLYOX -> CO + CO + H2, HCO + HCO
    entry!("JGLYX", Primary, ["J31", "J32"]),
    entry!("JGLYX_HCHO", Primary, ["J33"]),
    entry!("JMGLY", Primary, ["J34"]),
    entry!("JBIACET", Primary, ["J35"]),
    entry!("JCH3OOH", Primary, ["J41"]),
    entry!("JCH3NO3", Primary, ["J51"]),
    entry!("JC2H5NO3", Primary, ["J52"]),
    entry!("JNC3H7NO3", Primary, ["J53"]),
    entry!("JIC3H7NO3", Primary, ["J54"]),
    entry!("JTC4H9NO3", Primary, ["J55"]),
    entry!("JNOA", Primary, ["J56"]),
    // Isoprene hydroxy nitrates, cross-sections proportional to Jn14
    entry!("JIHN1", Auxiliary, ["Jn14" * 1.0]),
    entry!("JIHN2", Auxiliary, ["Jn14" * 4.3]),
    entry!("JIHN3", Auxiliary, ["Jn14" * 1.6]),
    entry!("JIHN4", Auxiliary, ["Jn14" * 10.0]),
    // No MCM analogue
    entry!("JHNO4", Auxiliary, ["Jn1", "Jn2"]),
    entry!("JN2O5", Auxiliary, ["Jn3", "Jn4"]),
    entry!("JPAN", Auxiliary, ["Jn5", "Jn6"]),
    entry!("JCl2", Auxiliary, ["Jn7"]),
    entry!("JClNO2", Auxiliary, ["Jn8"]),
    entry!("JClNO3_Cl", Auxiliary, ["Jn9"]),
    entry!("JClNO3_ClO", Auxiliary, ["Jn10"]),
    entry!("JBr2", Auxiliary, ["Jn11"]),
    entry!("JBrNO3_Br", Auxiliary, ["Jn12"]),
    entry!("JBrNO3_BrO", Auxiliary, ["Jn13"]),
    entry!("JHOBr", Auxiliary, ["Jn15"]),
    entry!("JHOCl", Auxiliary, ["Jn16"]),
    entry!("JBrO", Auxiliary, ["Jn17"]),
];
