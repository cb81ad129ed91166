use log::warn;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::channels::ChannelSet;
use crate::engines::ReferenceSpectrumInterpolation;
use crate::error::{PhotolysisError, Result};
use crate::state::HybridInputs;

const ENGINE: &str = "reference spectrum";

#[derive(Debug, Deserialize)]
struct LibraryFile {
    sza: Vec<f64>,
    altitude: Vec<f64>,
    ozone_column: Vec<f64>,
    albedo: Vec<f64>,
    channels: BTreeMap<String, Vec<f64>>,
}

/// J-values precomputed on a grid of reference atmospheres.
///
/// Grids are flattened in axis order: [sza][altitude][ozone_column][albedo].
#[derive(Debug, Clone)]
pub struct ReferenceLibrary {
    xsza: Vec<f64>,
    xalt: Vec<f64>,
    xozone: Vec<f64>,
    xalb: Vec<f64>,
    grids: BTreeMap<String, Vec<f64>>,
}

enum Stencil {
    Corners([(usize, f64); 16]),
    Fill(f64),
}

#[derive(Debug, Clone, Copy)]
struct Bracket {
    idx: usize,
    ratio: f64,
    clamped: bool,
}

impl ReferenceLibrary {
    /// # Parameters
    /// - `sza`: solar zenith angle axis, degrees
    /// - `altitude`: altitude axis, m
    /// - `ozone_column`: overhead ozone axis, DU
    /// - `albedo`: surface albedo axis
    /// - `grids`: per-channel J-values, s-1
    pub fn new(
        sza: Vec<f64>,
        altitude: Vec<f64>,
        ozone_column: Vec<f64>,
        albedo: Vec<f64>,
        grids: BTreeMap<String, Vec<f64>>,
    ) -> Result<Self> {
        for (name, axis) in [
            ("sza", &sza),
            ("altitude", &altitude),
            ("ozone_column", &ozone_column),
            ("albedo", &albedo),
        ] {
            if axis.is_empty() {
                return Err(PhotolysisError::engine(ENGINE, format!("{name} axis is empty")));
            }
            if axis.iter().any(|v| !v.is_finite()) {
                return Err(PhotolysisError::engine(
                    ENGINE,
                    format!("{name} axis contains non-finite values"),
                ));
            }
            if axis.windows(2).any(|pair| pair[1] <= pair[0]) {
                return Err(PhotolysisError::engine(
                    ENGINE,
                    format!("{name} axis must be strictly increasing"),
                ));
            }
        }

        let expected = sza.len() * altitude.len() * ozone_column.len() * albedo.len();
        for (channel, grid) in &grids {
            if grid.len() != expected {
                return Err(PhotolysisError::shape(
                    format!("library grid {channel}"),
                    expected,
                    grid.len(),
                ));
            }
        }

        Ok(ReferenceLibrary {
            xsza: sza,
            xalt: altitude,
            xozone: ozone_column,
            xalb: albedo,
            grids,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let library: LibraryFile = serde_json::from_reader(reader)?;

        Self::new(
            library.sza,
            library.altitude,
            library.ozone_column,
            library.albedo,
            library.channels,
        )
    }

    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.grids.keys().map(String::as_str)
    }

    fn bracket(axis: &[f64], target: f64) -> Bracket {
        let last = axis.len() - 1;
        if last == 0 {
            return Bracket {
                idx: 0,
                ratio: 0.0,
                clamped: false,
            };
        }
        if target <= axis[0] {
            return Bracket {
                idx: 0,
                ratio: 0.0,
                clamped: target < axis[0],
            };
        }
        if target >= axis[last] {
            return Bracket {
                idx: last - 1,
                ratio: 1.0,
                clamped: target > axis[last],
            };
        }

        let idx = axis.partition_point(|&x| x <= target) - 1;
        Bracket {
            idx,
            ratio: (target - axis[idx]) / (axis[idx + 1] - axis[idx]),
            clamped: false,
        }
    }

    // Flat grid offsets and weights of the 16 corners surrounding one point.
    fn corners(&self, brackets: [Bracket; 4]) -> [(usize, f64); 16] {
        let dims = [
            self.xsza.len(),
            self.xalt.len(),
            self.xozone.len(),
            self.xalb.len(),
        ];
        let mut corners = [(0usize, 0.0f64); 16];

        for (corner, slot) in corners.iter_mut().enumerate() {
            let mut offset = 0;
            let mut weight = 1.0;
            for axis in 0..4 {
                let upper = (corner >> (3 - axis)) & 1 == 1;
                let Bracket { idx, ratio, .. } = brackets[axis];
                let i = if upper {
                    (idx + 1).min(dims[axis] - 1)
                } else {
                    idx
                };
                offset = offset * dims[axis] + i;
                weight *= if upper { ratio } else { 1.0 - ratio };
            }
            *slot = (offset, weight);
        }

        corners
    }
}

impl ReferenceSpectrumInterpolation for ReferenceLibrary {
    fn interpolate(&self, inputs: &HybridInputs) -> Result<ChannelSet> {
        let points = inputs.points();
        for (name, values) in [
            ("altitude", &inputs.altitude),
            ("ozone_column", &inputs.ozone_column),
            ("albedo", &inputs.albedo),
        ] {
            if values.len() != points {
                return Err(PhotolysisError::shape(name, points, values.len()));
            }
        }

        let mut clamped = [0usize; 4];
        let mut stencils = Vec::with_capacity(points);
        for p in 0..points {
            let targets = [
                inputs.sza[p],
                inputs.altitude[p],
                inputs.ozone_column[p],
                inputs.albedo[p],
            ];
            if targets.iter().any(|t| t.is_nan()) {
                stencils.push(Stencil::Fill(f64::NAN));
                continue;
            }
            if targets[0] >= 90.0 {
                stencils.push(Stencil::Fill(0.0));
                continue;
            }

            let axes = [&self.xsza, &self.xalt, &self.xozone, &self.xalb];
            let brackets = [0, 1, 2, 3].map(|axis| Self::bracket(axes[axis], targets[axis]));
            for (count, bracket) in clamped.iter_mut().zip(brackets) {
                *count += usize::from(bracket.clamped);
            }
            stencils.push(Stencil::Corners(self.corners(brackets)));
        }

        for (name, count) in ["sza", "altitude", "ozone_column", "albedo"]
            .iter()
            .zip(clamped)
        {
            if count > 0 {
                warn!("{count} of {points} {name} values lie outside the reference library and were clamped");
            }
        }

        let mut set = ChannelSet::new(points);
        for (channel, grid) in &self.grids {
            let values: Vec<f64> = stencils
                .iter()
                .map(|stencil| match stencil {
                    Stencil::Corners(corners) => corners
                        .iter()
                        .map(|&(offset, weight)| weight * grid[offset])
                        .sum(),
                    Stencil::Fill(fill) => *fill,
                })
                .collect();
            set.insert(channel.clone(), values)?;
        }

        Ok(set)
    }
}
