//! Radial band table tracking where dust and gas remain in the disk
//!
//! The disk is partitioned into contiguous bands, each flagged for whether it
//! still holds dust and gas. Accretion clears flags over swept ranges; a band
//! partially covered by a sweep splits at the sweep edges, and adjacent bands
//! with equal flags coalesce afterwards. The table therefore stays ordered,
//! contiguous and free of overlap for its whole life.

use serde::{Deserialize, Serialize};

/// One radial band of the disk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DustBand {
    pub inner_edge: f64,
    pub outer_edge: f64,
    pub dust_present: bool,
    pub gas_present: bool,
}

impl DustBand {
    pub fn width(&self) -> f64 {
        self.outer_edge - self.inner_edge
    }

    /// Whether the band shares a range of positive width with [inner, outer]
    pub fn overlaps(&self, inner: f64, outer: f64) -> bool {
        self.outer_edge > inner && self.inner_edge < outer
    }

    fn same_contents(&self, other: &DustBand) -> bool {
        self.dust_present == other.dust_present && self.gas_present == other.gas_present
    }
}

/// What a swept radial range still holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sweep {
    pub dust: bool,
    pub gas: bool,
}

/// Ordered, contiguous partition of the disk
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BandTable {
    bands: Vec<DustBand>,
}

impl BandTable {
    /// A single band over [inner, outer] holding dust and gas
    ///
    /// An empty or inverted range gives an empty table.
    pub fn new(inner: f64, outer: f64) -> Self {
        Self::with_gas(inner, outer, true)
    }

    /// A single band over [inner, outer] holding dust, and gas if `gas` is set
    pub fn with_gas(inner: f64, outer: f64, gas: bool) -> Self {
        if !(outer > inner) || !inner.is_finite() || !outer.is_finite() {
            return Self::default();
        }
        Self {
            bands: vec![DustBand {
                inner_edge: inner,
                outer_edge: outer,
                dust_present: true,
                gas_present: gas,
            }],
        }
    }

    pub fn bands(&self) -> &[DustBand] {
        &self.bands
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Which materials remain anywhere in [r_inner, r_outer]
    pub fn sweep(&self, r_inner: f64, r_outer: f64) -> Sweep {
        self.bands
            .iter()
            .filter(|band| band.overlaps(r_inner, r_outer))
            .fold(Sweep::default(), |sweep, band| Sweep {
                dust: sweep.dust || band.dust_present,
                gas: sweep.gas || band.gas_present,
            })
    }

    /// Whether any dust remains in the planet-forming range [inner, outer]
    pub fn dust_remaining(&self, inner: f64, outer: f64) -> bool {
        self.sweep(inner, outer).dust
    }

    /// Total radial width still holding dust
    pub fn dusty_width(&self) -> f64 {
        self.bands
            .iter()
            .filter(|band| band.dust_present)
            .map(DustBand::width)
            .sum()
    }

    /// Clear dust and/or gas over [r_inner, r_outer]
    ///
    /// Bands straddling a sweep edge split there; material outside the range
    /// is untouched. Adjacent bands left with equal contents coalesce.
    pub fn deplete(&mut self, r_inner: f64, r_outer: f64, remove_dust: bool, remove_gas: bool) {
        if !(r_outer > r_inner) || !(remove_dust || remove_gas) {
            return;
        }

        let mut split = Vec::with_capacity(self.bands.len() + 2);
        for band in self.bands.drain(..) {
            if !band.overlaps(r_inner, r_outer) {
                split.push(band);
                continue;
            }

            let swept_inner = band.inner_edge.max(r_inner);
            let swept_outer = band.outer_edge.min(r_outer);

            if swept_inner > band.inner_edge {
                split.push(DustBand {
                    outer_edge: swept_inner,
                    ..band
                });
            }
            split.push(DustBand {
                inner_edge: swept_inner,
                outer_edge: swept_outer,
                dust_present: band.dust_present && !remove_dust,
                gas_present: band.gas_present && !remove_gas,
            });
            if swept_outer < band.outer_edge {
                split.push(DustBand {
                    inner_edge: swept_outer,
                    ..band
                });
            }
        }

        self.bands = coalesce(split);
    }
}

fn coalesce(bands: Vec<DustBand>) -> Vec<DustBand> {
    let mut merged: Vec<DustBand> = Vec::with_capacity(bands.len());
    for band in bands {
        match merged.last_mut() {
            Some(last) if last.same_contents(&band) => last.outer_edge = band.outer_edge,
            _ => merged.push(band),
        }
    }
    merged
}
