//! Run-length fragmentation of an antline into broken and intact spans
//!
//! Each 16-unit cell of a long antline independently rolls for breakage.
//! Neighbouring cells with the same outcome are merged so every span becomes
//! one overlay.

use bitvec::prelude::*;
use std::fmt;

use crate::antline::random::RandomSelector;

/// A maximal span of cells sharing the same outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// First cell of the span
    pub start: usize,
    /// One past the last cell of the span
    pub end: usize,
    /// Whether the span uses broken textures
    pub is_broken: bool,
}

impl Run {
    /// Number of cells covered
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check whether the run covers no cells
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Midpoint of the span in cells
    pub fn center(&self) -> f64 {
        (self.start + self.end) as f64 / 2.0
    }
}

/// Breakage outcome of every cell along an antline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellTrials {
    bits: BitVec,
}

impl CellTrials {
    /// Roll each cell in order, cell 0 first
    pub fn roll(cell_count: usize, chance_percent: f64, rng: &mut RandomSelector) -> Self {
        Self {
            bits: (0..cell_count).map(|_| rng.chance(chance_percent)).collect(),
        }
    }

    /// Build trials from explicit outcomes
    pub fn from_outcomes(outcomes: &[bool]) -> Self {
        Self {
            bits: outcomes.iter().copied().collect(),
        }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check whether there are no cells
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of broken cells
    pub fn broken_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Merge neighbouring cells with equal outcomes into runs
    pub fn runs(&self) -> Vec<Run> {
        let mut runs = Vec::new();
        let mut cells = self.bits.iter().by_vals().enumerate();
        let Some((_, first)) = cells.next() else {
            return runs;
        };

        let mut run_start = 0;
        let mut last_type = first;
        for (index, next_type) in cells {
            if next_type != last_type {
                runs.push(Run {
                    start: run_start,
                    end: index,
                    is_broken: last_type,
                });
                last_type = next_type;
                run_start = index;
            }
        }
        runs.push(Run {
            start: run_start,
            end: self.bits.len(),
            is_broken: last_type,
        });
        runs
    }
}

impl fmt::Display for CellTrials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            f.write_str(if bit { "x" } else { "-" })?;
        }
        Ok(())
    }
}

/// Split `cell_count` cells into alternating broken and intact runs
///
/// Runs are contiguous, ordered, cover `0..cell_count` exactly and never
/// repeat a tag twice in a row. With no cells a single empty run `(0, 0)` is
/// returned, still tagged by one draw from the stream.
pub fn broken_antline_iter(
    cell_count: usize,
    chance_percent: f64,
    rng: &mut RandomSelector,
) -> Vec<Run> {
    if cell_count == 0 {
        return vec![Run {
            start: 0,
            end: 0,
            is_broken: rng.chance(chance_percent),
        }];
    }
    CellTrials::roll(cell_count, chance_percent, rng).runs()
}
