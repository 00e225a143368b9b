//! Budgeted flood fill for cooperative scheduling.
//!
//! Interactive hosts with a frame budget can run the fill a bounded number
//! of stack pops at a time instead of in one synchronous call. The final
//! buffer state and report are identical to [`super::flood::flood_fill_detailed`]
//! on the same inputs.

use crate::color::Rgb;

use super::flood::{check_seed, process_pop, FillOutcome, FillReport, RegionStats};

/// An in-progress flood fill that can be advanced in bounded steps.
///
/// Construction runs the same early-exit checks as the one-shot fill; an
/// early exit leaves the fill already done with the corresponding outcome.
/// The caller must not mutate the buffer between steps.
pub struct ChunkedFill {
    width: usize,
    height: usize,
    seed: Rgb,
    fill: Rgb,
    tolerance: i32,
    stack: Vec<(i32, i32)>,
    visited: Vec<bool>,
    stats: RegionStats,
    outcome: FillOutcome,
}

impl ChunkedFill {
    /// Validate the request and capture the seed color.
    pub fn new(
        data: &[u8],
        width: usize,
        height: usize,
        x: i32,
        y: i32,
        fill: Rgb,
        tolerance: i32,
    ) -> Self {
        let (seed, stack, visited, outcome) = match check_seed(data, width, height, x, y, fill) {
            Ok(seed) => (
                seed,
                vec![(x, y)],
                vec![false; width * height],
                FillOutcome::Filled,
            ),
            Err(outcome) => (fill, Vec::new(), Vec::new(), outcome),
        };

        Self {
            width,
            height,
            seed,
            fill,
            tolerance,
            stack,
            visited,
            stats: RegionStats::new(width, height),
            outcome,
        }
    }

    /// Whether the fill has run to completion (or exited early).
    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    /// Process at most `max_pops` stack pops. Returns [`Self::is_done`].
    ///
    /// `data` must be the same buffer the fill was constructed against.
    pub fn step(&mut self, data: &mut [u8], max_pops: usize) -> bool {
        for _ in 0..max_pops {
            let Some((x, y)) = self.stack.pop() else {
                break;
            };
            process_pop(
                data,
                self.width,
                self.height,
                self.seed,
                self.fill,
                self.tolerance,
                x,
                y,
                &mut self.visited,
                &mut self.stack,
                &mut self.stats,
            );
        }
        self.is_done()
    }

    /// Report for the work done so far; final once [`Self::is_done`].
    pub fn report(&self) -> FillReport {
        FillReport {
            outcome: self.outcome,
            pixel_count: self.stats.pixel_count,
            bounds: self.stats.bounds(),
        }
    }

    /// Drive the fill to completion in one go.
    pub fn run(mut self, data: &mut [u8]) -> FillReport {
        while !self.step(data, usize::MAX) {}
        self.report()
    }
}
