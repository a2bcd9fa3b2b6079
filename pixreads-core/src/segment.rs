//! Row segmentation: merging runs of ON pixels across tolerable gaps.
//!
//! A row is scanned left to right by a two-state automaton (no run open / run
//! open). Gaps of up to `tolerance` OFF pixels are bridged into the
//! surrounding run; OFF pixels after a row's last ON pixel are never counted,
//! even when they would fit within the tolerance.

use crate::types::{Interval, Pixel};

#[derive(Debug, Clone, Copy)]
struct Run {
    start: usize,
    /// Provisional run length, including bridged OFF pixels pending a later
    /// ON pixel that validates the bridge.
    length: usize,
    last_on: usize,
}

/// Iterator over the merged ON runs of one pixel row.
///
/// Finite and non-restartable; output intervals are strictly increasing and
/// non-overlapping. Deterministic given `(row, tolerance)`.
pub struct RowSegments<'a> {
    row: &'a [Pixel],
    tolerance: usize,
    offset: usize,
    run: Option<Run>,
    off_count: usize,
}

impl<'a> RowSegments<'a> {
    pub fn new(row: &'a [Pixel], tolerance: usize) -> Self {
        Self {
            row,
            tolerance,
            offset: 0,
            run: None,
            off_count: 0,
        }
    }
}

impl Iterator for RowSegments<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        while self.offset < self.row.len() {
            let offset = self.offset;
            self.offset += 1;

            match self.row[offset] {
                Pixel::On => {
                    self.off_count = 0;
                    match self.run.as_mut() {
                        Some(run) => {
                            run.length += 1;
                            run.last_on = offset;
                        }
                        None => {
                            self.run = Some(Run {
                                start: offset,
                                length: 1,
                                last_on: offset,
                            });
                        }
                    }
                }
                Pixel::Off => {
                    self.off_count += 1;
                    let Some(run) = self.run.as_mut() else {
                        // No ON pixel seen yet.
                        continue;
                    };
                    if self.off_count > self.tolerance {
                        // The gap disqualifies the bridge: trim back to the
                        // last genuine ON pixel and close the run.
                        let excess = offset - run.last_on - 1;
                        let interval = Interval {
                            start: run.start,
                            end: run.start + run.length - excess,
                        };
                        self.run = None;
                        return Some(interval);
                    }
                    // Optimistically count this OFF pixel into the run; a
                    // later ON pixel validates it.
                    run.length += 1;
                }
            }
        }

        // End of row: strip the unvalidated trailing OFF run.
        self.run.take().map(|run| Interval {
            start: run.start,
            end: run.start + run.length - self.off_count,
        })
    }
}
