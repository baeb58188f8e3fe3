//! Output formatting: one labelled line per statistic.
use std::io::{self, Write};

use crate::stats::Summary;

/// Write `summary` as `mean: ..` then `dist: ..`.
pub fn write_report<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out, "mean: {}", summary.mean)?;
    writeln!(out, "dist: {}", summary.variance)?;
    out.flush()
}
