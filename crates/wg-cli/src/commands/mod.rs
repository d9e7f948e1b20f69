pub mod ask;
pub mod dispatch;
pub mod puzzle;
pub mod serve;
pub mod word;

use anyhow::Context;
use wg_core::CellId;

/// Zero-based CLI coordinates to a cell.
pub(crate) fn parse_cell(row: usize, col: usize) -> anyhow::Result<CellId> {
    CellId::new(row, col).context("invalid cell coordinates")
}
