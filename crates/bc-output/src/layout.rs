//! Static layout export.
//!
//! Roads and buildings never change after generation, so they are written
//! once to `city_layout.csv` rather than through [`OutputWriter`][crate::OutputWriter].

use std::path::{Path, PathBuf};

use csv::Writer;

use bc_grid::{CityGrid, CityLayout};

use crate::{LayoutRow, OutputResult};

/// Flatten `layout` into rows, roads first, each in row-major order.
pub fn layout_rows(grid: &CityGrid, layout: &CityLayout) -> Vec<LayoutRow> {
    let (ox, oz) = grid.world_origin();
    let roads = layout.roads.iter().map(|r| LayoutRow {
        kind:     "road",
        row:      r.cell.row,
        col:      r.cell.col,
        x:        ox + f64::from(r.cell.col),
        z:        oz + f64::from(r.cell.row),
        asset:    r.piece.variant.asset_name(),
        rotation: r.piece.rotation.radians(),
    });
    let buildings = layout.buildings.iter().map(|b| LayoutRow {
        kind:     "building",
        row:      b.cell.row,
        col:      b.cell.col,
        x:        ox + f64::from(b.cell.col),
        z:        oz + f64::from(b.cell.row),
        asset:    b.style.asset_name(),
        rotation: b.rotation_radians(),
    });
    roads.chain(buildings).collect()
}

/// Write every placement in `layout` to `dir/city_layout.csv` and return the
/// file's path.
pub fn write_layout_csv(dir: &Path, grid: &CityGrid, layout: &CityLayout) -> OutputResult<PathBuf> {
    let path = dir.join("city_layout.csv");
    let mut w = Writer::from_path(&path)?;
    w.write_record(["kind", "row", "col", "x", "z", "asset", "rotation"])?;
    for row in layout_rows(grid, layout) {
        w.write_record(&[
            row.kind.to_string(),
            row.row.to_string(),
            row.col.to_string(),
            format!("{:.1}", row.x),
            format!("{:.1}", row.z),
            row.asset.to_string(),
            format!("{:.4}", row.rotation),
        ])?;
    }
    w.flush()?;
    Ok(path)
}
