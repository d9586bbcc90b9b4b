//! Mapping between grid columns/rows and positions in world space.
//!
//! A `TileMapping` is a plain value owned by whoever builds a maze; nothing here is global.
//! Offsets of half the grid's width and height put the middle of the grid near the origin.

use std::convert::TryFrom;

use error_chain::bail;

use crate::errors::*;
use crate::units::{Height, TileSize, Width};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TileMapping {
    tile_size: f32,
    offset_x: i32,
    offset_y: i32,
}

impl TileMapping {
    /// Fails with `InvalidTileSize` unless the tile size is positive and finite.
    pub fn new(tile_size: TileSize, offset_x: i32, offset_y: i32) -> Result<TileMapping> {
        let TileSize(size) = tile_size;
        if !(size.is_finite() && size > 0.0) {
            bail!(ErrorKind::InvalidTileSize(size));
        }
        Ok(TileMapping {
            tile_size: size,
            offset_x,
            offset_y,
        })
    }

    /// Mapping for a `width` x `height` grid with its centre cell at the origin.
    ///
    /// Fails with `InvalidDimension` if half a dimension does not fit an `i32` column/row.
    pub fn centred(width: Width, height: Height, tile_size: TileSize) -> Result<TileMapping> {
        let (Width(w), Height(h)) = (width, height);
        match (i32::try_from(w / 2), i32::try_from(h / 2)) {
            (Ok(offset_x), Ok(offset_y)) => TileMapping::new(tile_size, offset_x, offset_y),
            _ => bail!(ErrorKind::InvalidDimension(w, h)),
        }
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    #[inline]
    pub fn offsets(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    #[inline]
    pub fn col_to_x(&self, col: i32) -> f32 {
        tiles_from_origin(col, self.offset_x) * self.tile_size
    }

    #[inline]
    pub fn row_to_y(&self, row: i32) -> f32 {
        tiles_from_origin(row, self.offset_y) * self.tile_size
    }

    /// Column containing `x`. Positions too far out for an `i32` column clamp to
    /// `i32::MIN`/`i32::MAX`.
    #[inline]
    pub fn x_to_col(&self, x: f32) -> i32 {
        offset_by(self.offset_x, self.tiles_spanned(x))
    }

    #[inline]
    pub fn y_to_row(&self, y: f32) -> i32 {
        offset_by(self.offset_y, self.tiles_spanned(y))
    }

    /// `floor(distance / tile_size)`, where a quotient within rounding error of a whole
    /// number counts as that number. Positions produced by `col_to_x`/`row_to_y` sit exactly
    /// on a tile edge and must map back to the same tile.
    /// Casts from f32 saturate, so the result is always in `i32` range.
    fn tiles_spanned(&self, distance: f32) -> i32 {
        let tiles = distance / self.tile_size;
        let nearest = tiles.round();
        let tolerance = 4.0 * std::f32::EPSILON * nearest.abs().max(1.0);
        if (tiles - nearest).abs() <= tolerance {
            nearest as i32
        } else {
            tiles.floor() as i32
        }
    }
}

// `index * size - offset * size`, factored so there is a single rounding step.
#[inline]
fn tiles_from_origin(index: i32, offset: i32) -> f32 {
    (i64::from(index) - i64::from(offset)) as f32
}

#[inline]
fn offset_by(offset: i32, tiles: i32) -> i32 {
    let index = i64::from(offset) + i64::from(tiles);
    index.max(i64::from(i32::MIN)).min(i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn mapping(tile_size: f32, offset_x: i32, offset_y: i32) -> TileMapping {
        TileMapping::new(TileSize(tile_size), offset_x, offset_y).expect("valid tile size")
    }

    #[test]
    fn bad_tile_sizes_rejected() {
        for &size in &[0.0, -0.6, std::f32::NAN, std::f32::INFINITY] {
            match TileMapping::new(TileSize(size), 2, 2) {
                Err(Error(ErrorKind::InvalidTileSize(_), _)) => {}
                other => panic!("expected InvalidTileSize for {}, got {:?}", size, other),
            }
        }
    }

    #[test]
    fn centred_offsets_are_half_the_dimensions() {
        let m = TileMapping::centred(Width(10), Height(7), TileSize(0.6)).unwrap();
        assert_eq!(m.offsets(), (5, 3));
        assert_eq!(m.col_to_x(5), 0.0);
        assert_eq!(m.row_to_y(3), 0.0);
    }

    #[test]
    fn columns_to_positions() {
        let m = mapping(2.0, 2, 3);
        assert_eq!(m.col_to_x(0), -4.0);
        assert_eq!(m.col_to_x(4), 4.0);
        assert_eq!(m.row_to_y(0), -6.0);
        assert_eq!(m.row_to_y(5), 4.0);
    }

    #[test]
    fn positions_floor_to_tiles() {
        let m = mapping(2.0, 2, 2);
        assert_eq!(m.x_to_col(0.0), 2);
        assert_eq!(m.x_to_col(1.9), 2);
        assert_eq!(m.x_to_col(2.0), 3);
        assert_eq!(m.x_to_col(-0.1), 1);
        assert_eq!(m.x_to_col(-2.0), 1);
        assert_eq!(m.y_to_row(-2.1), 0);
    }

    #[test]
    fn far_positions_clamp_to_column_range() {
        let m = mapping(0.601, 5, 5);
        assert_eq!(m.x_to_col(1.0e12), i32::MAX);
        assert_eq!(m.y_to_row(-1.0e12), i32::MIN + 5);
        assert_eq!(m.x_to_col(std::f32::INFINITY), i32::MAX);

        let m = mapping(0.601, -5, -5);
        assert_eq!(m.y_to_row(-1.0e12), i32::MIN);
        assert_eq!(m.x_to_col(1.0e12), i32::MAX - 5);
        assert_eq!(m.x_to_col(std::f32::NEG_INFINITY), i32::MIN);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn centred_rejects_offsets_beyond_column_range() {
        let huge = Width(usize::max_value());
        assert!(TileMapping::centred(huge, Height(4), TileSize(1.0)).is_err());
        assert!(TileMapping::centred(Width(4), Height(4), TileSize(1.0)).is_ok());
    }

    #[test]
    fn round_trip_with_awkward_tile_size() {
        let m = mapping(0.601, 7, 7);
        for c in -50..50 {
            assert_eq!(m.x_to_col(m.col_to_x(c)), c);
            assert_eq!(m.y_to_row(m.row_to_y(c)), c);
        }
    }

    #[test]
    fn column_round_trip() {
        fn p(col: i16, offset: i8, tile_thousandths: u16) -> TestResult {
            if tile_thousandths == 0 {
                return TestResult::discard();
            }
            let m = mapping(tile_thousandths as f32 / 1000.0, offset as i32, offset as i32);
            let c = col as i32 % 2000;
            TestResult::from_bool(m.x_to_col(m.col_to_x(c)) == c && m.y_to_row(m.row_to_y(c)) == c)
        }
        quickcheck(p as fn(i16, i8, u16) -> TestResult);
    }
}
