use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use log::info;

use crate::cells::CellType;
use crate::errors::*;
use crate::generators::Maze;

const WALL_COLOUR: Rgb<u8> = Rgb([40, 40, 48]);
const SPACE_COLOUR: Rgb<u8> = Rgb([240, 240, 240]);
const START_COLOUR: Rgb<u8> = Rgb([200, 40, 40]);
const RESERVED_COLOUR: Rgb<u8> = Rgb([60, 120, 200]);

#[derive(Debug, Copy, Clone)]
pub struct RenderOptions {
    cell_side_pixels_length: u8,
    mark_start: bool,
}

#[derive(Debug)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder {
            options: RenderOptions {
                cell_side_pixels_length: 10,
                mark_start: true,
            },
        }
    }

    /// Pixels per cell side, at least 1.
    pub fn cell_side_pixels_length(mut self, cell_side_pixels_length: u8) -> RenderOptionsBuilder {
        self.options.cell_side_pixels_length = cell_side_pixels_length.max(1);
        self
    }

    pub fn mark_start(mut self, on: bool) -> RenderOptionsBuilder {
        self.options.mark_start = on;
        self
    }

    pub fn build(self) -> RenderOptions {
        self.options
    }
}

impl Default for RenderOptionsBuilder {
    fn default() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

/// Draw each cell as a filled square.
pub fn render_maze(maze: &Maze, options: &RenderOptions) -> Result<RgbImage> {
    let grid = maze.grid();
    let side = u32::from(options.cell_side_pixels_length);
    let image_width = grid.width().0 as u32 * side;
    let image_height = grid.height().0 as u32 * side;
    let mut image = RgbImage::from_pixel(image_width, image_height, WALL_COLOUR);

    for coord in grid.iter() {
        let colour = if options.mark_start && coord == maze.start() {
            START_COLOUR
        } else {
            match grid.get(coord)? {
                CellType::Wall => continue,
                CellType::Space => SPACE_COLOUR,
                _ => RESERVED_COLOUR,
            }
        };

        let (left, top) = (coord.x * side, coord.y * side);
        for y in top..top + side {
            for x in left..left + side {
                image.put_pixel(x, y, colour);
            }
        }
    }

    Ok(image)
}

/// Render and write a PNG file.
pub fn save_png(maze: &Maze, options: &RenderOptions, path: &Path) -> Result<()> {
    let image = render_maze(maze, options)?;
    image.save_with_format(path, ImageFormat::Png)?;
    info!("wrote {} x {} maze image to {}", image.width(), image.height(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells::Point;
    use crate::generators::{prim, ScriptedIndices};
    use crate::units::{Height, Width};

    #[test]
    fn image_covers_grid() {
        let maze = prim(Width(5), Height(5), &mut ScriptedIndices::new(vec![0])).unwrap();
        let options = RenderOptionsBuilder::new().cell_side_pixels_length(3).build();
        let image = render_maze(&maze, &options).unwrap();
        assert_eq!(image.dimensions(), (15, 15));

        assert_eq!(*image.get_pixel(0, 0), WALL_COLOUR);
        // centre cell is the start, (1, 2) is floor
        assert_eq!(*image.get_pixel(7, 7), START_COLOUR);
        assert_eq!(*image.get_pixel(4, 7), SPACE_COLOUR);
        assert_eq!(*image.get_pixel(4, 4), WALL_COLOUR);
        assert_eq!(maze.start(), Point::new(2, 2));
    }

    #[test]
    fn unmarked_start_is_floor() {
        let maze = prim(Width(3), Height(3), &mut ScriptedIndices::new(vec![])).unwrap();
        let options = RenderOptionsBuilder::new()
            .cell_side_pixels_length(0)
            .mark_start(false)
            .build();
        let image = render_maze(&maze, &options).unwrap();
        assert_eq!(image.dimensions(), (3, 3));
        assert_eq!(*image.get_pixel(1, 1), SPACE_COLOUR);
    }
}
