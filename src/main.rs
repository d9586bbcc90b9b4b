use docopt::Docopt;
use error_chain::bail;
use log::{info, warn};
use prim_mazes::{
    builder::{self, BrickLayout, WallSink},
    cells::Point,
    connectivity,
    generators::{self, Maze},
    renderers,
    units::{Height, Width},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;
use std::{
    fs::File,
    io::{self, prelude::*, BufWriter},
    path::Path,
};

const USAGE: &str = "Prim Mazes

Usage:
    prim_maze_driver -h | --help
    prim_maze_driver [options]

Options:
    -h --help              Show this screen.
    --size=<n>             The grid size is n * n.
    --width=<w>            The grid width in a w*h grid [default: 21].
    --height=<h>           The grid height in a w*h grid [default: 21].
    --seed=<s>             Seed the random source so the same maze can be generated again.
    --text-out=<path>      Output file path for a textual rendering of the maze.
    --quiet                Do not print the maze to stdout when no text output file is given.
    --image-out=<path>     Output file path for an image rendering of the maze. Always PNG format.
    --cell-pixels=<n>      Pixel count of one cell side in the image [default: 10] max 255.
    --save-walls=<path>    Write one 'x y z' line per wall brick position.
    --brick-width=<b>      Width of one wall brick [default: 0.6].
    --brick-y=<y>          Height at which bricks are placed [default: 0.0].
    --gap=<g>              Gap left between neighbouring bricks [default: 0.001].
    --verify               Fail unless the maze is a single connected tree of open cells.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_size: Option<usize>,
    flag_width: usize,
    flag_height: usize,
    flag_seed: Option<u64>,
    flag_text_out: String,
    flag_quiet: bool,
    flag_image_out: String,
    flag_cell_pixels: u8,
    flag_save_walls: String,
    flag_brick_width: f32,
    flag_brick_y: f32,
    flag_gap: f32,
    flag_verify: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::prim_mazes::errors::Error, ::prim_mazes::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let (width, height) = if let Some(square_grid_size) = args.flag_size {
        (square_grid_size, square_grid_size)
    } else {
        (args.flag_width, args.flag_height)
    };
    if width < 3 || height < 3 {
        warn!("a {} x {} grid has no room for passages; only the start cell will be open",
              width, height);
    }

    let maze = generate(Width(width), Height(height), args.flag_seed)?;

    if args.flag_verify {
        let summary = connectivity::summarise(&maze);
        info!("{:?}", summary);
        if !summary.is_perfect() {
            bail!("generated maze is not a single tree of open cells: {:?}", summary);
        }
    }

    if !args.flag_text_out.is_empty() {
        write_text_to_file(&format!("{}\n", maze), &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    } else if !args.flag_quiet {
        println!("{}", maze);
    }

    if !args.flag_image_out.is_empty() {
        let render_options = renderers::RenderOptionsBuilder::new()
            .cell_side_pixels_length(args.flag_cell_pixels)
            .build();
        renderers::save_png(&maze, &render_options, Path::new(&args.flag_image_out))
            .chain_err(|| format!("Failed to write maze image {}", args.flag_image_out))?;
    }

    if !args.flag_save_walls.is_empty() {
        let layout = BrickLayout::new(args.flag_brick_width, args.flag_brick_y)
            .with_gap(args.flag_gap);
        save_wall_positions(&maze, &layout, &args.flag_save_walls)
            .chain_err(|| format!("Failed to write wall positions to {}", args.flag_save_walls))?;
    }

    Ok(())
}

fn generate(width: Width, height: Height, seed: Option<u64>) -> Result<Maze> {
    let maze = if let Some(seed) = seed {
        info!("generating {} x {} maze from seed {}", width.0, height.0, seed);
        generators::prim(width, height, &mut XorShiftRng::seed_from_u64(seed))?
    } else {
        generators::prim(width, height, &mut rand::thread_rng())?
    };
    Ok(maze)
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}

/// Writes each brick position as a line of text.
struct WallFile<W: Write> {
    out: W,
}

impl<W: Write> WallSink for WallFile<W> {
    fn place_wall(&mut self, _: Point, position: [f32; 3]) -> prim_mazes::errors::Result<()> {
        writeln!(self.out, "{} {} {}", position[0], position[1], position[2])?;
        Ok(())
    }
}

fn save_wall_positions(maze: &Maze, layout: &BrickLayout, file_path: &str) -> Result<()> {
    let mut sink = WallFile { out: BufWriter::new(File::create(file_path)?) };
    let mapping = builder::build_maze(maze, layout, &mut sink)?;
    sink.out.flush()?;
    info!("wrote wall positions to {} (tile size {})", file_path, mapping.tile_size());
    Ok(())
}
