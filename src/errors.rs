// Create the Error, ErrorKind, ResultExt, and Result types.
// Result is a typedef of std `Result` with the error type our own `Error`.
use error_chain::error_chain;

error_chain! {

    foreign_links {
        Io(::std::io::Error);
        Image(::image::ImageError);
    }

    errors {
        InvalidDimension(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {} x {}: width and height must be at least 1", width, height)
        }

        IndexOutOfRange(x: u32, y: u32, width: usize, height: usize) {
            description("grid coordinate out of range")
            display("grid coordinate ({}, {}) is outside a {} x {} grid", x, y, width, height)
        }

        InvalidTileSize(tile_size: f32) {
            description("invalid tile size")
            display("tile size {} must be positive and finite", tile_size)
        }
    }
}
