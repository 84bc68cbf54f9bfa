mod json_lines;
mod snapshot_file;

pub use json_lines::*;
pub use snapshot_file::*;
