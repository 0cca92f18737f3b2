pub mod input_source;
pub mod output_folder;
pub mod source_image;
pub mod split_config;
pub mod tile_grid;

// --- public re-exports ---
pub use input_source::directory_path::DirectoryPath;
pub use input_source::input_file::InputFile;
pub use output_folder::OutputFolder;
pub use source_image::SourceImage;
pub use split_config::SplitConfig;
pub use tile_grid::{BoundingBox, Tile, TileGrid};
