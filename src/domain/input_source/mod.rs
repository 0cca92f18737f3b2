pub mod directory_path;
pub mod input_file;
pub mod path_error;
