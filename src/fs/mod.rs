//! File system utilities for stayboard
//!
//! Provides board path resolution, JSON file operations and the initial
//! reservation load.

mod json;
mod load;
mod paths;

pub use json::{read_config, read_json, read_reservations, write_json, write_reservations};
pub use load::{apply_initial_load, spawn_initial_load};
pub use paths::{
    find_board_root, get_board_dir, get_config_path, get_data_path, resolve_cwd, BOARD_DIR_NAME,
};
