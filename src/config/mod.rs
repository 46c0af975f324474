//! Board configuration

mod loader;

pub use loader::load_config;
