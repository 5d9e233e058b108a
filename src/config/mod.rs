//! Configuration and path management for maestro-cli

pub mod paths;
pub mod settings;

pub use paths::MaestroPaths;
pub use settings::Settings;
