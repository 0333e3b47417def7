//! Configuration and path management for samity-cli

pub mod paths;
pub mod settings;

pub use paths::SamityPaths;
pub use settings::Settings;
