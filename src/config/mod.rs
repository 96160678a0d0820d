//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SpencePaths;
pub use settings::Settings;
