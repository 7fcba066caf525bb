pub mod defaults;
pub mod file;
pub mod settings;

pub use file::ConfigFile;
pub use settings::{FillerCount, FontColor, LayoutConfig, Settings};
