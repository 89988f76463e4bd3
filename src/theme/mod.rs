//! Color palettes, theme preference persistence, and config paths.

pub mod palette;
pub mod paths;
pub mod settings;
pub mod types;

pub use palette::palette;
pub use paths::{config_dir, logs_dir, pantry_data_path, theme_conf_path};
pub use settings::{load_mode_from, save_mode_to};
pub use types::{Theme, ThemeMode};
