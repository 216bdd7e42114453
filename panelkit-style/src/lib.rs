pub mod colors;
pub mod config;
pub mod error;
pub mod medium;
pub mod profile;
pub mod style;

pub use crate::colors::{ColorCatalog, ColorSpec};
pub use crate::config::{to_global_config, ConfigValue, GlobalConfig};
pub use crate::error::PanelkitStyleError;
pub use crate::medium::{ElementName, FontWeight, Medium};
pub use crate::profile::{resolve, StyleProfile, TextElementSpec};
pub use crate::style::{Style, StyleOptions};
