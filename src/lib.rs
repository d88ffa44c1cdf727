pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalCardStore, toml_config::DisplayConfig};
pub use core::{
    card::CardView,
    colors::{extract_colors, Color, ColorNames},
    layout::Layout,
    summary::render_summary,
};
pub use domain::{
    model::{CardRecord, Field, NamedLookup},
    ports::CardSource,
};
pub use utils::error::{CardError, Result};
