pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod events;
pub mod logging;
pub mod midi_output;
pub mod pitch;
pub mod sequence;
pub mod tempo;

pub use crate::cli::Args;
pub use crate::config::Settings;
pub use crate::converter::{run, Summary};
pub use crate::error::{ConvertError, ConvertResult};
