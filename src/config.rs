// config.rs

use crate::cli::Args;
use crate::error::{ConvertError, ConvertResult};
use config::{Config, Environment, File};
use log::{debug, info};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "raw_sequence.txt";
pub const DEFAULT_OUTPUT: &str = "output_slowdown_fixed.mid";
pub const BASE_BPM: f64 = 120.0;
pub const ORIGINAL_SECONDS: f64 = 79.0;
pub const TARGET_SECONDS: f64 = (3 * 60 + 55) as f64;
pub const TICKS_PER_BEAT: u16 = 480;
pub const VELOCITY: u8 = 64;

/// Prefix for environment overrides, e.g. `KEYSEQ2MIDI_TARGET_SECONDS`.
pub const ENV_PREFIX: &str = "KEYSEQ2MIDI";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub base_bpm: f64,
    pub original_seconds: f64,
    pub target_seconds: f64,
    pub ticks_per_beat: u16,
    pub velocity: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            base_bpm: BASE_BPM,
            original_seconds: ORIGINAL_SECONDS,
            target_seconds: TARGET_SECONDS,
            ticks_per_beat: TICKS_PER_BEAT,
            velocity: VELOCITY,
        }
    }
}

impl Settings {
    /// Layer the optional settings file and the environment over the defaults.
    pub fn load(config_file: Option<&Path>) -> ConvertResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_file {
            info!("Loading settings from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        debug!("Settings before command line overrides: {:?}", settings);
        Ok(settings)
    }

    /// Command line values win over everything else.
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(input) = &args.input {
            self.input = input.clone();
        }
        if let Some(output) = &args.output {
            self.output = output.clone();
        }
        if let Some(bpm) = args.bpm {
            self.base_bpm = bpm;
        }
        if let Some(secs) = args.original_secs {
            self.original_seconds = secs;
        }
        if let Some(secs) = args.target_secs {
            self.target_seconds = secs;
        }
        if let Some(ticks) = args.ticks_per_beat {
            self.ticks_per_beat = ticks;
        }
        if let Some(velocity) = args.velocity {
            self.velocity = velocity;
        }
    }

    pub fn validate(&self) -> ConvertResult<()> {
        check_positive("base_bpm", self.base_bpm)?;
        check_positive("original_seconds", self.original_seconds)?;
        check_positive("target_seconds", self.target_seconds)?;

        // Metrical timing is a 15-bit field
        if self.ticks_per_beat == 0 || self.ticks_per_beat > 0x7FFF {
            return Err(ConvertError::InvalidSetting {
                name: "ticks_per_beat",
                message: format!("{} is outside 1..=32767", self.ticks_per_beat),
            });
        }
        if self.velocity > 127 {
            return Err(ConvertError::InvalidSetting {
                name: "velocity",
                message: format!("{} is outside 0..=127", self.velocity),
            });
        }
        Ok(())
    }

    /// Resolve the settings for a run: defaults, file, environment, then
    /// command line, validated.
    pub fn resolve(args: &Args) -> ConvertResult<Self> {
        let mut settings = Self::load(args.config.as_deref())?;
        settings.apply_args(args);
        settings.validate()?;
        info!(
            "Converting {} -> {} ({}s -> {}s at {} BPM, {} ticks per beat)",
            settings.input.display(),
            settings.output.display(),
            settings.original_seconds,
            settings.target_seconds,
            settings.base_bpm,
            settings.ticks_per_beat
        );
        Ok(settings)
    }
}

fn check_positive(name: &'static str, value: f64) -> ConvertResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConvertError::InvalidSetting {
            name,
            message: format!("{} must be a positive number", value),
        })
    }
}
