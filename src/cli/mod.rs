use clap::Parser;
use std::path::PathBuf;

/// Convert a keyboard token sequence into a tempo-stretched MIDI file
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Token sequence file to read
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// MIDI file to write
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Tempo the sequence was written at
    #[arg(long, value_name = "BPM")]
    pub bpm: Option<f64>,

    /// Original length of the piece, in seconds or M:SS
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub original_secs: Option<f64>,

    /// Length the output should play for, in seconds or M:SS
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub target_secs: Option<f64>,

    /// MIDI resolution, ticks per quarter note
    #[arg(long, value_name = "TICKS")]
    pub ticks_per_beat: Option<u16>,

    /// Note velocity for every note on and note off
    #[arg(long)]
    pub velocity: Option<u8>,

    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug output to the terminal
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse a duration given either as seconds (`235`, `79.5`) or as
/// minutes and seconds (`3:55`).
pub fn parse_duration(value: &str) -> Result<f64, String> {
    let value = value.trim();
    let seconds = match value.split_once(':') {
        Some((minutes, seconds)) => {
            let minutes: u32 = minutes
                .parse()
                .map_err(|_| format!("Error: invalid minutes in duration '{}'", value))?;
            let seconds: f64 = seconds
                .parse()
                .map_err(|_| format!("Error: invalid seconds in duration '{}'", value))?;
            if !(0.0..60.0).contains(&seconds) {
                return Err(format!(
                    "Error: seconds in '{}' must be below 60 when minutes are given",
                    value
                ));
            }
            f64::from(minutes) * 60.0 + seconds
        }
        None => value
            .parse()
            .map_err(|_| format!("Error: invalid duration '{}'", value))?,
    };

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("Error: duration '{}' must be positive", value));
    }
    Ok(seconds)
}
