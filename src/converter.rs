// converter.rs

use crate::config::Settings;
use crate::error::ConvertResult;
use crate::events::{build_events, EventSequence};
use crate::midi_output::write_midi;
use crate::sequence::load_tokens;
use crate::tempo::TempoPlan;
use log::info;
use std::fmt;
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub output: PathBuf,
    pub token_count: usize,
    pub note_count: usize,
    pub empty_chords: usize,
    pub unknown_chars: usize,
    pub tempo: u32,
    pub target_seconds: f64,
    pub equivalent_bpm: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} ({}s target at ~{:.2} BPM eq.)",
            self.output.display(),
            self.target_seconds,
            self.equivalent_bpm
        )
    }
}

/// Convert the token sequence named by `settings` into a MIDI file.
///
/// Settings are validated and the input file is checked before anything
/// else, so neither a bad setting nor a missing input creates the output file.
pub fn run(settings: &Settings) -> ConvertResult<Summary> {
    settings.validate()?;

    let tokens = load_tokens(&settings.input)?;

    let plan = TempoPlan::new(
        settings.base_bpm,
        settings.original_seconds,
        settings.target_seconds,
    )?;

    let EventSequence {
        events,
        token_count,
        note_count,
        empty_chords,
        unknown_chars,
        ..
    } = build_events(&tokens, settings.ticks_per_beat, settings.velocity);
    info!(
        "Built {} events from {} tokens ({} notes, {} empty chords)",
        events.len(),
        token_count,
        note_count,
        empty_chords
    );

    write_midi(&settings.output, plan.tempo, settings.ticks_per_beat, &events)?;

    Ok(Summary {
        output: settings.output.clone(),
        token_count,
        note_count,
        empty_chords,
        unknown_chars,
        tempo: plan.tempo,
        target_seconds: settings.target_seconds,
        equivalent_bpm: plan.equivalent_bpm(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        let summary = Summary {
            output: PathBuf::from("output_slowdown_fixed.mid"),
            token_count: 2,
            note_count: 6,
            empty_chords: 0,
            unknown_chars: 0,
            tempo: 1_487_342,
            target_seconds: 235.0,
            equivalent_bpm: 120.0 * 79.0 / 235.0,
        };
        assert_eq!(
            summary.to_string(),
            "Wrote output_slowdown_fixed.mid (235s target at ~40.34 BPM eq.)"
        );
    }
}
