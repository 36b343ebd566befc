// tempo.rs

use crate::error::{ConvertError, ConvertResult};
use log::debug;

const MICROS_PER_MINUTE: f64 = 60_000_000.0;

/// Largest value the 24-bit Set Tempo meta event can hold.
pub const MAX_TEMPO: u32 = 0x00FF_FFFF;

/// Microseconds per quarter note for `bpm`, rounded to the nearest integer.
pub fn bpm_to_tempo(bpm: f64) -> u64 {
    (MICROS_PER_MINUTE / bpm).round() as u64
}

/// Tempo that makes a piece written at `base_bpm` last `target_secs`
/// instead of `original_secs`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempoPlan {
    pub base_bpm: f64,
    pub stretch: f64,
    pub tempo: u32,
}

impl TempoPlan {
    pub fn new(base_bpm: f64, original_secs: f64, target_secs: f64) -> ConvertResult<Self> {
        let stretch = target_secs / original_secs;
        let stretched = (bpm_to_tempo(base_bpm) as f64 * stretch).round();

        if !stretched.is_finite() || stretched < 1.0 || stretched > f64::from(MAX_TEMPO) {
            return Err(ConvertError::TempoOutOfRange {
                tempo: stretched.max(0.0) as u64,
            });
        }

        let tempo = stretched as u32;
        debug!(
            "Stretch factor {:.4} turns {} BPM into tempo {} µs/quarter",
            stretch, base_bpm, tempo
        );

        Ok(TempoPlan {
            base_bpm,
            stretch,
            tempo,
        })
    }

    /// BPM the stretched output sounds like.
    pub fn equivalent_bpm(&self) -> f64 {
        self.base_bpm / self.stretch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bpm_to_tempo() {
        assert_eq!(bpm_to_tempo(120.0), 500_000);
        assert_eq!(bpm_to_tempo(60.0), 1_000_000);
        assert_eq!(bpm_to_tempo(7.0), 8_571_429);
    }

    #[test]
    fn test_default_plan() {
        let plan = TempoPlan::new(120.0, 79.0, 235.0).unwrap();
        let expected = (500_000.0_f64 * (235.0 / 79.0)).round() as u32;
        assert_eq!(plan.tempo, expected);
        assert_eq!(plan.tempo, 1_487_342);
        assert!((plan.equivalent_bpm() - 40.340_425).abs() < 1e-4);
    }

    #[test]
    fn test_identity_stretch() {
        let plan = TempoPlan::new(120.0, 60.0, 60.0).unwrap();
        assert_eq!(plan.tempo, 500_000);
        assert!((plan.equivalent_bpm() - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tempo_overflow_rejected() {
        let err = TempoPlan::new(1.0, 1.0, 1000.0).unwrap_err();
        assert!(matches!(err, ConvertError::TempoOutOfRange { .. }));
    }
}
