// events.rs

use crate::pitch::{resolve_token, Chord};
use log::{debug, warn};

/// Note messages emitted for a chord. All notes go out on channel 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteMessage {
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8, velocity: u8 },
}

/// A note message with its delta time in ticks since the previous event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedEvent {
    pub delta: u32,
    pub message: NoteMessage,
}

/// How long every chord sounds: a sixteenth note.
pub fn note_duration(ticks_per_beat: u16) -> u32 {
    u32::from(ticks_per_beat) / 4
}

/// Ordered note events for a whole token sequence, with counters for the
/// run summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventSequence {
    pub events: Vec<TimedEvent>,
    pub token_count: usize,
    pub note_count: usize,
    pub empty_chords: usize,
    pub unknown_chars: usize,
    /// Distinct unmapped characters, in first-seen order.
    pub unknown_distinct: Vec<char>,
}

pub struct EventBuilder {
    duration: u32,
    velocity: u8,
    sequence: EventSequence,
}

impl EventBuilder {
    pub fn new(ticks_per_beat: u16, velocity: u8) -> Self {
        EventBuilder {
            duration: note_duration(ticks_per_beat),
            velocity,
            sequence: EventSequence::default(),
        }
    }

    /// Append one chord: every note-on at delta 0, then every note-off with
    /// only the first one carrying the chord duration.
    pub fn push_chord(&mut self, notes: &[u8]) {
        let velocity = self.velocity;

        for &note in notes {
            self.sequence.events.push(TimedEvent {
                delta: 0,
                message: NoteMessage::NoteOn { note, velocity },
            });
        }

        for (i, &note) in notes.iter().enumerate() {
            self.sequence.events.push(TimedEvent {
                delta: if i == 0 { self.duration } else { 0 },
                message: NoteMessage::NoteOff { note, velocity },
            });
        }

        self.sequence.note_count += notes.len();
    }

    /// Resolve `token` and append its chord.
    pub fn push_token(&mut self, token: &str) {
        let Chord { notes, unknown } = resolve_token(token);

        self.sequence.token_count += 1;
        self.sequence.unknown_chars += unknown.len();
        for key in unknown {
            if !self.sequence.unknown_distinct.contains(&key) {
                self.sequence.unknown_distinct.push(key);
            }
        }

        if notes.is_empty() {
            debug!("Token {:?} maps to no notes, skipping", token);
            self.sequence.empty_chords += 1;
            return;
        }

        debug!("Token {:?} -> notes {:?}", token, notes);
        self.push_chord(&notes);
    }

    pub fn finish(self) -> EventSequence {
        let sequence = self.sequence;
        if sequence.unknown_chars > 0 {
            warn!(
                "Ignored {} unmapped character(s): {:?}",
                sequence.unknown_chars, sequence.unknown_distinct
            );
        }
        sequence
    }
}

/// Build the event sequence for `tokens` in order.
pub fn build_events<S: AsRef<str>>(
    tokens: &[S],
    ticks_per_beat: u16,
    velocity: u8,
) -> EventSequence {
    let mut builder = EventBuilder::new(ticks_per_beat, velocity);
    for token in tokens {
        builder.push_token(token.as_ref());
    }
    builder.finish()
}
