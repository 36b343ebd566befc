// pitch.rs

use log::debug;

// Top row, C5..B5
pub const CHORDS: &[(char, u8)] = &[
    ('Q', 72),
    ('W', 74),
    ('E', 76),
    ('R', 77),
    ('T', 79),
    ('Y', 81),
    ('U', 83),
];

// Home row, C4..B4
pub const MELODY: &[(char, u8)] = &[
    ('A', 60),
    ('S', 62),
    ('D', 64),
    ('F', 65),
    ('G', 67),
    ('H', 69),
    ('J', 71),
];

// Bottom row, C2..B2
pub const BASS: &[(char, u8)] = &[
    ('Z', 36),
    ('X', 38),
    ('C', 40),
    ('V', 41),
    ('B', 43),
    ('N', 45),
    ('M', 47),
];

/// Registers in the order characters are checked against them.
pub const REGISTERS: [&[(char, u8)]; 3] = [CHORDS, MELODY, BASS];

fn lookup(table: &[(char, u8)], key: char) -> Option<u8> {
    table.iter().find(|(k, _)| *k == key).map(|(_, pitch)| *pitch)
}

/// Pitches resolved for a single token.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Chord {
    pub notes: Vec<u8>,
    /// Characters that matched none of the registers, in token order.
    pub unknown: Vec<char>,
}

impl Chord {
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Resolve every character of `token` against the chords, melody and bass
/// registers.
pub fn resolve_token(token: &str) -> Chord {
    resolve_with(token, &REGISTERS)
}

/// Characters are scanned left to right and each one is checked against
/// `tables` in order, so a character present in several tables contributes
/// one note per table.
fn resolve_with(token: &str, tables: &[&[(char, u8)]]) -> Chord {
    let mut chord = Chord::default();

    for key in token.chars() {
        let before = chord.notes.len();
        for table in tables {
            if let Some(pitch) = lookup(table, key) {
                chord.notes.push(pitch);
            }
        }
        if chord.notes.len() == before {
            debug!("Ignoring unmapped character {:?} in token {:?}", key, token);
            chord.unknown.push(key);
        }
    }

    chord
}
