// midi_output.rs

use crate::error::{ConvertError, ConvertResult};
use crate::events::{NoteMessage, TimedEvent};
use log::{debug, info};
use midly::num::{u15, u24, u28, u4, u7};
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
};
use std::fs;
use std::path::Path;

const CHANNEL: u8 = 0;

fn to_track_event(event: &TimedEvent) -> TrackEvent<'static> {
    let message = match event.message {
        NoteMessage::NoteOn { note, velocity } => MidiMessage::NoteOn {
            key: u7::new(note),
            vel: u7::new(velocity),
        },
        NoteMessage::NoteOff { note, velocity } => MidiMessage::NoteOff {
            key: u7::new(note),
            vel: u7::new(velocity),
        },
    };

    TrackEvent {
        delta: u28::new(event.delta),
        kind: TrackEventKind::Midi {
            channel: u4::new(CHANNEL),
            message,
        },
    }
}

/// Build the single output track: Set Tempo, the note events, End of Track.
pub fn build_track(tempo: u32, events: &[TimedEvent]) -> Track<'static> {
    let mut track: Track<'static> = Vec::with_capacity(events.len() + 2);

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(tempo))),
    });
    track.extend(events.iter().map(to_track_event));
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    track
}

/// Encode a complete Standard MIDI File in memory.
pub fn encode_smf(
    tempo: u32,
    ticks_per_beat: u16,
    events: &[TimedEvent],
) -> ConvertResult<Vec<u8>> {
    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(ticks_per_beat)),
    ));
    smf.tracks.push(build_track(tempo, events));

    let mut buf = Vec::new();
    smf.write_std(&mut buf).map_err(ConvertError::Encode)?;
    debug!("Encoded {} events into {} bytes", events.len(), buf.len());
    Ok(buf)
}

/// Encode and write the file. Nothing is written if encoding fails.
pub fn write_midi(
    path: &Path,
    tempo: u32,
    ticks_per_beat: u16,
    events: &[TimedEvent],
) -> ConvertResult<()> {
    let bytes = encode_smf(tempo, ticks_per_beat, events)?;
    fs::write(path, &bytes).map_err(|source| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::build_events;

    #[test]
    fn test_track_starts_with_tempo_and_ends_with_terminator() {
        let track = build_track(1_487_342, &[]);
        assert_eq!(track.len(), 2);
        assert_eq!(
            track[0].kind,
            TrackEventKind::Meta(MetaMessage::Tempo(u24::new(1_487_342)))
        );
        assert_eq!(track[1].kind, TrackEventKind::Meta(MetaMessage::EndOfTrack));
    }

    #[test]
    fn test_note_events_keep_deltas() {
        let sequence = build_events(&["QA"], 480, 64);
        let track = build_track(500_000, &sequence.events);
        let deltas: Vec<u32> = track.iter().map(|e| e.delta.as_int()).collect();
        assert_eq!(deltas, vec![0, 0, 0, 120, 0, 0]);
        assert_eq!(
            track[1].kind,
            TrackEventKind::Midi {
                channel: u4::new(0),
                message: MidiMessage::NoteOn {
                    key: u7::new(72),
                    vel: u7::new(64)
                }
            }
        );
    }

    #[test]
    fn test_encoded_bytes_parse_back() {
        let sequence = build_events(&["QAZ"], 480, 64);
        let bytes = encode_smf(500_000, 480, &sequence.events).unwrap();
        assert_eq!(&bytes[..4], b"MThd");

        let smf = Smf::parse(&bytes).unwrap();
        assert_eq!(smf.header.format, Format::SingleTrack);
        assert_eq!(smf.header.timing, Timing::Metrical(u15::new(480)));
        assert_eq!(smf.tracks.len(), 1);
        assert_eq!(smf.tracks[0].len(), 8);
    }
}
