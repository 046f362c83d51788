use miditape::prelude::*;
use pretty_assertions::assert_eq;

fn loop_through(bytes: &[u8]) -> Vec<Vec<(u32, usize)>> {
    let file = MidiFile::load(bytes).unwrap();
    let mut tracks = Vec::new();

    for track in file.tracks() {
        let mut steps = Vec::new();
        for event in track.cursor() {
            match event {
                Ok(event) => steps.push(event.step()),
                Err(e) => panic!("Error in track {}: {:?}", tracks.len(), e),
            }
        }
        tracks.push(steps);
    }
    tracks
}

#[test]
fn read_simple() {
    let tracks = loop_through(include_bytes!("../test-asset/Simple.mid"));

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0], [(0, 8), (0, 6), (0, 7), (0, 3)]);
    assert_eq!(
        tracks[1],
        [
            (0, 7),
            (0, 2),
            (0, 3),
            (0, 3),
            (480, 3),
            (0, 3),
            (1000, 2),
            (200, 3),
            (0, 3)
        ]
    );
}

#[test]
fn read_simple_chunks() {
    let bytes = include_bytes!("../test-asset/Simple.mid");
    assert!(is_standard_midi_file(bytes));

    let file = MidiFile::load(bytes).unwrap();
    let tags: Vec<_> = file.chunks().iter().map(|c| c.tag()).collect();
    assert_eq!(
        tags,
        [
            ChunkType::HEADER,
            ChunkType::TRACK,
            ChunkType::new(*b"XFIH"),
            ChunkType::TRACK
        ]
    );
    let lengths: Vec<_> = file.chunks().iter().map(|c| c.length()).collect();
    assert_eq!(lengths, [6, 28, 2, 41]);

    let header = file.header().unwrap().unwrap();
    assert_eq!(header.format_type(), FormatType::Simultaneous);
    assert_eq!(header.num_tracks(), 2);
    assert_eq!(header.timing(), Timing::TicksPerQuarterNote(480));
}

#[test]
fn read_truncated() {
    let err = MidiFile::load(include_bytes!("../test-asset/Truncated.mid")).unwrap_err();

    assert_eq!(err.position(), 60);
    assert_eq!(
        err.parse_error(),
        Some(ParseError::Chunk(ChunkError::TruncatedPayload {
            declared: 41,
            available: 36
        }))
    );
}

#[test]
fn read_running_status() {
    let file = MidiFile::load(include_bytes!("../test-asset/RunningStatus.mid")).unwrap();
    let track = file.tracks().next().unwrap();
    let mut cursor = track.cursor();

    let first = cursor.next_event().unwrap().unwrap();
    assert_eq!(first.bytes(), [0x90, 0x3C, 0x40]);

    let err = cursor.next_event().unwrap_err();
    assert_eq!(err.position(), 5);
    assert_eq!(
        err.parse_error(),
        Some(ParseError::Event(EventError::UnknownEventType(0x3E)))
    );

    // nothing consumed, and the track is done
    assert_eq!(cursor.position(), 4);
    assert!(cursor.is_finished());
    assert!(cursor.next_event().unwrap().is_none());
}
