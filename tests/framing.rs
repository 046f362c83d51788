use miditape::prelude::*;
use pretty_assertions::assert_eq;

fn chunk_error(err: &ReaderError) -> ChunkError {
    match err.parse_error() {
        Some(ParseError::Chunk(e)) => e,
        other => panic!("expected a chunk error, got {other:?}"),
    }
}

#[test]
fn concatenated_chunks_frame_in_order() {
    let first = Chunk::new(ChunkType::HEADER, vec![0, 0, 0, 1, 0, 96]);
    let second = Chunk::new(ChunkType::TRACK, vec![0x00, 0x90, 0x3C, 0x40, 0x00, 0xFF, 0x2F, 0x00]);

    let mut bytes = first.to_bytes();
    bytes.extend(second.to_bytes());

    let chunks = frame_chunks(&bytes).unwrap();
    assert_eq!(chunks, [first, second]);
}

#[test]
fn tag_is_not_validated() {
    let bytes = [0x00, 0xFF, 0x10, 0x80, 0, 0, 0, 1, 0xAB];
    let chunks = frame_chunks(&bytes).unwrap();

    assert_eq!(chunks[0].tag().bytes(), [0x00, 0xFF, 0x10, 0x80]);
    assert_eq!(chunks[0].data(), [0xAB]);
    assert!(!chunks[0].is_track());
}

#[test]
fn large_length_is_big_endian() {
    let data = vec![0x5A; 0x0102];
    let mut bytes = b"MTrk".to_vec();
    bytes.extend([0x00, 0x00, 0x01, 0x02]);
    bytes.extend(&data);

    let chunks = frame_chunks(&bytes).unwrap();
    assert_eq!(chunks[0].length(), 0x0102);
    assert_eq!(chunks[0].data(), data.as_slice());
}

#[test]
fn truncated_header_consumes_nothing() {
    let mut bytes = Chunk::new(ChunkType::HEADER, vec![0, 0, 0, 1, 0, 96]).to_bytes();
    bytes.extend(b"MTrk\x00");

    let mut iter = ChunkIter::new(&bytes);
    assert!(iter.next().unwrap().is_ok());
    assert_eq!(iter.buffer_position(), 14);

    let err = iter.next().unwrap().unwrap_err();
    assert_eq!(err.position(), 14);
    assert_eq!(chunk_error(&err), ChunkError::TruncatedHeader { available: 5 });
    assert_eq!(iter.buffer_position(), 14);
    assert!(iter.next().is_none());

    let err = frame_chunks(&bytes).unwrap_err();
    assert_eq!(chunk_error(&err), ChunkError::TruncatedHeader { available: 5 });
}

#[test]
fn truncated_payload() {
    let bytes = [b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF];
    let err = frame_chunks(&bytes).unwrap_err();

    assert_eq!(err.position(), 0);
    assert_eq!(
        chunk_error(&err),
        ChunkError::TruncatedPayload {
            declared: 4,
            available: 2
        }
    );
}

#[test]
fn empty_buffer_has_no_chunks() {
    assert!(frame_chunks(&[]).unwrap().is_empty());
    assert!(MidiFile::load(&[]).unwrap().is_empty());
    assert!(!is_standard_midi_file(&[]));
    assert!(!is_standard_midi_file(b"MTrk\x00\x00\x00\x00"));
}

#[test]
fn track_states_mark_tracks_playable() {
    let mut bytes = Chunk::new(ChunkType::HEADER, vec![0, 0, 0, 1, 0, 96]).to_bytes();
    bytes.extend(Chunk::new(ChunkType::TRACK, vec![0x00, 0xFF, 0x2F, 0x00]).to_bytes());
    bytes.extend(Chunk::new(ChunkType::new(*b"XFIH"), vec![0x01]).to_bytes());

    let file = MidiFile::load(&bytes).unwrap();
    let states = file.track_states();

    let playable: Vec<_> = states.iter().map(|s| s.is_playable()).collect();
    assert_eq!(playable, [false, true, false]);
    assert!(states.iter().all(|s| s.cursor().position() == 0));

    assert_eq!(file.get(2).unwrap().data(), [0x01]);
    assert!(file.get(3).is_none());
}

#[test]
fn missing_header() {
    let bytes = Chunk::new(ChunkType::TRACK, vec![0x00, 0xFF, 0x2F, 0x00]).to_bytes();
    let file = MidiFile::load(&bytes).unwrap();

    assert!(file.header().is_none());
    assert_eq!(file.tracks().count(), 1);
}
