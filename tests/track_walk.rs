use miditape::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn accumulates_ticks() {
    let data = [
        0x00, 0x90, 0x3C, 0x40, //
        0x83, 0x60, 0x80, 0x3C, 0x00, //
        0x87, 0x68, 0xFF, 0x2F, 0x00,
    ];
    let events: Vec<_> = TrackCursor::new(&data).map(Result::unwrap).collect();

    let ticks: Vec<_> = events.iter().map(|e| e.accumulated_ticks()).collect();
    assert_eq!(ticks, [0, 480, 1480]);

    let offsets: Vec<_> = events.iter().map(|e| e.offset()).collect();
    assert_eq!(offsets, [1, 6, 11]);

    assert_eq!(events[1].bytes(), [0x80, 0x3C, 0x00]);
}

#[test]
fn stops_at_end_of_track() {
    // anything after end of track is never read
    let data = [0x00, 0xFF, 0x2F, 0x00, 0x00, 0x00];
    let mut cursor = TrackCursor::new(&data);

    assert!(cursor.next_event().unwrap().unwrap().is_end_of_track());
    assert!(cursor.is_finished());
    assert_eq!(cursor.position(), 4);
    assert!(cursor.next().is_none());
}

#[test]
fn stops_when_data_runs_out() {
    let data = [0x00, 0xC1, 0x10];
    let mut cursor = TrackCursor::new(&data);

    assert_eq!(cursor.next_event().unwrap().unwrap().step(), (0, 2));
    assert!(cursor.next_event().unwrap().is_none());
}

#[test]
fn event_past_end_of_chunk() {
    let data = [0x00, 0xFF, 0x01, 0x05, b'a', b'b'];
    let mut cursor = TrackCursor::new(&data);

    let err = cursor.next_event().unwrap_err();
    assert_eq!(err.position(), 1);
    assert_eq!(
        err.parse_error(),
        Some(ParseError::Chunk(ChunkError::TruncatedPayload {
            declared: 8,
            available: 5
        }))
    );
    assert_eq!(cursor.position(), 0);
    assert!(cursor.is_finished());
}

#[test]
fn malformed_delta_time() {
    let data = [0x80, 0x80, 0x80, 0x80, 0x00, 0x90, 0x3C, 0x40];
    let mut cursor = TrackCursor::new(&data);

    let err = cursor.next().unwrap().unwrap_err();
    assert_eq!(err.position(), 0);
    assert_eq!(err.parse_error(), Some(ParseError::MalformedVarint));
    assert!(cursor.next().is_none());
}

#[test]
fn tracks_walk_independently() {
    let mut bytes = Chunk::new(ChunkType::HEADER, vec![0, 1, 0, 2, 0, 96]).to_bytes();
    bytes.extend(
        Chunk::new(
            ChunkType::TRACK,
            vec![0x00, 0x90, 0x3C, 0x40, 0x60, 0x80, 0x3C, 0x00, 0x00, 0xFF, 0x2F, 0x00],
        )
        .to_bytes(),
    );
    // second track breaks on its second event
    bytes.extend(Chunk::new(ChunkType::TRACK, vec![0x00, 0x91, 0x40, 0x40, 0x00, 0x01]).to_bytes());

    let file = MidiFile::load(&bytes).unwrap();
    let mut states = file.track_states();
    assert_eq!(TrackState::count_active(&states), 2);

    // round-robin, one event per active track per pass
    let mut seen = Vec::new();
    let mut errors = 0;
    while states.iter().any(|s| s.is_active()) {
        for (i, state) in states.iter_mut().enumerate() {
            if !state.is_active() {
                continue;
            }
            match state.cursor_mut().next_event() {
                Ok(Some(event)) => seen.push((i, event.step())),
                Ok(None) => {}
                Err(_) => errors += 1,
            }
        }
    }

    assert_eq!(
        seen,
        [(1, (0, 3)), (2, (0, 3)), (1, (0x60, 3)), (1, (0, 3))]
    );
    assert_eq!(errors, 1);
    assert_eq!(TrackState::count_active(&states), 0);
    assert_eq!(states[1].cursor().accumulated_ticks(), 0x60);
}

#[test]
fn count_active_drops_as_tracks_finish() {
    let short = [0x00, 0xFF, 0x2F, 0x00];
    let long = [0x00, 0x90, 0x3C, 0x40, 0x10, 0xFF, 0x2F, 0x00];
    let mut states = vec![
        TrackState::new(&short, true),
        TrackState::new(&long, true),
        TrackState::new(&[0x00, 0x01], false),
    ];
    assert_eq!(TrackState::count_active(&states), 2);

    states[0].cursor_mut().next_event().unwrap();
    assert_eq!(TrackState::count_active(&states), 1);

    states[1].cursor_mut().next_event().unwrap();
    assert_eq!(TrackState::count_active(&states), 1);
    states[1].cursor_mut().next_event().unwrap();
    assert_eq!(TrackState::count_active(&states), 0);
}
