//! End-to-end aggregation tests over the public API: scripted detector and
//! frame source through a capture session, and raw label streams through
//! the batch voter.

use signsh::detect::detector::{Detection, MockDetector};
use signsh::detect::frame::MockFrameSource;
use signsh::session::runner::{CaptureSession, SessionConfig};
use signsh::sink::CollectorSink;
use signsh::{FrameLabel, Letter, majority_vote, reduce_detections};
use std::sync::Arc;

fn quiet_session() -> CaptureSession {
    CaptureSession::new(SessionConfig {
        quiet: true,
        ..SessionConfig::default()
    })
}

#[test]
fn camera_session_spells_a_word() {
    // A signer holds H, drops the hand, then holds I. The held frames
    // debounce away and the gap frames change nothing.
    let labels = ["H", "H", "H", "-", "-", "I", "I"];
    let source = MockFrameSource::new().with_blank_frames(labels.len());
    let detector = Arc::new(MockDetector::new("asl-letters").with_labels(&labels));

    let handle = quiet_session()
        .start(Box::new(source), detector, Box::new(CollectorSink::new()))
        .unwrap();

    assert_eq!(handle.wait(), Some("HI".to_string()));
}

#[test]
fn session_preserves_adjacency_only_dedup() {
    // The documented limitation survives the whole pipeline: a gap between
    // two identical letters produces a double letter.
    let labels = ["A", "-", "A"];
    let source = MockFrameSource::new().with_blank_frames(labels.len());
    let detector = Arc::new(MockDetector::new("asl-letters").with_labels(&labels));

    let handle = quiet_session()
        .start(Box::new(source), detector, Box::new(CollectorSink::new()))
        .unwrap();

    assert_eq!(handle.wait(), Some("AA".to_string()));
}

#[test]
fn session_transcript_never_repeats_adjacent_letters() {
    let labels = [
        "A", "A", "B", "b", "-", "B", "C", "del", "C", "c", "A", "A", "A",
    ];
    let source = MockFrameSource::new().with_blank_frames(labels.len());
    let detector = Arc::new(MockDetector::new("asl-letters").with_labels(&labels));

    let handle = quiet_session()
        .start(Box::new(source), detector, Box::new(CollectorSink::new()))
        .unwrap();

    let transcript = handle.wait().unwrap();
    let chars: Vec<char> = transcript.chars().collect();
    for pair in chars.windows(2) {
        assert_ne!(pair[0], pair[1], "adjacent repeat in {:?}", transcript);
    }
}

#[test]
fn session_with_confidence_floor_skips_weak_boxes() {
    let source = MockFrameSource::new().with_blank_frames(2);
    let detector = Arc::new(
        MockDetector::new("asl-letters")
            .with_response(vec![Detection::new("A", 0.2)])
            .with_response(vec![Detection::new("B", 0.9)]),
    );
    let session = CaptureSession::new(SessionConfig {
        min_confidence: 0.5,
        quiet: true,
        ..SessionConfig::default()
    });

    let handle = session
        .start(Box::new(source), detector, Box::new(CollectorSink::new()))
        .unwrap();

    assert_eq!(handle.wait(), Some("B".to_string()));
}

#[test]
fn clip_of_labels_votes_for_the_majority() {
    let clip: Vec<FrameLabel> = ["A", "A", "B", "A", "-"]
        .iter()
        .map(|s| FrameLabel::parse(s))
        .collect();
    let (letter, votes) = majority_vote(clip).unwrap();
    assert_eq!(letter.as_char(), 'A');
    assert_eq!(votes, 3);
}

#[test]
fn empty_clip_reports_no_signal() {
    let clip: Vec<FrameLabel> = ["-", "-"].iter().map(|s| FrameLabel::parse(s)).collect();
    assert_eq!(majority_vote(clip), None);
}

#[test]
fn detector_order_decides_the_frame_label() {
    // Reduction never re-sorts: the first box wins even against a more
    // confident later box.
    let detections = vec![Detection::new("Q", 0.51), Detection::new("R", 0.97)];
    assert_eq!(
        reduce_detections(&detections, 0.0).letter(),
        Letter::new('Q')
    );
}
