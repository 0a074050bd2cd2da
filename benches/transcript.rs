use criterion::{Criterion, black_box, criterion_group, criterion_main};
use signsh::{FrameLabel, LiveSession, majority_vote};

/// A minute of 30fps camera frames: held signs, gaps, letter changes.
fn synthetic_stream(frames: usize) -> Vec<FrameLabel> {
    let symbols = ["A", "A", "A", "-", "B", "B", "-", "-", "C", "A"];
    (0..frames)
        .map(|i| FrameLabel::parse(symbols[i % symbols.len()]))
        .collect()
}

fn bench_live_session(c: &mut Criterion) {
    let stream = synthetic_stream(1800);

    c.bench_function("live_session_1800_frames", |b| {
        b.iter(|| {
            let mut session = LiveSession::new();
            for label in &stream {
                black_box(session.process(*label));
            }
            session.finish()
        })
    });
}

fn bench_majority_vote(c: &mut Criterion) {
    let stream = synthetic_stream(1800);

    c.bench_function("majority_vote_1800_frames", |b| {
        b.iter(|| majority_vote(black_box(stream.iter().copied())))
    });
}

criterion_group!(benches, bench_live_session, bench_majority_vote);
criterion_main!(benches);
