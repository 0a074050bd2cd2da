//! Sign typing application entry points.
//!
//! Each command consumes a per-frame label stream (one line per frame, as
//! produced by any external detector process) and drives one aggregation
//! session over it: debounce for live streams, majority vote for recorded
//! clips, a single reduction for one frame.

use crate::alphabet::FrameLabel;
use crate::config::Config;
use crate::detect::detector::reduce_detections;
use crate::error::Result;
use crate::explain;
use crate::labels;
use crate::output;
use crate::session::transcript::LiveSession;
use crate::session::vote::VoteTally;
use std::io::{self, BufRead};

/// Run the live command: debounce stdin frame labels into a transcript.
///
/// The growing transcript is redrawn on stderr while the stream runs; the
/// final transcript goes to stdout at end of stream. An empty transcript is
/// reported as a no-detection warning, not an error.
pub fn run_live_command(config: &Config, quiet: bool, verbosity: u8) -> Result<()> {
    let stdin = io::stdin();
    let summary = aggregate_live(stdin.lock(), config, quiet, verbosity)?;

    if !quiet && config.output.live_preview {
        output::clear_line();
    }
    if verbosity >= 1 && !quiet {
        eprintln!(
            "signsh: {} frames, {} with a detection",
            summary.frames, summary.detections
        );
    }
    match summary.transcript {
        Some(transcript) => println!("{transcript}"),
        None => output::render_no_signal(),
    }
    Ok(())
}

/// Outcome of one live aggregation run.
struct LiveSummary {
    transcript: Option<String>,
    frames: u64,
    detections: u64,
}

fn aggregate_live(
    reader: impl BufRead,
    config: &Config,
    quiet: bool,
    verbosity: u8,
) -> Result<LiveSummary> {
    let mut session = LiveSession::new();

    for line in reader.lines() {
        let line = line?;
        if labels::is_comment(&line) {
            continue;
        }

        let detections = labels::parse_line(&line);
        let label = reduce_detections(&detections, config.detect.min_confidence);
        if verbosity >= 2 && !quiet {
            output::render_frame_label(session.frames_processed(), label);
        }

        let len_before = session.transcript().len();
        let snapshot = session.process(label);
        if snapshot.len() != len_before && !quiet && config.output.live_preview {
            output::render_live_transcript(snapshot);
        }
    }

    let frames = session.frames_processed();
    let detections = session.detections();
    let transcript = session.finish();
    Ok(LiveSummary {
        transcript: (!transcript.is_empty()).then_some(transcript),
        frames,
        detections,
    })
}

/// Run the clip command: majority-vote the whole stdin label stream.
pub fn run_clip_command(config: &Config, quiet: bool) -> Result<()> {
    let stdin = io::stdin();
    let tally = tally_clip(stdin.lock(), config)?;

    match tally.winner() {
        Some((letter, votes)) => {
            output::render_winner(letter, votes, tally.total_votes());
            if config.output.explain && !quiet {
                output::render_handshape(letter, explain::describe(letter));
            }
        }
        None => output::render_no_signal(),
    }
    Ok(())
}

fn tally_clip(reader: impl BufRead, config: &Config) -> Result<VoteTally> {
    let mut tally = VoteTally::new();

    for line in reader.lines() {
        let line = line?;
        if labels::is_comment(&line) {
            continue;
        }
        let detections = labels::parse_line(&line);
        tally.add(reduce_detections(&detections, config.detect.min_confidence));
    }

    Ok(tally)
}

/// Run the frame command: reduce a single stdin frame line to a letter.
pub fn run_frame_command(config: &Config, quiet: bool) -> Result<()> {
    let stdin = io::stdin();
    let label = first_frame_label(stdin.lock(), config)?;

    match label.letter() {
        Some(letter) => {
            output::render_detected(letter);
            if config.output.explain && !quiet {
                output::render_handshape(letter, explain::describe(letter));
            }
        }
        None => output::render_no_signal(),
    }
    Ok(())
}

fn first_frame_label(reader: impl BufRead, config: &Config) -> Result<FrameLabel> {
    for line in reader.lines() {
        let line = line?;
        if labels::is_comment(&line) {
            continue;
        }
        let detections = labels::parse_line(&line);
        return Ok(reduce_detections(
            &detections,
            config.detect.min_confidence,
        ));
    }
    Ok(FrameLabel::NoDetection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Letter;
    use std::io::Cursor;

    fn quiet_run(input: &str) -> LiveSummary {
        aggregate_live(Cursor::new(input), &Config::default(), true, 0).unwrap()
    }

    #[test]
    fn live_debounces_a_held_sign() {
        let summary = quiet_run("A\nA\nA\n");
        assert_eq!(summary.transcript.as_deref(), Some("A"));
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.detections, 3);
    }

    #[test]
    fn live_spells_across_gaps() {
        let summary = quiet_run("H\nH\n-\nE\n-\nY\n");
        assert_eq!(summary.transcript.as_deref(), Some("HEY"));
    }

    #[test]
    fn live_gap_repeats_the_letter() {
        let summary = quiet_run("A\n-\nA\n");
        assert_eq!(summary.transcript.as_deref(), Some("AA"));
    }

    #[test]
    fn live_empty_stream_has_no_transcript() {
        let summary = quiet_run("-\n-\n");
        assert_eq!(summary.transcript, None);
        assert_eq!(summary.frames, 2);
        assert_eq!(summary.detections, 0);
    }

    #[test]
    fn live_skips_comments() {
        let summary = quiet_run("# recorded yesterday\nB\n# mid-stream note\nB\n");
        assert_eq!(summary.transcript.as_deref(), Some("B"));
        assert_eq!(summary.frames, 2);
    }

    #[test]
    fn live_applies_confidence_floor() {
        let mut config = Config::default();
        config.detect.min_confidence = 0.5;

        let summary =
            aggregate_live(Cursor::new("A:0.3\nB:0.9\n"), &config, true, 0).unwrap();
        assert_eq!(summary.transcript.as_deref(), Some("B"));
    }

    #[test]
    fn clip_votes_for_the_majority_letter() {
        let tally = tally_clip(
            Cursor::new("A\nA\nB\nA\n-\n"),
            &Config::default(),
        )
        .unwrap();
        let (letter, votes) = tally.winner().unwrap();
        assert_eq!(letter.as_char(), 'A');
        assert_eq!(votes, 3);
        assert_eq!(tally.frames_seen(), 5);
    }

    #[test]
    fn clip_with_no_detections_has_no_winner() {
        let tally = tally_clip(Cursor::new("-\n-\n-\n"), &Config::default()).unwrap();
        assert_eq!(tally.winner(), None);
    }

    #[test]
    fn frame_reduces_first_line_only() {
        let label =
            first_frame_label(Cursor::new("C:0.8 D:0.9\nE\n"), &Config::default()).unwrap();
        assert_eq!(label.letter(), Letter::new('C'));
    }

    #[test]
    fn frame_empty_input_is_no_detection() {
        let label = first_frame_label(Cursor::new(""), &Config::default()).unwrap();
        assert_eq!(label, FrameLabel::NoDetection);
    }
}
