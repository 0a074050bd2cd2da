//! Majority voting across the frames of a finite clip.
//!
//! Batch counterpart to the live session: the whole clip is detected first,
//! then every letter frame casts one vote and the clip is summarized by a
//! single winning letter (or no winner at all when nothing was detected).

use crate::alphabet::{FrameLabel, Letter};
use std::collections::BTreeMap;

/// Per-clip vote counts, built in one scan and consumed once.
///
/// Tie-break rule: the first letter to *reach* the maximum count in scan
/// order wins. A later letter that merely equals the leader's count never
/// displaces it, which keeps the result deterministic for a given frame
/// order.
#[derive(Debug, Default)]
pub struct VoteTally {
    counts: BTreeMap<char, u32>,
    leader: Option<(Letter, u32)>,
    frames: u64,
}

impl VoteTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one frame label.
    ///
    /// A letter contributes one vote; a no-detection frame contributes
    /// nothing but is still counted as seen.
    pub fn add(&mut self, label: FrameLabel) {
        self.frames += 1;

        if let FrameLabel::Letter(letter) = label {
            let count = self.counts.entry(letter.as_char()).or_insert(0);
            *count += 1;

            let leads = match self.leader {
                Some((_, best)) => *count > best,
                None => true,
            };
            if leads {
                self.leader = Some((letter, *count));
            }
        }
    }

    /// Returns the winning letter and its vote count.
    ///
    /// `None` means no frame in the clip produced a letter: the explicit
    /// "no hand sign detected" outcome, not an error.
    pub fn winner(&self) -> Option<(Letter, u32)> {
        self.leader
    }

    /// Returns the vote count for one letter.
    pub fn votes_for(&self, letter: Letter) -> u32 {
        self.counts.get(&letter.as_char()).copied().unwrap_or(0)
    }

    /// Returns the total number of letter votes cast.
    pub fn total_votes(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    /// Returns the number of frames counted, detections or not.
    pub fn frames_seen(&self) -> u64 {
        self.frames
    }
}

/// Majority-votes a fully-available sequence of frame labels.
///
/// One-shot convenience over [`VoteTally`] for clips whose labels are all
/// known up front.
pub fn majority_vote<I>(labels: I) -> Option<(Letter, u32)>
where
    I: IntoIterator<Item = FrameLabel>,
{
    let mut tally = VoteTally::new();
    for label in labels {
        tally.add(label);
    }
    tally.winner()
}
