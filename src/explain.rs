//! Catalog of handshape descriptions for the fingerspelling alphabet.
//!
//! Static metadata only; nothing here touches the detector. Lookups on
//! symbols outside the catalog return a fixed placeholder instead of
//! failing, so output formatting never has to handle a missing entry.

use crate::alphabet::Letter;
use crate::defaults;

/// Description of the hand shape for one letter.
#[derive(Debug, Clone, PartialEq)]
pub struct HandshapeInfo {
    /// The letter this shape spells.
    pub letter: char,
    /// Short human-readable description of the hand shape.
    pub description: &'static str,
}

/// Handshape descriptions for all 26 letters, ordered alphabetically.
pub const HANDSHAPES: &[HandshapeInfo] = &[
    HandshapeInfo {
        letter: 'A',
        description: "Closed fist with the thumb resting alongside the index finger.",
    },
    HandshapeInfo {
        letter: 'B',
        description: "Flat hand, fingers together and pointing up, thumb folded across the palm.",
    },
    HandshapeInfo {
        letter: 'C',
        description: "Fingers and thumb curved together into a C shape.",
    },
    HandshapeInfo {
        letter: 'D',
        description: "Index finger pointing up, remaining fingertips touching the thumb.",
    },
    HandshapeInfo {
        letter: 'E',
        description: "Fingertips folded down to rest on the thumb.",
    },
    HandshapeInfo {
        letter: 'F',
        description: "Index fingertip and thumb touching in a circle, other fingers extended.",
    },
    HandshapeInfo {
        letter: 'G',
        description: "Index finger and thumb held flat and parallel, pointing to the side.",
    },
    HandshapeInfo {
        letter: 'H',
        description: "Index and middle fingers extended together, pointing to the side.",
    },
    HandshapeInfo {
        letter: 'I',
        description: "Closed fist with the pinky finger pointing up.",
    },
    HandshapeInfo {
        letter: 'J',
        description: "Pinky finger extended, tracing the curve of a J in the air.",
    },
    HandshapeInfo {
        letter: 'K',
        description: "Index and middle fingers up in a V, thumb touching the middle finger's base.",
    },
    HandshapeInfo {
        letter: 'L',
        description: "Index finger up and thumb out at a right angle, forming an L.",
    },
    HandshapeInfo {
        letter: 'M',
        description: "Thumb tucked under the first three fingers of a closed hand.",
    },
    HandshapeInfo {
        letter: 'N',
        description: "Thumb tucked under the first two fingers of a closed hand.",
    },
    HandshapeInfo {
        letter: 'O',
        description: "Fingers and thumb rounded together into an O shape.",
    },
    HandshapeInfo {
        letter: 'P',
        description: "K handshape turned to point downward.",
    },
    HandshapeInfo {
        letter: 'Q',
        description: "Index finger and thumb pointing downward, like a G turned down.",
    },
    HandshapeInfo {
        letter: 'R',
        description: "Index and middle fingers crossed, pointing up.",
    },
    HandshapeInfo {
        letter: 'S',
        description: "Closed fist with the thumb crossed over the front of the fingers.",
    },
    HandshapeInfo {
        letter: 'T',
        description: "Fist with the thumb tucked between the index and middle fingers.",
    },
    HandshapeInfo {
        letter: 'U',
        description: "Index and middle fingers together, pointing up.",
    },
    HandshapeInfo {
        letter: 'V',
        description: "Index and middle fingers spread apart in a V, pointing up.",
    },
    HandshapeInfo {
        letter: 'W',
        description: "Index, middle, and ring fingers spread apart, pointing up.",
    },
    HandshapeInfo {
        letter: 'X',
        description: "Index finger bent into a hook, other fingers closed.",
    },
    HandshapeInfo {
        letter: 'Y',
        description: "Thumb and pinky extended, middle fingers closed.",
    },
    HandshapeInfo {
        letter: 'Z',
        description: "Index finger extended, tracing a Z in the air.",
    },
];

/// Returns the handshape description for a letter.
pub fn describe(letter: Letter) -> &'static str {
    describe_symbol(letter.as_char())
}

/// Returns the handshape description for a raw symbol.
///
/// Symbols without a catalog entry get a fixed placeholder.
pub fn describe_symbol(symbol: char) -> &'static str {
    let symbol = symbol.to_ascii_uppercase();
    HANDSHAPES
        .iter()
        .find(|info| info.letter == symbol)
        .map(|info| info.description)
        .unwrap_or(defaults::NO_DESCRIPTION)
}
