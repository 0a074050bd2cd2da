use crate::alphabet::FrameLabel;
use crate::detect::frame::VideoFrame;
use crate::error::{Result, SignshError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One detection from the model for a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Class name emitted by the model (e.g. "A").
    pub label: String,
    /// Confidence score in [0, 1].
    pub confidence: f32,
}

impl Detection {
    /// Creates a new detection.
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Trait for sign detection models.
///
/// This trait allows swapping implementations (real object-detection model
/// vs mock). The model is loaded once by the embedding application and
/// shared across sessions via `Arc`.
pub trait Detector: Send + Sync {
    /// Detect hand signs in one frame.
    ///
    /// # Arguments
    /// * `frame` - A captured RGB8 frame
    ///
    /// # Returns
    /// Zero or more detections in model output order, or an error
    fn detect(&self, frame: &VideoFrame) -> Result<Vec<Detection>>;

    /// Get the name of the loaded model
    fn model_name(&self) -> &str;

    /// Check if the detector is ready
    fn is_ready(&self) -> bool;
}

/// Implement Detector for Arc<T> to allow sharing across sessions.
impl<T: Detector> Detector for Arc<T> {
    fn detect(&self, frame: &VideoFrame) -> Result<Vec<Detection>> {
        (**self).detect(frame)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

/// Reduces one frame's detections to a single frame label.
///
/// Takes the first detection meeting the confidence floor, in the order the
/// detector returned them, with no re-sorting by confidence. With the default
/// floor of 0.0 this is exactly the first returned box. The chosen label is
/// parsed defensively: an out-of-alphabet class name yields
/// [`FrameLabel::NoDetection`].
pub fn reduce_detections(detections: &[Detection], min_confidence: f32) -> FrameLabel {
    detections
        .iter()
        .find(|d| d.confidence >= min_confidence)
        .map(|d| FrameLabel::parse(&d.label))
        .unwrap_or(FrameLabel::NoDetection)
}

/// Mock detector for testing
#[derive(Debug)]
pub struct MockDetector {
    model_name: String,
    responses: Mutex<VecDeque<Vec<Detection>>>,
    should_fail: bool,
}

impl MockDetector {
    /// Create a new mock detector with no scripted responses
    pub fn new(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            responses: Mutex::new(VecDeque::new()),
            should_fail: false,
        }
    }

    /// Append one frame's worth of scripted detections
    pub fn with_response(self, detections: Vec<Detection>) -> Self {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(detections);
        }
        self
    }

    /// Append a scripted single-label detection per frame.
    ///
    /// The no-detection token yields a frame with no detections.
    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        for label in labels {
            let detections = if *label == crate::defaults::NO_DETECTION_TOKEN {
                Vec::new()
            } else {
                vec![Detection::new(*label, 0.9)]
            };
            self = self.with_response(detections);
        }
        self
    }

    /// Configure the mock to fail on detect
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }
}

impl Detector for MockDetector {
    fn detect(&self, _frame: &VideoFrame) -> Result<Vec<Detection>> {
        if self.should_fail {
            return Err(SignshError::Detection {
                message: "mock detection failure".to_string(),
            });
        }
        let mut responses = self.responses.lock().map_err(|_| SignshError::Detection {
            message: "mock response queue poisoned".to_string(),
        })?;
        // Past the end of the script, frames come back empty.
        Ok(responses.pop_front().unwrap_or_default())
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn is_ready(&self) -> bool {
        !self.should_fail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Letter;

    fn blank_frame() -> VideoFrame {
        VideoFrame::new(vec![0u8; 4 * 4 * 3], 4, 4, 0)
    }

    #[test]
    fn reduce_takes_first_detection() {
        // Detector order is authoritative, even when a later box scores higher.
        let detections = vec![Detection::new("A", 0.4), Detection::new("B", 0.9)];
        let label = reduce_detections(&detections, 0.0);
        assert_eq!(label.letter().unwrap().as_char(), 'A');
    }

    #[test]
    fn reduce_applies_confidence_floor() {
        let detections = vec![Detection::new("A", 0.2), Detection::new("B", 0.8)];
        let label = reduce_detections(&detections, 0.5);
        assert_eq!(label.letter().unwrap().as_char(), 'B');
    }

    #[test]
    fn reduce_empty_is_no_detection() {
        assert_eq!(reduce_detections(&[], 0.0), FrameLabel::NoDetection);
    }

    #[test]
    fn reduce_all_below_floor_is_no_detection() {
        let detections = vec![Detection::new("A", 0.1)];
        assert_eq!(reduce_detections(&detections, 0.5), FrameLabel::NoDetection);
    }

    #[test]
    fn reduce_unknown_label_is_no_detection() {
        // First box wins even when its class name has no letter counterpart;
        // the frame is skipped rather than falling through to the next box.
        let detections = vec![Detection::new("space", 0.9), Detection::new("A", 0.8)];
        assert_eq!(reduce_detections(&detections, 0.0), FrameLabel::NoDetection);
    }

    #[test]
    fn mock_detector_replays_script() {
        let detector = MockDetector::new("test-model").with_labels(&["A", "-", "B"]);
        let frame = blank_frame();

        let first = detector.detect(&frame).unwrap();
        assert_eq!(first[0].label, "A");

        let second = detector.detect(&frame).unwrap();
        assert!(second.is_empty());

        let third = detector.detect(&frame).unwrap();
        assert_eq!(third[0].label, "B");

        // Script exhausted
        assert!(detector.detect(&frame).unwrap().is_empty());
    }

    #[test]
    fn mock_detector_failure() {
        let detector = MockDetector::new("test-model").with_failure();
        assert!(!detector.is_ready());
        assert!(detector.detect(&blank_frame()).is_err());
    }

    #[test]
    fn detector_is_shareable_through_arc() {
        let detector = Arc::new(MockDetector::new("shared").with_labels(&["C"]));
        let shared: &dyn Detector = &detector;
        let detections = shared.detect(&blank_frame()).unwrap();
        assert_eq!(
            reduce_detections(&detections, 0.0).letter(),
            Letter::new('C')
        );
        assert_eq!(shared.model_name(), "shared");
    }
}
