//! Detection seam: frame sources and the sign detector.
//!
//! The model and the camera are external collaborators injected behind the
//! [`Detector`] and [`FrameSource`] traits. This crate only reduces their
//! output to per-frame labels.

pub mod detector;
pub mod frame;

pub use detector::{Detection, Detector, MockDetector, reduce_detections};
pub use frame::{FrameSource, MockFrameSource, VideoFrame};
