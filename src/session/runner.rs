//! Capture session that runs from start until stop or end of stream.

use crate::detect::detector::{Detector, reduce_detections};
use crate::detect::frame::FrameSource;
use crate::error::{Result, SignshError};
use crate::session::transcript::LiveSession;
use crate::sink::TextSink;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Configuration for a capture session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Confidence floor applied when reducing detections to a frame label
    pub min_confidence: f32,
    /// Suppress per-frame diagnostics
    pub quiet: bool,
    /// Verbosity level (0=results only, 1=frame diagnostics)
    pub verbosity: u8,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_confidence: crate::defaults::MIN_CONFIDENCE,
            quiet: false,
            verbosity: 0,
        }
    }
}

/// Handle to a running capture session.
#[derive(Debug)]
pub struct SessionHandle {
    /// Flag to signal shutdown
    running: Arc<AtomicBool>,
    /// Join handle for the worker thread
    worker: Option<JoinHandle<()>>,
    /// Receiver for the final transcript
    result_rx: crossbeam_channel::Receiver<Option<String>>,
}

impl SessionHandle {
    /// Stops the session cooperatively and returns the final transcript.
    ///
    /// The stop flag is checked between frame steps; an in-flight frame is
    /// never interrupted mid-step. Returns `None` when nothing was spelled.
    pub fn stop(mut self) -> Option<String> {
        self.running.store(false, Ordering::SeqCst);
        let result = self
            .result_rx
            .recv_timeout(Duration::from_secs(5))
            .ok()
            .flatten();
        self.join_worker();
        result
    }

    /// Blocks until a finite source is exhausted and returns the transcript.
    pub fn wait(mut self) -> Option<String> {
        let result = self.result_rx.recv().ok().flatten();
        self.join_worker();
        result
    }

    /// Returns true if the session is still processing frames.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn join_worker(&mut self) {
        if let Some(worker) = self.worker.take()
            && let Err(panic_info) = worker.join()
        {
            let msg = panic_info
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic");
            eprintln!("signsh: session worker panicked: {msg}");
        }
    }
}

/// Capture session: FrameSource → Detector → debounce → TextSink.
///
/// Frames are read and processed strictly in capture order on a single
/// worker thread; each session owns its transcript exclusively. The sink
/// receives the transcript snapshot whenever it changes.
pub struct CaptureSession {
    config: SessionConfig,
}

impl CaptureSession {
    /// Creates a new capture session.
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Starts the session.
    ///
    /// # Arguments
    /// * `source` - Frame capture source
    /// * `detector` - Sign detection model
    /// * `sink` - Transcript output handler
    ///
    /// # Returns
    /// Handle to control and stop the session
    pub fn start(
        self,
        mut source: Box<dyn FrameSource>,
        detector: Arc<dyn Detector>,
        mut sink: Box<dyn TextSink>,
    ) -> Result<SessionHandle> {
        if !detector.is_ready() {
            return Err(SignshError::DetectorNotReady {
                model: detector.model_name().to_string(),
            });
        }

        source.start()?;

        let config = self.config;
        let running = Arc::new(AtomicBool::new(true));
        let worker_running = Arc::clone(&running);
        let (result_tx, result_rx) = crossbeam_channel::bounded(1);

        let worker = thread::spawn(move || {
            let mut session = LiveSession::new();

            while worker_running.load(Ordering::SeqCst) {
                let frame = match source.next_frame() {
                    Ok(Some(frame)) => frame,
                    Ok(None) => break,
                    Err(e) => {
                        if !config.quiet {
                            eprintln!("signsh: frame capture ended: {e}");
                        }
                        break;
                    }
                };

                let detections = match detector.detect(&frame) {
                    Ok(detections) => detections,
                    Err(e) => {
                        // One bad frame does not end the session.
                        if !config.quiet {
                            eprintln!("signsh: detection failed on frame {}: {e}", frame.sequence);
                        }
                        continue;
                    }
                };

                let label = reduce_detections(&detections, config.min_confidence);
                if config.verbosity >= 1 && !config.quiet {
                    eprintln!("signsh: frame {} -> {:?}", frame.sequence, label);
                }

                let len_before = session.transcript().len();
                let snapshot = session.process(label);
                if snapshot.len() != len_before {
                    let update = snapshot.to_string();
                    if let Err(e) = sink.handle(&update)
                        && !config.quiet
                    {
                        eprintln!("signsh: sink '{}' failed: {e}", sink.name());
                    }
                }
            }

            worker_running.store(false, Ordering::SeqCst);
            if let Err(e) = source.stop()
                && !config.quiet
            {
                eprintln!("signsh: frame source stop failed: {e}");
            }
            sink.finish();

            let transcript = session.finish();
            let _ = result_tx.send((!transcript.is_empty()).then_some(transcript));
        });

        Ok(SessionHandle {
            running,
            worker: Some(worker),
            result_rx,
        })
    }
}
