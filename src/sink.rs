//! Pluggable text output for capture sessions.

/// Pluggable transcript output handler.
/// Pairs with FrameSource for input - this handles the aggregated text.
pub trait TextSink: Send + 'static {
    /// Handle an updated transcript. Called whenever the transcript changes.
    fn handle(&mut self, transcript: &str) -> crate::error::Result<()>;

    /// Called on session shutdown. Return accumulated text if applicable.
    fn finish(&mut self) -> Option<String> {
        None
    }

    /// Name for logging/debugging.
    fn name(&self) -> &'static str {
        "sink"
    }
}

/// Pipe mode sink — writes each transcript update to stdout.
pub struct StdoutSink;

impl TextSink for StdoutSink {
    fn handle(&mut self, transcript: &str) -> crate::error::Result<()> {
        println!("{}", transcript);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}

/// Test/embedding sink — keeps the latest transcript snapshot.
pub struct CollectorSink {
    latest: Option<String>,
    updates: usize,
}

impl CollectorSink {
    pub fn new() -> Self {
        Self {
            latest: None,
            updates: 0,
        }
    }

    /// Returns how many updates the sink has seen.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl Default for CollectorSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSink for CollectorSink {
    fn handle(&mut self, transcript: &str) -> crate::error::Result<()> {
        self.latest = Some(transcript.to_string());
        self.updates += 1;
        Ok(())
    }

    fn finish(&mut self) -> Option<String> {
        self.latest.take()
    }

    fn name(&self) -> &'static str {
        "collector"
    }
}
