//! Application session state.
//!
//! The session owns the last request and its cached results. Animation frames
//! are read from the cache, so advancing the frame counter never re-runs the
//! pipeline.

use wavescope_dsp::{run_scope, DspResult, ScopeFrame, ScopeOutput};
use wavescope_spec::ScopeSpec;

/// Cached state for one interactive or command-line session.
#[derive(Debug, Default)]
pub struct Session {
    spec: Option<ScopeSpec>,
    output: Option<ScopeOutput>,
    frame: u64,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the pipeline and caches the result.
    ///
    /// On failure the previous request and results stay in place. On success
    /// the frame counter restarts at 0.
    pub fn generate(&mut self, spec: ScopeSpec) -> DspResult<&ScopeOutput> {
        let output = run_scope(&spec)?;
        self.spec = Some(spec);
        self.frame = 0;
        Ok(self.output.insert(output))
    }

    /// The last successful request.
    pub fn spec(&self) -> Option<&ScopeSpec> {
        self.spec.as_ref()
    }

    /// The cached results of the last successful request.
    pub fn output(&self) -> Option<&ScopeOutput> {
        self.output.as_ref()
    }

    /// Current frame counter.
    pub fn frame_counter(&self) -> u64 {
        self.frame
    }

    /// Moves the frame counter to `frame`.
    pub fn seek(&mut self, frame: u64) {
        self.frame = frame;
    }

    /// Renders the current frame and advances the counter.
    ///
    /// Returns `None` until something has been generated.
    pub fn tick(&mut self) -> Option<ScopeFrame> {
        let view = self.output.as_ref()?.frame(self.frame);
        self.frame = self.frame.wrapping_add(1);
        Some(view)
    }

    /// Renders an arbitrary frame without touching the counter.
    pub fn frame_at(&self, frame: u64) -> Option<ScopeFrame> {
        self.output.as_ref().map(|output| output.frame(frame))
    }
}
