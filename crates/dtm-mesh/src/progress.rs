//! Progress reporting hooks.

/// Pipeline stage reported to a [`ProgressObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Interpolating raster rows onto the target grid.
    Resample,
    /// Building vertices and faces.
    Assemble,
}

impl Stage {
    /// Returns the stage as a lowercase string.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Stage::Resample => "resample",
            Stage::Assemble => "assemble",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receives `(stage, done, total)` updates while a mesh is built.
///
/// [`NoProgress`] ignores all updates; any `FnMut(Stage, usize, usize)`
/// closure can be used directly.
pub trait ProgressObserver {
    /// Called after each unit of work in `stage`.
    fn on_progress(&mut self, stage: Stage, done: usize, total: usize);
}

/// Observer that discards all progress updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _stage: Stage, _done: usize, _total: usize) {}
}

impl<F: FnMut(Stage, usize, usize)> ProgressObserver for F {
    fn on_progress(&mut self, stage: Stage, done: usize, total: usize) {
        self(stage, done, total)
    }
}
