//! The duty-status timeline engine.
//!
//! Pure, synchronous functions from a day's intervals to the rendered
//! artifacts: [`order_intervals`] establishes the canonical ordering,
//! [`build_path`] emits the lane-aware polyline, and [`summarize`] produces
//! the reportable duration totals. No shared state, no I/O; days can be
//! processed independently.

mod ordering;
mod path;
mod summary;

pub use ordering::order_intervals;
pub use path::build_path;
pub use summary::summarize;

/// How hard the engine pushes back on questionable interval data.
///
/// The permissive default renders whatever it is given: out-of-bounds spans
/// draw outside the 24-hour frame, overlaps double-count in summaries and
/// fold time back on itself in the path. Strict mode fails fast instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    #[default]
    Permissive,
    Strict,
}

/// What the path builder does with time not covered by any interval.
///
/// `Omit` (the source behavior) leaves a silent horizontal skip. `FillOff`
/// bridges uncovered time on the OFF lane for stricter compliance visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    #[default]
    Omit,
    FillOff,
}

/// Engine policy bundle threaded through the per-day pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    pub validation: ValidationMode,
    pub gap_policy: GapPolicy,
}

impl EngineOptions {
    /// Permissive validation, gaps omitted. The rendering default.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Strict validation, gaps omitted. The data-quality default.
    pub fn strict() -> Self {
        Self { validation: ValidationMode::Strict, ..Self::default() }
    }

    pub fn with_gap_policy(mut self, gap_policy: GapPolicy) -> Self {
        self.gap_policy = gap_policy;
        self
    }
}
