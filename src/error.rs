//! Error types for duty-log processing.
//!
//! All engine failures are synchronous and surface to the immediate caller as
//! values of [`LogError`]; the engine never logs-and-recovers, retries, or
//! produces partial geometry for a failed day. Whether a bad day is skipped
//! or aborts the whole trip view is the presentation layer's decision.
//!
//! ## Error Categories
//!
//! - **Malformed Intervals**: non-numeric bounds or `start >= end`; rejected
//!   in every validation mode
//! - **Data-Quality Errors**: out-of-bounds or overlapping intervals and
//!   unrecognized status labels; rejected only under
//!   [`ValidationMode::Strict`](crate::ValidationMode), tolerated (and
//!   rendered as given) in the permissive default
//!
//! ## Helper Constructors
//!
//! ```rust
//! use dutygrid::LogError;
//!
//! let err = LogError::malformed_interval("start 5 is not before end 3");
//! assert!(!err.is_strict_only());
//! ```

use thiserror::Error;

/// Result type alias for duty-log operations.
pub type Result<T, E = LogError> = std::result::Result<T, E>;

/// Main error type for duty-log operations.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LogError {
    #[error("Malformed duty interval: {details}")]
    MalformedInterval { details: String },

    #[error("Interval {start}h-{end}h lies outside the 24-hour grid")]
    OutOfBounds { start: f64, end: f64 },

    #[error("Interval starting at {later_start}h overlaps the interval ending at {earlier_end}h")]
    Overlap { earlier_end: f64, later_start: f64 },

    #[error("Unrecognized duty status label '{label}'")]
    UnrecognizedStatus { label: String },
}

impl LogError {
    /// Returns whether this error can only arise under strict validation.
    ///
    /// Strict-only errors describe data the permissive default tolerates:
    /// the path builder renders out-of-bounds or overlapping intervals as
    /// given, and the normalizer maps unknown labels to `OFF`.
    pub fn is_strict_only(&self) -> bool {
        match self {
            LogError::MalformedInterval { .. } => false,
            LogError::OutOfBounds { .. } => true,
            LogError::Overlap { .. } => true,
            LogError::UnrecognizedStatus { .. } => true,
        }
    }

    /// Helper constructor for malformed interval errors.
    pub fn malformed_interval(details: impl Into<String>) -> Self {
        LogError::MalformedInterval { details: details.into() }
    }

    /// Helper constructor for unrecognized status labels.
    pub fn unrecognized_status(label: impl Into<String>) -> Self {
        LogError::UnrecognizedStatus { label: label.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(test)]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn error_messages_contain_their_context(
                details in ".+",
                label in "[A-Z-]{1,12}",
                start in -10.0f64..30.0,
                end in -10.0f64..30.0
            ) {
                let malformed = LogError::malformed_interval(details.clone());
                prop_assert!(malformed.to_string().contains(&details));

                let unrecognized = LogError::unrecognized_status(label.clone());
                prop_assert!(unrecognized.to_string().contains(&label));

                let bounds = LogError::OutOfBounds { start, end };
                prop_assert!(bounds.to_string().contains(&start.to_string()));
                prop_assert!(bounds.to_string().contains(&end.to_string()));

                let overlap = LogError::Overlap { earlier_end: end, later_start: start };
                prop_assert!(!overlap.to_string().is_empty());
            }

            #[test]
            fn strict_only_classification_is_total(
                start in -10.0f64..30.0,
                end in -10.0f64..30.0
            ) {
                // Every variant classifies without panicking, and only the
                // malformed variant survives into permissive mode.
                prop_assert!(!LogError::malformed_interval("x").is_strict_only());
                let out_of_bounds = LogError::OutOfBounds { start, end };
                prop_assert!(out_of_bounds.is_strict_only());
                let overlap = LogError::Overlap { earlier_end: end, later_start: start };
                prop_assert!(overlap.is_strict_only());
                prop_assert!(LogError::unrecognized_status("SB2").is_strict_only());
            }
        }
    }

    #[test]
    fn error_traits_validation() {
        // Compile-time check: LogError must be Send + Sync + 'static
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<LogError>();

        let error = LogError::malformed_interval("test");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn helper_constructors_build_expected_variants() {
        assert!(matches!(
            LogError::malformed_interval("bad"),
            LogError::MalformedInterval { .. }
        ));
        assert!(matches!(
            LogError::unrecognized_status("HUH"),
            LogError::UnrecognizedStatus { .. }
        ));
    }
}
