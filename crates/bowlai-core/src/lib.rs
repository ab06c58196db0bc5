//! # bowlai-core - Core Domain Types
//!
//! Foundation crate for BowlAI. Provides the mock analysis catalogue, the
//! upload validator, the history filter, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** and no terminal types.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AnalysisRecord`] - One past analysis as listed on the history page
//! - [`AnalysisReport`] - Everything the detailed report page shows
//! - [`DetailedMetric`], [`MetricBound`], [`MetricStatus`] - Biomechanical breakdown rows
//! - [`LegalityStatus`], [`StatusTone`] - Status labels and their color family
//!
//! ### Catalogue (`catalogue`)
//! - [`history_records()`] - The six literal history records
//! - [`report_for()`] - Report payload for a route id
//!
//! ### Upload (`upload`)
//! - [`validate()`] - Accept a [`FileCandidate`] or return an [`UploadRejection`]
//! - [`normalize_dropped_path()`] - Clean up pasted/dropped file paths
//!
//! ### History (`history`)
//! - [`HistoryFilter`] - Status, date range and search filter
//! - [`Clock`] - Injectable source of "now"
//!
//! ## Prelude
//!
//! ```rust
//! use bowlai_core::prelude::*;
//! ```

pub mod catalogue;
pub mod clock;
pub mod error;
pub mod history;
pub mod logging;
pub mod types;
pub mod upload;

/// Prelude for common imports used throughout all BowlAI crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use catalogue::{
    dashboard_stats, history_records, performance_summary, quick_tips, recent_analyses,
    report_for, upload_tips, NOTIFICATION_COUNT, RECENT_COUNT,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result, ResultExt};
pub use history::{result_label, DateRange, HistoryFilter, Predicate, StatusFilter};
pub use types::{
    AnalysisRecord, AnalysisReport, CameraAngle, DetailedMetric, LegalityStatus, MetricBound,
    MetricStatus, ScoreBar, SessionScore, StatCard, StatusTone,
};
pub use upload::{
    mime_for_extension, normalize_dropped_path, validate, FileCandidate, UploadRejection,
    UploadedFile, ALLOWED_MIME_TYPES, MAX_UPLOAD_BYTES,
};
