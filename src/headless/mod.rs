//! Headless mode - JSON output for scripts and tests
//!
//! The `history`, `validate` and `report` subcommands answer from the same
//! catalogue, filter and validator as the TUI, without opening a terminal.
//!
//! # Event Format
//!
//! Output is NDJSON (newline-delimited JSON), one event per line. Each event
//! has an "event" field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"record","id":1,"name":"Fast Bowling #12","date":"2025-11-20","time":"14:30:00","elbow":164.2,"accuracy":96,"status":"Legal","angle":"Front"}
//! {"event":"summary","count":1,"label":"1 result"}
//! {"event":"rejected","message":"File size must be less than 100MB","reason":"too_large","size":209715200}
//! ```

pub mod commands;

pub use commands::{print_history, print_report, validate_path};

use std::io::Write;

use bowlai_core::{AnalysisRecord, AnalysisReport, UploadRejection, UploadedFile};
use chrono::Utc;
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// One history entry that passed the filter
    Record {
        #[serde(flatten)]
        record: AnalysisRecord,
    },

    /// Closing line of a history listing
    Summary { count: usize, label: String },

    /// Upload passed validation
    Accepted {
        #[serde(flatten)]
        file: UploadedFile,
        display_size: String,
    },

    /// Upload turned away, with the alert text the TUI would show
    Rejected {
        message: String,
        #[serde(flatten)]
        rejection: UploadRejection,
    },

    /// Detailed report payload
    Report {
        #[serde(flatten)]
        report: AnalysisReport,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event to `out` as one JSON line
    pub fn write_to(&self, out: &mut dyn Write) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn record(record: AnalysisRecord) -> Self {
        Self::Record { record }
    }

    pub fn summary(count: usize) -> Self {
        Self::Summary {
            count,
            label: bowlai_core::result_label(count),
        }
    }

    pub fn accepted(file: UploadedFile) -> Self {
        Self::Accepted {
            display_size: file.display_size(),
            file,
        }
    }

    pub fn rejected(rejection: UploadRejection) -> Self {
        Self::Rejected {
            message: rejection.to_string(),
            rejection,
        }
    }

    pub fn report(report: AnalysisReport) -> Self {
        Self::Report { report }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
