//! One-shot headless commands

use std::io::Write;
use std::path::Path;

use bowlai_core::prelude::*;
use bowlai_core::{history_records, report_for, validate, Clock, FileCandidate, HistoryFilter};

use super::HeadlessEvent;

/// Print every history record passing `filter`, then a summary line
pub fn print_history(filter: &HistoryFilter, clock: &dyn Clock, out: &mut dyn Write) {
    let records = filter.apply(&history_records(), clock);
    debug!("Headless history {:?} -> {} records", filter, records.len());

    let count = records.len();
    for record in records {
        HeadlessEvent::record(record).write_to(out);
    }
    HeadlessEvent::summary(count).write_to(out);
}

/// Validate the file at `path` as an upload.
///
/// Returns whether it was accepted; unreadable paths count as rejected.
pub fn validate_path(path: &Path, out: &mut dyn Write) -> bool {
    let candidate = match FileCandidate::from_path(path) {
        Ok(candidate) => candidate,
        Err(e) => {
            HeadlessEvent::error(e.to_string(), false).write_to(out);
            return false;
        }
    };

    match validate(candidate) {
        Ok(file) => {
            info!("Headless validate accepted {}", file.name());
            HeadlessEvent::accepted(file).write_to(out);
            true
        }
        Err(rejection) => {
            info!("Headless validate rejected {}: {:?}", path.display(), rejection);
            HeadlessEvent::rejected(rejection).write_to(out);
            false
        }
    }
}

/// Print the report that `/analysis/<id>` would show
pub fn print_report(id: &str, out: &mut dyn Write) {
    HeadlessEvent::report(report_for(id)).write_to(out);
}
