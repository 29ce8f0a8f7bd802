//! Record-by-record upload sweeps.
//!
//! Every sweep walks its records in source order, logs a 1-based progress
//! line, issues the record's POST and checks the status against an
//! expected set. A rejected record is logged and skipped; only transport
//! failures, malformed records and the legacy person policy end a sweep
//! early.

use reqwest::StatusCode;
use tracing::{info, warn};

use crate::api::ApiResponse;
use crate::error::Result;

pub mod initial;
pub mod persons;

pub use initial::{
    upload_departments, upload_timeslot_availability, upload_timeslots, upload_workplaces,
};
pub use persons::{FailurePolicy, PersonLinks, PersonUpload};

/// Accepted status for plain creates.
pub const CREATED: &[StatusCode] = &[StatusCode::CREATED];

/// Accepted status where a rerun may hit records that already exist.
pub const CREATED_OR_CONFLICT: &[StatusCode] = &[StatusCode::CREATED, StatusCode::CONFLICT];

/// Outcome of one sweep over a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReport {
    pub entity: &'static str,
    pub total: usize,
    /// Primary records whose POST was rejected. Rejected dependent calls
    /// are logged but not counted here.
    pub failed: usize,
}

/// Run `upload` once per record. `upload` returns whether the primary
/// POST was accepted.
pub(crate) fn sweep<R>(
    entity: &'static str,
    records: &[R],
    key: impl Fn(&R) -> &str,
    mut upload: impl FnMut(&R) -> Result<bool>,
) -> Result<UploadReport> {
    let total = records.len();
    let mut failed = 0;

    for (idx, record) in records.iter().enumerate() {
        info!("Uploading {} {}/{}: {}", entity, idx + 1, total, key(record));

        if !upload(record)? {
            failed += 1;
        }
    }

    Ok(UploadReport {
        entity,
        total,
        failed,
    })
}

/// Log a warning naming `what` unless the response status is expected.
pub(crate) fn check(response: &ApiResponse, expected: &[StatusCode], what: &str) -> bool {
    if response.is_any_of(expected) {
        return true;
    }

    warn!(
        "Error uploading {}: {}. Status: {}",
        what,
        response.body,
        response.status.as_u16()
    );
    false
}
