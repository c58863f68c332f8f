use crate::errors::{AppError, AppResult};

/// Added to every converted timestamp so the player lands just after the
/// moment the question refers to.
pub const TIMESTAMP_OFFSET_SECONDS: u64 = 5;

const UNIT_RADIX: u64 = 60;

/// Converts `H:MM:SS`, `MM:SS` (or any number of colon-separated base-60
/// units, most significant first) to seconds plus [`TIMESTAMP_OFFSET_SECONDS`].
pub fn to_seconds(timestamp: &str) -> AppResult<u64> {
    if timestamp.trim().is_empty() {
        return Err(AppError::InvalidTimestamp("timestamp is empty".to_string()));
    }

    let mut total: u64 = 0;
    let mut scale: u64 = 1;
    for (position, unit) in timestamp.split(':').rev().enumerate() {
        let unit = unit.trim();
        let value: u64 = unit.parse().map_err(|_| {
            AppError::InvalidTimestamp(format!(
                "'{}' has a non-numeric component '{}'",
                timestamp, unit
            ))
        })?;

        if position > 0 {
            scale = scale.checked_mul(UNIT_RADIX).ok_or_else(|| overflow(timestamp))?;
        }
        total = value
            .checked_mul(scale)
            .and_then(|seconds| total.checked_add(seconds))
            .ok_or_else(|| overflow(timestamp))?;
    }

    total
        .checked_add(TIMESTAMP_OFFSET_SECONDS)
        .ok_or_else(|| overflow(timestamp))
}

fn overflow(timestamp: &str) -> AppError {
    AppError::InvalidTimestamp(format!("'{}' is too large", timestamp))
}
