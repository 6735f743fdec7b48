pub use masterror::{AppError, AppResult};

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    let msg = if source.kind() == std::io::ErrorKind::NotFound {
        format!("File '{}' not found", path)
    } else {
        format!("Failed to read file '{}': {}", path, source)
    };
    AppError::internal(msg)
}

/// Create file write error
pub fn file_write_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write file '{}': {}", path, source))
}

/// Create error for a failed write to the console stream
pub fn console_error(source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to write output: {}", source))
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

/// Create error for a partition row that could not be converted
///
/// Row errors are recoverable: the checker logs them and drops the row.
pub fn row_parse_error(field: &str, value: &str, reason: impl std::fmt::Display) -> AppError {
    AppError::bad_request(format!("Invalid {} '{}': {}", field, value, reason))
}
