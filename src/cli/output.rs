//! CLI output: error mapping for failures outside the printer (config, startup).

use crate::error::ApiError;

/// Map an error to the line printed on stderr.
pub fn map_error(e: &ApiError) -> String {
    format!("Error: {}", e)
}
