use serde::{Deserialize, Serialize};

/// Error body handed to external callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
