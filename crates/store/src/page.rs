use serde::{Deserialize, Serialize};

/// Skip/limit pagination for list queries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Number of rows to skip (0-based offset).
    pub skip: usize,
    /// Maximum number of rows to return.
    pub limit: usize,
}

impl Page {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}
