use serde::{Deserialize, Serialize};

/// Outcome of one membership status reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResultDto {
    /// Total memberships whose status changed this pass.
    pub updates: u32,
    pub to_active: u32,
    pub to_expired: u32,
    pub to_pending: u32,
    pub message: String,
}

impl SyncResultDto {
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            updates: 0,
            to_active: 0,
            to_expired: 0,
            to_pending: 0,
            message: message.into(),
        }
    }
}
