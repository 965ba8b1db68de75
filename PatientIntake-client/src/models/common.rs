use serde::{Deserialize, Serialize};

/// Backend response to the reachability check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Static status message from the backend
    pub message: String,
}
