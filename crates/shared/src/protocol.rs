use serde::{Deserialize, Serialize};

/// Body posted to the external collection endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadCaptureRequest {
    pub email: String,
}

impl LeadCaptureRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}
