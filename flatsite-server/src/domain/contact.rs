use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Contact {
    pub fn new(id: u64, name: String, email: String, message: String) -> Self {
        Self {
            id,
            name,
            email,
            message,
            timestamp: Utc::now(),
        }
    }
}
