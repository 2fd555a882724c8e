use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

impl Post {
    pub fn new(id: u64, title: String, content: String, author: String) -> Self {
        Self {
            id,
            title,
            content,
            author,
            timestamp: Utc::now(),
        }
    }
}
