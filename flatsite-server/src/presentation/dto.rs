use serde::Deserialize;

use crate::domain::error::DomainError;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl CreatePostRequest {
    /// Field presence is checked here, before the services are reached;
    /// nothing downstream re-validates.
    pub fn validate(&self) -> Result<(), DomainError> {
        require("title", &self.title)?;
        require("content", &self.content)?;
        require("author", &self.author)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl CreateContactRequest {
    pub fn validate(&self) -> Result<(), DomainError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("message", &self.message)
    }
}

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub limit: Option<usize>,
}

fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}
