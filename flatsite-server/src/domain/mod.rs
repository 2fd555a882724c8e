pub mod contact;
pub mod document;
pub mod error;
pub mod post;
