use serde::{Deserialize, Serialize};

use crate::domain::contact::Contact;
use crate::domain::post::Post;

/// The single persisted root object. Both collections are always present,
/// in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    pub posts: Vec<Post>,
    pub contacts: Vec<Contact>,
}
