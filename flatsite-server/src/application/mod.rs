pub mod contact_service;
pub mod post_service;

use std::sync::Arc;

use tokio::sync::Mutex;

/// Serializes every load-mutate-save cycle. Shared by all services writing
/// to the same backing file; two unserialized appends would compute the same
/// id and the later save would drop the earlier one.
pub type WriteLock = Arc<Mutex<()>>;
