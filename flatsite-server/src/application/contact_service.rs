use std::sync::Arc;

use tracing::instrument;

use crate::application::WriteLock;
use crate::data::store::DocumentStore;
use crate::domain::{contact::Contact, error::DomainError};

#[derive(Clone)]
pub struct ContactService<S: DocumentStore + 'static> {
    store: Arc<S>,
    write_lock: WriteLock,
}

impl<S> ContactService<S>
where
    S: DocumentStore + 'static,
{
    pub fn new(store: Arc<S>, write_lock: WriteLock) -> Self {
        Self { store, write_lock }
    }

    pub async fn list_contacts(&self) -> Result<Vec<Contact>, DomainError> {
        let document = self.store.load().await?;
        Ok(document.contacts)
    }

    #[instrument(skip(self))]
    pub async fn create_contact(
        &self,
        name: String,
        email: String,
        message: String,
    ) -> Result<Contact, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.store.load().await?;
        let contact = Contact::new(
            document.contacts.len() as u64 + 1,
            name,
            email,
            message,
        );
        document.contacts.push(contact.clone());
        self.store.save(&document).await?;

        Ok(contact)
    }
}
