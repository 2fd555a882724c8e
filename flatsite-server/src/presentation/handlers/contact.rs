use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;

use crate::application::contact_service::ContactService;
use crate::data::store::JsonFileStore;
use crate::domain::error::DomainError;
use crate::presentation::dto::CreateContactRequest;
use crate::presentation::handlers::request_id;

#[post("/contacts")]
async fn create_contact(
    req: HttpRequest,
    service: web::Data<ContactService<JsonFileStore>>,
    payload: web::Json<CreateContactRequest>,
) -> Result<HttpResponse, DomainError> {
    payload.validate()?;
    let contact = service
        .create_contact(
            payload.name.clone(),
            payload.email.clone(),
            payload.message.clone(),
        )
        .await?;

    info!(
        request_id = %request_id(&req),
        contact_id = contact.id,
        "contact message received"
    );

    Ok(HttpResponse::Created().json(contact))
}

#[get("/contacts")]
async fn get_contacts(
    req: HttpRequest,
    service: web::Data<ContactService<JsonFileStore>>,
) -> Result<HttpResponse, DomainError> {
    let contacts = service.list_contacts().await?;

    info!(
        request_id = %request_id(&req),
        count = contacts.len(),
        "contacts retrieved"
    );

    Ok(HttpResponse::Ok().json(contacts))
}
