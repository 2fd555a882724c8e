use actix_web::{HttpRequest, HttpResponse, get, post, web};
use tracing::info;

use crate::application::post_service::PostService;
use crate::data::store::JsonFileStore;
use crate::domain::error::DomainError;
use crate::presentation::dto::{CreatePostRequest, ListPostsQuery};
use crate::presentation::handlers::request_id;

#[post("/posts")]
async fn create_post(
    req: HttpRequest,
    service: web::Data<PostService<JsonFileStore>>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, DomainError> {
    payload.validate()?;
    let post = service
        .create_post(
            payload.title.clone(),
            payload.content.clone(),
            payload.author.clone(),
        )
        .await?;

    info!(
        request_id = %request_id(&req),
        post_id = post.id,
        author = %post.author,
        "post created"
    );

    Ok(HttpResponse::Created().json(post))
}

#[get("/posts/{id}")]
async fn get_post(
    service: web::Data<PostService<JsonFileStore>>,
    path: web::Path<u64>,
) -> Result<HttpResponse, DomainError> {
    let post = service.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

// The stored entries go out verbatim, as a bare array.
#[get("/posts")]
async fn get_posts(
    req: HttpRequest,
    service: web::Data<PostService<JsonFileStore>>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse, DomainError> {
    let posts = service.list_posts(query.limit).await?;

    info!(
        request_id = %request_id(&req),
        count = posts.len(),
        "posts retrieved"
    );

    Ok(HttpResponse::Ok().json(posts))
}
