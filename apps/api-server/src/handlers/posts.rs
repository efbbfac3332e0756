//! Blog post handlers.

use actix_web::{HttpResponse, web};
use chrono::SecondsFormat;
use uuid::Uuid;

use blog_core::domain::{Author, BlogPost, BlogPostChanges, NewBlogPost, required};
use blog_core::error::{DomainError, RepoError};
use blog_shared::dto::{AuthorPayload, CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

const ENTITY: &str = "BlogPost";

/// Serialized view of a stored post.
pub fn post_view(post: &BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        author: post.author.full_name(),
        content: post.content.clone(),
        created: post.created.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    }
}

fn author_from_payload(payload: Option<AuthorPayload>) -> Result<Author, DomainError> {
    let author = required(payload, "author")?;
    Ok(Author {
        first_name: required(author.first_name, "author.firstName")?,
        last_name: required(author.last_name, "author.lastName")?,
    })
}

fn draft_from_request(req: CreatePostRequest) -> Result<NewBlogPost, DomainError> {
    let title = required(req.title, "title")?;
    let content = required(req.content, "content")?;
    let author = author_from_payload(req.author)?;
    Ok(NewBlogPost::new(author, title, content))
}

fn changes_from_request(req: UpdatePostRequest) -> Result<BlogPostChanges, DomainError> {
    let author = match req.author {
        Some(payload) => Some(author_from_payload(Some(payload))?),
        None => None,
    };
    Ok(BlogPostChanges {
        title: req.title,
        content: req.content,
        author,
    })
}

/// A path id that is not a UUID cannot name a stored post.
fn not_found(raw_id: &str) -> AppError {
    AppError::NotFound(format!("{} with id {} not found", ENTITY, raw_id))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.iter().map(post_view).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let id = Uuid::parse_str(&raw_id).map_err(|_| not_found(&raw_id))?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: ENTITY,
            id,
        })?;

    Ok(HttpResponse::Ok().json(post_view(&post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let draft = draft_from_request(body.into_inner()).inspect_err(|e| {
        tracing::warn!(request_id = %request_id.as_str(), error = %e, "Rejected blog post")
    })?;

    let post = state.posts.create(draft).await?;
    tracing::info!(request_id = %request_id.as_str(), post_id = %post.id, "Blog post created");

    Ok(HttpResponse::Created().json(post_view(&post)))
}

/// PUT /posts/{id}
///
/// Responds 201 on success, which clients of this API rely on.
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();
    let req = body.into_inner();

    if req.id.as_deref() != Some(raw_id.as_str()) {
        let message = format!(
            "Request path id ({}) and request body id ({}) must match",
            raw_id,
            req.id.as_deref().unwrap_or("missing")
        );
        tracing::warn!(request_id = %request_id.as_str(), "{}", message);
        return Err(AppError::BadRequest(message));
    }

    let id = Uuid::parse_str(&raw_id).map_err(|_| not_found(&raw_id))?;
    let changes = changes_from_request(req)?;

    let post = state
        .posts
        .update_by_id(id, changes)
        .await
        .map_err(|e| match e {
            RepoError::NotFound => AppError::from(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            }),
            other => other.into(),
        })?;
    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Blog post updated");

    Ok(HttpResponse::Created().json(post_view(&post)))
}

/// DELETE /posts/{id}
///
/// Deleting an absent post is indistinguishable from deleting an existing one.
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let raw_id = path.into_inner();

    if let Ok(id) = Uuid::parse_str(&raw_id) {
        match state.posts.delete(id).await {
            Ok(()) => {
                tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Blog post deleted")
            }
            Err(RepoError::NotFound) => {
                tracing::debug!(request_id = %request_id.as_str(), post_id = %id, "Delete of absent blog post")
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(HttpResponse::NoContent().finish())
}
