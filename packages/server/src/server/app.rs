//! Application setup and router.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode, Uri,
    },
    middleware::{self, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{jwt_auth_middleware, AuthUser};
use crate::server::routes::{
    graphql_handler, health_handler, newsletter_subscribe, newsletter_subscribe_get, pages,
    process_donation_handler, track_download_get, track_download_handler,
};
use crate::server::static_files::serve_static;
use crate::server::views;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: ServerDeps,
    /// Uploaded images and files, served under `/media`
    pub media_root: PathBuf,
}

impl AppState {
    pub fn new(deps: ServerDeps, media_root: impl Into<PathBuf>) -> Self {
        Self {
            deps,
            media_root: media_root.into(),
        }
    }
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Populated by jwt_auth_middleware when a valid token was sent
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    let context = GraphQLContext::new(state.deps.clone(), auth_user);
    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Slashless URL for a page: the slashed path with the query kept.
fn with_trailing_slash(uri: &Uri) -> Option<String> {
    let path = uri.path();
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    if path.ends_with('/') || last_segment.contains('.') {
        return None;
    }

    Some(match uri.query() {
        Some(query) => format!("{}/?{}", path, query),
        None => format!("{}/", path),
    })
}

/// Unknown routes: add the missing trailing slash, otherwise 404.
async fn fallback(uri: Uri) -> Response {
    match with_trailing_slash(&uri) {
        Some(location) => Redirect::permanent(&location).into_response(),
        None => (StatusCode::NOT_FOUND, Html(views::errors::not_found())).into_response(),
    }
}

/// Build the Axum application router
pub fn build_app(state: AppState) -> Router {
    // GraphQL schema (singleton)
    let schema = Arc::new(create_schema());
    let jwt_service = state.deps.jwt_service.clone();

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let mut router = Router::new()
        // Pages
        .route("/", get(pages::home))
        .route("/about/", get(pages::about))
        .route("/team/", get(pages::team))
        .route(
            "/contact/",
            get(pages::contact_page).post(pages::submit_contact_form),
        )
        .route("/donate/", get(pages::donate))
        .route(
            "/events/",
            get(pages::event_list).post(pages::event_list_comment),
        )
        .route(
            "/events/:slug/",
            get(pages::event_detail).post(pages::event_detail_comment),
        )
        .route(
            "/stories/",
            get(pages::story_list).post(pages::story_list_comment),
        )
        .route(
            "/stories/:slug/",
            get(pages::story_detail).post(pages::story_detail_comment),
        )
        .route("/blog/", get(pages::blog_list).post(pages::blog_list_comment))
        .route(
            "/blog/:slug/",
            get(pages::blog_detail).post(pages::blog_detail_comment),
        )
        .route(
            "/resources/",
            get(pages::resource_list).post(pages::resource_list_comment),
        )
        // JSON endpoints
        .route("/process-donation/", post(process_donation_handler))
        .route(
            "/newsletter-subscribe/",
            get(newsletter_subscribe_get).post(newsletter_subscribe),
        )
        .route(
            "/api/track-download/:id/",
            get(track_download_get).post(track_download_handler),
        )
        // Admin API
        .route("/graphql", post(graphql_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(crate::server::routes::graphql_playground));
    }

    router
        .route("/health", get(health_handler))
        .route("/static/*path", get(serve_static))
        .nest_service("/media", ServeDir::new(&state.media_root))
        .fallback(fallback)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slashless_page_gets_a_slash() {
        let uri: Uri = "/events".parse().unwrap();
        assert_eq!(with_trailing_slash(&uri).as_deref(), Some("/events/"));

        let uri: Uri = "/events/youth-summit?page=2".parse().unwrap();
        assert_eq!(
            with_trailing_slash(&uri).as_deref(),
            Some("/events/youth-summit/?page=2")
        );
    }

    #[test]
    fn slashed_paths_and_files_are_left_alone() {
        let uri: Uri = "/nowhere/".parse().unwrap();
        assert_eq!(with_trailing_slash(&uri), None);

        let uri: Uri = "/favicon.ico".parse().unwrap();
        assert_eq!(with_trailing_slash(&uri), None);
    }
}
