use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/auth", auth_routes())
        .nest("/blogs", blog_routes())
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::register))
        .routes(routes!(handlers::auth::login))
        .routes(routes!(handlers::auth::me))
}

fn blog_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::blog::list_blogs,
            handlers::blog::create_blog
        ))
        .routes(routes!(handlers::blog::blog_stats))
        .routes(routes!(
            handlers::blog::get_blog,
            handlers::blog::update_blog,
            handlers::blog::delete_blog
        ))
}
