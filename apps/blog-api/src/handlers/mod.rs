//! HTTP handlers and route configuration.

mod blog_post;
mod health;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/blog-post")
                .service(
                    web::resource(["", "/"])
                        .route(web::post().to(blog_post::create_blog_post))
                        .route(web::get().to(blog_post::get_blog_posts)),
                )
                .service(
                    web::resource("/{ID}")
                        .route(web::get().to(blog_post::get_blog_post))
                        .route(web::patch().to(blog_post::update_blog_post))
                        .route(web::delete().to(blog_post::delete_blog_post)),
                ),
        );
}
