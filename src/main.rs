#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{
        http::{header, HeaderValue},
        Router,
    };
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::app::*;
    use portfolio_site::content::{RESUME_FILENAME, RESUME_PATH};
    use tower::ServiceBuilder;
    use tower_http::{services::ServeFile, set_header::SetResponseHeaderLayer};

    let conf = get_configuration(None).expect("Should be able to read leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    // served as an attachment so browsers save it instead of opening a viewer
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{RESUME_FILENAME}\""))
        .expect("Resume filename should be a valid header value");
    let resume = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_DISPOSITION,
            disposition,
        ))
        .service(ServeFile::new(format!(
            "{}{}",
            leptos_options.site_root, RESUME_PATH
        )));

    let app = Router::new()
        .route_service(RESUME_PATH, resume)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    log!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Should be able to bind site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server should run until shutdown");
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // the client entry point is `hydrate` in lib.rs
}
