use dioxus::prelude::*;

use ui::ToastProvider;
use views::{Home, Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/auth/register")]
    Register {},
    #[route("/auth/login")]
    Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start Tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = api::Settings::load().expect("Failed to load settings");
    let state = api::AppState::from_settings(&settings).expect("Invalid password hashing settings");

    // Registration endpoint first, then the Dioxus application. The guard sees every
    // request so a signed-in visitor never gets the registration page rendered.
    let router = axum::Router::new()
        .merge(api::router(state))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(axum::middleware::from_fn(api::auth::anonymous_only));

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .expect("Server error");
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ToastProvider {
            Router::<Route> {}
        }
    }
}
