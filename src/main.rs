#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "picschedule-web failed");
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn run() -> Result<(), Box<dyn std::error::Error>> {
    use leptos::config::get_configuration;
    use picschedule_web::config::{ConfigError, ServerConfig};

    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(port) = config.port {
        leptos_options.site_addr.set_port(port);
    }
    let addr = leptos_options.site_addr;

    let app = picschedule_web::server::app(&config, leptos_options);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, badge_dir = %config.badge_dir.display(), "picschedule-web listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser bundle starts from `picschedule_web::hydrate`.
}
