use inboxpeek::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let state = AppState::new(&config)?;
    let session = startup::build_session_layer();
    let listener = startup::bind_listener(&config).await?;

    let router = router::routes().with_state(state).layer(session);

    tracing::info!("Starting server on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
