use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use velvet::server::{
    config::Config,
    integration::{PushClient, RealtimeClient, SfuClient},
    model::app::AppState,
    router, scheduler, startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "velvet=debug,tower_http=info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();
    let session = startup::connect_to_session(&config).await.unwrap();

    let realtime = RealtimeClient::new(&config.realtime_url, &config.realtime_api_key);
    let sfu = SfuClient::new(&config.sfu_url, &config.sfu_api_key);
    let push = PushClient::new(&config.push_url, &config.push_api_key);

    let mut worker_storage = startup::start_workers(&config, db.clone(), push.clone())
        .await
        .unwrap();
    scheduler::start_scheduler(&db, &mut worker_storage)
        .await
        .unwrap();

    let state = AppState {
        db,
        realtime,
        sfu,
        push,
    };

    let app = router::routes()
        .with_state(state)
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&address).await.unwrap();

    tracing::info!("Listening on {}", address);

    axum::serve(listener, app).await.unwrap();
}
