use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

use gold_catalog_backend::config::ServerConfig;
use gold_catalog_backend::routes;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = Arc::new(ServerConfig::from_env());
    info!(
        "Serving catalog {} with static dir {}",
        config.products_path.display(),
        config.static_dir.display()
    );

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    info!("Will bind to: {}", addr);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET"]);

    let api = routes::routes(config).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
}
