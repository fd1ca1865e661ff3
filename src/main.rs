use actix_web::{middleware, web, App, HttpServer};
use leafscan::config;
use leafscan::server::{self, AppState};
use leafscan::torch::TorchModel;
use std::sync::Arc;
use std::{env, io, process};

use tracing::{error, info};
use tracing_subscriber;

const USAGE: &str = "usage: ./leafscan <port> [model file]";

fn get_args() -> (String, u16) {
    let args: Vec<String> = env::args().collect();
    if !(2..=3).contains(&args.len()) {
        println!("{USAGE}");
        process::exit(1);
    }

    let port: u16 = args[1].parse().expect("invalid port");
    let model = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| config::MODEL_PATH.to_string());

    (model, port)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", config::RUST_LOG);
    }
    tracing_subscriber::fmt::init();

    let (model_file, port) = get_args();

    // Startup-fatal: never serve traffic without a model
    let model = match TorchModel::load(&model_file) {
        Ok(model) => Arc::new(model),
        Err(err) => {
            error!("failed to load model {model_file}: {err}");
            process::exit(1);
        }
    };
    info!("loaded model {model_file}, listening on port {port}");

    let state = web::Data::new(AppState::new(model));

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(server::configure)
    })
    .bind(format!("0.0.0.0:{port}"))?
    .run()
    .await
}
