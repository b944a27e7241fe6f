use std::{
    io,
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use actix_web::{web, App, HttpServer};
use actix_web_lab::middleware::from_fn;
use clap::Parser;
use store::store::{
    request_manager::{RequestManager, StoreRequest},
    store::Store,
};

use crate::middleware::{cross_origin_headers, request_log};

mod error;
mod middleware;
mod routes;

/// 📒 Header inspector edge service. Serves the people roster and the
/// student table over four JSON routes, with cross-origin headers attached
/// to every response.
#[derive(Parser, Debug)]
struct Cli {
    /// Port the edge service will listen on
    #[clap(short, long, env = "SERVER_PORT", default_value = "3101")]
    port: u16,

    /// Address the edge service will listen on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let (store_sender, store_receiver): (Sender<StoreRequest>, Receiver<StoreRequest>) =
        mpsc::channel();

    // The store owns all mutable state and runs on its own thread
    thread::spawn(move || {
        Store::new(store_receiver).run();
    });

    let request_manager = RequestManager::new(store_sender);

    // Set up Ctrl-C handler
    let set_handler_request_manager_clone = request_manager.clone();

    ctrlc::set_handler(move || {
        match set_handler_request_manager_clone.send_shutdown_request() {
            Ok(shutdown_response) => log::info!("Shutting down server: {}", shutdown_response),
            Err(err) => log::warn!("Store did not acknowledge shutdown: {}", err),
        }

        std::process::exit(0);
    })
    .expect("Error setting Ctrl-C handler");

    log::info!("starting HTTP server on port {}.", args.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(request_manager.clone()))
            .configure(routes::configure)
            .wrap(from_fn(cross_origin_headers))
            .wrap(from_fn(request_log))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
