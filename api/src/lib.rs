//! This crate contains the banking platform sandbox demo service.
//!
//! The service renders the sandbox-first demo page and forwards the page
//! actions (create user, create card, simulate transfer) to the configured
//! upstream API root.
//!
//! # Other binaries
//!
//! - **openapi**: The openapi binary generates the OpenAPI documentation.

#![deny(missing_docs)]

use crate::config::AppConfig;
use salvo::prelude::*;

pub mod config;
pub mod error;
pub mod http;
pub mod mdl;
pub mod svc;
pub mod trace;

/// Starts the server
pub async fn start_server(cfg: AppConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // init the tracing framework
    trace::init_tracer(&cfg);

    // create the HTTP service
    let service = http::init_service(&cfg);

    // start the server
    let addr = cfg.server.addr().unwrap();
    let acceptor = TcpListener::new(addr).bind().await;
    eprintln!();
    eprintln!("Listening on http://{}", addr);
    Server::new(acceptor).serve(service).await;
    Ok(())
}
