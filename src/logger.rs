use std::net::SocketAddr;

use chrono::Local;
use hyper::{Method, StatusCode};

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server started at port: {}", addr.port());
    println!("Listening on: http://{addr}");
    println!("Log level: {}", config.logging.level);
    println!("Backing file: {}", config.storage.file);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

/// Access log line, written after the response is built.
pub fn log_request(method: &Method, path: &str, status: StatusCode) {
    println!(
        "[{}] {method} {path} - {}",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        status.as_u16()
    );
}

pub fn log_error(message: &str) {
    eprintln!("[Error] {message}");
}

pub fn log_storage_read_error(detail: &str) {
    eprintln!("[Storage] Error reading from file: {detail}");
}

pub fn log_storage_write_error(detail: &str) {
    eprintln!("[Storage] Error writing to file: {detail}");
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Signal received, stopping server");
}
