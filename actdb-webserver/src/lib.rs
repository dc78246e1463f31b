#[macro_use]
extern crate log;

use std::net::SocketAddr;

use actdb_db_mem::Connections;

mod adapters;
mod web;

pub use web::Cfg;

pub async fn run(connections: Connections, enable_cors: bool, cfg: Cfg, bind: SocketAddr) {
    web::run(connections.into(), enable_cors, cfg, bind).await;
}
