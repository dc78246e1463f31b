use std::net::SocketAddr;

use rocket::{config::Config as RocketCfg, Rocket, Route};

use actdb_core::usecases;

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod mem;

#[cfg(test)]
pub mod tests;

/// Behavior switches of the HTTP surface.
#[derive(Debug, Clone)]
pub struct Cfg {
    /// Reject signups once a roster reached `max_participants`.
    /// Off by default: the stored capacity figure is informational.
    pub enforce_capacity: bool,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    connections: mem::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
    } = options;

    match usecases::load_activities(&*connections.shared()) {
        Ok(activities) => info!("Serving a catalog of {} activities", activities.len()),
        Err(err) => error!("Failed to load the activity catalog: {err}"),
    }

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(connections).manage(cfg);

    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes()), ("/", frontend::routes())]
}

pub async fn run(db: mem::Connections, enable_cors: bool, cfg: Cfg, bind: SocketAddr) {
    let mut rocket_cfg = RocketCfg::default();
    rocket_cfg.address = bind.ip();
    rocket_cfg.port = bind.port();

    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
