use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::web::{mem, Cfg};
use actdb_db_mem::{seed, Connections};

pub mod prelude {
    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };
}

pub fn setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, mem::Connections) {
    setup_with_cfg(
        mounts,
        Cfg {
            enforce_capacity: false,
        },
    )
}

pub fn setup_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
) -> (Client, mem::Connections) {
    let db = mem::Connections::from(Connections::init(seed::mergington_catalog()));
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(RocketCfg::debug_default()),
        cfg,
    };
    let rocket = super::rocket_instance(options, db.clone());
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}
