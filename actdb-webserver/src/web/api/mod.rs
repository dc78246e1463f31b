use std::{fmt::Display, result};

use actdb_boundary::Error as JsonErrorResponse;
use rocket::{
    self, get, post,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::Json,
    Route, State,
};

use crate::{
    adapters::json::{self, to_json},
    web::{mem, Cfg},
};
use actdb_application::prelude as flows;
use actdb_core::{entities::EmailAddress, usecases};

mod activities;
mod error;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;

pub fn routes() -> Vec<Route> {
    routes![
        activities::get_activities,
        activities::post_signup,
        activities::post_unregister,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let detail = err.to_string();
    let boundary_error = JsonErrorResponse { detail };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
