//! Application flows: each one binds a usecase to the shared catalog
//! handle and reports the outcome.

#[macro_use]
extern crate log;

mod signup_student;
mod unregister_student;

pub mod prelude {
    pub use super::{signup_student::*, unregister_student::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use actdb_core::usecases;
pub(crate) use actdb_entities::email::EmailAddress;

pub(crate) mod mem {
    pub use actdb_db_mem::Connections;
}
