//! Business logic of the school activities database: the storage
//! abstraction and the roster/query usecases built on top of it.

pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use actdb_entities::{activity::*, email::*};
}
