mod error;
mod load_activities;
mod signup_student;
mod unregister_student;

#[cfg(test)]
pub mod tests;

type Result<T> = std::result::Result<T, Error>;

pub use self::{
    error::Error, load_activities::*, signup_student::*, unregister_student::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::Error as RepoError, repositories::*};
}
use self::prelude::*;

/// Exact, case-sensitive lookup of a single activity.
pub fn get_activity<R>(repo: &R, name: &str) -> Result<Activity>
where
    R: ActivityRepo,
{
    repo.get_activity(name).map_err(|err| match err {
        RepoError::NotFound => Error::ActivityNotFound,
        err => Error::Repo(err),
    })
}
