// Low-level storage access trait.
// The repository owns the authoritative name -> activity mapping and
// mutates rosters in place. All business precondition checks live in
// the usecases, not here.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait ActivityRepo {
    fn create_activity(&mut self, activity: Activity) -> Result<()>;

    /// Exact string match on the activity name, case-sensitive,
    /// no normalization.
    fn get_activity(&self, name: &str) -> Result<Activity>;

    /// The full catalog in stable insertion order.
    fn all_activities(&self) -> Result<Vec<Activity>>;

    fn add_participant(&mut self, name: &str, email: &EmailAddress) -> Result<()>;
    fn remove_participant(&mut self, name: &str, email: &EmailAddress) -> Result<()>;
}
