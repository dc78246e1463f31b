use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Student is not registered for this activity")]
    NotRegistered,
    #[error("Activity is already full")]
    ActivityFull,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
