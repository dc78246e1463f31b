use super::prelude::*;
use crate::usecases::get_activity;

/// Registers a student for an activity.
///
/// The lookup and all precondition checks happen before the roster is
/// touched, so a failed signup never mutates any state. The stored
/// `max_participants` figure is only checked when the caller opts in
/// via `enforce_capacity`.
pub fn signup_student<R>(
    repo: &mut R,
    activity_name: &str,
    email: &EmailAddress,
    enforce_capacity: bool,
) -> Result<()>
where
    R: ActivityRepo,
{
    let activity = get_activity(repo, activity_name)?;
    if activity.is_registered(email) {
        return Err(Error::AlreadyRegistered);
    }
    if enforce_capacity && activity.is_full() {
        return Err(Error::ActivityFull);
    }
    repo.add_participant(activity_name, email)?;
    Ok(())
}
