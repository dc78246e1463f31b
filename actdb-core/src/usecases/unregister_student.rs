use super::prelude::*;
use crate::usecases::get_activity;

/// Removes a student from an activity roster.
///
/// Fails without mutating anything if the activity is unknown or the
/// student never signed up.
pub fn unregister_student<R>(
    repo: &mut R,
    activity_name: &str,
    email: &EmailAddress,
) -> Result<()>
where
    R: ActivityRepo,
{
    let activity = get_activity(repo, activity_name)?;
    if !activity.is_registered(email) {
        return Err(Error::NotRegistered);
    }
    repo.remove_participant(activity_name, email)?;
    Ok(())
}
