use super::*;

/// Applies a signup to the shared catalog.
///
/// Holds the exclusive side of the catalog handle across the check and
/// the mutation, so concurrent signups for the same roster cannot race
/// past the duplicate check.
pub fn signup_student(
    connections: &mem::Connections,
    activity_name: &str,
    email: &EmailAddress,
    enforce_capacity: bool,
) -> Result<()> {
    {
        let mut catalog = connections.exclusive();
        usecases::signup_student(&mut *catalog, activity_name, email, enforce_capacity)?;
    }
    info!("Signed up {email} for {activity_name}");
    Ok(())
}
