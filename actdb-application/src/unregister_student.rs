use super::*;

/// Removes a registration from the shared catalog.
pub fn unregister_student(
    connections: &mem::Connections,
    activity_name: &str,
    email: &EmailAddress,
) -> Result<()> {
    {
        let mut catalog = connections.exclusive();
        usecases::unregister_student(&mut *catalog, activity_name, email)?;
    }
    info!("Unregistered {email} from {activity_name}");
    Ok(())
}
