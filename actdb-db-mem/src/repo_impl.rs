use actdb_core::{
    entities::*,
    repositories::{ActivityRepo, Error as RepoError},
};

use super::Catalog;

type Result<T> = std::result::Result<T, RepoError>;

impl ActivityRepo for Catalog {
    fn create_activity(&mut self, activity: Activity) -> Result<()> {
        if self.activities.iter().any(|a| a.name == activity.name) {
            return Err(RepoError::AlreadyExists);
        }
        self.activities.push(activity);
        Ok(())
    }

    fn get_activity(&self, name: &str) -> Result<Activity> {
        self.activities
            .iter()
            .find(|a| a.name == name)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_activities(&self) -> Result<Vec<Activity>> {
        Ok(self.activities.clone())
    }

    fn add_participant(&mut self, name: &str, email: &EmailAddress) -> Result<()> {
        let activity = self
            .activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(RepoError::NotFound)?;
        activity.participants.push(email.clone());
        Ok(())
    }

    fn remove_participant(&mut self, name: &str, email: &EmailAddress) -> Result<()> {
        let activity = self
            .activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(RepoError::NotFound)?;
        activity.participants.retain(|p| p != email);
        Ok(())
    }
}
