use super::{prelude::*, *};
use actdb_entities::builders::*;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub activities: Vec<Activity>,
}

impl ActivityRepo for MockDb {
    fn create_activity(&mut self, activity: Activity) -> RepoResult<()> {
        if self.activities.iter().any(|a| a.name == activity.name) {
            return Err(RepoError::AlreadyExists);
        }
        self.activities.push(activity);
        Ok(())
    }

    fn get_activity(&self, name: &str) -> RepoResult<Activity> {
        self.activities
            .iter()
            .find(|a| a.name == name)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_activities(&self) -> RepoResult<Vec<Activity>> {
        Ok(self.activities.clone())
    }

    fn add_participant(&mut self, name: &str, email: &EmailAddress) -> RepoResult<()> {
        let activity = self
            .activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(RepoError::NotFound)?;
        activity.participants.push(email.clone());
        Ok(())
    }

    fn remove_participant(&mut self, name: &str, email: &EmailAddress) -> RepoResult<()> {
        let activity = self
            .activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or(RepoError::NotFound)?;
        activity.participants.retain(|p| p != email);
        Ok(())
    }
}

fn chess_club() -> Activity {
    Activity::build()
        .name("Chess Club")
        .max_participants(12)
        .participants(vec!["michael@mergington.edu", "daniel@mergington.edu"])
        .finish()
}

fn mock_db() -> MockDb {
    let mut db = MockDb::default();
    db.create_activity(chess_club()).unwrap();
    db
}

#[test]
fn signup_new_student() {
    let mut db = mock_db();
    let email = EmailAddress::from("emma@mergington.edu");
    assert!(signup_student(&mut db, "Chess Club", &email, false).is_ok());
    let activity = db.get_activity("Chess Club").unwrap();
    assert_eq!(activity.participants.len(), 3);
    // New signups are appended, signup order is preserved.
    assert_eq!(activity.participants.last(), Some(&email));
}

#[test]
fn signup_twice_fails_and_keeps_the_roster() {
    let mut db = mock_db();
    let email = EmailAddress::from("emma@mergington.edu");
    assert!(signup_student(&mut db, "Chess Club", &email, false).is_ok());
    let before = db.get_activity("Chess Club").unwrap().participants;
    assert!(matches!(
        signup_student(&mut db, "Chess Club", &email, false),
        Err(Error::AlreadyRegistered)
    ));
    let after = db.get_activity("Chess Club").unwrap().participants;
    assert_eq!(before, after);
}

#[test]
fn signup_for_unknown_activity() {
    let mut db = mock_db();
    let email = EmailAddress::from("x@y.edu");
    assert!(matches!(
        signup_student(&mut db, "Nonexistent Club", &email, false),
        Err(Error::ActivityNotFound)
    ));
    // No existing roster was touched.
    assert_eq!(db.get_activity("Chess Club").unwrap().participants.len(), 2);
}

#[test]
fn signup_lookup_is_exact() {
    let mut db = mock_db();
    let email = EmailAddress::from("emma@mergington.edu");
    assert!(matches!(
        signup_student(&mut db, "chess club", &email, false),
        Err(Error::ActivityNotFound)
    ));
}

#[test]
fn signup_beyond_capacity_is_accepted_by_default() {
    let mut db = MockDb::default();
    db.create_activity(
        Activity::build()
            .name("Math Club")
            .max_participants(1)
            .participants(vec!["james@mergington.edu"])
            .finish(),
    )
    .unwrap();
    let email = EmailAddress::from("benjamin@mergington.edu");
    assert!(signup_student(&mut db, "Math Club", &email, false).is_ok());
    assert_eq!(db.get_activity("Math Club").unwrap().participants.len(), 2);
}

#[test]
fn signup_beyond_capacity_is_rejected_when_enforced() {
    let mut db = MockDb::default();
    db.create_activity(
        Activity::build()
            .name("Math Club")
            .max_participants(1)
            .participants(vec!["james@mergington.edu"])
            .finish(),
    )
    .unwrap();
    let email = EmailAddress::from("benjamin@mergington.edu");
    assert!(matches!(
        signup_student(&mut db, "Math Club", &email, true),
        Err(Error::ActivityFull)
    ));
    assert_eq!(db.get_activity("Math Club").unwrap().participants.len(), 1);
}

#[test]
fn unregister_restores_the_previous_roster() {
    let mut db = mock_db();
    let before = db.get_activity("Chess Club").unwrap().participants;
    let email = EmailAddress::from("emma@mergington.edu");
    signup_student(&mut db, "Chess Club", &email, false).unwrap();
    unregister_student(&mut db, "Chess Club", &email).unwrap();
    let after = db.get_activity("Chess Club").unwrap().participants;
    assert_eq!(before, after);
}

#[test]
fn unregister_without_signup() {
    let mut db = mock_db();
    let email = EmailAddress::from("notregistered@mergington.edu");
    assert!(matches!(
        unregister_student(&mut db, "Chess Club", &email),
        Err(Error::NotRegistered)
    ));
    assert_eq!(db.get_activity("Chess Club").unwrap().participants.len(), 2);
}

#[test]
fn unregister_from_unknown_activity() {
    let mut db = mock_db();
    let email = EmailAddress::from("x@y.edu");
    assert!(matches!(
        unregister_student(&mut db, "Nonexistent Club", &email),
        Err(Error::ActivityNotFound)
    ));
}

#[test]
fn load_activities_keeps_catalog_order() {
    let mut db = mock_db();
    db.create_activity(Activity::build().name("Art Club").finish())
        .unwrap();
    db.create_activity(Activity::build().name("Debate Team").finish())
        .unwrap();
    let names: Vec<_> = load_activities(&db)
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Chess Club", "Art Club", "Debate Team"]);
}
