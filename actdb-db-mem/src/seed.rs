use actdb_core::{entities::*, repositories::ActivityRepo};

use super::Catalog;

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: usize,
    participants: &[&str],
) -> Activity {
    Activity {
        name: name.into(),
        description: description.into(),
        schedule: schedule.into(),
        max_participants,
        participants: participants
            .iter()
            .copied()
            .map(EmailAddress::from)
            .collect(),
    }
}

/// The fixed Mergington High catalog the service starts with.
///
/// Some activities come pre-populated, some start empty; the state
/// resets to this set on every restart.
pub fn mergington_catalog() -> Catalog {
    let mut catalog = Catalog::default();
    let activities = [
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        activity(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        activity(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Tennis Club",
            "Improve your serve and play friendly tennis matches",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            10,
            &["lucas@mergington.edu"],
        ),
        activity(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu", "scarlett@mergington.edu"],
        ),
        activity(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ];
    for activity in activities {
        // Seed names are distinct, so this cannot fail.
        catalog
            .create_activity(activity)
            .expect("unique seed activity names");
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_is_complete() {
        let catalog = mergington_catalog();
        let activities = catalog.all_activities().unwrap();
        assert_eq!(activities.len(), 10);
        assert_eq!(activities[0].name, "Chess Club");
        assert!(activities[0].is_registered(&"michael@mergington.edu".into()));
    }
}
