use crate::email::EmailAddress;

/// An extracurricular offering of the school.
///
/// The `name` is the unique catalog key and is matched exactly,
/// case-sensitive, without any normalization. `schedule` is a
/// human-readable string that is never parsed. `max_participants` is a
/// stored capacity figure; whether it is enforced is a policy decision
/// outside of the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<EmailAddress>,
}

impl Activity {
    /// The roster preserves signup order, so membership is a linear scan.
    pub fn is_registered(&self, email: &EmailAddress) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_membership() {
        let activity = Activity {
            name: "Chess Club".into(),
            description: "".into(),
            schedule: "".into(),
            max_participants: 2,
            participants: vec!["michael@mergington.edu".into()],
        };
        assert!(activity.is_registered(&"michael@mergington.edu".into()));
        assert!(!activity.is_registered(&"daniel@mergington.edu".into()));
        assert!(!activity.is_full());
    }

    #[test]
    fn membership_is_case_sensitive() {
        let activity = Activity {
            name: "Chess Club".into(),
            description: "".into(),
            schedule: "".into(),
            max_participants: 2,
            participants: vec!["michael@mergington.edu".into()],
        };
        assert!(!activity.is_registered(&"Michael@mergington.edu".into()));
    }
}
