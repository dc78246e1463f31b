use super::*;
use actdb_entities as e;

impl From<e::activity::Activity> for Activity {
    fn from(from: e::activity::Activity) -> Self {
        let e::activity::Activity {
            name: _,
            description,
            schedule,
            max_participants,
            participants,
        } = from;
        Self {
            description,
            schedule,
            max_participants,
            participants: participants
                .into_iter()
                .map(e::email::EmailAddress::into_string)
                .collect(),
        }
    }
}

impl From<Vec<e::activity::Activity>> for Activities {
    fn from(from: Vec<e::activity::Activity>) -> Self {
        Self(
            from.into_iter()
                .map(|activity| {
                    let name = activity.name.clone();
                    (name, activity.into())
                })
                .collect(),
        )
    }
}
