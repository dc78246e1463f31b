pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::activity_builder::*;

pub mod activity_builder {

    use super::*;
    use crate::{activity::*, email::*};

    #[derive(Debug)]
    pub struct ActivityBuild {
        activity: Activity,
    }

    impl ActivityBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.activity.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.activity.description = desc.into();
            self
        }
        pub fn schedule(mut self, schedule: &str) -> Self {
            self.activity.schedule = schedule.into();
            self
        }
        pub fn max_participants(mut self, max: usize) -> Self {
            self.activity.max_participants = max;
            self
        }
        pub fn participants(mut self, emails: Vec<impl Into<EmailAddress>>) -> Self {
            self.activity.participants = emails.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Activity {
            self.activity
        }
    }

    impl Builder for Activity {
        type Build = ActivityBuild;
        fn build() -> Self::Build {
            ActivityBuild {
                activity: Activity {
                    name: "".into(),
                    description: "".into(),
                    schedule: "".into(),
                    max_participants: 0,
                    participants: vec![],
                },
            }
        }
    }

    #[test]
    fn build_default_activity() {
        let activity = Activity::build().name("x").finish();
        assert_eq!(activity.name, "x");
        assert!(activity.participants.is_empty());
    }
}
