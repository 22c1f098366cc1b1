use std::sync::RwLock;

use indexmap::IndexMap;
use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignupError {
    #[error("unknown activity")]
    UnknownActivity,
    #[error("participant already registered")]
    AlreadyRegistered,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnregisterError {
    #[error("unknown activity")]
    UnknownActivity,
    #[error("participant not registered")]
    NotRegistered,
}

/// In-memory activity directory. The activity set is fixed at construction;
/// only participant rosters mutate afterwards.
///
/// Handlers run concurrently under tokio, so every check-then-mutate step
/// happens under a single write guard. An `IndexMap` keeps activities in seed
/// order when the directory is serialized.
pub struct ActivityStore {
    inner: RwLock<IndexMap<String, Activity>>,
}

impl ActivityStore {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            inner: RwLock::new(activities),
        }
    }

    /// Directory pre-loaded with the school's activity catalogue.
    pub fn seeded() -> Self {
        Self::new(seed_catalogue())
    }

    /// Full copy of the directory, for listing. Never fails.
    pub fn snapshot(&self) -> IndexMap<String, Activity> {
        self.inner.read().expect("activity store lock poisoned").clone()
    }

    /// Appends `email` to the activity's roster, rejecting duplicates.
    pub fn add_participant(&self, activity: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.inner.write().expect("activity store lock poisoned");
        let record = activities
            .get_mut(activity)
            .ok_or(SignupError::UnknownActivity)?;

        if record.participants.iter().any(|p| p == email) {
            return Err(SignupError::AlreadyRegistered);
        }
        record.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's roster.
    pub fn remove_participant(&self, activity: &str, email: &str) -> Result<(), UnregisterError> {
        let mut activities = self.inner.write().expect("activity store lock poisoned");
        let record = activities
            .get_mut(activity)
            .ok_or(UnregisterError::UnknownActivity)?;

        let Some(pos) = record.participants.iter().position(|p| p == email) else {
            return Err(UnregisterError::NotRegistered);
        };
        record.participants.remove(pos);
        Ok(())
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn seed_catalogue() -> IndexMap<String, Activity> {
    IndexMap::from([
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team".to_string(),
            activity(
                "Join the school soccer team and compete in matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                22,
                &["liam@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Basketball Team".to_string(),
            activity(
                "Practice and play basketball with the school team",
                "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
                15,
                &["ava@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Tennis Club".to_string(),
            activity(
                "Learn tennis fundamentals and play friendly matches",
                "Mondays and Thursdays, 3:30 PM - 5:00 PM",
                16,
                &["lucas@mergington.edu", "grace@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_string(),
            activity(
                "Explore your creativity through painting and drawing",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["amelia@mergington.edu", "harper@mergington.edu"],
            ),
        ),
        (
            "Drama Club".to_string(),
            activity(
                "Act, direct, and produce plays and performances",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ella@mergington.edu", "scarlett@mergington.edu"],
            ),
        ),
        (
            "Math Club".to_string(),
            activity(
                "Solve challenging problems and prepare for math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["james@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Develop public speaking and argumentation skills",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
                &["charlotte@mergington.edu", "henry@mergington.edu"],
            ),
        ),
    ])
}
