use indexmap::IndexMap;
use tracing::{info, warn};

use crate::models::Activity;
use crate::store::{ActivityStore, SignupError, UnregisterError};
use crate::web::error::AppError;

pub fn list_activities(store: &ActivityStore) -> IndexMap<String, Activity> {
    store.snapshot()
}

/// Registers `email` for `activity` and returns the confirmation message
/// shown to the student. Capacity is informational only and never checked.
pub fn sign_up(store: &ActivityStore, activity: &str, email: &str) -> Result<String, AppError> {
    match store.add_participant(activity, email) {
        Ok(()) => {
            info!("Signed up {} for {}", email, activity);
            Ok(format!("Signed up {} for {}", email, activity))
        }
        Err(SignupError::UnknownActivity) => {
            warn!("Signup for unknown activity {:?}", activity);
            Err(AppError::ActivityNotFound)
        }
        Err(SignupError::AlreadyRegistered) => {
            warn!("Duplicate signup of {} for {}", email, activity);
            Err(AppError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            })
        }
    }
}

/// Removes `email` from `activity`'s roster and returns the confirmation
/// message.
pub fn unregister(store: &ActivityStore, activity: &str, email: &str) -> Result<String, AppError> {
    match store.remove_participant(activity, email) {
        Ok(()) => {
            info!("Unregistered {} from {}", email, activity);
            Ok(format!("Unregistered {} from {}", email, activity))
        }
        Err(UnregisterError::UnknownActivity) => {
            warn!("Unregister for unknown activity {:?}", activity);
            Err(AppError::ActivityNotFound)
        }
        Err(UnregisterError::NotRegistered) => {
            warn!("Unregister of {} who is not in {}", email, activity);
            Err(AppError::NotSignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_message_names_student_and_activity() {
        let store = ActivityStore::seeded();
        let msg = sign_up(&store, "Programming Class", "test@mergington.edu").unwrap();
        assert_eq!(msg, "Signed up test@mergington.edu for Programming Class");
    }

    #[test]
    fn unregister_message_names_student_and_activity() {
        let store = ActivityStore::seeded();
        let msg = unregister(&store, "Chess Club", "michael@mergington.edu").unwrap();
        assert_eq!(msg, "Unregistered michael@mergington.edu from Chess Club");
    }

    #[test]
    fn errors_map_to_app_error_variants() {
        let store = ActivityStore::seeded();

        assert!(matches!(
            sign_up(&store, "Nonexistent Activity", "a@b.edu"),
            Err(AppError::ActivityNotFound)
        ));
        assert!(matches!(
            sign_up(&store, "Chess Club", "michael@mergington.edu"),
            Err(AppError::AlreadySignedUp { .. })
        ));
        assert!(matches!(
            unregister(&store, "Chess Club", "stranger@mergington.edu"),
            Err(AppError::NotSignedUp { .. })
        ));
    }
}
