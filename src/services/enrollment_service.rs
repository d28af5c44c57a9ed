use thiserror::Error;
use tracing::{info, warn};

use crate::database::ActivityStore;
use crate::models::Directory;

/// Why a signup or unregister was refused. The directory is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnrollmentError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student is already signed up")]
    AlreadyRegistered,
    #[error("Student is not registered for this activity")]
    NotRegistered,
}

pub async fn list_activities(store: &ActivityStore) -> Directory {
    store.snapshot().await
}

/// Adds `email` to the participants of `activity_name` and returns a confirmation.
///
/// Capacity is not checked: `max_participants` is informational only.
pub async fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    let mut directory = store.write().await;
    match signup_in(&mut directory, activity_name, email) {
        Ok(message) => {
            info!(activity = %activity_name, %email, "signup_ok");
            Ok(message)
        }
        Err(e) => {
            warn!(activity = %activity_name, %email, error = %e, "signup_rejected");
            Err(e)
        }
    }
}

/// Removes `email` from the participants of `activity_name` and returns a confirmation.
pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    let mut directory = store.write().await;
    match unregister_in(&mut directory, activity_name, email) {
        Ok(message) => {
            info!(activity = %activity_name, %email, "unregister_ok");
            Ok(message)
        }
        Err(e) => {
            warn!(activity = %activity_name, %email, error = %e, "unregister_rejected");
            Err(e)
        }
    }
}

fn signup_in(
    directory: &mut Directory,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    let activity = directory
        .get_mut(activity_name)
        .ok_or(EnrollmentError::NotFound)?;
    if !activity.add_participant(email) {
        return Err(EnrollmentError::AlreadyRegistered);
    }
    Ok(format!("Signed up {} for {}", email, activity_name))
}

fn unregister_in(
    directory: &mut Directory,
    activity_name: &str,
    email: &str,
) -> Result<String, EnrollmentError> {
    let activity = directory
        .get_mut(activity_name)
        .ok_or(EnrollmentError::NotFound)?;
    if !activity.remove_participant(email) {
        return Err(EnrollmentError::NotRegistered);
    }
    Ok(format!("Unregistered {} from {}", email, activity_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed_data::seed_directory;

    #[test]
    fn signup_appends_once() {
        let mut directory = seed_directory();
        let message = signup_in(&mut directory, "Chess Club", "new@mergington.edu").unwrap();

        assert!(message.contains("new@mergington.edu"));
        assert!(message.contains("Chess Club"));
        let participants = &directory["Chess Club"].participants;
        assert_eq!(participants.len(), 3);
        assert_eq!(participants.last().unwrap(), "new@mergington.edu");
    }

    #[test]
    fn repeated_signup_is_rejected_without_change() {
        let mut directory = seed_directory();
        signup_in(&mut directory, "Chess Club", "new@mergington.edu").unwrap();
        let before = directory["Chess Club"].participants.clone();

        let err = signup_in(&mut directory, "Chess Club", "new@mergington.edu").unwrap_err();

        assert_eq!(err, EnrollmentError::AlreadyRegistered);
        assert_eq!(directory["Chess Club"].participants, before);
    }

    #[test]
    fn unknown_activity_is_not_found_for_both_operations() {
        let mut directory = seed_directory();
        let before = directory.clone();

        for email in ["michael@mergington.edu", "", "anyone"] {
            assert_eq!(
                signup_in(&mut directory, "Nonexistent Activity", email),
                Err(EnrollmentError::NotFound)
            );
            assert_eq!(
                unregister_in(&mut directory, "Nonexistent Activity", email),
                Err(EnrollmentError::NotFound)
            );
        }
        // names are case-sensitive
        assert_eq!(
            signup_in(&mut directory, "chess club", "x@mergington.edu"),
            Err(EnrollmentError::NotFound)
        );
        assert_eq!(directory, before);
    }

    #[test]
    fn unregister_absent_email_is_rejected_without_change() {
        let mut directory = seed_directory();
        let before = directory["Chess Club"].participants.clone();

        let err =
            unregister_in(&mut directory, "Chess Club", "notregistered@mergington.edu").unwrap_err();

        assert_eq!(err, EnrollmentError::NotRegistered);
        assert_eq!(directory["Chess Club"].participants, before);
    }

    #[test]
    fn unregister_removes_and_mentions_email() {
        let mut directory = seed_directory();
        let message =
            unregister_in(&mut directory, "Chess Club", "michael@mergington.edu").unwrap();

        assert!(message.starts_with("Unregistered"));
        assert!(message.contains("michael@mergington.edu"));
        assert_eq!(
            directory["Chess Club"].participants,
            vec!["daniel@mergington.edu"]
        );
        assert_eq!(
            unregister_in(&mut directory, "Chess Club", "michael@mergington.edu"),
            Err(EnrollmentError::NotRegistered)
        );
    }

    #[test]
    fn signup_then_unregister_restores_participants() {
        let mut directory = seed_directory();
        let before = directory.clone();

        signup_in(&mut directory, "Programming Class", "flow@mergington.edu").unwrap();
        unregister_in(&mut directory, "Programming Class", "flow@mergington.edu").unwrap();

        assert_eq!(directory, before);
    }

    #[test]
    fn capacity_is_not_enforced() {
        let mut directory = seed_directory();
        let capacity = directory["Chess Club"].max_participants as usize;

        for i in 0..capacity {
            signup_in(&mut directory, "Chess Club", &format!("s{i}@mergington.edu")).unwrap();
        }

        assert!(directory["Chess Club"].participants.len() > capacity);
    }

    #[test]
    fn same_email_can_join_several_activities() {
        let mut directory = seed_directory();
        signup_in(&mut directory, "Chess Club", "multi@mergington.edu").unwrap();
        signup_in(&mut directory, "Drama Club", "multi@mergington.edu").unwrap();

        assert!(directory["Chess Club"].is_registered("multi@mergington.edu"));
        assert!(directory["Drama Club"].is_registered("multi@mergington.edu"));
    }

    #[tokio::test]
    async fn store_operations_are_visible_in_listing() {
        let store = ActivityStore::seeded();

        signup(&store, "Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();
        let listed = list_activities(&store).await;
        assert_eq!(listed["Chess Club"].participants.len(), 3);

        unregister(&store, "Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();
        let listed = list_activities(&store).await;
        assert!(!listed["Chess Club"].is_registered("newstudent@mergington.edu"));
    }

    #[tokio::test]
    async fn concurrent_duplicate_signups_admit_one() {
        let store = ActivityStore::seeded();
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                signup(&store, "Gym Class", "race@mergington.edu").await
            }));
        }

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 1);
        let listed = list_activities(&store).await;
        let count = listed["Gym Class"]
            .participants
            .iter()
            .filter(|p| *p == "race@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }
}
