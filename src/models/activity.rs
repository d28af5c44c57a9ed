use indexmap::IndexMap;
use serde::Serialize;

/// All activities, keyed by their exact (case-sensitive) name, in the order they were added.
pub type Directory = IndexMap<String, Activity>;

/// One extracurricular offering. Serialized as-is for `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity, always > 0. Not checked at signup.
    pub max_participants: u32,
    /// Emails in signup order, no duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        debug_assert!(max_participants > 0, "capacity must be positive");
        let activity = Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        };
        debug_assert!(activity.has_unique_participants());
        activity
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends `email`. Returns false (and leaves the list alone) if it is already there.
    pub fn add_participant(&mut self, email: &str) -> bool {
        if self.is_registered(email) {
            return false;
        }
        self.participants.push(email.to_string());
        debug_assert!(self.has_unique_participants());
        true
    }

    /// Removes `email`, keeping the order of everyone else. Returns false if it was absent.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(idx) => {
                self.participants.remove(idx);
                true
            }
            None => false,
        }
    }

    fn has_unique_participants(&self) -> bool {
        self.participants
            .iter()
            .enumerate()
            .all(|(i, p)| !self.participants[..i].contains(p))
    }
}
