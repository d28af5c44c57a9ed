use crate::models::{Activity, Directory};

// (name, description, schedule, max_participants, participants)
type SeedRow = (&'static str, &'static str, &'static str, u32, [&'static str; 2]);

const SEED_ACTIVITIES: [SeedRow; 9] = [
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in inter-school matches",
        "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
        25,
        ["lucas@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Swimming Club",
        "Learn swimming techniques and participate in swimming competitions",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        15,
        ["noah@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Studio",
        "Explore various art mediums including painting, drawing, and sculpture",
        "Wednesdays, 3:30 PM - 5:00 PM",
        18,
        ["isabella@mergington.edu", "liam@mergington.edu"],
    ),
    (
        "Drama Club",
        "Develop acting skills and perform in school theater productions",
        "Thursdays, 3:30 PM - 5:30 PM",
        20,
        ["charlotte@mergington.edu", "ethan@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop critical thinking and public speaking through competitive debates",
        "Fridays, 4:00 PM - 5:30 PM",
        16,
        ["amelia@mergington.edu", "james@mergington.edu"],
    ),
    (
        "Science Olympiad",
        "Compete in science and engineering challenges and experiments",
        "Tuesdays, 3:30 PM - 5:00 PM",
        14,
        ["harper@mergington.edu", "benjamin@mergington.edu"],
    ),
];

/// The catalog every process (and every test) starts from.
pub fn seed_directory() -> Directory {
    SEED_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            let activity = Activity::new(
                *description,
                *schedule,
                *max_participants,
                participants.iter().map(|p| p.to_string()).collect(),
            );
            (name.to_string(), activity)
        })
        .collect()
}
