pub mod activity_repo;
pub mod seed_data;

pub use activity_repo::ActivityStore;
