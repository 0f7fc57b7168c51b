pub mod admins;
pub mod eligibility;
pub mod events;
pub mod news;
pub mod partners;
pub mod programs;
pub mod stats;
pub mod users;
