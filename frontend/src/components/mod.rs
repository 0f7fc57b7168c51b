pub mod activity_feed;
pub mod admin;
pub mod eligibility;
pub mod program_details;
pub mod rule_builder;
