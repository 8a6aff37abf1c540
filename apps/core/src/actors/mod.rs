pub mod coach_actor;
pub mod messages;
