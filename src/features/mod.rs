pub mod captains;
pub mod users;
