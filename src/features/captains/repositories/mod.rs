mod captain_repository;

pub use captain_repository::{CaptainRepository, PgCaptainRepository};
