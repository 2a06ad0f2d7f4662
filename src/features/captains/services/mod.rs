mod captain_service;

pub use captain_service::CaptainService;
