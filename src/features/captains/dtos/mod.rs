mod captain_dto;

pub use captain_dto::{CaptainResponseDto, CreateCaptainDto};
