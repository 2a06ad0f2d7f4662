pub mod user_handler;

pub use user_handler::{__path_register_user, register_user};
