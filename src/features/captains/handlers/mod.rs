pub mod captain_handler;

pub use captain_handler::{
    __path_get_captain, __path_register_captain, get_captain, register_captain,
};
