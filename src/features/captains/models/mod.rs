mod captain;

pub use captain::{Captain, CaptainRow, NewCaptain, Vehicle};
