pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::normalize_spaces;
pub use time::{parse_clock, render, to_minutes_safe};
