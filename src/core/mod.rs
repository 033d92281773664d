pub mod add;
pub mod append;
pub mod backup;
pub mod normalize;
pub mod read;
pub mod schema;
pub mod sequence;
pub mod serialize;
pub mod view;

pub use append::{AppendLogic, AppendOutcome};
pub use schema::Delimiter;
