pub mod columns;
pub mod dataset;
pub mod record;
