pub mod chart;
pub mod errors;
pub mod process;
pub mod reconcile;
pub mod songinfo;
pub mod transaction;
pub mod vocabulary;

pub use errors::{ChartfixError, ChartfixExpectedError, Result};
pub use reconcile::{EditPlan, TrackReport};
pub use songinfo::SongInfo;

#[cfg(test)]
mod testing;

#[cfg(test)]
mod songinfo_test;
