pub mod application;
pub mod cli;
pub mod domain;
pub mod telemetry;

pub use application::{AggregateSnapshot, Session, StatisticsView, summarize};
pub use domain::*;
