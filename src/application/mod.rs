// Application layer - session ownership, aggregation and the statistics handoff.

pub mod error;
pub mod reporting;
pub mod session;

pub use error::*;
pub use reporting::*;
pub use session::*;
