mod ledger;
mod money;
mod operation;

pub use ledger::*;
pub use money::*;
pub use operation::*;
