pub mod checker;
pub mod executor;
pub mod lister;
pub mod monitor;
pub mod resolver;

pub use checker::{UpgradeCandidate, UpgradeChecker};
pub use executor::{UpdateExecutor, UpdateOutcome};
pub use monitor::MonitorLoop;
