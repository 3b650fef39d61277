pub mod artifacts;
pub mod driver;
pub mod reports;
pub mod scenario;
pub mod util;

pub use artifacts::{FailureReport, artifacts_dir, capture_artifacts};
pub use driver::PageDriver;
pub use reports::ScenarioResult;
pub use util::split_csv;
