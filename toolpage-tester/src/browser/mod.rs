pub mod bridge;
pub mod driver;
pub mod session;

pub use bridge::TestBridge;
pub use driver::BrowserDriver;
pub use session::{BrowserConfig, BrowserKind, new_session};
