pub mod bridge;
pub mod session;

pub use bridge::{PageSnapshot, TestBridge};
pub use session::{BrowserConfig, BrowserKind, new_session};
