// Line-oriented terminal session

pub mod menu;
pub mod screen;
pub mod session;

pub use menu::MenuCommand;
pub use session::{Session, SessionError, SessionOptions};
