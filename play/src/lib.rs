mod config;
mod session;
mod voyage;
pub use config::*;
pub use session::*;
pub use voyage::*;
