pub mod use_style;
pub mod use_wheel_session;

pub use use_style::*;
pub use use_wheel_session::*;
