pub mod wheel;

pub use wheel::WheelPage;
