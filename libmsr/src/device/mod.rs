// libmsr/src/device/mod.rs

pub mod builder;
pub mod handle;
pub mod operations;
pub mod options;
pub mod shared;

pub use builder::DeviceBuilder;
pub use handle::Device;
pub use options::DriverOptions;
pub use shared::SharedDevice;
