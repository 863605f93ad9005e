pub mod harvest_window;
pub mod tax;

pub use harvest_window::*;
pub use tax::*;
