pub mod authority;
pub mod clock;
pub mod gateway;

pub use authority::*;
pub use clock::*;
pub use gateway::*;
