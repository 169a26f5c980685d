pub mod candidate;
pub mod market;
pub mod race;

pub use candidate::*;
pub use market::*;
pub use race::*;
