pub mod group;
pub mod task;

pub use group::*;
pub use task::*;
