pub mod file;
pub mod source;
pub mod state;

pub use file::*;
pub use source::*;
pub use state::*;
