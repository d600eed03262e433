pub mod builtin;
pub mod entry;

pub use builtin::*;
pub use entry::*;
