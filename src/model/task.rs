use serde::Deserialize;

/// A single task: a position hint within its owner and a display name.
///
/// Tasks are immutable after construction and owned by exactly one
/// [`Project`](super::Project) or one [`Group`](super::Group).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Task {
    /// Ordering/identity hint within the owning collection (caller-assigned,
    /// not validated for uniqueness or contiguity)
    pub position: u32,
    /// Display name
    pub name: String,
}

impl Task {
    pub fn new(position: u32, name: impl Into<String>) -> Self {
        Task {
            position,
            name: name.into(),
        }
    }
}
