use crate::model::{Group, Project, Task};

/// The data-source seam: where the left pane's groups come from.
///
/// Injected into the projection layer so tests can supply fixture data
/// without touching any process-wide state. Iteration order of `groups()` is
/// the display order contract.
pub trait DataSource {
    /// All top-level groups, in display order.
    fn groups(&self) -> &[Group];

    /// A group's projects, in display order. Pass-through over the group's
    /// own project sequence.
    fn projects_by_group<'a>(&self, group: &'a Group) -> &'a [Project] {
        &group.projects
    }
}

/// A data source over an owned, ordered group sequence.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    groups: Vec<Group>,
}

impl InMemorySource {
    pub fn new(groups: Vec<Group>) -> Self {
        InMemorySource { groups }
    }

    /// The built-in demo data used when no `lists.toml` is found.
    pub fn seed() -> Self {
        InMemorySource::new(vec![Group::new(
            1,
            "Home",
            vec![Project::new(
                1,
                "Movies",
                vec![Task::new(1, "Watch Matrix"), Task::new(2, "Watch Matrix II")],
            )],
            vec![Task::new(1, "Watch movies")],
        )])
    }
}

impl DataSource for InMemorySource {
    fn groups(&self) -> &[Group] {
        &self.groups
    }
}
