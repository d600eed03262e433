use serde::Deserialize;

use super::task::Task;

/// A project: an ordered sequence of tasks owned by exactly one group.
/// Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub position: u32,
    pub name: String,
    /// Absent in the data file means empty, never an error
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// A top-level group: owns zero-or-more projects and zero-or-more tasks
/// attached directly to the group (distinct from tasks nested under its
/// projects).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    pub position: u32,
    pub name: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn new(position: u32, name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Project {
            position,
            name: name.into(),
            tasks,
        }
    }
}

impl Group {
    pub fn new(
        position: u32,
        name: impl Into<String>,
        projects: Vec<Project>,
        tasks: Vec<Task>,
    ) -> Self {
        Group {
            position,
            name: name.into(),
            projects,
            tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_collections_deserialize_empty() {
        let group: Group = toml::from_str(
            r#"
position = 1
name = "Errands"
"#,
        )
        .unwrap();
        assert_eq!(group.name, "Errands");
        assert!(group.projects.is_empty());
        assert!(group.tasks.is_empty());
    }

    #[test]
    fn nested_tasks_deserialize_in_order() {
        let project: Project = toml::from_str(
            r#"
position = 1
name = "Movies"

[[tasks]]
position = 1
name = "Watch Matrix"

[[tasks]]
position = 2
name = "Watch Matrix II"
"#,
        )
        .unwrap();
        let names: Vec<&str> = project.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Watch Matrix", "Watch Matrix II"]);
    }
}
