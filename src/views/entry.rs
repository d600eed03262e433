use crate::data::DataSource;
use crate::model::Task;

use super::builtin::BuiltinView;

/// Display-layer wrapper around a task; the right pane shows only the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub name: String,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        TaskView {
            name: task.name.clone(),
        }
    }
}

/// One selectable row in the left pane.
///
/// Group and project variants carry indices into the data source's group
/// sequence rather than owned copies; everything is resolved against the
/// source at the point of use, so out-of-range indices degrade to an empty
/// name and an empty task set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    /// A built-in smart view with an optional numeric shortcut
    View {
        view: BuiltinView,
        shortcut: Option<usize>,
    },
    /// A user group (index into the data source's groups)
    Group { group: usize },
    /// A project under a group (indices into groups / that group's projects)
    Project { group: usize, project: usize },
    /// Non-interactive visual separator
    Delimiter,
}

impl ListEntry {
    /// Display name of this entry; empty for delimiters.
    pub fn name<'a>(&self, source: &'a dyn DataSource) -> &'a str {
        match self {
            ListEntry::View { view, .. } => view.name(),
            ListEntry::Group { group } => source
                .groups()
                .get(*group)
                .map(|g| g.name.as_str())
                .unwrap_or(""),
            ListEntry::Project { group, project } => source
                .groups()
                .get(*group)
                .and_then(|g| g.projects.get(*project))
                .map(|p| p.name.as_str())
                .unwrap_or(""),
            ListEntry::Delimiter => "",
        }
    }

    /// The label rendered in the left pane: `"N. Name"` for built-ins with a
    /// shortcut (blank-padded otherwise), a two-space indent for projects.
    pub fn label(&self, source: &dyn DataSource) -> String {
        match self {
            ListEntry::View { view, shortcut } => match shortcut {
                Some(n) => format!("{}. {}", n, view.name()),
                None => format!("   {}", view.name()),
            },
            ListEntry::Group { .. } => self.name(source).to_string(),
            ListEntry::Project { .. } => format!("  {}", self.name(source)),
            ListEntry::Delimiter => String::new(),
        }
    }

    /// Resolve the tasks shown in the right pane when this entry is selected.
    ///
    /// Groups flatten their direct tasks followed by every owned project's
    /// tasks, in project order then task order. Built-in views and delimiters
    /// have no tasks.
    pub fn tasks(&self, source: &dyn DataSource) -> Vec<TaskView> {
        match self {
            ListEntry::View { .. } | ListEntry::Delimiter => Vec::new(),
            ListEntry::Group { group } => {
                let Some(group) = source.groups().get(*group) else {
                    return Vec::new();
                };
                let mut tasks: Vec<TaskView> = group.tasks.iter().map(TaskView::from).collect();
                for project in source.projects_by_group(group) {
                    tasks.extend(project.tasks.iter().map(TaskView::from));
                }
                tasks
            }
            ListEntry::Project { group, project } => source
                .groups()
                .get(*group)
                .and_then(|g| g.projects.get(*project))
                .map(|p| p.tasks.iter().map(TaskView::from).collect())
                .unwrap_or_default(),
        }
    }

    pub fn is_delimiter(&self) -> bool {
        matches!(self, ListEntry::Delimiter)
    }
}

/// The built-in section: one entry per [`BuiltinView`] in enumeration order,
/// with contiguous shortcuts starting at 0.
pub fn builtin_entries() -> Vec<ListEntry> {
    BuiltinView::ALL
        .iter()
        .enumerate()
        .map(|(shortcut, view)| ListEntry::View {
            view: *view,
            shortcut: Some(shortcut),
        })
        .collect()
}

/// The user section: every group in data-source order, each immediately
/// followed by its projects in project order.
pub fn user_entries(source: &dyn DataSource) -> Vec<ListEntry> {
    let mut entries = Vec::new();
    for (g, group) in source.groups().iter().enumerate() {
        entries.push(ListEntry::Group { group: g });
        for p in 0..source.projects_by_group(group).len() {
            entries.push(ListEntry::Project {
                group: g,
                project: p,
            });
        }
    }
    entries
}

/// The full left-pane sequence:
/// `[Inbox, delimiter, Today..Logbook, delimiter, <user section>]`.
pub fn all_entries(source: &dyn DataSource) -> Vec<ListEntry> {
    let mut entries = builtin_entries();
    entries.insert(1, ListEntry::Delimiter);
    entries.push(ListEntry::Delimiter);
    entries.extend(user_entries(source));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InMemorySource;
    use crate::model::{Group, Project, Task};

    fn home_fixture() -> InMemorySource {
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

    fn task_names(entry: &ListEntry, source: &dyn DataSource) -> Vec<String> {
        entry.tasks(source).into_iter().map(|t| t.name).collect()
    }

    #[test]
    fn builtin_section_has_contiguous_shortcuts() {
        let entries = builtin_entries();
        assert_eq!(entries.len(), 6);
        for (i, entry) in entries.iter().enumerate() {
            match entry {
                ListEntry::View { view, shortcut } => {
                    assert_eq!(*shortcut, Some(i));
                    assert_eq!(*view, BuiltinView::ALL[i]);
                }
                other => panic!("unexpected entry in builtin section: {:?}", other),
            }
        }
    }

    #[test]
    fn full_list_shape_with_zero_groups() {
        let source = InMemorySource::new(Vec::new());
        let entries = all_entries(&source);
        assert_eq!(entries.len(), 8);
        assert!(entries[1].is_delimiter());
        assert!(entries[7].is_delimiter());
        // All other entries are built-in views
        for (i, entry) in entries.iter().enumerate() {
            if i != 1 && i != 7 {
                assert!(matches!(entry, ListEntry::View { .. }), "index {}", i);
            }
        }
    }

    #[test]
    fn user_section_projects_follow_their_group() {
        let source = InMemorySource::new(vec![
            Group::new(
                1,
                "Home",
                vec![Project::new(1, "Movies", Vec::new())],
                Vec::new(),
            ),
            Group::new(
                2,
                "Work",
                vec![
                    Project::new(1, "Q3", Vec::new()),
                    Project::new(2, "Q4", Vec::new()),
                ],
                Vec::new(),
            ),
        ]);
        let labels: Vec<String> = user_entries(&source)
            .iter()
            .map(|e| e.label(&source))
            .collect();
        assert_eq!(labels, vec!["Home", "  Movies", "Work", "  Q3", "  Q4"]);
    }

    #[test]
    fn group_tasks_flatten_direct_then_projects() {
        let source = home_fixture();
        let group = ListEntry::Group { group: 0 };
        assert_eq!(
            task_names(&group, &source),
            vec!["Watch movies", "Watch Matrix", "Watch Matrix II"]
        );
    }

    #[test]
    fn project_tasks_are_exactly_its_own() {
        let source = home_fixture();
        let project = ListEntry::Project {
            group: 0,
            project: 0,
        };
        assert_eq!(
            task_names(&project, &source),
            vec!["Watch Matrix", "Watch Matrix II"]
        );
    }

    #[test]
    fn builtin_and_delimiter_entries_have_no_tasks() {
        let source = home_fixture();
        let view = ListEntry::View {
            view: BuiltinView::Inbox,
            shortcut: Some(0),
        };
        assert!(view.tasks(&source).is_empty());
        assert!(ListEntry::Delimiter.tasks(&source).is_empty());
        assert_eq!(ListEntry::Delimiter.name(&source), "");
    }

    #[test]
    fn empty_group_resolves_to_no_tasks() {
        let source = InMemorySource::new(vec![Group::new(1, "Empty", Vec::new(), Vec::new())]);
        let group = ListEntry::Group { group: 0 };
        assert!(group.tasks(&source).is_empty());
        assert_eq!(group.name(&source), "Empty");
    }

    #[test]
    fn out_of_range_indices_degrade_to_empty() {
        let source = InMemorySource::new(Vec::new());
        let group = ListEntry::Group { group: 3 };
        assert_eq!(group.name(&source), "");
        assert!(group.tasks(&source).is_empty());
        let project = ListEntry::Project {
            group: 0,
            project: 9,
        };
        assert!(project.tasks(&source).is_empty());
    }

    #[test]
    fn labels_render_shortcut_indent_and_blank_forms() {
        let source = home_fixture();
        let with_shortcut = ListEntry::View {
            view: BuiltinView::Today,
            shortcut: Some(1),
        };
        assert_eq!(with_shortcut.label(&source), "1. Today");
        let without = ListEntry::View {
            view: BuiltinView::Today,
            shortcut: None,
        };
        assert_eq!(without.label(&source), "   Today");
        let project = ListEntry::Project {
            group: 0,
            project: 0,
        };
        assert_eq!(project.label(&source), "  Movies");
        assert_eq!(ListEntry::Delimiter.label(&source), "");
    }

    #[test]
    fn full_list_build_is_idempotent() {
        let source = home_fixture();
        let first = all_entries(&source);
        let second = all_entries(&source);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.name(&source), b.name(&source));
            assert_eq!(a.label(&source), b.label(&source));
            assert_eq!(task_names(a, &source), task_names(b, &source));
        }
    }
}
