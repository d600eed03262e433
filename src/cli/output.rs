use serde::Serialize;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson {
    pub name: String,
    /// "view", "group", or "project"
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<usize>,
    pub task_count: usize,
}

#[derive(Serialize)]
pub struct TaskJson {
    pub name: String,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub list: String,
    pub tasks: Vec<TaskJson>,
}
