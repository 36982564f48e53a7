use crate::model::Task;

/// One line per task: `<id>. <description> | <status-label>`.
pub fn format_task_list(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&format!(
            "{}. {} | {}\n",
            task.id, task.description, task.status
        ));
    }
    out
}
