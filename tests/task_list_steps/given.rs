//! Given steps for task list BDD scenarios.

use super::world::TaskListWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todolist::task::services::AddTaskRequest;

#[given("an empty task list")]
fn an_empty_task_list(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    let tasks = world.service.list_tasks().wrap_err("list tasks")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty list, found {}", tasks.len()));
    }
    Ok(())
}

#[given(r#"a task "{title}" has been added"#)]
fn a_task_has_been_added(world: &mut TaskListWorld, title: String) -> Result<(), eyre::Report> {
    world.add(AddTaskRequest::new(title));
    match world.last_add_result.as_ref() {
        Some(Ok(_)) => Ok(()),
        other => Err(eyre::eyre!("setup task was not added: {other:?}")),
    }
}
