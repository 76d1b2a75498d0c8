//! When steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::when;
use todolist::task::{
    domain::{Priority, TaskId},
    services::AddTaskRequest,
};

#[when(r#"the user adds a task "{title}""#)]
fn the_user_adds_a_task(world: &mut TaskListWorld, title: String) {
    world.add(AddTaskRequest::new(title));
}

#[when(r#"the user adds a "{priority}" priority task "{title}" described as "{description}""#)]
fn the_user_adds_a_detailed_task(
    world: &mut TaskListWorld,
    priority: String,
    title: String,
    description: String,
) -> Result<(), eyre::Report> {
    let level = Priority::try_from(priority.as_str())?;
    world.add(
        AddTaskRequest::new(title)
            .with_description(description)
            .with_priority(level),
    );
    Ok(())
}

#[when("the user adds a task with a blank title")]
fn the_user_adds_a_blank_task(world: &mut TaskListWorld) {
    world.add(AddTaskRequest::new("   "));
}

#[when(r#"the task "{title}" is deleted"#)]
fn the_task_is_deleted(world: &mut TaskListWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.added_task(&title)?.id();
    let removed = world
        .service
        .delete_task(id)
        .map_err(|err| eyre::eyre!("delete failed: {err}"))?;
    if removed.is_none() {
        return Err(eyre::eyre!("expected '{title}' to be removed"));
    }
    Ok(())
}

#[when("an unknown task is deleted")]
fn an_unknown_task_is_deleted(world: &mut TaskListWorld) -> Result<(), eyre::Report> {
    let removed = world
        .service
        .delete_task(TaskId::new())
        .map_err(|err| eyre::eyre!("delete failed: {err}"))?;
    if let Some(task) = removed {
        return Err(eyre::eyre!("unexpectedly removed {task:?}"));
    }
    Ok(())
}
