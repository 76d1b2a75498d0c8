//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::then;

#[then("the task list contains {count:usize} tasks")]
fn the_task_list_contains(world: &mut TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = world
        .service
        .list_tasks()
        .map_err(|err| eyre::eyre!("list_tasks failed: {err}"))?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"the task titles in order are "{titles}""#)]
fn the_task_titles_are(world: &mut TaskListWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(", ").collect();
    let tasks = world
        .service
        .list_tasks()
        .map_err(|err| eyre::eyre!("list_tasks failed: {err}"))?;
    let actual: Vec<&str> = tasks.iter().map(|task| task.title().as_str()).collect();
    if actual != expected {
        return Err(eyre::eyre!("expected titles {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then(r#"the first task has priority "{priority}""#)]
fn the_first_task_has_priority(
    world: &mut TaskListWorld,
    priority: String,
) -> Result<(), eyre::Report> {
    let tasks = world
        .service
        .list_tasks()
        .map_err(|err| eyre::eyre!("list_tasks failed: {err}"))?;
    let first = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("task list is empty"))?;
    if first.priority().as_str() != priority {
        return Err(eyre::eyre!(
            "expected priority {priority}, found {}",
            first.priority()
        ));
    }
    Ok(())
}
