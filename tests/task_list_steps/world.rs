//! Shared world state for task list BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todolist::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{AddTaskRequest, TaskListError, TaskListService},
};

/// Service type used by the BDD world.
pub type TestTaskListService = TaskListService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task list behaviour tests.
pub struct TaskListWorld {
    pub service: TestTaskListService,
    pub added: Vec<Task>,
    pub last_add_result: Option<Result<Task, TaskListError>>,
}

impl TaskListWorld {
    /// Creates a world over an empty list.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskListService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            added: Vec::new(),
            last_add_result: None,
        }
    }

    /// Adds a task and records the outcome.
    pub fn add(&mut self, request: AddTaskRequest) {
        let result = self.service.add_task(request);
        if let Ok(task) = &result {
            self.added.push(task.clone());
        }
        self.last_add_result = Some(result);
    }

    /// Finds a task added during the scenario by title.
    pub fn added_task(&self, title: &str) -> Result<&Task, eyre::Report> {
        self.added
            .iter()
            .find(|task| task.title().as_str() == title)
            .ok_or_else(|| eyre::eyre!("no task titled '{title}' was added"))
    }
}

impl Default for TaskListWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskListWorld {
    TaskListWorld::default()
}
