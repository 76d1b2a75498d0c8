//! Then steps for sign-in BDD scenarios.

use super::world::SessionWorld;
use rstest_bdd_macros::then;

#[then(r#"the session is authenticated as "{email}""#)]
fn authenticated_as(world: &mut SessionWorld, email: String) -> Result<(), eyre::Report> {
    let session = world.app().session();
    if !session.is_authenticated() || session.email() != email {
        return Err(eyre::eyre!(
            "expected session for '{email}', found {session:?}"
        ));
    }
    Ok(())
}

#[then("the session is not authenticated")]
fn not_authenticated(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    let session = world.app().session();
    if session.is_authenticated() || !session.email().is_empty() {
        return Err(eyre::eyre!("expected an anonymous session, found {session:?}"));
    }
    if !matches!(world.last_login_result, Some(Err(_))) {
        return Err(eyre::eyre!("expected the last sign-in attempt to fail"));
    }
    Ok(())
}

#[then(r#"the task screen greets "{email}""#)]
fn task_screen_greets(world: &mut SessionWorld, email: String) -> Result<(), eyre::Report> {
    let greeting = world
        .app()
        .task_screen()
        .map(|screen| screen.greeting())
        .ok_or_else(|| eyre::eyre!("task screen is not shown"))?;
    if greeting != format!("Welcome, {email}") {
        return Err(eyre::eyre!("unexpected greeting: {greeting}"));
    }
    Ok(())
}

#[then(r#"the login screen shows "{message}""#)]
fn login_screen_shows(world: &mut SessionWorld, message: String) -> Result<(), eyre::Report> {
    let shown = world
        .app()
        .login_screen_mut()
        .and_then(|login| login.message().map(str::to_owned))
        .ok_or_else(|| eyre::eyre!("login screen shows no message"))?;
    if shown != message {
        return Err(eyre::eyre!("expected message '{message}', found '{shown}'"));
    }
    Ok(())
}

#[then("the task list is empty")]
fn the_task_list_is_empty(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    let tasks = world
        .app()
        .task_screen()
        .ok_or_else(|| eyre::eyre!("task screen is not shown"))?
        .tasks()
        .map_err(|err| eyre::eyre!("list tasks failed: {err}"))?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected an empty list, found {}", tasks.len()));
    }
    Ok(())
}
