//! Given steps for sign-in BDD scenarios.

use super::world::SessionWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use todolist::{
    app::Screen,
    session::{
        adapters::StaticAuthProvider,
        domain::{EmailAddress, ExternalIdentity, IdentityToken},
        ports::AuthProviderError,
    },
    task::services::AddTaskRequest,
};

#[given("the login screen is shown")]
fn the_login_screen_is_shown(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    if !matches!(world.app().screen(), Screen::Login(_)) {
        return Err(eyre::eyre!("expected the login screen"));
    }
    Ok(())
}

#[given("the user is signed in with the demo credentials")]
fn signed_in_with_demo_credentials(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    world
        .app()
        .login("demo@example.com", "password123")
        .wrap_err("sign in with demo credentials")
}

#[given(r#"the user has added a task "{title}""#)]
fn the_user_has_added_a_task(world: &mut SessionWorld, title: String) -> Result<(), eyre::Report> {
    let screen = world
        .app()
        .task_screen()
        .ok_or_else(|| eyre::eyre!("task screen is not shown"))?;
    screen
        .service()
        .add_task(AddTaskRequest::new(title))
        .wrap_err("add setup task")?;
    Ok(())
}

#[given(r#"the external provider vouches for "{email}""#)]
fn the_provider_vouches_for(world: &mut SessionWorld, email: String) -> Result<(), eyre::Report> {
    let identity = ExternalIdentity::new(IdentityToken::new("scenario-token")?)
        .with_email(EmailAddress::new(email)?);
    world.provider = StaticAuthProvider::granting(identity);
    Ok(())
}

#[given("the external provider refuses access")]
fn the_provider_refuses_access(world: &mut SessionWorld) {
    world.provider =
        StaticAuthProvider::failing(AuthProviderError::Denied("access_denied".to_owned()));
}
