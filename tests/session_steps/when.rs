//! When steps for sign-in BDD scenarios.

use super::world::{SessionWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"the user logs in as "{email}" with password "{password}""#)]
fn the_user_logs_in(world: &mut SessionWorld, email: String, password: String) {
    let result = world.app().login(&email, &password);
    world.last_login_result = Some(result);
}

#[when("the user logs out and signs in again")]
fn logs_out_and_in_again(world: &mut SessionWorld) -> Result<(), eyre::Report> {
    let app = world.app();
    app.logout();
    app.login("demo@example.com", "password123")
        .wrap_err("sign in again")
}

#[when("the user signs in with the external provider")]
fn signs_in_with_provider(world: &mut SessionWorld) {
    let result = run_async(world.app().login_with_provider());
    world.last_login_result = Some(result);
}
