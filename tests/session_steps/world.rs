//! Shared world state for sign-in BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todolist::{
    app::App,
    session::{
        adapters::{DemoCredentialVerifier, StaticAuthProvider},
        ports::AuthProviderError,
        services::SessionError,
    },
    task::adapters::memory::InMemoryTaskRepository,
};

/// Application type used by the BDD world.
pub type TestApp =
    App<DemoCredentialVerifier, StaticAuthProvider, InMemoryTaskRepository, DefaultClock>;

/// Scenario world for sign-in behaviour tests.
pub struct SessionWorld {
    pub provider: StaticAuthProvider,
    pub app: Option<TestApp>,
    pub last_login_result: Option<Result<(), SessionError>>,
}

impl SessionWorld {
    /// Creates a world whose external provider refuses every sign-in.
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: StaticAuthProvider::failing(AuthProviderError::Denied(
                "not configured".to_owned(),
            )),
            app: None,
            last_login_result: None,
        }
    }

    /// Returns the application, starting it with the configured provider on
    /// first use.
    pub fn app(&mut self) -> &mut TestApp {
        let provider = self.provider.clone();
        self.app.get_or_insert_with(|| {
            App::new(
                Arc::new(DemoCredentialVerifier::new()),
                Arc::new(provider),
                Arc::new(DefaultClock),
            )
        })
    }
}

impl Default for SessionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> SessionWorld {
    SessionWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
