//! Top-level application state.
//!
//! [`App`] decides which screen is shown from the session: the login screen
//! while anonymous, the task list once signed in. Signing out unmounts the
//! task screen, so its tasks are gone and the next sign-in starts with an
//! empty list.

mod form;
mod login;
mod tasks;

pub use form::{TaskDraft, TaskForm};
pub use login::LoginScreen;
pub use tasks::{EMPTY_LIST_PLACEHOLDER, TaskScreen};

use crate::session::{
    domain::{ExternalIdentity, Session},
    ports::{AuthProvider, AuthProviderResult, CredentialVerifier},
    services::{SessionResult, SessionService},
};
use crate::task::ports::TaskRepository;
use mockable::Clock;
use std::sync::Arc;

/// The screen currently shown.
pub enum Screen<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Credential entry and external sign-in.
    Login(LoginScreen),
    /// The signed-in user's tasks.
    Tasks(TaskScreen<R, C>),
}

/// Application state container.
///
/// Each sign-in mounts the task screen over a fresh `R::default()` list.
pub struct App<V, P, R, C>
where
    V: CredentialVerifier,
    P: AuthProvider,
    R: TaskRepository + Default,
    C: Clock + Send + Sync,
{
    session: SessionService<V, P, C>,
    clock: Arc<C>,
    screen: Screen<R, C>,
}

impl<V, P, R, C> App<V, P, R, C>
where
    V: CredentialVerifier,
    P: AuthProvider,
    R: TaskRepository + Default,
    C: Clock + Send + Sync,
{
    /// Creates the application showing the login screen.
    #[must_use]
    pub fn new(verifier: Arc<V>, provider: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            session: SessionService::new(verifier, provider, Arc::clone(&clock)),
            clock,
            screen: Screen::Login(LoginScreen::new()),
        }
    }

    /// Returns the current session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        self.session.session()
    }

    /// Returns the screen currently shown.
    #[must_use]
    pub const fn screen(&self) -> &Screen<R, C> {
        &self.screen
    }

    /// Returns the login screen while it is shown.
    pub const fn login_screen_mut(&mut self) -> Option<&mut LoginScreen> {
        match &mut self.screen {
            Screen::Login(login) => Some(login),
            Screen::Tasks(_) => None,
        }
    }

    /// Returns the task screen while it is shown.
    #[must_use]
    pub const fn task_screen(&self) -> Option<&TaskScreen<R, C>> {
        match &self.screen {
            Screen::Login(_) => None,
            Screen::Tasks(tasks) => Some(tasks),
        }
    }

    /// Returns the task screen for editing while it is shown.
    pub const fn task_screen_mut(&mut self) -> Option<&mut TaskScreen<R, C>> {
        match &mut self.screen {
            Screen::Login(_) => None,
            Screen::Tasks(tasks) => Some(tasks),
        }
    }

    /// Submits the email and password entered on the login screen.
    ///
    /// On success the task screen is mounted. On failure the login screen
    /// shows the error message and keeps its inputs. Does nothing when the
    /// task screen is already shown.
    ///
    /// # Errors
    ///
    /// Returns the sign-in error that was shown to the user.
    pub fn submit_login(&mut self) -> SessionResult<()> {
        let Screen::Login(login) = &self.screen else {
            return Ok(());
        };
        let email = login.email().to_owned();
        let password = login.password().to_owned();

        let outcome = self.session.login(&email, &password).map(|_| ());
        match outcome {
            Ok(()) => {
                self.mount_tasks();
                Ok(())
            }
            Err(err) => {
                if let Some(login) = self.login_screen_mut() {
                    login.show_error(&err);
                }
                Err(err)
            }
        }
    }

    /// Fills in the login inputs and submits them.
    ///
    /// # Errors
    ///
    /// Returns the sign-in error that was shown to the user.
    pub fn login(&mut self, email: &str, password: &str) -> SessionResult<()> {
        if let Some(login) = self.login_screen_mut() {
            login.set_email(email);
            login.set_password(password);
        }
        self.submit_login()
    }

    /// Returns the external authorization provider.
    ///
    /// The flow runs without borrowing the app: await
    /// [`AuthProvider::authorize`] on the returned handle while the login
    /// screen stays editable, then hand the outcome to
    /// [`App::complete_external_login`]. A flow that never resolves leaves
    /// the app untouched.
    #[must_use]
    pub fn auth_provider(&self) -> Arc<P> {
        self.session.auth_provider()
    }

    /// Applies the outcome of an external authorization flow and mounts the
    /// task screen on success.
    ///
    /// An outcome arriving after the user already signed in some other way
    /// is discarded.
    ///
    /// # Errors
    ///
    /// Returns the provider or identity error; the session is unchanged.
    pub fn complete_external_login(
        &mut self,
        outcome: AuthProviderResult<ExternalIdentity>,
    ) -> SessionResult<()> {
        if !matches!(self.screen, Screen::Login(_)) {
            return Ok(());
        }
        self.session.complete_external_login(outcome)?;
        self.mount_tasks();
        Ok(())
    }

    /// Runs the external authorization flow to completion and applies it.
    ///
    /// The app is borrowed until the provider answers. Does nothing when the
    /// task screen is already shown.
    ///
    /// # Errors
    ///
    /// Returns the provider or identity error; the session is unchanged.
    pub async fn login_with_provider(&mut self) -> SessionResult<()> {
        if !matches!(self.screen, Screen::Login(_)) {
            return Ok(());
        }
        let outcome = self.auth_provider().authorize().await;
        self.complete_external_login(outcome)
    }

    /// Signs out and returns to an empty login screen, dropping the task
    /// list.
    pub fn logout(&mut self) {
        self.session.logout();
        self.screen = Screen::Login(LoginScreen::new());
    }

    fn mount_tasks(&mut self) {
        let email = self.session.session().email().to_owned();
        self.screen = Screen::Tasks(TaskScreen::mount(
            email,
            Arc::new(R::default()),
            Arc::clone(&self.clock),
        ));
    }
}

#[cfg(test)]
mod tests;
