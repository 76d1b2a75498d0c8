//! Line-oriented terminal front end for the to-do application.
//!
//! Usage:
//!
//! ```text
//! todolist-shell [--external-email <address>]
//! ```
//!
//! Commands are read from standard input, one per line, and the current
//! screen is rendered after each one:
//!
//! ```text
//! login demo@example.com password123
//! add Call Bob | urgent | 2026-10-19 | high
//! list
//! delete <task-id>
//! logout
//! ```
//!
//! `--external-email` configures the identity handed back by
//! `login-external`; without it external sign-in is refused. The external
//! flow runs in the background while further commands are read. Set
//! `RUST_LOG` to see state transitions on standard error.

use chrono::NaiveDate;
use mockable::DefaultClock;
use std::env;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use thiserror::Error;
use todolist::app::{App, EMPTY_LIST_PLACEHOLDER, Screen, TaskScreen};
use todolist::session::{
    adapters::{DemoCredentialVerifier, StaticAuthProvider},
    domain::{EmailAddress, ExternalIdentity, IdentityToken, SessionDomainError},
    ports::{AuthProvider, AuthProviderError, AuthProviderResult},
};
use todolist::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ParsePriorityError, Priority, TaskDomainError, TaskId},
};
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Application state driven by the shell.
type ShellApp<P = StaticAuthProvider> =
    App<DemoCredentialVerifier, P, InMemoryTaskRepository, DefaultClock>;

/// External authorization flow running in the background.
type PendingLogin = JoinHandle<AuthProviderResult<ExternalIdentity>>;

const HELP: &str = "\
commands:
  login <email> <password>   sign in; the password is the rest of the line
  login-external             sign in through the external provider
  logout                     sign out and discard the task list
  add <title> [| description [| YYYY-MM-DD [| low|medium|high]]]
  delete <task-id>           delete a task
  list                       show the current screen
  export                     print the task list as JSON
  help                       show this text
  quit                       leave the shell";

/// Errors raised while parsing arguments and commands.
#[derive(Debug, Error)]
enum ShellError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("unknown command '{0}', type 'help' for a list")]
    UnknownCommand(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error(transparent)]
    Priority(#[from] ParsePriorityError),
    #[error(transparent)]
    TaskDomain(#[from] TaskDomainError),
    #[error(transparent)]
    SessionDomain(#[from] SessionDomainError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
}

/// Fields of an `add` command.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AddArgs {
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    priority: Option<Priority>,
}

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Login { email: String, password: String },
    LoginExternal,
    Logout,
    Add(AddArgs),
    Delete(TaskId),
    List,
    Export,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, ShellError> {
        let trimmed = line.trim();
        let (head, rest) = trimmed
            .split_once(char::is_whitespace)
            .map_or((trimmed, ""), |(head, rest)| (head, rest.trim()));

        match head {
            "login" => {
                if rest.is_empty() {
                    return Err(ShellError::MissingArgument("email"));
                }
                let (email, password) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(ShellError::MissingArgument("password"))?;
                Ok(Self::Login {
                    email: email.to_owned(),
                    password: password.trim_start().to_owned(),
                })
            }
            "login-external" => Ok(Self::LoginExternal),
            "logout" => Ok(Self::Logout),
            "add" => parse_add(rest).map(Self::Add),
            "delete" => {
                if rest.is_empty() {
                    return Err(ShellError::MissingArgument("task-id"));
                }
                Ok(Self::Delete(rest.parse()?))
            }
            "list" | "" => Ok(Self::List),
            "export" => Ok(Self::Export),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ShellError::UnknownCommand(other.to_owned())),
        }
    }
}

fn parse_add(rest: &str) -> Result<AddArgs, ShellError> {
    let mut fields = rest.split('|').map(str::trim);
    let title = fields.next().unwrap_or_default().to_owned();
    let description = fields
        .next()
        .filter(|text| !text.is_empty())
        .map(str::to_owned);
    let due_date = fields
        .next()
        .filter(|text| !text.is_empty())
        .map(|text| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map_err(|_| ShellError::InvalidDate(text.to_owned()))
        })
        .transpose()?;
    let priority = fields
        .next()
        .filter(|text| !text.is_empty())
        .map(Priority::try_from)
        .transpose()?;

    Ok(AddArgs {
        title,
        description,
        due_date,
        priority,
    })
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<EmailAddress>, ShellError> {
    let _program = args.next();
    let mut external_email = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--external-email" => {
                let value = args
                    .next()
                    .ok_or(ShellError::MissingArgument("--external-email <address>"))?;
                external_email = Some(EmailAddress::new(value)?);
            }
            other => {
                return Err(ShellError::InvalidArgs(format!(
                    "unexpected argument: {other}"
                )));
            }
        }
    }
    Ok(external_email)
}

fn external_provider(email: Option<EmailAddress>) -> Result<StaticAuthProvider, ShellError> {
    let Some(address) = email else {
        return Ok(StaticAuthProvider::failing(AuthProviderError::Denied(
            "no external identity configured".to_owned(),
        )));
    };
    let token = IdentityToken::new(Uuid::new_v4().to_string())?;
    Ok(StaticAuthProvider::granting(
        ExternalIdentity::new(token).with_email(address),
    ))
}

fn build_runtime() -> Result<Runtime, ShellError> {
    Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .map_err(ShellError::RuntimeInit)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let external_email = parse_args(env::args())?;
    let provider = external_provider(external_email)?;
    let runtime = build_runtime()?;
    let mut app = ShellApp::new(
        Arc::new(DemoCredentialVerifier::new()),
        Arc::new(provider),
        Arc::new(DefaultClock),
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut app, &runtime, stdin.lock(), &mut stdout.lock())
}

/// Reads commands until end of input or `quit`.
///
/// An external sign-in runs in the background and is applied before the
/// next command once the provider answers. End of input waits for it;
/// `quit` abandons it.
fn run<P>(
    app: &mut ShellApp<P>,
    runtime: &Runtime,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), BoxError>
where
    P: AuthProvider + 'static,
{
    let mut pending = None;
    render(app, out)?;
    for line in input.lines() {
        let line = line?;
        if pending.as_ref().is_some_and(JoinHandle::is_finished) {
            settle(app, runtime, &mut pending, out)?;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(out, "error: {err}")?;
                continue;
            }
        };
        if command == Command::Quit {
            abandon(&mut pending);
            return Ok(());
        }
        execute(app, runtime, &mut pending, command, out)?;
    }
    settle(app, runtime, &mut pending, out)
}

/// Waits for the pending external sign-in, if any, and applies it.
fn settle<P>(
    app: &mut ShellApp<P>,
    runtime: &Runtime,
    pending: &mut Option<PendingLogin>,
    out: &mut impl Write,
) -> Result<(), BoxError>
where
    P: AuthProvider + 'static,
{
    let Some(handle) = pending.take() else {
        return Ok(());
    };
    match runtime.block_on(handle) {
        Ok(outcome) => {
            if let Err(err) = app.complete_external_login(outcome) {
                writeln!(out, "error: {err}")?;
            }
        }
        Err(err) => writeln!(out, "error: external sign-in failed: {err}")?,
    }
    render(app, out)
}

fn abandon(pending: &mut Option<PendingLogin>) {
    if let Some(handle) = pending.take() {
        handle.abort();
    }
}

fn execute<P>(
    app: &mut ShellApp<P>,
    runtime: &Runtime,
    pending: &mut Option<PendingLogin>,
    command: Command,
    out: &mut impl Write,
) -> Result<(), BoxError>
where
    P: AuthProvider + 'static,
{
    match command {
        Command::Login { email, password } => {
            // Failures are shown by the login screen itself.
            let _shown = app.login(&email, &password);
        }
        Command::LoginExternal => {
            if pending.is_some() {
                writeln!(out, "external sign-in already in progress")?;
                return Ok(());
            }
            if app.session().is_authenticated() {
                writeln!(out, "error: already signed in")?;
                return Ok(());
            }
            let provider = app.auth_provider();
            *pending = Some(runtime.spawn(async move { provider.authorize().await }));
            writeln!(out, "waiting for external sign-in...")?;
            return Ok(());
        }
        Command::Logout => {
            abandon(pending);
            app.logout();
        }
        Command::Add(args) => {
            let Some(screen) = app.task_screen_mut() else {
                writeln!(out, "error: sign in first")?;
                return Ok(());
            };
            add_task(screen, args)?;
        }
        Command::Delete(id) => {
            let Some(screen) = app.task_screen() else {
                writeln!(out, "error: sign in first")?;
                return Ok(());
            };
            screen.delete_task(id)?;
        }
        Command::List | Command::Quit => {}
        Command::Export => {
            let Some(screen) = app.task_screen() else {
                writeln!(out, "error: sign in first")?;
                return Ok(());
            };
            let json = serde_json::to_string_pretty(&screen.tasks()?)?;
            writeln!(out, "{json}")?;
            return Ok(());
        }
        Command::Help => {
            writeln!(out, "{HELP}")?;
            return Ok(());
        }
    }
    render(app, out)
}

/// Fills the add-task form and saves it. A blank title is dropped silently.
fn add_task(
    screen: &mut TaskScreen<InMemoryTaskRepository, DefaultClock>,
    args: AddArgs,
) -> Result<(), BoxError> {
    screen.open_form();
    if let Some(draft) = screen.form_mut().draft_mut() {
        draft.title = args.title;
        if let Some(description) = args.description {
            draft.description = description;
        }
        if let Some(due_date) = args.due_date {
            draft.due_date = due_date;
        }
        if let Some(priority) = args.priority {
            draft.priority = priority;
        }
    }
    if screen.save_form()?.is_none() {
        screen.cancel_form();
    }
    Ok(())
}

fn render<P>(app: &ShellApp<P>, out: &mut impl Write) -> Result<(), BoxError>
where
    P: AuthProvider,
{
    match app.screen() {
        Screen::Login(login) => {
            writeln!(out, "== Welcome Back ==")?;
            if let Some(message) = login.message() {
                writeln!(out, "{message}")?;
            }
        }
        Screen::Tasks(screen) => {
            writeln!(out, "== {} ==", screen.greeting())?;
            let tasks = screen.tasks()?;
            if tasks.is_empty() {
                writeln!(out, "{EMPTY_LIST_PLACEHOLDER}")?;
            }
            for task in tasks {
                writeln!(out, "[{}] {}", task.id(), task.title())?;
                if !task.description().is_empty() {
                    writeln!(out, "    {}", task.description())?;
                }
                writeln!(out, "    Due: {}", task.due_date_label())?;
                writeln!(out, "    Priority: {}", task.priority())?;
            }
        }
    }
    Ok(())
}
