//! Command-line caller.
//!
//! Parses arguments, forwards them to the [`UserService`] and renders the
//! result. Failures are rendered from the error code only.

use clap::{Args, Parser, Subcommand};
use serde_json::json;

use domain::{DomainError, DomainResult, Session, User};

use crate::service::UserService;
use crate::MigrateAction;

#[derive(Parser, Debug)]
#[command(name = "user-service")]
#[command(about = "Personal finance tracker account management")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Account(AccountCommand),

    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AccountCommand {
    /// Create an account and sign in
    Register(CredentialArgs),
    /// Sign in to an existing account
    Login(CredentialArgs),
    /// Show an account by id
    Find {
        #[arg(long, allow_negative_numbers = true)]
        id: i32,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CredentialArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long, env = "USER_SERVICE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

impl From<MigrateCommands> for MigrateAction {
    fn from(command: MigrateCommands) -> Self {
        match command {
            MigrateCommands::Up => MigrateAction::Up,
            MigrateCommands::Down => MigrateAction::Down,
            MigrateCommands::Status => MigrateAction::Status,
            MigrateCommands::Fresh => MigrateAction::Fresh,
        }
    }
}

/// What a successful account command produced.
#[derive(Debug, Clone)]
pub enum AccountOutcome {
    SignedIn(Session),
    Found(User),
}

/// Run one account command against the service.
pub async fn execute(
    service: &dyn UserService,
    command: &AccountCommand,
) -> DomainResult<AccountOutcome> {
    match command {
        AccountCommand::Register(args) => service
            .register(&args.username, &args.password)
            .await
            .map(|user| AccountOutcome::SignedIn(Session::signed_in(user))),
        AccountCommand::Login(args) => service
            .login(&args.username, &args.password)
            .await
            .map(|user| AccountOutcome::SignedIn(Session::signed_in(user))),
        AccountCommand::Find { id } => service.find(*id).await.map(AccountOutcome::Found),
    }
}

fn user_json(user: &User) -> serde_json::Value {
    json!({
        "id": user.id(),
        "username": user.username(),
        "registered_at": user.registered_at().to_rfc3339(),
        "current_balance": user.current_balance().to_string(),
    })
}

fn user_lines(user: &User) -> String {
    format!(
        "  id:              {}\n  username:        {}\n  registered at:   {}\n  current balance: {}",
        user.id(),
        user.username(),
        user.registered_at().format("%Y-%m-%d %H:%M:%S UTC"),
        user.current_balance()
    )
}

/// Render a successful outcome.
pub fn render_outcome(outcome: &AccountOutcome, as_json: bool) -> String {
    match (outcome, as_json) {
        (AccountOutcome::SignedIn(session), true) => json!({
            "signed_in": session.is_signed_in(),
            "user": session.current_user().map(user_json),
        })
        .to_string(),
        (AccountOutcome::SignedIn(session), false) => match session.current_user() {
            Some(user) => format!("Signed in as {}\n{}", user.username(), user_lines(user)),
            None => "Not signed in".to_string(),
        },
        (AccountOutcome::Found(user), true) => user_json(user).to_string(),
        (AccountOutcome::Found(user), false) => user_lines(user),
    }
}

/// Render a failure for the end user.
pub fn render_error(error: DomainError, as_json: bool) -> String {
    if as_json {
        json!({
            "error": {
                "code": error.code(),
                "message": error.user_message(),
            }
        })
        .to_string()
    } else {
        format!("Error: {}", error.user_message())
    }
}
