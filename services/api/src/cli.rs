use crate::report::{run_audit, run_questions, run_rules, AuditArgs, QuestionsArgs, RulesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use storecheck::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "storecheck",
    about = "Score an app against App Store and Google Play review rules",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Audit a JSON answer file and print the compliance report
    Audit(AuditArgs),
    /// List the built-in review rules
    Rules(RulesArgs),
    /// Show the checklist questions, optionally against existing answers
    Questions(QuestionsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Audit(args) => run_audit(args),
        Command::Rules(args) => run_rules(args),
        Command::Questions(args) => run_questions(args),
    }
}
