use crate::apply;
use clap::{Args, Parser, Subcommand};
use quickflow::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "QuickFlow Capital",
    about = "Fill in a business loan application and see prequalification results",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    apply: ApplyArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in and submit an application interactively (default command)
    Apply(ApplyArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ApplyArgs {
    /// Override the configured scoring backend base URL
    #[arg(long)]
    pub(crate) backend_url: Option<String>,
    /// Render without ANSI colors regardless of QUICKFLOW_COLOR
    #[arg(long)]
    pub(crate) no_color: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Apply(cli.apply));

    match command {
        Command::Apply(args) => apply::run(args).await,
    }
}
