use crate::demo::{run_demo, run_directory_search, DemoArgs, DirectorySearchArgs};
use crate::server;
use advisor_connect::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "FinanceConnect Advisor Marketplace",
    about = "Run the advisor marketplace service or exercise its workflows from the command line",
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
    /// Query the advisor directory
    Directory {
        #[command(subcommand)]
        command: DirectoryCommand,
    },
    /// Run an end-to-end demo covering registration intake and CEO review
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DirectoryCommand {
    /// Filter the directory by search term, location, and specialty
    Search(DirectorySearchArgs),
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
        Command::Directory {
            command: DirectoryCommand::Search(args),
        } => run_directory_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
