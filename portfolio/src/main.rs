use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use portfolio::{
    commands::{contact::ContactCommand, content::ContentCommand, serve::serve},
    environment::Environment,
};
use portfolio_utils::portfolio_version;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            return Err(err).context("Failed to load .env file");
        }
    }

    init_tracing();

    let config_paths = portfolio_config::config_paths();
    let config = portfolio_config::load(&config_paths).context("Failed to load config")?;

    match cli.command {
        Command::Serve => serve(config).await?,
        Command::Contact(command) => command.invoke(config).await?,
        Command::Content { json, command } => {
            let environment = Environment::new(&config)?;
            command.invoke(&environment.content(), json)?
        }
        Command::CheckConfig { verbose } => {
            let environment = Environment::new(&config)?;
            match environment.contact().config().missing() {
                Some(key) => warn!("The contact form cannot send messages, {key} is not set"),
                None => info!("The contact form is configured"),
            }
            if verbose {
                println!("{config:#?}");
            }
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = portfolio_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the REST API server serving the portfolio content
    #[command(aliases(["run", "start", "r", "s"]))]
    Serve,
    /// Send a message through the contact form
    #[command(aliases(["c"]))]
    Contact(ContactCommand),
    /// Print the content of a page
    #[command(aliases(["show"]))]
    Content {
        /// Print JSON instead of text
        #[arg(long, global = true)]
        json: bool,
        #[command(subcommand)]
        command: ContentCommand,
    },
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}
