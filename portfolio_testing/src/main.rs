use std::net::IpAddr;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use portfolio_testing::emailjs::{self, EmailJsCredentials};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::EmailJs {
            host,
            port,
            service_id,
            template_id,
            public_key,
        } => {
            let credentials = EmailJsCredentials {
                service_id,
                template_id,
                public_key,
            };
            emailjs::start_server(host, port, credentials).await?
        }
        Command::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                env!("CARGO_BIN_NAME"),
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the emailjs testing server
    #[clap(name = "emailjs")]
    EmailJs {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value = "8009")]
        port: u16,
        #[arg(long, default_value = "service_test")]
        service_id: String,
        #[arg(long, default_value = "template_test")]
        template_id: String,
        #[arg(long, default_value = "public_test")]
        public_key: String,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}
