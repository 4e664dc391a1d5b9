use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio_contact::ContactSubmission;

mod cli;

/// portfolio - personal site with a contact form relay
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Portfolio website and contact form relay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Send a message through a running server's contact form
    Contact {
        /// Contact endpoint URL
        #[arg(long, default_value = "http://127.0.0.1:3000/api/contact")]
        url: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = portfolio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    portfolio::observability::init_observability(
        "portfolio",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Contact {
            url,
            first_name,
            last_name,
            email,
            subject,
            message,
        } => {
            let fields = ContactSubmission {
                first_name,
                last_name,
                email,
                subject,
                message,
            };

            cli::contact::send(config, url, fields).await
        }
    }
}
