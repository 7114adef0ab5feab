//! Command-line entry point.
//!
//! Generated text goes to stdout; logs go to stderr.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use outreach_core::config::Config;
use outreach_core::domains::cold_email::{
    run_cold_email, ColdEmailRequest, Delivery, DEFAULT_PROMPT, DEFAULT_SUBJECT,
};
use outreach_core::domains::motivation::quote_of_the_day;
use outreach_core::kernel::OutreachDeps;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "outreach")]
#[command(about = "Generate quotes and cold sales emails with LLM agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a motivational quote of the day
    Quote,

    /// Have three sales personas draft cold emails and a manager pick the best
    ColdEmail {
        /// Prompt given to every sales persona
        #[arg(long, default_value = DEFAULT_PROMPT)]
        prompt: String,

        /// Mail the selected email to this address (needs EMAIL_USER and EMAIL_PASS).
        /// Falls back to NOTIFY_RECIPIENT.
        #[arg(long)]
        send_to: Option<String>,

        /// Subject line for the mailed email
        #[arg(long, default_value = DEFAULT_SUBJECT)]
        subject: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Values in .env win over the inherited environment
    let _ = dotenvy::dotenv_override();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,outreach_core=debug,openai_client=info,mailer=info".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let deps = OutreachDeps::from_config(&config).context("Failed to build agent runner")?;

    match cli.command {
        Commands::Quote => {
            let quote = quote_of_the_day(deps.runner.as_ref(), &deps.agent_model).await?;
            println!("{}", quote);
        }
        Commands::ColdEmail {
            prompt,
            send_to,
            subject,
        } => {
            let recipient = config.recipient(send_to);
            let deps = if recipient.is_some() {
                deps.with_smtp_notifier_from_env()?
            } else {
                deps
            };

            let request = ColdEmailRequest {
                prompt,
                recipient,
                subject,
            };
            let outcome = run_cold_email(&deps, &request).await?;

            println!("Best cold email:\n");
            println!("{}", outcome.selection);

            match outcome.delivery {
                Delivery::NotRequested => {}
                Delivery::Sent { recipient } => println!("\nEmail sent to {}", recipient),
                Delivery::Failed { reason, .. } => println!("\nFailed to send email: {}", reason),
            }
        }
    }

    Ok(())
}
