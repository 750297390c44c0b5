use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use greeter::{GreetingRequest, greet};
use greeter_doc_html::{HtmlOptions, Outcome, to_html_with_options, to_html_with_outcome};
use greeter_wizard_dialoguer::DialoguerBackend;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Personalized greeter.
///
/// Examples:
///   greeter greet --name Alice --repetitions 3
///   greeter prompt
///   greeter html --output greeter.html
#[derive(Debug, Parser)]
#[command(name = "greeter")]
#[command(version)]
#[command(about = "Greet someone, safely, as many times as you like")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a greeting
    Greet {
        /// Who to greet. Markup is escaped.
        #[arg(short, long, default_value = "")]
        name: String,

        /// How many times to repeat the greeting
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        repetitions: i64,
    },

    /// Ask for the inputs interactively, then print the greeting
    Prompt {
        /// Use prompts without colors
        #[arg(long)]
        plain: bool,

        /// Use this name instead of asking for it
        #[arg(short, long)]
        name: Option<String>,

        /// Pre-fill the number of greetings
        #[arg(short, long)]
        repetitions: Option<i64>,
    },

    /// Write the greeting form as an HTML page
    Html {
        /// File to write to (stdout if omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Page title (defaults to the form's title)
        #[arg(long)]
        title: Option<String>,

        /// Emit only the <form> element
        #[arg(long)]
        fragment: bool,

        /// Leave out the default stylesheet
        #[arg(long)]
        no_styles: bool,

        /// CSS class prefix for generated elements
        #[arg(long, default_value = "greeter")]
        class_prefix: String,

        /// Fill the output area with the greeting for this name
        #[arg(short, long)]
        name: Option<String>,

        /// Repetitions for the pre-filled greeting
        #[arg(short, long, requires = "name", allow_negative_numbers = true)]
        repetitions: Option<i64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    match cli.command {
        Command::Greet { name, repetitions } => {
            println!("{}", greet(&name, repetitions)?);
        }

        Command::Prompt {
            plain,
            name,
            repetitions,
        } => {
            let backend = if plain {
                DialoguerBackend::plain()
            } else {
                DialoguerBackend::new()
            };

            let mut builder = GreetingRequest::builder();
            if let Some(name) = name {
                builder = builder.assume(GreetingRequest::NAME, name);
            }
            if let Some(repetitions) = repetitions {
                builder = builder.suggest(GreetingRequest::REPETITIONS, repetitions);
            }

            let request = builder.run(backend)?;
            tracing::info!(repetitions = request.repetitions, "form submitted");
            println!("{}", request.respond()?);
        }

        Command::Html {
            output,
            title,
            fragment,
            no_styles,
            class_prefix,
            name,
            repetitions,
        } => {
            let mut options = HtmlOptions::new()
                .with_styles(!no_styles)
                .full_document(!fragment)
                .with_class_prefix(class_prefix);
            if let Some(title) = title {
                options = options.with_title(title);
            }

            let html = match name {
                Some(name) => {
                    let request = GreetingRequest::new(name, repetitions.unwrap_or(1));
                    let outcome = Outcome::from_result(request.respond());
                    if let Outcome::Error(message) = &outcome {
                        tracing::warn!(%message, "rendering error outcome");
                    }
                    to_html_with_outcome::<GreetingRequest>(options, &outcome)
                }
                None => to_html_with_options::<GreetingRequest>(options),
            };

            match output {
                Some(path) => {
                    fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(path = %path.display(), "wrote html form");
                }
                None => print!("{html}"),
            }
        }
    }

    Ok(())
}

/// Initialize tracing subscriber based on verbosity and output format
fn init_tracing(verbose: u8, json: bool) {
    // RUST_LOG wins over -v flags
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,greeter=info,greeter_cli=info".to_string(),
            2 => "info,greeter=debug,greeter_types=debug,greeter_doc_html=debug".to_string(),
            _ => "debug,greeter=trace,greeter_types=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn greet_defaults() {
        let cli = Cli::try_parse_from(["greeter", "greet"]).unwrap();
        match cli.command {
            Command::Greet { name, repetitions } => {
                assert_eq!(name, "");
                assert_eq!(repetitions, 1);
            }
            other => panic!("Expected greet command, got {other:?}"),
        }
    }

    #[test]
    fn greet_accepts_negative_repetitions() {
        let cli = Cli::try_parse_from(["greeter", "greet", "-n", "Bob", "-r", "-1"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Greet { repetitions: -1, .. }
        ));
    }

    #[test]
    fn html_repetitions_require_name() {
        assert!(Cli::try_parse_from(["greeter", "html", "--repetitions", "2"]).is_err());
    }
}
