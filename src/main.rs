//! Ajarindongdit Dashboard CLI
//!
//! Command-line front end for the dashboard:
//! - Log in, register, log out
//! - Open the dashboard or any route
//! - Inspect the session and the API

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use ajarin_dash::render::{ChartStyle, OutputFormat, RenderOptions};
use ajarin_dash::{
    logging, ApiClient, Config, FileTokenStore, Prefill, RemoteApi, Route, Router, SessionStore,
    StdinInput,
};

#[derive(Parser)]
#[command(name = "ajarin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal client for the Ajarindongdit sales dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: ~/.config/ajarin/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dashboard output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Render a single view without following redirects
    #[arg(long, global = true)]
    pub once: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a route: "/", "/login" or "/register"
    Open {
        #[arg(default_value = "/")]
        path: String,
    },

    /// Log in, then show the dashboard
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account, then log in
    Register {
        /// Full name
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },

    /// Show the dashboard
    Dashboard,

    /// Forget the stored session
    Logout,

    /// Show the logged-in user's profile
    Whoami,

    /// Check API connectivity and session state
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_with_env(path),
        None => Config::load_default(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    logging::init(&config.logging);
    tracing::debug!("Ajarindongdit Dashboard v{}", env!("CARGO_PKG_VERSION"));

    match run(cli, config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<ExitCode> {
    let api = Arc::new(
        ApiClient::new(config.api.client_config()).context("Failed to create HTTP client")?,
    );
    let token_path = config.session.token_file();
    let tokens = Arc::new(FileTokenStore::new(&token_path));
    let mut session = SessionStore::restore(api.clone(), tokens);

    let options = RenderOptions {
        format: cli.format,
        chart: ChartStyle {
            bar_width: config.display.bar_width,
        },
    };

    let (route, prefill) = match cli.command {
        Commands::Open { path } => (path.parse::<Route>()?, Prefill::default()),
        Commands::Login { email, password } => (
            Route::Login,
            Prefill {
                email,
                password,
                ..Default::default()
            },
        ),
        Commands::Register {
            name,
            email,
            password,
        } => (
            Route::Register,
            Prefill {
                name,
                email,
                password,
            },
        ),
        Commands::Dashboard => (Route::Home, Prefill::default()),

        Commands::Logout => {
            session.logout();
            println!("Logged out.");
            return Ok(ExitCode::SUCCESS);
        }

        Commands::Whoami => {
            if !session.is_authenticated() {
                eprintln!("Not logged in. Run `ajarin login` first.");
                return Ok(ExitCode::FAILURE);
            }

            return match session.profile().await {
                Ok(profile) => {
                    println!("{}", profile.display_name().unwrap_or("-"));
                    println!("{}", serde_json::to_string_pretty(&profile)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) if e.is_unauthorized() => {
                    eprintln!("Session expired. Run `ajarin login` again.");
                    Ok(ExitCode::FAILURE)
                }
                Err(e) => Err(e).context("Failed to fetch profile"),
            };
        }

        Commands::Status => {
            println!("Ajarindongdit Dashboard v{}", env!("CARGO_PKG_VERSION"));
            println!();

            let reachable = match api.probe().await {
                Ok(message) => {
                    println!("API: {} (reachable)", api.base_url());
                    if !message.is_empty() {
                        println!("  {}", message);
                    }
                    true
                }
                Err(e) => {
                    println!("API: {} (unreachable)", api.base_url());
                    println!("  {}", e);
                    false
                }
            };

            println!();
            println!(
                "Session: {}",
                if session.is_authenticated() {
                    "logged in"
                } else {
                    "not logged in"
                }
            );
            println!("Token file: {}", token_path.display());

            return Ok(if reachable {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }

        Commands::Config { output } => {
            let content = ajarin_dash::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
            return Ok(ExitCode::SUCCESS);
        }
    };

    let mut router = Router::new(session, Box::new(StdinInput::new()), options).with_prefill(prefill);
    let mut stdout = std::io::stdout();

    let outcome = if cli.once {
        router.once(route, &mut stdout).await?
    } else {
        router.run(route, &mut stdout).await?
    };

    if let Some(next) = outcome.pending {
        eprintln!("Redirect: {}", next);
    }

    Ok(if outcome.completed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
