use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::Route;
use crate::frameworks::browser::{Browser, BrowserError, Visit};
use crate::frameworks::config;
use crate::frameworks::runtime::init_runtime;
use crate::interface_adapters::clients::{ApiClient, ApiClientError};
use crate::interface_adapters::session_store::{FileSessionStore, SystemClock};
use crate::use_cases::{LoginForm, ReviewForm};

/// Command-line client for the HBnB lodging site.
#[derive(Parser, Debug)]
#[command(name = "hbnb", version, about = "Browse HBnB places from the terminal", long_about = None)]
pub struct Cli {
    /// API base url (falls back to HBNB_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file (falls back to HBNB_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Request timeout in milliseconds, 0 for none (falls back to HBNB_HTTP_TIMEOUT_MS)
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// How the settled page is printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a page by href, e.g. `place.html?id=42`
    Open { href: String },

    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "HBNB_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Clear the stored session
    Logout,

    /// List places, optionally filtered by a maximum price
    Places {
        /// A price ceiling or `all`
        #[arg(long)]
        max_price: Option<String>,
    },

    /// Show a place with its reviews
    Place { id: String },

    /// Post a review for a place
    Review {
        id: String,
        /// 1 to 5
        #[arg(long)]
        rating: Option<String>,
        #[arg(long)]
        text: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Debug)]
pub enum CliError {
    Client(ApiClientError),
    Browser(BrowserError),
    UnknownPage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Client(err) => write!(f, "{err}"),
            CliError::Browser(err) => write!(f, "{err}"),
            CliError::UnknownPage(href) => write!(f, "unknown page: {href}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ApiClientError> for CliError {
    fn from(err: ApiClientError) -> Self {
        CliError::Client(err)
    }
}

impl From<BrowserError> for CliError {
    fn from(err: BrowserError) -> Self {
        CliError::Browser(err)
    }
}

pub async fn run() -> ExitCode {
    init_runtime();
    let cli = Cli::parse();
    let format = cli.format;

    match execute(cli).await {
        Ok(visit) => {
            print_visit(&visit, format);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<Visit, CliError> {
    let base_url = cli.api_url.unwrap_or_else(config::api_url);
    let timeout = match cli.timeout_ms {
        Some(0) => None,
        Some(millis) => Some(Duration::from_millis(millis)),
        None => config::http_timeout(),
    };
    let session_file = cli.session_file.unwrap_or_else(config::session_file);

    let api = ApiClient::new(&base_url, timeout)?;
    tracing::debug!(api = %api.base_url(), session = %session_file.display(), "client ready");
    let session = FileSessionStore::new(session_file, SystemClock);
    let browser = Browser::new(api, session, config::SESSION_TTL_SECONDS);

    let visit = match cli.command {
        Command::Open { href } => {
            let route = Route::parse(&href).ok_or(CliError::UnknownPage(href))?;
            browser.open(route).await?
        }
        Command::Login { email, password } => {
            browser.login(LoginForm { email, password }).await?
        }
        Command::Logout => browser.logout().await?,
        Command::Places { max_price: None } => browser.open(Route::Index).await?,
        Command::Places {
            max_price: Some(value),
        } => browser.filter_places(&value).await?,
        Command::Place { id } => browser.open(Route::place(id)).await?,
        Command::Review { id, rating, text } => {
            let form = ReviewForm {
                rating: rating.unwrap_or_default(),
                text,
            };
            browser.submit_review(&id, form).await?
        }
    };
    Ok(visit)
}

fn print_visit(visit: &Visit, format: OutputFormat) {
    for alert in &visit.alerts {
        println!("[alert] {alert}");
    }
    match format {
        OutputFormat::Text => {
            println!("== {} ==", visit.location().href());
            println!("{}", visit.to_text());
        }
        OutputFormat::Html => println!("{}", visit.to_html()),
    }
}
