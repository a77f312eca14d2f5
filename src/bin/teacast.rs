//! `teacast`: render TeaCast pages in the terminal.
//!
//! ```sh
//! teacast show /predictions
//! teacast login --username analyst --password secret
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use teacast_sdk::observability::{log_startup, LoggingConfig};
use teacast_sdk::views::{LoginState, LoginView, Page};
use teacast_sdk::{config, FileSessionStore, Route, Session, TeaCastClient};

/// TeaCast tea auction market data and price forecasts.
///
/// Configuration priority: CLI args > environment variables > defaults.
#[derive(Parser, Debug)]
#[command(name = "teacast")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TeaCast tea auction market data and price forecasts", long_about = None)]
struct Cli {
    /// API origin, e.g. http://127.0.0.1:5000
    #[arg(long, env = "TEACAST_API_URL")]
    api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "TEACAST_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Where the signed-in role is kept
    #[arg(long, env = "TEACAST_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page at PATH (/, /analytics, /predictions, /about)
    Show {
        #[arg(default_value = "/")]
        path: String,
    },
    /// Sign in and show the dashboard
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "TEACAST_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored role
    Logout,
    /// Print the stored role
    Whoami,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LoggingConfig::from_env().with_verbosity(cli.verbose);
    if let Err(e) = log_config.init() {
        eprintln!("{e}");
    }

    match run(cli, &log_config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, log_config: &LoggingConfig) -> teacast_sdk::Result<ExitCode> {
    let session_path = cli
        .session_file
        .clone()
        .unwrap_or_else(config::default_session_path);
    let mut session = Session::load(Box::new(FileSessionStore::new(&session_path)))?;

    let mut builder = TeaCastClient::builder();
    if let Some(url) = &cli.api_url {
        builder = builder.base_url(url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    match cli.command {
        Command::Logout => {
            session.sign_out()?;
            println!("Signed out.");
            Ok(ExitCode::SUCCESS)
        }
        Command::Whoami => {
            match (session.is_signed_in(), session.role()) {
                (true, Some(role)) => println!("{role}"),
                (true, None) => println!("Signed in (no role assigned)."),
                (false, _) => println!("Not signed in."),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Show { path } => {
            let client = Arc::new(builder.build()?);
            log_startup(log_config, "show", client.base_url());
            let route = Route::parse(&path);
            Ok(show(&route, &client))
        }
        Command::Login { username, password } => {
            let client = Arc::new(builder.build()?);
            log_startup(log_config, "login", client.base_url());

            let mut view = LoginView::new();
            view.username = username;
            view.password = password;
            view.submit(&client);
            let state = view.wait(&mut session).clone();
            print!("{}", view.render());

            match state {
                LoginState::SignedIn(next) => Ok(show(&next, &client)),
                _ => Ok(ExitCode::FAILURE),
            }
        }
    }
}

fn show(route: &Route, client: &Arc<TeaCastClient>) -> ExitCode {
    if *route == Route::Login {
        println!("Use `teacast login --username <USER>` to sign in.");
        return ExitCode::SUCCESS;
    }
    let mut page = Page::mount(route, client);
    page.wait();
    print!("{}", page.render());
    match page {
        Page::NotFound(_) => ExitCode::from(2),
        _ => ExitCode::SUCCESS,
    }
}
