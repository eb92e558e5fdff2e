//! NoteFlow terminal client
//!
//! Stands in for the login, register and profile pages of the web front-end:
//! form fields come from flags, alerts go to the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use noteflow_auth::{
    AuthMode, AuthRequestFlow, FormValues, HttpTransport, SessionStore, SubmitState,
};

mod error;
mod filesystem;
mod models;
mod presentation;

use error::AppError;
use models::Settings;
use presentation::{Level, Notice};

#[derive(Parser, Debug)]
#[command(name = "noteflow", version, about = "NoteFlow account client")]
struct Cli {
    /// Server base URL (overrides config.toml)
    #[arg(long, env = "NOTEFLOW_SERVER", global = true)]
    server: Option<String>,

    /// Directory holding config.toml and the session store
    #[arg(long, env = "NOTEFLOW_HOME", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with an existing account
    Login {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, env = "NOTEFLOW_PASSWORD", default_value = "", hide_env_values = true)]
        password: String,
    },
    /// Create a new account
    Register {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, env = "NOTEFLOW_PASSWORD", default_value = "", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// Show whether a session token is stored
    Status,
}

#[derive(Debug)]
struct Context {
    settings: Settings,
    data_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(notice) => {
            show(&notice);
            if notice.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e.user_message());
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<Notice, AppError> {
    let data_dir = filesystem::get_app_data_dir(cli.data_dir.as_deref());
    let settings = Settings::load(&filesystem::config_path(&data_dir))?
        .with_server_override(cli.server);
    let ctx = Context { settings, data_dir };
    log::debug!("{:?}", ctx);

    match cli.command {
        Command::Login { username, password } => {
            submit(&ctx, FormValues::login(username, password), AuthMode::Login).await
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            submit(
                &ctx,
                FormValues::register(username, email, password),
                AuthMode::Register,
            )
            .await
        }
        Command::Logout => {
            let mut store = SessionStore::open(filesystem::session_path(&ctx.data_dir))?;
            let page = noteflow_auth::logout(&mut store)?;
            Ok(Notice::logged_out(page))
        }
        Command::Status => {
            let store = SessionStore::open(filesystem::session_path(&ctx.data_dir))?;
            Ok(Notice::session_status(store.is_logged_in()))
        }
    }
}

async fn submit(ctx: &Context, form: FormValues, mode: AuthMode) -> Result<Notice, AppError> {
    let flow = AuthRequestFlow::new(HttpTransport::new(ctx.settings.server_url.clone())?);

    let state = SubmitState::begin(mode);
    log::debug!("{:?} via {}", state, flow.transport().base_url());
    let outcome = flow.submit(&form, mode).await;
    log::debug!("{:?}", SubmitState::finish(outcome.clone()));
    Ok(Notice::from_outcome(mode, &outcome))
}

fn show(notice: &Notice) {
    match notice.level {
        Level::Info => println!("{}", notice.render()),
        Level::Error => eprintln!("{}", notice.render()),
    }
}
