use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    ApiConfig, AppServices, AuthApi, Clock, ConfigError, PlanApi, SessionService,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

const DB_URL_ENV: &str = "BIBLIA_DB_URL";
const CATECHISM_ENV: &str = "BIBLIA_CATECHISM";
const DEFAULT_DB_URL: &str = "sqlite://biblia.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidApiUrl(ConfigError),
    InvalidToggle { name: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidApiUrl(err) => write!(f, "invalid --api value: {err}"),
            ArgsError::InvalidToggle { name, raw } => {
                write!(f, "{name} must be `on` or `off`, got `{raw}`")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    catechism_enabled: bool,
}

impl UiApp for DesktopApp {
    fn plan_api(&self) -> Arc<dyn PlanApi> {
        self.services.plan_api()
    }

    fn auth_api(&self) -> Arc<dyn AuthApi> {
        self.services.auth_api()
    }

    fn sessions(&self) -> Arc<SessionService> {
        self.services.sessions()
    }

    fn clock(&self) -> Clock {
        Clock::system()
    }

    fn catechism_enabled(&self) -> bool {
        self.catechism_enabled
    }
}

#[derive(Debug)]
struct Args {
    api: ApiConfig,
    db_url: String,
    catechism_enabled: bool,
}

#[derive(Debug)]
enum Parsed {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api <url>] [--db <sqlite_url>] [--no-catechism]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api {}", services::api::DEFAULT_API_URL);
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {}, {DB_URL_ENV}, {CATECHISM_ENV}=on|off, RUST_LOG", services::api::API_URL_ENV);
}

fn parse_toggle(name: &'static str, raw: &str) -> Result<bool, ArgsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err(ArgsError::InvalidToggle {
            name,
            raw: raw.to_string(),
        }),
    }
}

impl Args {
    /// Flags override the environment, which overrides the defaults.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut api_flag = None;
        let mut db_url = env(DB_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut catechism_enabled = match env(CATECHISM_ENV) {
            Some(raw) if !raw.trim().is_empty() => parse_toggle(CATECHISM_ENV, &raw)?,
            _ => true,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api" => {
                    api_flag = Some(require_value(&mut args, "--api")?);
                }
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--no-catechism" => catechism_enabled = false,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let api = match api_flag {
            Some(raw) => ApiConfig::new(&raw),
            None => ApiConfig::from_env(&env),
        }
        .map_err(ArgsError::InvalidApiUrl)?;

        Ok(Parsed::Run(Self {
            api,
            db_url,
            catechism_enabled,
        }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let args = match parsed {
        Parsed::Run(args) => args,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    // Open + migrate SQLite at startup so a broken session store fails before the window opens.
    prepare_sqlite_file(&args.db_url)?;
    let services = AppServices::new_sqlite(&args.db_url, args.api.clone()).await?;
    info!(
        api = %args.api.base_url(),
        db = %args.db_url,
        catechism = args.catechism_enabled,
        "starting"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services,
        catechism_enabled: args.catechism_enabled,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Bíblia AM/PM")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    log_fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
