use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use site::{SitePaths, home_css, logo};
use std::path::{Path, PathBuf};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// --- CLI Structure ---

#[derive(Parser, Debug)]
#[command(name = "satva-tools")]
#[command(version, about = "Maintenance commands for the Satva Organics storefront", long_about = None)]
struct Cli {
    /// The subcommand to execute; a bare invocation runs `logo`
    #[command(subcommand)]
    command: Option<Command>,

    /// Set the logging level [default: info]
    #[arg(short, long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    /// Allow overriding log level via RUST_LOG environment variable
    #[arg(long, default_value_t = false, global = true)]
    allow_env_log: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Regenerate src/utils/logo.js from the captured base64 payload
    Logo {
        /// Root of the site checkout
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Append responsive promo-image rules to the mobile blocks of Home.css
    MobileStyles {
        /// Root of the site checkout
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Rewrite the corrupted feature-desc section of Home.css
    FixHomeCss {
        /// Root of the site checkout
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}
impl From<LogLevel> for tracing_subscriber::filter::Directive {
    fn from(level: LogLevel) -> Self {
        LevelFilter::from(level).into()
    }
}

// --- Logging ---
fn init_logging(level: LogLevel, allow_env: bool) {
    let filter = if allow_env && std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy()
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .init();
}

// --- Main ---
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.allow_env_log);

    let outcome = match cli.command {
        None => run_logo(Path::new(".")),
        Some(Command::Logo { root }) => run_logo(&root),
        Some(Command::MobileStyles { root }) => run_mobile_styles(&root),
        Some(Command::FixHomeCss { root }) => run_fix_home_css(&root),
    };

    // Failures are reported on stdout as a single line; the exit status
    // stays zero either way.
    if let Err(e) = outcome {
        println!("{}", failure_line(&e));
    }
    Ok(())
}

/// The one-line report printed in place of a success message.
fn failure_line(err: &anyhow::Error) -> String {
    format!("Error: {err}")
}

// --- Command Runners ---

fn run_logo(root: &Path) -> Result<()> {
    let paths = SitePaths::new(root);
    logo::write_module(&paths.logo_base64_txt, &paths.logo_js)?;
    info!("Logo module regenerated at {:?}", paths.logo_js);
    println!("Successfully created {}", paths.logo_js.display());
    Ok(())
}

fn run_mobile_styles(root: &Path) -> Result<()> {
    let paths = SitePaths::new(root);
    for result in home_css::patch_mobile_styles(&paths.home_css)? {
        if result.applied {
            println!("Updated {} block.", result.name);
        } else {
            println!("Could not find {} block end pattern.", result.name);
        }
    }
    Ok(())
}

fn run_fix_home_css(root: &Path) -> Result<()> {
    let paths = SitePaths::new(root);
    let scan = home_css::fix_structure(&paths.home_css)?;
    if scan.found().is_some() {
        println!("Home.css structure fixed!");
    } else {
        println!(
            "Could not find corrupted pattern (start: {:?}, next: {:?})",
            scan.start, scan.next
        );
    }
    Ok(())
}
