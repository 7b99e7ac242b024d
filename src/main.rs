use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser, Subcommand};
use dive_action::actions::{error_command, get_input};
use dive_action::commands::scan::ScanOptions;
use dive_action::commands::settings_cmd::SettingsOptions;
use dive_action::commands::{execute_scan, execute_settings};
use dive_action::error::AppError;
use dive_action::executor::SystemExecutor;
use dive_action::settings::Settings;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            init_tracing(false);
            fail(AppError::Usage(err.to_string().trim_end().to_string()))
        }
    };
    init_tracing(cli.verbose);

    if let Err(err) = run(cli.command) {
        fail(err);
    }
}

fn fail(err: AppError) -> ! {
    error!("{err}");
    println!("{}", error_command(&err.to_string()));
    std::process::exit(1);
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "warn,dive_action=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Scan(args) => {
            let image = args.image.unwrap_or_else(|| get_input("image"));
            let config = args.config.or_else(|| Some(PathBuf::from(get_input("config"))));
            let options = ScanOptions::new(image, config);
            let settings = Settings::load()?;
            execute_scan(&options, &settings, &SystemExecutor)?;
        }
        Commands::Settings(args) => {
            execute_settings(SettingsOptions { show_path: args.path })?;
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "dive-action",
    version,
    about = "Run dive against a container image as a CI step."
)]
struct Cli {
    /// Log each runtime invocation and the resolved settings.
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pull dive and analyse an image, failing the step if dive does.
    Scan(ScanArgs),
    /// Show the runner settings file and its effective values.
    Settings(SettingsArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Image to analyse (defaults to the `image` step input).
    #[arg(long, value_name = "IMAGE")]
    image: Option<String>,

    /// Dive CI config file to mount (defaults to the `config` step input).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct SettingsArgs {
    /// Only show the settings file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,
}
