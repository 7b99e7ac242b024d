use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::AppError;
use crate::executor::Executor;
use crate::plan::{Invocation, SCANNER_IMAGE, ScanPlan};
use crate::settings::Settings;

pub struct ScanOptions {
    pub image: String,
    pub config: Option<PathBuf>,
}

impl ScanOptions {
    /// An empty config value means no config was supplied.
    pub fn new(image: impl Into<String>, config: Option<PathBuf>) -> Self {
        let config = config.filter(|path| !path.as_os_str().is_empty());
        ScanOptions { image: image.into(), config }
    }
}

pub fn execute_scan<E: Executor>(
    options: &ScanOptions,
    settings: &Settings,
    executor: &E,
) -> Result<(), AppError> {
    let config = match &options.config {
        Some(path) => {
            let mount = path.to_str().ok_or_else(|| AppError::NonUtf8Config(path.clone()))?;
            ensure_config_exists(path)?;
            Some(mount)
        }
        None => None,
    };

    let plan = ScanPlan::build(&options.image, config, settings);
    debug!(?plan, "scan plan ready");

    match run_step(executor, &plan.pull)? {
        Some(0) => {}
        Some(code) => return Err(AppError::PullFailed { image: SCANNER_IMAGE.to_string(), code }),
        None => return Err(AppError::Terminated("Pull".to_string())),
    }

    // TODO: interpret dive's analysis output instead of relying on the exit code alone.
    match run_step(executor, &plan.run)? {
        Some(0) => {
            info!(image = %options.image, "scan passed");
            Ok(())
        }
        Some(code) => Err(AppError::ScanFailed(code)),
        None => Err(AppError::Terminated("Scan".to_string())),
    }
}

fn ensure_config_exists(path: &Path) -> Result<(), AppError> {
    match path.try_exists() {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::MissingConfig(path.to_path_buf())),
        Err(err) if matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Err(AppError::MissingConfig(path.to_path_buf()))
        }
        Err(source) => Err(AppError::ConfigCheck { path: path.to_path_buf(), source }),
    }
}

fn run_step<E: Executor>(executor: &E, invocation: &Invocation) -> Result<Option<i32>, AppError> {
    executor
        .execute(invocation)
        .map_err(|source| AppError::Launch { program: invocation.program.clone(), source })
}
