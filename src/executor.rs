use std::io;
use std::process::{Command, Stdio};

use tracing::info;

use crate::plan::Invocation;

/// Runs an [`Invocation`] to completion and reports its exit code.
///
/// `Ok(None)` means the process ended without an exit code, e.g. it was
/// killed by a signal.
pub trait Executor {
    fn execute(&self, invocation: &Invocation) -> io::Result<Option<i32>>;
}

/// Spawns real child processes with the parent's stdio attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn execute(&self, invocation: &Invocation) -> io::Result<Option<i32>> {
        info!("{invocation}");
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        Ok(status.code())
    }
}
