use std::fmt;

use crate::settings::Settings;

/// Pinned dive release used for every scan.
pub const SCANNER_IMAGE: &str = "wagoodman/dive:v0.9.2";

/// Where a user-supplied dive config is mounted inside the scanner container.
pub const CONFIG_MOUNT_PATH: &str = "/.dive-ci";

/// One external command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$ {}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The two runtime calls a scan is made of, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPlan {
    pub pull: Invocation,
    pub run: Invocation,
}

impl ScanPlan {
    pub fn build(image: &str, config: Option<&str>, settings: &Settings) -> Self {
        let pull = Invocation::new(&settings.runtime, ["pull", SCANNER_IMAGE]);

        let mut run_options = vec![
            "-e".to_string(),
            "CI=true".to_string(),
            "-e".to_string(),
            format!("DOCKER_API_VERSION={}", settings.api_version),
            "--rm".to_string(),
            "-v".to_string(),
            format!("{socket}:{socket}", socket = settings.socket),
        ];
        let mut command_options = Vec::new();

        if let Some(config) = config {
            run_options.push("-v".to_string());
            run_options.push(format!("{config}:{CONFIG_MOUNT_PATH}"));
            command_options.push("--config-file".to_string());
            command_options.push(CONFIG_MOUNT_PATH.to_string());
        }

        let mut args = Vec::with_capacity(run_options.len() + command_options.len() + 3);
        args.push("run".to_string());
        args.extend(run_options);
        args.push(SCANNER_IMAGE.to_string());
        args.push(image.to_string());
        args.extend(command_options);

        ScanPlan { pull, run: Invocation { program: settings.runtime.clone(), args } }
    }
}
