use crate::error::AppError;
use crate::settings::{Settings, settings_file_path};
use crate::utils::display_path;

pub struct SettingsOptions {
    pub show_path: bool,
}

pub fn execute_settings(options: SettingsOptions) -> Result<(), AppError> {
    let path = settings_file_path()?;
    println!("Settings file: {}", display_path(&path));

    if !options.show_path {
        let settings = Settings::load()?;
        println!("runtime     = {}", settings.runtime);
        println!("socket      = {}", settings.socket);
        println!("api_version = {}", settings.api_version);
    }

    Ok(())
}
