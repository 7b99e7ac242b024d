pub mod scan;
pub mod settings_cmd;

pub use scan::execute_scan;
pub use settings_cmd::execute_settings;
