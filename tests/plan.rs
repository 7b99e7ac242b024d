use dive_action::plan::{CONFIG_MOUNT_PATH, Invocation, SCANNER_IMAGE, ScanPlan};
use dive_action::settings::Settings;

#[test]
fn relative_config_path_is_passed_verbatim() {
    let plan = ScanPlan::build("myapp:latest", Some("./dive-ci.yaml"), &Settings::default());

    let args = &plan.run.args;
    let mount = args.iter().position(|arg| arg == "./dive-ci.yaml:/.dive-ci").unwrap();
    let scanner = args.iter().position(|arg| arg == SCANNER_IMAGE).unwrap();
    assert_eq!(args[mount - 1], "-v");
    assert!(mount < scanner);
    assert_eq!(&args[args.len() - 2..], ["--config-file", CONFIG_MOUNT_PATH]);
}

#[test]
fn empty_image_is_still_passed_through() {
    let plan = ScanPlan::build("", None, &Settings::default());
    assert_eq!(plan.run.args.last().map(String::as_str), Some(""));
}

#[test]
fn invocation_displays_as_a_shell_line() {
    let invocation = Invocation::new("docker", ["pull", SCANNER_IMAGE]);
    assert_eq!(invocation.to_string(), "$ docker pull wagoodman/dive:v0.9.2");
}
