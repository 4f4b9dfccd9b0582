// Rust guideline compliant 2026-10-15

//! Integration tests for config files reaching the shell.

use std::fs;
use std::io::Cursor;
use stockroom_cli::{create_formatter, init, Shell};
use stockroom_core::{config::DEFAULT_CONFIG_FILE, Category, Config, OutputFormat, Session};
use tempfile::TempDir;

/// Runs a script through a shell built from the config at `path`.
fn run_with_config(path: &std::path::Path, script: &str) -> (Session, String) {
    let config = Config::load(path).expect("config should load");
    let mut shell = Shell::new(
        Session::new(config.categories.clone()),
        create_formatter(OutputFormat::Plain, false),
        Cursor::new(script.to_string()),
        Vec::new(),
    );
    shell.run().expect("shell should run");

    let (session, output) = shell.into_parts();
    (session, String::from_utf8(output).expect("output should be UTF-8"))
}

#[test]
fn test_config_file_categories_reach_shell() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
    fs::write(&path, "categories = [\"Kitchenware\", \"Stationary\"]\n")
        .expect("Failed to write config");

    let script = "\
categories
add Kettle, Appliance, 30
add Fork, Kitchenware, 2
";
    let (session, output) = run_with_config(&path, script);

    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        vec![
            "Kitchenware",
            "Stationary",
            "Please select a category",
            "added 1"
        ]
    );
    assert_eq!(session.records().len(), 1);
    assert_eq!(session.records()[0].category, Category::Kitchenware);
}

#[test]
fn test_init_writes_loadable_default_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);

    assert!(init::execute(&path, false).expect("init should succeed"));
    let content = fs::read_to_string(&path).expect("Failed to read config");
    assert!(content.contains("categories"), "config should list categories");

    let (session, _) = run_with_config(&path, "add Toaster, Appliance, 25\n");
    assert_eq!(session.records().len(), 1);
}

#[test]
fn test_init_keeps_existing_config_unless_forced() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
    let custom = "categories = [\"Appliance\"]\n";
    fs::write(&path, custom).expect("Failed to write config");

    assert!(!init::execute(&path, false).expect("init should succeed"));
    assert_eq!(fs::read_to_string(&path).unwrap(), custom);

    assert!(init::execute(&path, true).expect("forced init should succeed"));
    let (session, _) = run_with_config(&path, "add Pen, Stationary, 1\n");
    assert_eq!(session.records().len(), 1);
}
