//! Scripted end-to-end sessions for the prompt loop.
//!
//! Each test feeds a complete session through `App::run` on in-memory
//! streams against a real temporary directory, then inspects both the
//! transcript and the files left on disk.
use dirinfo_cli::{App, SaveOptions};
use dirinfo_core::{deserialize_from_json, load_directory};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `root/{a.txt, b.cs, sub/c.txt}` inside a fresh temp dir.
fn make_temp_tree() -> (TempDir, std::path::PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("root");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("a.txt"), "a").unwrap();
    fs::write(root.join("b.cs"), "b").unwrap();
    fs::write(root.join("sub").join("c.txt"), "c").unwrap();
    (tmp, root)
}

fn run_session(script: String) -> String {
    let mut app = App::new(script.as_bytes(), Vec::new());
    app.run().unwrap();
    String::from_utf8(app.into_output()).unwrap()
}

fn extension_lines(transcript: &str) -> Vec<&str> {
    transcript
        .lines()
        .skip_while(|l| *l != "Extensions found in the folder:")
        .skip(1)
        .take_while(|l| l.starts_with('.'))
        .collect()
}

// ── Interactive loop ──────────────────────────────────────────────────────────

#[test]
fn directory_then_skip_save() {
    let (_tmp, root) = make_temp_tree();
    let out = run_session(format!("{}\nn\nexit\n", root.display()));

    assert!(out.contains(&format!("Processing directory: {}", root.display())));
    assert_eq!(extension_lines(&out), [".cs", ".txt"]);
    assert!(out.contains("Skipped saving to JSON."));
    assert!(out.ends_with("Exiting the program.\n"));
}

#[test]
fn directory_saved_then_reloaded_from_json() {
    let (tmp, root) = make_temp_tree();
    let json = tmp.path().join("info.json");

    let out = run_session(format!(
        "{root}\ny\n{json}\n{json}\nn\nexit\n",
        root = root.display(),
        json = json.display()
    ));

    assert!(out.contains(&format!("Directory information serialized to {}", json.display())));
    assert!(out.contains(&format!("Processing JSON file: {}", json.display())));
    assert_eq!(
        out.matches("Extensions found in the folder:").count(),
        2,
        "both the directory and the JSON file should list extensions"
    );
    assert_eq!(deserialize_from_json(&json).unwrap(), load_directory(&root).unwrap());
}

#[test]
fn declining_overwrite_keeps_existing_file() {
    let (tmp, root) = make_temp_tree();
    let json = tmp.path().join("existing.json");
    fs::write(&json, "keep me").unwrap();

    let out = run_session(format!("{}\ny\n{}\nn\nexit\n", root.display(), json.display()));

    assert!(out.contains(&format!(
        "The file '{}' already exists. Do you want to overwrite it? (y/n):",
        json.display()
    )));
    assert!(out.contains("Skipping saving to JSON."));
    assert_eq!(fs::read_to_string(&json).unwrap(), "keep me");
}

#[test]
fn accepting_overwrite_replaces_file() {
    let (tmp, root) = make_temp_tree();
    let json = tmp.path().join("existing.json");
    fs::write(&json, "stale").unwrap();

    run_session(format!("{}\ny\n{}\ny\nexit\n", root.display(), json.display()));

    assert_eq!(deserialize_from_json(&json).unwrap().name.as_deref(), Some("root"));
}

#[test]
fn non_json_save_path_is_refused() {
    let (tmp, root) = make_temp_tree();
    let target = tmp.path().join("info.txt");

    let out = run_session(format!("{}\ny\n{}\nexit\n", root.display(), target.display()));

    assert!(out.contains("The provided file path is not a valid JSON file."));
    assert!(!target.exists());
}

#[test]
fn blank_save_path_is_refused() {
    let (_tmp, root) = make_temp_tree();
    let out = run_session(format!("{}\ny\n\nexit\n", root.display()));
    assert!(out.contains("Invalid path. Skipping saving to JSON."));
}

/// A missing output directory is reported and the loop keeps going.
#[test]
fn save_into_missing_directory_reports_failure() {
    let (tmp, root) = make_temp_tree();
    let target = tmp.path().join("nowhere").join("info.json");

    let out = run_session(format!("{}\ny\n{}\nexit\n", root.display(), target.display()));

    assert!(out.contains(&format!(
        "Failed to save JSON: The directory '{}' does not exist.",
        tmp.path().join("nowhere").display()
    )));
    assert!(out.ends_with("Exiting the program.\n"));
}

#[test]
fn corrupt_json_reports_error_and_continues() {
    let tmp = TempDir::new().unwrap();
    let json = tmp.path().join("broken.json");
    fs::write(&json, "{ not json").unwrap();

    let out = run_session(format!("{}\nexit\n", json.display()));

    assert!(out.contains(&format!(
        "An error occurred: Failed to deserialize JSON from the file '{}'.",
        json.display()
    )));
    assert!(out.ends_with("Exiting the program.\n"));
}

/// Files that are not `.json` are not read back as trees.
#[test]
fn plain_file_is_unsupported() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("notes.txt");
    fs::write(&file, "hi").unwrap();

    let out = run_session(format!("{}\nexit\n", file.display()));
    assert!(out.contains("The provided input is neither a valid directory nor a JSON file."));
}

// ── One-shot mode ─────────────────────────────────────────────────────────────

fn run_once(path: &Path, save: Option<&SaveOptions>) -> anyhow::Result<String> {
    let mut app = App::new(&b""[..], Vec::new());
    app.run_once(path, save)?;
    Ok(String::from_utf8(app.into_output()).unwrap())
}

#[test]
fn run_once_lists_extensions_and_saves() {
    let (tmp, root) = make_temp_tree();
    let json = tmp.path().join("once.json");
    let save = SaveOptions {
        path: json.clone(),
        overwrite: false,
    };

    let out = run_once(&root, Some(&save)).unwrap();

    assert_eq!(extension_lines(&out), [".cs", ".txt"]);
    assert!(json.is_file());
}

#[test]
fn run_once_refuses_to_overwrite_without_force() {
    let (tmp, root) = make_temp_tree();
    let json = tmp.path().join("once.json");
    fs::write(&json, "original").unwrap();

    let save = SaveOptions {
        path: json.clone(),
        overwrite: false,
    };
    let err = run_once(&root, Some(&save)).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(fs::read_to_string(&json).unwrap(), "original");

    let forced = SaveOptions {
        overwrite: true,
        ..save
    };
    run_once(&root, Some(&forced)).unwrap();
    assert_eq!(deserialize_from_json(&json).unwrap(), load_directory(&root).unwrap());
}

#[test]
fn run_once_rejects_unsupported_input() {
    let tmp = TempDir::new().unwrap();
    let err = run_once(&tmp.path().join("missing"), None).unwrap_err();
    assert!(err.to_string().contains("neither a valid directory nor a JSON file"));
}
