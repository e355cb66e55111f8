// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use std::fs;
use std::path::Path;

fn setup_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("medichain-setup").unwrap();

    cmd.current_dir(dir);

    cmd
}

#[test]
fn creates_folder_structure() {
    let dir = tempfile::tempdir().unwrap();

    setup_cmd(dir.path()).assert().success();

    for relative in [
        "src/api",
        "src/components",
        "src/pages",
        "src/context",
        "src/hooks",
        "src/utils",
    ] {
        assert!(
            dir.path().join(relative).is_dir(),
            "{relative} was not created as a directory"
        );
    }
}

#[test]
fn creates_configuration_files() {
    let dir = tempfile::tempdir().unwrap();

    setup_cmd(dir.path()).assert().success();

    for relative in [
        "tailwind.config.js",
        "postcss.config.js",
        ".env",
        "src/index.css",
        "src/main.jsx",
        ".gitignore",
    ] {
        assert!(
            dir.path().join(relative).is_file(),
            "{relative} was not created as a file"
        );
    }
}

#[test]
fn env_file_has_exact_content() {
    let dir = tempfile::tempdir().unwrap();

    setup_cmd(dir.path()).assert().success();

    let env = fs::read_to_string(dir.path().join(".env")).unwrap();

    assert_eq!(env, "VITE_API_BASE_URL=http://localhost:5000\n");
}

#[test]
fn overwrites_stale_index_css() {
    let dir = tempfile::tempdir().unwrap();

    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/index.css"), "stale").unwrap();

    setup_cmd(dir.path()).assert().success();

    let css = fs::read_to_string(dir.path().join("src/index.css")).unwrap();

    assert!(css.starts_with("@tailwind base;"));
    assert!(!css.contains("stale"));
}

#[test]
fn running_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();

    setup_cmd(dir.path()).assert().success();

    let first = fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();

    setup_cmd(dir.path()).assert().success();

    let second = fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();

    assert_eq!(first, second);
    assert!(dir.path().join("src/api").is_dir());
}

#[test]
fn fails_when_directory_path_is_occupied_by_a_file() {
    let dir = tempfile::tempdir().unwrap();

    fs::write(dir.path().join("src"), "I am a file").unwrap();

    setup_cmd(dir.path()).assert().failure();
}

#[test]
fn reports_progress_per_entry() {
    let dir = tempfile::tempdir().unwrap();

    setup_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("src/api"))
        .stdout(predicates::str::contains("tailwind.config.js"))
        .stdout(predicates::str::contains("Setup complete!"));
}
