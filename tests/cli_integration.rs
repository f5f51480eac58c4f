//! CLI integration tests for binmatrix.
//!
//! These tests run the binary against manifests written to temporary
//! directories.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the binmatrix binary command.
fn binmatrix() -> Command {
    Command::cargo_bin("binmatrix").unwrap()
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a Variants.toml into `dir`.
fn write_manifest(dir: &Path, contents: &str) {
    fs::write(dir.join("Variants.toml"), contents).unwrap();
}

const TWO_BUILD_TYPES: &str = r#"
[[platforms]]
name = "x86"
operating_system = "linux"

[[build_types]]
name = "debug"

[[build_types]]
name = "release"

[[flavors]]
name = "default"

[libraries.hello]
"#;

const MATRIX: &str = r#"
[[platforms]]
name = "x86"
operating_system = "linux"

[[platforms]]
name = "arm64"
operating_system = "linux"

[[build_types]]
name = "debug"

[[build_types]]
name = "release"

[[flavors]]
name = "free"

[[flavors]]
name = "paid"

[libraries.hello]

[libraries.zlib]
platforms = ["x86"]
build_types = ["release"]
flavors = ["free"]
"#;

// ============================================================================
// binmatrix list
// ============================================================================

#[test]
fn test_list_single_varying_axis() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), TWO_BUILD_TYPES);

    binmatrix()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hello (2 variants, 6 binaries)"))
        .stdout(predicate::str::contains("helloDebugApiLibrary"))
        .stdout(predicate::str::contains("helloDebugSharedLibrary"))
        .stdout(predicate::str::contains("helloReleaseStaticLibrary"))
        .stdout(predicate::str::contains("helloX86").not());
}

#[test]
fn test_list_single_point_uses_bare_name() {
    let tmp = temp_dir();
    write_manifest(
        tmp.path(),
        r#"
[[platforms]]
name = "x86"

[[build_types]]
name = "debug"

[[flavors]]
name = "default"

[libraries.hello]
"#,
    );

    binmatrix()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hello (1 variants, 3 binaries)"))
        .stdout(predicate::str::contains("helloApiLibrary"))
        .stdout(predicate::str::contains("helloSharedLibrary"))
        .stdout(predicate::str::contains("helloStaticLibrary"));
}

#[test]
fn test_list_full_matrix() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MATRIX);

    binmatrix()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("hello (8 variants, 24 binaries)"))
        .stdout(predicate::str::contains("helloX86DebugFreeApiLibrary"))
        .stdout(predicate::str::contains("helloArm64ReleasePaidStaticLibrary"))
        .stdout(predicate::str::contains("zlib (1 variants, 3 binaries)"))
        .stdout(predicate::str::contains("zlibSharedLibrary"));
}

#[test]
fn test_list_selected_library() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MATRIX);

    binmatrix()
        .args(["list", "--library", "zlib"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("zlibApiLibrary"))
        .stdout(predicate::str::contains("hello").not());
}

#[test]
fn test_list_json_events() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), TWO_BUILD_TYPES);

    let output = binmatrix()
        .args(["list", "--message-format", "json"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let events: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    // 6 binaries, one library-finished, one resolve-finished
    assert_eq!(events.len(), 8);
    assert_eq!(events[0]["reason"], "binary-created");
    assert_eq!(events[0]["name"], "helloDebugApiLibrary");
    assert_eq!(events[1]["kind"], "shared");
    assert_eq!(events[1]["filename"], "libhello.so");
    assert_eq!(events[3]["build_type"], "release");
    assert_eq!(events[6]["reason"], "library-finished");
    assert_eq!(events[6]["binaries"], 6);
    assert_eq!(events[6]["dimensions"][0], "build_type");
    assert_eq!(events[7]["reason"], "resolve-finished");
    assert_eq!(events[7]["success"], true);
}

#[test]
fn test_list_uses_project_config_format() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), TWO_BUILD_TYPES);
    fs::create_dir(tmp.path().join(".binmatrix")).unwrap();
    fs::write(
        tmp.path().join(".binmatrix/config.toml"),
        "[output]\nmessage_format = \"json\"\n",
    )
    .unwrap();

    binmatrix()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"reason\":\"resolve-finished\""));
}

#[test]
fn test_list_with_manifest_path() {
    let tmp = temp_dir();
    let project = tmp.path().join("project");
    fs::create_dir(&project).unwrap();
    write_manifest(&project, TWO_BUILD_TYPES);

    binmatrix()
        .args(["list", "--manifest-path"])
        .arg(project.join("Variants.toml"))
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("helloReleaseSharedLibrary"));
}

#[test]
fn test_list_from_subdirectory() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), TWO_BUILD_TYPES);
    let nested = tmp.path().join("src").join("native");
    fs::create_dir_all(&nested).unwrap();

    binmatrix()
        .arg("list")
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("helloDebugStaticLibrary"));
}

#[test]
fn test_list_unknown_library() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MATRIX);

    binmatrix()
        .args(["list", "--library", "zli"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("library `zli` is not declared"))
        .stderr(predicate::str::contains("did you mean: zlib?"));
}

#[test]
fn test_config_color_false_disables_ansi() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MATRIX);
    fs::create_dir(tmp.path().join(".binmatrix")).unwrap();
    fs::write(
        tmp.path().join(".binmatrix/config.toml"),
        "[output]\ncolor = false\n",
    )
    .unwrap();

    binmatrix()
        .args(["list", "--library", "zq"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: library `zq` is not declared"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_no_color_flag_overrides_config() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MATRIX);

    binmatrix()
        .args(["list", "--library", "zq", "--no-color"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: library `zq` is not declared"))
        .stderr(predicate::str::contains("help: consider:\n  1. Run `binmatrix list`"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_list_fails_without_manifest() {
    let tmp = temp_dir();

    binmatrix()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("Variants.toml"));
}

#[test]
fn test_list_invalid_manifest() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), "[[platforms]]\nname = 3\n");

    binmatrix()
        .arg("list")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

// ============================================================================
// binmatrix explain
// ============================================================================

#[test]
fn test_explain_library() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MATRIX);

    binmatrix()
        .args(["explain", "zlib"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Library `zlib`"))
        .stdout(predicate::str::contains("1 variants x 3 kinds = 3 binaries"))
        .stdout(predicate::str::contains("[name dimension]").not());
}

#[test]
fn test_explain_shows_dimensions() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MATRIX);

    binmatrix()
        .args(["explain", "hello"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("free, paid  [name dimension]"))
        .stdout(predicate::str::contains("helloArm64ReleasePaid"));
}

#[test]
fn test_explain_verbose_lists_files() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MATRIX);

    binmatrix()
        .args(["explain", "zlib", "--verbose"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("zlibApiLibrary\n"))
        .stdout(predicate::str::contains("zlibSharedLibrary (libzlib.so)"))
        .stdout(predicate::str::contains("zlibStaticLibrary (libzlib.a)"));
}

#[test]
fn test_explain_unknown_library() {
    let tmp = temp_dir();
    write_manifest(tmp.path(), MATRIX);

    binmatrix()
        .args(["explain", "openssl"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("library `openssl` is not declared"))
        .stderr(predicate::str::contains("binmatrix list"));
}

// ============================================================================
// binmatrix completions
// ============================================================================

#[test]
fn test_completions_bash() {
    binmatrix()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("binmatrix"));
}

#[test]
fn test_help_lists_commands() {
    binmatrix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("explain"));
}
