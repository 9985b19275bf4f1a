/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn dep_checkr(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("dep-checkr");
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_help() {
        let home = TempDir::new().unwrap();
        dep_checkr(&home).arg("--help").assert().code(0);
    }

    #[test]
    fn test_unknown_subcommand() {
        let home = TempDir::new().unwrap();
        dep_checkr(&home).arg("frobnicate").assert().code(2);
    }

    #[test]
    fn test_missing_input_file() {
        let home = TempDir::new().unwrap();
        dep_checkr(&home)
            .args(["tree", "tests/fixtures/does-not-exist.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does-not-exist.txt"));
    }

    #[test]
    fn test_strict_fails_on_gaps() {
        let home = TempDir::new().unwrap();
        dep_checkr(&home)
            .args(["tree", "tests/fixtures/tree.txt", "--strict", "-q"])
            .assert()
            .code(1);
    }

    #[test]
    fn test_strict_passes_without_gaps() {
        let home = TempDir::new().unwrap();
        dep_checkr(&home)
            .args(["tree", "tests/fixtures/flat-tree.txt", "--strict", "-q"])
            .assert()
            .code(0);
    }
}

#[test]
fn test_tree_terminal_report() {
    let home = TempDir::new().unwrap();
    dep_checkr(&home)
        .args(["tree", "tests/fixtures/tree.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Key Assumptions"))
        .stdout(predicate::str::contains(
            "REPORT 1: Missing transitive deps (groupId + artifactId comparison)",
        ))
        .stdout(predicate::str::contains(
            "org.springframework:spring-context\n  -> org.springframework:spring-aop\n",
        ))
        .stdout(predicate::str::contains("  -> org.hamcrest:hamcrest-core"));
}

#[test]
fn test_tree_without_gaps() {
    let home = TempDir::new().unwrap();
    dep_checkr(&home)
        .args(["tree", "tests/fixtures/flat-tree.txt", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found.").count(2))
        .stdout(predicate::str::contains("Key Assumptions").not());
}

#[test]
fn test_tree_from_stdin() {
    let home = TempDir::new().unwrap();
    dep_checkr(&home)
        .args(["tree", "-", "-q"])
        .write_stdin("+- com.foo:bar:jar:1.0:compile\n|  \\- com.foo:baz:jar:2.0:compile\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("com.foo:bar\n  -> com.foo:baz\n"));
}

#[test]
fn test_tree_json_report() {
    let home = TempDir::new().unwrap();
    let output = dep_checkr(&home)
        .args(["tree", "tests/fixtures/tree.txt", "--report", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json["group_artifact"]["entries"].as_array().unwrap();
    assert_eq!(entries[0]["main"], "org.springframework:spring-context");
    assert_eq!(json["stats"]["main"], 4);

    let artifact_only = json["artifact_only"]["entries"].as_array().unwrap();
    let databind = artifact_only
        .iter()
        .find(|e| e["main"] == "com.fasterxml.jackson.core:jackson-databind")
        .unwrap();
    assert_eq!(
        databind["missing"],
        serde_json::json!(["com.fasterxml.jackson.core:jackson-annotations"])
    );
}

#[test]
fn test_duplicates() {
    let home = TempDir::new().unwrap();
    dep_checkr(&home)
        .args(["duplicates", "tests/fixtures/jars.txt", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DUPLICATE FOUND: slf4j-api\n  slf4j-api-1.7.36.jar\n  slf4j-api-2.0.9.jar\n",
        ))
        .stdout(predicate::str::contains("guava").not());
}

#[test]
fn test_split_writes_both_files() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    dep_checkr(&home)
        .args(["split", "tests/fixtures/jars.txt", "--report", "json", "--out-dir"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 6"));

    let with = std::fs::read_to_string(out.path().join("jars-with-version.txt")).unwrap();
    let without = std::fs::read_to_string(out.path().join("jars-without-version.txt")).unwrap();
    assert_eq!(
        with,
        "slf4j-api-1.7.36.jar\nguava-31.1-jre.jar\nslf4j-api-2.0.9.jar\nhibernate-core-5.6.15.Final.jar\n"
    );
    assert_eq!(without, "tools.jar\nojdbc8.jar\n");
}

#[test]
fn test_config_renames_outputs() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let config = out.path().join("config.toml");
    std::fs::write(&config, "[files]\nwith_version = \"versioned.txt\"\n").unwrap();

    dep_checkr(&home)
        .args(["split", "tests/fixtures/jars.txt", "-q", "--config"])
        .arg(&config)
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("versioned.txt").exists());
    assert!(out.path().join("jars-without-version.txt").exists());
}

mod resolve_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const SEARCH_PATH: &str = "/solrsearch/select";

    fn search_hit<'a>(server: &'a MockServer, q: &str, group_id: &str) -> httpmock::Mock<'a> {
        server.mock(|when, then| {
            when.method(GET)
                .path(SEARCH_PATH)
                .query_param("q", q)
                .query_param("rows", "1")
                .query_param("wt", "json");
            then.status(200)
                .json_body(json!({ "response": { "numFound": 1, "docs": [{ "g": group_id }] } }));
        })
    }

    #[test]
    fn test_resolve_keeps_going_past_failed_lookups() {
        let home = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let server = MockServer::start();

        let hit = search_hit(&server, "a:commons-lang3 AND v:3.12.0", "org.apache.commons");
        let empty = server.mock(|when, then| {
            when.method(GET)
                .path(SEARCH_PATH)
                .query_param("q", "a:nothing-here AND v:1.0.0");
            then.status(200)
                .json_body(json!({ "response": { "numFound": 0, "docs": [] } }));
        });
        let broken = server.mock(|when, then| {
            when.method(GET)
                .path(SEARCH_PATH)
                .query_param("q", "a:flaky AND v:2.0.0");
            then.status(500).body("internal error");
        });

        let jars = out.path().join("jars.txt");
        std::fs::write(
            &jars,
            "commons-lang3-3.12.0.jar\ntools.jar\nnothing-here-1.0.0.jar\nflaky-2.0.0.jar\n",
        )
        .unwrap();
        let config = out.path().join("config.toml");
        std::fs::write(
            &config,
            format!(
                "[search]\nendpoint = \"{}\"\ntimeout_secs = 5\n",
                server.url(SEARCH_PATH)
            ),
        )
        .unwrap();

        let output = dep_checkr(&home)
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("HTTPS_PROXY")
            .env_remove("https_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy")
            .arg("resolve")
            .arg(&jars)
            .args(["--report", "json", "-q", "--config"])
            .arg(&config)
            .arg("--out-dir")
            .arg(out.path())
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(summary["total"], 4);
        assert_eq!(summary["resolved"], 1);
        assert_eq!(summary["failed"], 3);

        hit.assert();
        empty.assert();
        broken.assert();

        let generated =
            std::fs::read_to_string(out.path().join("generated-dependencies.xml")).unwrap();
        assert!(generated.contains("<!-- commons-lang3-3.12.0.jar -->"));
        assert!(generated.contains("<groupId>org.apache.commons</groupId>"));
        assert!(generated.contains("<artifactId>commons-lang3</artifactId>"));
        assert!(generated.contains("<version>3.12.0</version>"));
        assert!(!generated.contains("flaky"));
        assert!(!generated.contains("nothing-here"));

        let unresolved = std::fs::read_to_string(out.path().join("unresolved-jars.txt")).unwrap();
        assert_eq!(unresolved, "tools.jar\nnothing-here-1.0.0.jar\nflaky-2.0.0.jar\n");
    }
}
