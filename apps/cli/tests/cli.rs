use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Runs the binary from an empty directory so no stray `fcompat.*` file is picked up.
fn fcompat(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fcompat").expect("binary is built");
    cmd.current_dir(workdir.path());
    cmd
}

fn workdir() -> TempDir {
    tempfile::tempdir().expect("temp dir")
}

#[test]
fn consistent_configuration_succeeds() {
    let dir = workdir();
    fcompat(&dir)
        .args(["check", "-f", "servlet-6.0,restfulWS-3.1", "-e", "httpSession"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 error(s), 0 warning(s)"));
}

#[test]
fn incompatible_features_fail() {
    let dir = workdir();
    fcompat(&dir)
        .args(["check", "--feature", "servlet-6.0", "--feature", "restfulWS-3.0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("error[incompatible_features]"));
}

#[test]
fn json_report_lists_findings() {
    let dir = workdir();
    let output = fcompat(&dir)
        .args(["check", "-f", "servlet-6.0,notAFeature-1.0", "--json"])
        .output()
        .expect("runs");

    assert!(!output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("JSON on stdout");
    assert_eq!(report["source"], "default");
    assert_eq!(report["findings"][0]["kind"], "FeatureNotFound");
    assert_eq!(report["findings"][0]["subject"], "notAFeature-1.0");
}

#[test]
fn platforms_of_a_versionless_feature() {
    let dir = workdir();
    fcompat(&dir)
        .args(["platforms", "servlet"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("jakartaee-10.0").and(predicate::str::contains("javaee-8.0")),
        );
}

#[test]
fn mirror_catalog_is_preferred() {
    let dir = workdir();
    let mirror = dir.path().join("mirror/ol/25.0.0.3");
    std::fs::create_dir_all(&mirror).expect("mirror layout");
    std::fs::write(
        mirror.join("features-25.0.0.3.json"),
        r#"[{"wlpInformation":{"shortName":"mirrored-1.0"}}]"#,
    )
    .expect("mirror catalog");

    let output = fcompat(&dir)
        .args(["check", "-f", "mirrored-1.0", "--mirror", "mirror", "--json"])
        .output()
        .expect("runs");

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("JSON on stdout");
    assert_eq!(report["source"], "remote");
    assert_eq!(report["findings"], Value::Array(Vec::new()));
}

#[test]
fn missing_config_file_is_reported() {
    let dir = workdir();
    fcompat(&dir)
        .args(["--config", "absent.toml", "check", "-f", "servlet-6.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration is malformed"));
}
