use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Command isolated from user and project config, pinned to a fixed date.
fn cmd(workdir: &TempDir) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("breach-tracker");
    c.current_dir(workdir.path())
        .env("XDG_CONFIG_HOME", workdir.path().join("xdg"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("HIBP_API_KEY")
        .arg("--offline")
        .arg(fixtures_path().join("breaches.csv"))
        .arg("--as-of")
        .arg("2026-01-25");
    c
}

fn json_output(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout should be JSON")
}

mod scenarios {
    use super::*;

    #[test]
    fn test_single_email_two_breaches() {
        let dir = TempDir::new().unwrap();
        let assert = cmd(&dir)
            .args(["-e", "bob@acme.test", "--format", "json"])
            .assert()
            .success();

        let json = json_output(&assert.get_output().stdout);
        assert_eq!(json["total_exposed_accounts"], 2);
        assert_eq!(json["unique_emails"], 1);
        assert_eq!(json["distinct_breaches"], 2);
        assert_eq!(json["emails_in_multiple_breaches"], 1);
        assert_eq!(json["overall_risk_score"], 4.5);
        assert_eq!(json["risk_level"], "High");
        assert_eq!(json["breach_summaries"][0]["source"], "TravelDB");
        assert_eq!(json["breach_summaries"][1]["source"], "ShopLeak");
    }

    #[test]
    fn test_domain_filter_is_exact() {
        let dir = TempDir::new().unwrap();
        let assert = cmd(&dir)
            .args(["-d", "@ACME.test", "--format", "json"])
            .assert()
            .success();

        let json = json_output(&assert.get_output().stdout);
        assert_eq!(json["total_exposed_accounts"], 3);
        assert_eq!(json["unique_emails"], 2);
        let emails: Vec<&str> = json["sample_exposures"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["email"].as_str().unwrap())
            .collect();
        assert!(emails.iter().all(|e| e.ends_with("@acme.test")));
    }

    #[test]
    fn test_emails_file() {
        let dir = TempDir::new().unwrap();
        let assert = cmd(&dir)
            .arg("--emails-file")
            .arg(fixtures_path().join("emails.txt"))
            .args(["--format", "json"])
            .assert()
            .success();

        let json = json_output(&assert.get_output().stdout);
        assert_eq!(json["unique_emails"], 2);
        assert_eq!(json["total_exposed_accounts"], 3);
    }

    #[test]
    fn test_no_matches_reports_empty() {
        let dir = TempDir::new().unwrap();
        cmd(&dir)
            .args(["-d", "nobody.test", "--format", "markdown"])
            .assert()
            .success()
            .stdout(predicate::str::contains("| Total exposed accounts | 0 |"))
            .stdout(predicate::str::contains("No exposures found"));
    }

    #[test]
    fn test_terminal_output() {
        let dir = TempDir::new().unwrap();
        cmd(&dir)
            .args(["-e", "bob@acme.test"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Exposed accounts:  2"))
            .stdout(predicate::str::contains("TravelDB"))
            .stdout(predicate::str::contains("4.50"));
    }
}

mod outputs {
    use super::*;

    #[test]
    fn test_out_dir_writes_three_files() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report");
        cmd(&dir)
            .args(["-d", "acme.test", "-o"])
            .arg(&out)
            .assert()
            .success()
            .stderr(predicate::str::contains("exposed_accounts.csv"));

        let csv = fs::read_to_string(out.join("exposed_accounts.csv")).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("email,source,breach_date,compromised_data")
        );
        assert_eq!(lines.count(), 3);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join("results.json")).unwrap()).unwrap();
        assert_eq!(json["total_exposed_accounts"], 3);

        let markdown = fs::read_to_string(out.join("report.md")).unwrap();
        assert!(markdown.starts_with("# Data Breach & Credential Exposure Findings"));
        assert!(markdown.contains("| Total exposed accounts | 3 |"));
    }

    #[test]
    fn test_sample_limit_flag() {
        let dir = TempDir::new().unwrap();
        let assert = cmd(&dir)
            .args(["-d", "acme.test", "--sample-limit", "1", "--format", "json"])
            .assert()
            .success();
        let json = json_output(&assert.get_output().stdout);
        assert_eq!(json["sample_exposures"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_project_config_is_used() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".breach-tracker.yaml"),
            "risk:\n  reuse_weight: 0.0\n",
        )
        .unwrap();

        let assert = cmd(&dir)
            .args(["-e", "bob@acme.test", "--format", "json"])
            .assert()
            .success();
        let json = json_output(&assert.get_output().stdout);
        assert_eq!(json["overall_risk_score"], 3.5);
        assert_eq!(json["risk_level"], "Medium");
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn test_no_criteria_is_usage_error() {
        let dir = TempDir::new().unwrap();
        cmd(&dir)
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("No filter criteria"));
    }

    #[test]
    fn test_missing_dataset() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("breach-tracker")
            .current_dir(dir.path())
            .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
            .args(["-d", "acme.test", "--offline", "does-not-exist.csv"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("File not found"));
    }

    #[test]
    fn test_missing_columns() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("breach-tracker")
            .current_dir(dir.path())
            .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
            .args(["-d", "acme.test", "--offline"])
            .arg(fixtures_path().join("missing_columns.csv"))
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("breach_date"));
    }

    #[test]
    fn test_fail_on_reached() {
        let dir = TempDir::new().unwrap();
        cmd(&dir)
            .args(["-e", "bob@acme.test", "--fail-on", "high"])
            .assert()
            .failure()
            .code(1);
    }

    #[test]
    fn test_fail_on_not_reached_for_empty_result() {
        let dir = TempDir::new().unwrap();
        cmd(&dir)
            .args(["-d", "nobody.test", "--fail-on", "low"])
            .assert()
            .success();
    }

    #[test]
    fn test_invalid_as_of() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("breach-tracker")
            .current_dir(dir.path())
            .args(["-d", "acme.test", "--as-of", "yesterday"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("Invalid date 'yesterday'"));
    }
}

mod cli_flags {
    use super::*;

    #[test]
    fn test_version_flag() {
        cargo_bin_cmd!("breach-tracker")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("breach-tracker"));
    }

    #[test]
    fn test_help_flag() {
        cargo_bin_cmd!("breach-tracker")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--domain"))
            .stdout(predicate::str::contains("--fail-on"));
    }

    #[test]
    fn test_init_config() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("breach-tracker")
            .current_dir(dir.path())
            .arg("--init-config")
            .assert()
            .success()
            .stdout(predicate::str::contains(".breach-tracker.yaml"));

        let template = fs::read_to_string(dir.path().join(".breach-tracker.yaml")).unwrap();
        assert!(template.contains("field_weights:"));

        cargo_bin_cmd!("breach-tracker")
            .current_dir(dir.path())
            .arg("--init-config")
            .assert()
            .failure()
            .code(2);
    }
}
