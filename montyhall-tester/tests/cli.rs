use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "montyhall-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_writes_csv_rows_for_each_round() {
    let exe = env!("CARGO_BIN_EXE_montyhall-tester");
    let output_path = temp_path("csv");
    let status = Command::new(exe)
        .args(["--report", "csv", "--rounds", "5", "--seeds", "7,8", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "seed,round,strategy,outcome");
    assert_eq!(lines.len(), 1 + 2 * 5 * 2);
    assert!(lines.iter().skip(1).all(|l| l.ends_with(",WIN") || l.ends_with(",LOSE")));
}

#[test]
fn cli_acceptance_passes_for_default_targets() {
    let exe = env!("CARGO_BIN_EXE_montyhall-tester");
    let output_path = temp_path("acceptance");
    let output = Command::new(exe)
        .args(["--acceptance", "--report", "json", "--seeds", "1337", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Monty Hall Batch Tester"));
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("\"rounds\": 10000"));
}

#[test]
fn cli_reads_config_file() {
    let exe = env!("CARGO_BIN_EXE_montyhall-tester");
    let config_path = temp_path("config");
    std::fs::write(&config_path, r#"{"rounds": 12, "seed": 99}"#).expect("write config");
    let output = Command::new(exe)
        .args(["--report", "csv", "--config"])
        .arg(&config_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1 + 12 * 2);
    assert!(stdout.lines().skip(1).all(|l| l.starts_with("99,")));
}

#[test]
fn cli_rejects_zero_rounds() {
    let exe = env!("CARGO_BIN_EXE_montyhall-tester");
    let output = Command::new(exe)
        .args(["--rounds", "0", "--report", "json"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least one round"));
}

#[test]
fn cli_rejects_unknown_seed_tokens() {
    let exe = env!("CARGO_BIN_EXE_montyhall-tester");
    let output = Command::new(exe)
        .args(["--seeds", "goat"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unrecognized seed token"));
}
