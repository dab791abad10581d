use assert_cmd::Command;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn no_subcommand_prints_usage() {
    let mut cmd = Command::cargo_bin("kochflake").unwrap();

    let expected_stderr = concat!(
        "Koch snowflake segment generator\n",
        "\n",
        "Usage: kochflake <COMMAND>\n",
        "\n",
        "Commands:\n",
        "  generate  Generate the segments of a shape, writing them to a file or stdout\n",
        "  example   Print the default render config\n",
        "  list      List the available shape types\n",
        "  help      Print this message or the help of the given subcommand(s)\n",
        "\n",
        "Options:\n",
        "  -h, --help     Print help\n",
        "  -V, --version  Print version\n",
    );
    cmd.assert().failure().stderr(expected_stderr);
}

#[test]
fn list_shapes() {
    let mut cmd = Command::cargo_bin("kochflake").unwrap();
    let output = cmd.arg("list").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "full\nhalf_structure\none_section\nhalf_snowflake\n");
}

#[test]
fn generate_default_is_full_snowflake() {
    let mut cmd = Command::cargo_bin("kochflake").unwrap();
    let output = cmd.arg("generate").output().unwrap();
    assert!(output.status.success());

    let drawing: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(drawing["shape"], "full");
    assert_eq!(drawing["order"], 4);
    assert_eq!(drawing["segments"].as_array().unwrap().len(), 768);
    assert_eq!(drawing["canvas"]["stroke"], "cyan");
    assert_eq!(drawing["canvas"]["background"], "black");
}

#[test]
fn generate_from_query() {
    let mut cmd = Command::cargo_bin("kochflake").unwrap();
    let output = cmd
        .arg("generate")
        .arg("--query")
        .arg("type=one_section&order=1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let drawing: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let segments = drawing["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0]["start"]["x"], 100.0);
    assert_eq!(segments[0]["start"]["y"], 500.0);
}

#[test]
fn unknown_type_fails() {
    let mut cmd = Command::cargo_bin("kochflake").unwrap();
    let output = cmd.arg("generate").arg("--type").arg("square").output().unwrap();
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Unknown shape type"));
    assert!(stderr.contains("half_structure"));
}

#[test]
fn order_above_cap_fails() {
    let mut cmd = Command::cargo_bin("kochflake").unwrap();
    let output = cmd.arg("generate").arg("--order").arg("12").output().unwrap();
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("exceeds the maximum"));
}

#[test]
fn example_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("render.toml");
    let output_path = dir.path().join("drawing.yaml");

    let mut cmd = Command::cargo_bin("kochflake").unwrap();
    let output = cmd.arg("example").arg("--format").arg("toml").output().unwrap();
    assert!(output.status.success());
    std::fs::write(&cfg_path, stdout_of(&output)).unwrap();

    let mut cmd = Command::cargo_bin("kochflake").unwrap();
    cmd.arg("generate")
        .arg("--cfg")
        .arg(&cfg_path)
        .arg("--type")
        .arg("half_structure")
        .arg("--order")
        .arg("2")
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success();

    let drawing: serde_yaml::Value = serde_yaml::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(drawing["shape"].as_str(), Some("half_structure"));
    assert_eq!(drawing["segments"].as_sequence().unwrap().len(), 32);
}
