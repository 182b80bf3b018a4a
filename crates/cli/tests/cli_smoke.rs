use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn korean_name() -> Command {
    let mut cmd = Command::cargo_bin("korean-name").expect("binary");
    cmd.env_remove("KOREAN_NAME_CONFIG")
        .env_remove("KOREAN_NAME_SEED")
        .env_remove("RUST_LOG");
    cmd
}

fn run_json(cmd: &mut Command) -> (bool, Value) {
    let output = cmd.output().expect("command run");
    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    (output.status.success(), body)
}

#[test]
fn generate_emits_requested_batch() {
    let (ok, body) = run_json(korean_name().args([
        "generate", "봄", "바다", "--style", "elegant", "--count", "4", "--seed", "3",
    ]));
    assert!(ok);
    assert_eq!(body["total_count"], 4);
    assert_eq!(body["style"], "elegant");
    assert_eq!(body["matched_keywords"], serde_json::json!(["봄", "바다"]));
    for name in body["names"].as_array().expect("names") {
        let full = name["full_name"].as_str().expect("full_name");
        assert!((2..=3).contains(&full.chars().count()), "{full}");
        assert_eq!(
            name["description"],
            "'봄, 바다' 키워드와 'elegant' 스타일로 생성된 이름"
        );
    }
}

#[test]
fn generate_clamps_out_of_range_counts() {
    let (_, high) = run_json(korean_name().args(["generate", "--count", "99", "--seed", "1"]));
    assert_eq!(high["total_count"], 10);
    let (_, low) = run_json(korean_name().args(["generate", "--count", "-4", "--seed", "1"]));
    assert_eq!(low["total_count"], 1);
    let (_, default) = run_json(korean_name().args(["generate", "--seed", "1"]));
    assert_eq!(default["total_count"], 3);
    assert_eq!(default["style"], "cute");
}

#[test]
fn same_seed_reproduces_output() {
    let args = ["generate", "바다", "--style", "cool", "--count", "6", "--seed", "77"];
    let first = korean_name().args(args).output().expect("run").stdout;
    let second = korean_name().args(args).output().expect("run").stdout;
    assert_eq!(first, second);

    let via_env = korean_name()
        .env("KOREAN_NAME_SEED", "77")
        .args(&args[..6])
        .output()
        .expect("run")
        .stdout;
    assert_eq!(first, via_env);
}

#[test]
fn invalid_style_fails_with_envelope() {
    korean_name()
        .args(["generate", "봄", "--style", "gothic"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"code\":\"invalid_request\""))
        .stderr(predicate::str::contains("gothic"));
}

#[test]
fn meaning_glosses_given_name() {
    let (ok, body) = run_json(korean_name().args(["meaning", "김봄이"]));
    assert!(ok);
    assert_eq!(body["family_name"], "김");
    assert_eq!(body["given_name"], "봄이");
    assert_eq!(body["meanings"].as_array().map(Vec::len), Some(2));
    assert!(body["interpretation"]
        .as_str()
        .is_some_and(|text| text.starts_with("'김봄이'은(는) 봄, 생명력")));
}

#[test]
fn keywords_pretty_prints_categories() {
    korean_name()
        .args(["keywords", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_keywords\""))
        .stdout(predicate::str::contains("\n  \"categories\""));
}

#[test]
fn config_file_changes_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("names.toml");
    fs::write(
        &path,
        "default_count = 5\ndefault_style = \"traditional\"\nseed = 9\n",
    )
    .expect("write config");

    let (ok, body) = run_json(
        korean_name()
            .arg("--config")
            .arg(&path)
            .arg("generate"),
    );
    assert!(ok);
    assert_eq!(body["total_count"], 5);
    assert_eq!(body["style"], "traditional");
}

#[test]
fn invalid_config_fails() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("names.json");
    fs::write(&path, r#"{ "min_count": 5, "max_count": 2 }"#).expect("write config");

    korean_name()
        .arg("--config")
        .arg(&path)
        .arg("keywords")
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_count"));
}

#[test]
fn env_seed_applies_on_top_of_config_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("names.json");
    fs::write(&path, r#"{ "default_style": "elegant" }"#).expect("write config");

    let via_flag = korean_name()
        .arg("--config")
        .arg(&path)
        .args(["generate", "꽃", "--seed", "31"])
        .output()
        .expect("run")
        .stdout;
    let via_env = korean_name()
        .env("KOREAN_NAME_SEED", "31")
        .arg("--config")
        .arg(&path)
        .args(["generate", "꽃"])
        .output()
        .expect("run")
        .stdout;
    assert_eq!(via_flag, via_env);

    korean_name()
        .env("KOREAN_NAME_SEED", "abc")
        .arg("--config")
        .arg(&path)
        .arg("keywords")
        .assert()
        .failure()
        .stderr(predicate::str::contains("KOREAN_NAME_SEED"));
}
