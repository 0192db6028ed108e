use std::path::PathBuf;
use std::process::Command;

fn word_file(name: &str) -> PathBuf {
    let mut text = String::new();
    for a in b'a'..=b'z' {
        for b in b'a'..=b'z' {
            text.push(char::from(a));
            text.push(char::from(b));
            text.push('\n');
        }
    }
    let path = std::env::temp_dir().join(format!("letterpress-{}-{}.txt", name, std::process::id()));
    std::fs::write(&path, text).expect("failed to write word list");
    path
}

fn run_sim(words: &PathBuf, seed: &str) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_letterpress"))
        .arg("sim")
        .arg("--words")
        .arg(words)
        .args(["--seed", seed])
        .output()
        .expect("failed to run letterpress binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let words = word_file("smoke");
    let v = run_sim(&words, "7");

    assert!(v["stalemate"].is_boolean());
    assert!(v["moves"].as_u64().unwrap() >= 1);
    assert_eq!(v["final"]["letters"].as_str().unwrap().len(), 25);
    assert_eq!(v["final"]["owners"].as_array().unwrap().len(), 25);
    if v["stalemate"].as_bool().unwrap() {
        assert!(v["winner"].is_null());
    } else {
        assert!(v["winner"].is_string());
        assert_eq!(v["final"]["turn"], "GameOver");
    }
    let _ = std::fs::remove_file(words);
}

#[test]
fn sim_binary_is_reproducible_with_seed() {
    let words = word_file("seeded");
    let first = run_sim(&words, "42");
    let second = run_sim(&words, "42");
    assert_eq!(first, second);
    let _ = std::fs::remove_file(words);
}

#[test]
fn sim_binary_fails_without_word_list() {
    let missing = std::env::temp_dir().join("letterpress-no-such-list.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_letterpress"))
        .arg("sim")
        .arg("--words")
        .arg(&missing)
        .output()
        .expect("failed to run letterpress binary");
    assert!(!output.status.success());
}
