use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("42")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string());
    assert_eq!(v["seed"], 42);

    let turns = v["turns"].as_u64().unwrap();
    assert!(turns >= 17 && turns <= 200, "turns = {}", turns);
    let remaining = (
        v["player_ships_remaining"].as_u64().unwrap(),
        v["opponent_ships_remaining"].as_u64().unwrap(),
    );
    assert!(remaining.0 == 0 || remaining.1 == 0);
}

#[test]
fn sim_binary_is_reproducible() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .arg("7")
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}
