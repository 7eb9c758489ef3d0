//! Full planning workflow through the binary: build a board, schedule a
//! week, verify the cascade on delete.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pauta_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pauta").expect("Failed to find pauta binary");
    cmd.arg("--no-color");
    cmd
}

fn create_card(db_arg: &str, title: &str, pillar: &str) -> String {
    let output = pauta_cmd()
        .args([
            "--database-file",
            db_arg,
            "card",
            "create",
            title,
            "--pillar",
            pillar,
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    String::from_utf8(output)
        .expect("Invalid UTF-8")
        .lines()
        .find_map(|line| line.split("with ID: ").nth(1))
        .expect("create echoes the card id")
        .trim()
        .to_string()
}

#[test]
fn test_week_planning_workflow() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("workflow.db");
    let db_arg = db_path.to_str().unwrap();

    let dor_id = create_card(db_arg, "A dor de planejar", "Dor");
    create_card(db_arg, "Como organizar a semana", "Educacao");
    create_card(db_arg, "Planeje com a pauta", "Solucao");

    // Suggest proposes one card per pillar, in pillar order
    pauta_cmd()
        .args(["--database-file", db_arg, "week", "suggest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [Dor]"))
        .stdout(predicate::str::contains("2. [Educacao]"))
        .stdout(predicate::str::contains("3. [Solucao]"));

    // Schedule spaces the three posts across the week
    pauta_cmd()
        .args([
            "--database-file",
            db_arg,
            "week",
            "schedule",
            "--start",
            "2026-09-07",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scheduled 3 post(s)"))
        .stdout(predicate::str::contains("2026-09-07"))
        .stdout(predicate::str::contains("2026-09-09"))
        .stdout(predicate::str::contains("2026-09-11"));

    // Scheduled cards left the suggestion pool
    pauta_cmd()
        .args(["--database-file", db_arg, "week", "suggest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions"));

    // The cards were marked Agendado in the same batch
    pauta_cmd()
        .args(["--database-file", db_arg, "card", "show", &dor_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Agendado"));

    // Deleting a card removes its calendar post in the same transition
    pauta_cmd()
        .args(["--database-file", db_arg, "card", "delete", &dor_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("to trash"))
        .stdout(predicate::str::contains("1 calendar post(s)"));

    pauta_cmd()
        .args(["--database-file", db_arg, "post", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A dor de planejar").not());
}
