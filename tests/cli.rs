#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn roster_cmd() -> Command {
    Command::cargo_bin("roster").unwrap()
}

#[test]
fn test_get_lists_seeded_drivers() {
    roster_cmd()
        .args(["driver", "get"])
        .assert()
        .success()
        .stdout(
            "ID: 1, Name: Lewis Hamilton, Wins: 95, Poles: 98\n\
             ID: 2, Name: Sebastian Vettel, Wins: 53, Poles: 57\n\
             ID: 3, Name: Ayrton Senna, Wins: 41, Poles: 65\n",
        );
}

#[test]
fn test_get_missing_driver_succeeds() {
    roster_cmd()
        .args(["driver", "get", "99"])
        .assert()
        .success()
        .stdout("Driver not found\n");
}

#[test]
fn test_update_increments_seeded_driver() {
    roster_cmd()
        .args(["driver", "update", "1", "5", "2"])
        .assert()
        .success()
        .stdout("Updated driver: ID: 1, Name: Lewis Hamilton, Wins: 100, Poles: 100\n");
}

#[test]
fn test_add_prints_new_driver() {
    roster_cmd()
        .args(["driver", "add", "4", "Max Verstappen", "50", "30"])
        .assert()
        .success()
        .stdout("Added driver: ID: 4, Name: Max Verstappen, Wins: 50, Poles: 30\n");
}

#[test]
fn test_state_does_not_persist_between_runs() {
    roster_cmd()
        .args(["driver", "delete", "2"])
        .assert()
        .success()
        .stdout("Deleted driver with ID 2\n");

    roster_cmd()
        .args(["driver", "get", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sebastian Vettel"));
}

#[test]
fn test_invalid_number_is_rejected() {
    roster_cmd()
        .args(["driver", "get", "abc"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid id: 'abc' is not a valid number"));
}

#[test]
fn test_lenient_numbers_restore_legacy_parsing() {
    roster_cmd()
        .args(["--lenient-numbers", "driver", "update", "1", "lots", "2"])
        .assert()
        .success()
        .stdout("Updated driver: ID: 1, Name: Lewis Hamilton, Wins: 95, Poles: 100\n");
}

#[test]
fn test_negative_delta_subtracts() {
    roster_cmd()
        .args(["--lenient-numbers", "driver", "update", "1", "-3", "0"])
        .assert()
        .success()
        .stdout("Updated driver: ID: 1, Name: Lewis Hamilton, Wins: 92, Poles: 98\n")
        .stderr(predicate::str::contains("Treating value as 0").not());

    roster_cmd()
        .args(["driver", "update", "3", "0", "-66"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Counter out of range: poles of driver 3 cannot change by -66",
        ));
}

#[test]
fn test_wrong_arity_is_usage_error() {
    roster_cmd()
        .args(["driver", "add", "4", "Max Verstappen"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_json_format() {
    roster_cmd()
        .args(["--format", "json", "driver", "delete", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""deleted":{"id":3,"name":"Ayrton Senna","wins":41,"poles":65}"#));
}
