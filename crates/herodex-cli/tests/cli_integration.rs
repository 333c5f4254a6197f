use assert_cmd::Command;
use predicates::prelude::*;

fn herodex() -> Command {
    Command::cargo_bin("herodex").unwrap()
}

mod argument_tests {
    use super::*;

    #[test]
    fn test_help_describes_the_registry() {
        herodex()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("hero registry"))
            .stdout(predicate::str::contains("--rows-per-page"))
            .stdout(predicate::str::contains("--memory"));
    }

    #[test]
    fn test_version_flag() {
        herodex()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("herodex"));
    }

    #[test]
    fn test_rows_per_page_zero_is_rejected() {
        herodex()
            .args(["--memory", "--rows-per-page", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--rows-per-page"));
    }

    #[test]
    fn test_rows_per_page_rejects_non_numeric() {
        herodex()
            .args(["--memory", "--rows-per-page", "many"])
            .assert()
            .failure();
    }

    #[test]
    fn test_memory_conflicts_with_data_file() {
        herodex()
            .args(["heroes.jsonl", "--memory"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--memory"));
    }

    #[test]
    fn test_memory_conflicts_with_sqlite() {
        herodex()
            .args(["--memory", "--sqlite", "heroes.db"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--memory"));
    }

    #[test]
    fn test_rows_per_page_env_zero_is_rejected() {
        herodex()
            .arg("--memory")
            .env("HERODEX_ROWS_PER_PAGE", "0")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--rows-per-page"));
    }
}

mod completions_tests {
    use super::*;

    #[test]
    fn test_bash_completions() {
        herodex()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("herodex"));
    }

    #[test]
    fn test_zsh_completions() {
        herodex()
            .args(["completions", "zsh"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#compdef herodex"));
    }

    #[test]
    fn test_completions_rejects_unknown_shell() {
        herodex()
            .args(["completions", "tcsh"])
            .assert()
            .failure();
    }
}
