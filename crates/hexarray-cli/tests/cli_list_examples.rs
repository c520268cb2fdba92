use std::collections::BTreeSet;
use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn missing_examples_reports_two_lines_and_exits_1() {
    let cwd = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("list-examples");
    cmd.current_dir(cwd.path());

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::function(|out: &str| {
            let lines: Vec<&str> = out.lines().collect();
            lines.len() == 2
                && lines[0] == "Path to examples does not exist."
                && lines[1].starts_with(" - ")
                && lines[1].ends_with("examples")
        }));
}

#[test]
fn examples_as_regular_file_reports_and_exits_1() {
    let cwd = TempDir::new().unwrap();
    fs::write(cwd.path().join("examples"), "not a directory").unwrap();

    let mut cmd = cargo_bin_cmd!("list-examples");
    cmd.current_dir(cwd.path());

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Path to examples is not a directory."))
        .stdout(predicate::str::contains(" - "));
}

#[test]
fn lists_each_entry_once_with_1_based_indices() {
    let cwd = TempDir::new().unwrap();
    let examples = cwd.path().join("examples");
    fs::create_dir(&examples).unwrap();
    fs::create_dir(examples.join("a")).unwrap();
    fs::create_dir(examples.join("b")).unwrap();

    let mut cmd = cargo_bin_cmd!("list-examples");
    cmd.current_dir(cwd.path());

    // Filesystem iteration order is not guaranteed; assert the set, not
    // the order.
    cmd.assert().success().stdout(predicate::function(|out: &str| {
        let mut indices = BTreeSet::new();
        let mut names = BTreeSet::new();
        for line in out.lines() {
            let (index, name) = line.split_once(' ').unwrap();
            indices.insert(index.parse::<usize>().unwrap());
            names.insert(name.to_string());
        }
        indices == BTreeSet::from([1, 2])
            && names == BTreeSet::from(["a".to_string(), "b".to_string()])
    }));
}

#[test]
fn file_entries_print_their_stem() {
    let cwd = TempDir::new().unwrap();
    let examples = cwd.path().join("examples");
    fs::create_dir(&examples).unwrap();
    fs::write(examples.join("uart_interaction.rs"), "").unwrap();

    let mut cmd = cargo_bin_cmd!("list-examples");
    cmd.current_dir(cwd.path());

    cmd.assert().success().stdout("1 uart_interaction\n");
}

#[test]
fn empty_examples_directory_prints_nothing() {
    let cwd = TempDir::new().unwrap();
    fs::create_dir(cwd.path().join("examples")).unwrap();

    let mut cmd = cargo_bin_cmd!("list-examples");
    cmd.current_dir(cwd.path());

    cmd.assert().success().code(0).stdout("");
}
