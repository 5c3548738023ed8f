use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("dnscheck").unwrap();
    // Isolate from the caller's environment
    cmd.env_remove("DNSCHECK_INVENTORY");
    cmd
}

fn write_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn run_without_inventory_is_a_configuration_error() {
    cmd()
        .arg("run")
        .assert()
        .failure()
        .stderr(contains("DNSCHECK_INVENTORY"));
}

#[test]
fn hosts_reads_inventory_from_flag() {
    let inventory = write_file("[dns]\nlocalhost\nns2.test.local\n");
    cmd()
        .args(["hosts", "--inventory"])
        .arg(inventory.path())
        .assert()
        .success()
        .stdout(contains("localhost (local)"))
        .stdout(contains("ns2.test.local"));
}

#[test]
fn hosts_reads_inventory_from_env() {
    let inventory = write_file("localhost\n");
    cmd()
        .env("DNSCHECK_INVENTORY", inventory.path())
        .arg("hosts")
        .assert()
        .success()
        .stdout(contains("localhost"));
}

#[test]
fn hosts_filters_by_group() {
    let inventory = write_file("[dns]\nns1.test.local\n[web]\nweb1.test.local\n");
    cmd()
        .args(["hosts", "--group", "dns", "--inventory"])
        .arg(inventory.path())
        .assert()
        .success()
        .stdout(contains("ns1.test.local"))
        .stdout(contains("web1.test.local").not());
}

#[test]
fn hosts_with_empty_inventory_fails() {
    let inventory = write_file("# empty\n");
    cmd()
        .args(["hosts", "--inventory"])
        .arg(inventory.path())
        .assert()
        .failure()
        .stderr(contains("No hosts found"));
}

#[test]
fn list_shows_default_suite_commands() {
    cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(contains("ns-delegation"))
        .stdout(contains("dig +noall +answer NS test.local @localhost"))
        .stdout(contains("manual-soa-serial"))
        .stdout(contains("field 7 equals \"20101010\""));
}

#[test]
fn list_honors_server_override() {
    cmd()
        .args(["list", "--server", "127.0.0.1"])
        .assert()
        .success()
        .stdout(contains("@127.0.0.1"));
}

#[test]
fn list_loads_custom_suite() {
    let suite = write_file(
        "[[check]]\n\
         name = \"mail-a\"\n\
         record = \"A\"\n\
         query = \"mail.test.local\"\n\
         contains = \"192.168.1.20\"\n",
    );
    cmd()
        .args(["list", "--suite"])
        .arg(suite.path())
        .assert()
        .success()
        .stdout(contains("mail-a"))
        .stdout(contains("dig +noall +answer A mail.test.local @localhost"));
}

#[test]
fn list_rejects_malformed_suite() {
    let suite = write_file(
        "[[check]]\n\
         name = \"broken\"\n\
         record = \"A\"\n\
         query = \"x.test.local\"\n",
    );
    cmd()
        .args(["list", "--suite"])
        .arg(suite.path())
        .assert()
        .failure()
        .stderr(contains("Invalid expectation"));
}

#[test]
fn run_without_provisioned_resolver_reports_failures() {
    // No fixture zone is served here, so every check must fail and the
    // process must exit non-zero.
    let inventory = write_file("localhost\n");
    cmd()
        .args(["run", "--inventory"])
        .arg(inventory.path())
        .assert()
        .failure()
        .stderr(contains("check(s) failed"));
}

#[test]
fn completions_generate() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(contains("dnscheck"));
}
