//! End-to-end tests against the built binary.

use assert_cmd::Command;
use predicates::prelude::*;
use testresult::TestResult;

const VAULT_URL: &str = "https://test.vault.azure.net/";

fn azkeyget() -> Result<Command, assert_cmd::cargo::CargoError> {
    let mut command = Command::cargo_bin("azkeyget")?;
    command.env_clear();

    Ok(command)
}

#[test]
fn missing_vault_url_is_reported() -> TestResult {
    azkeyget()?
        .args(["--secret", "test-secret"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            r#"Error: required flag(s) "vault-url" not set"#,
        ));

    Ok(())
}

#[test]
fn missing_secret_is_reported() -> TestResult {
    azkeyget()?
        .args(["--vault-url", VAULT_URL])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(r#"required flag(s) "secret" not set"#));

    Ok(())
}

#[test]
fn help_exits_zero() -> TestResult {
    azkeyget()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("AZURE_KEYVAULT_URL"));

    Ok(())
}

#[test]
fn version_exits_zero() -> TestResult {
    azkeyget()?
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "azkeyget ",
            env!("CARGO_PKG_VERSION"),
            " (commit: "
        )))
        .stdout(predicate::str::contains(", built: "));

    Ok(())
}

#[test]
fn unknown_flag_exits_one() -> TestResult {
    azkeyget()?.arg("--no-such-flag").assert().code(1);

    Ok(())
}

#[test]
fn unsupported_method_fails_before_any_request() -> TestResult {
    azkeyget()?
        .args(["-v", VAULT_URL, "-s", "test-secret", "-a", "invalid-method"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: failed to create credential: unsupported authentication method: invalid-method",
        ));

    Ok(())
}

#[test]
fn incomplete_service_principal_is_reported() -> TestResult {
    azkeyget()?
        .args(["-v", VAULT_URL, "-s", "test-secret", "-a", "service-principal"])
        .args(["--client-id", "test-client-id", "--client-secret", "hunter2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "requires --client-id, --client-secret, and --tenant-id",
        ))
        .stderr(predicate::str::contains("hunter2").not());

    Ok(())
}

#[test]
fn environment_supplies_missing_flags() -> TestResult {
    azkeyget()?
        .env("AZURE_KEYVAULT_URL", VAULT_URL)
        .env("AZURE_KEYVAULT_SECRET_NAME", "test-secret")
        .env("AZURE_AUTH_METHOD", "user-mi")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "requires --client-id or --user-assigned-id",
        ));

    Ok(())
}

#[test]
fn flags_override_environment() -> TestResult {
    azkeyget()?
        .env("AZURE_KEYVAULT_URL", VAULT_URL)
        .env("AZURE_KEYVAULT_SECRET_NAME", "test-secret")
        .env("AZURE_AUTH_METHOD", "user-mi")
        .args(["--auth", "kerberos"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "unsupported authentication method: kerberos",
        ));

    Ok(())
}

#[test]
fn unrelated_identity_variables_do_not_mask_validation() -> TestResult {
    azkeyget()?
        .env("IDENTITY_ENDPOINT", "::bad")
        .env("IDENTITY_HEADER", "h")
        .env("AZURE_POD_IDENTITY_AUTHORITY_HOST", "::bad")
        .args(["-v", VAULT_URL, "-s", "test-secret", "-a", "kerberos"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: failed to create credential: unsupported authentication method: kerberos",
        ));

    azkeyget()?
        .env("AZURE_AUTHORITY_HOST", "not a url")
        .args(["-v", VAULT_URL, "-s", "test-secret", "-a", "user-mi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "requires --client-id or --user-assigned-id",
        ));

    Ok(())
}

#[test]
fn debug_logging_stays_on_stderr() -> TestResult {
    azkeyget()?
        .env("AZURE_KEYVAULT_URL", VAULT_URL)
        .env("AZURE_KEYVAULT_SECRET_NAME", "db-password")
        .env("AZURE_AUTH_METHOD", "service-principal")
        .env("AZURE_CLIENT_ID", "test-client-id")
        .env("AZURE_CLIENT_SECRET", "test-client-secret")
        .env("AZURE_DEBUG", "true")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("starting azkeyget"))
        .stderr(predicate::str::contains("client_secret_provided=true"))
        .stderr(predicate::str::contains("test-client-secret").not());

    Ok(())
}
