//! Command-line interface.

use std::sync::LazyLock;

use clap::Parser;

use crate::config::ConfigFlags;

/// Commit the binary was built from, set by the release build.
const COMMIT: &str = match option_env!("AZKEYGET_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};

/// Build date, set by the release build.
const BUILD_DATE: &str = match option_env!("AZKEYGET_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

static VERSION: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{} (commit: {COMMIT}, built: {BUILD_DATE})",
        env!("CARGO_PKG_VERSION")
    )
});

/// Get secrets from Azure Key Vault.
#[derive(Debug, Parser)]
#[command(
    name = "azkeyget",
    version = VERSION.as_str(),
    about = "Get secrets from Azure Key Vault",
    long_about = "A CLI tool to retrieve secrets from Azure Key Vault with support for multiple authentication methods.\n\nThe secret value is written to stdout without a trailing newline. Every flag falls back to its environment variable when not passed."
)]
pub struct Cli {
    /// Configuration flags.
    #[command(flatten)]
    pub flags: ConfigFlags,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_short_and_long_flags() -> TestResult {
        let cli = Cli::try_parse_from([
            "azkeyget",
            "-v",
            "https://test.vault.azure.net/",
            "-s",
            "test-secret",
            "-a",
            "user-mi",
            "--client-id",
            "client",
            "--user-assigned-id",
            "uami",
        ])?;

        assert_eq!(
            cli.flags.vault_url.as_deref(),
            Some("https://test.vault.azure.net/")
        );
        assert_eq!(cli.flags.secret_name.as_deref(), Some("test-secret"));
        assert_eq!(cli.flags.auth_method.as_deref(), Some("user-mi"));
        assert_eq!(cli.flags.user_assigned_id.as_deref(), Some("uami"));
        assert_eq!(cli.flags.client_secret, None);
        assert_eq!(cli.flags.debug, None);

        Ok(())
    }

    #[test]
    fn debug_flag_accepts_optional_value() -> TestResult {
        let bare = Cli::try_parse_from(["azkeyget", "--debug"])?;
        let off = Cli::try_parse_from(["azkeyget", "--debug=false"])?;
        let spaced = Cli::try_parse_from(["azkeyget", "--debug", "false"])?;
        let before_flag = Cli::try_parse_from(["azkeyget", "--debug", "-s", "db-password"])?;

        assert_eq!(bare.flags.debug, Some(true));
        assert_eq!(off.flags.debug, Some(false));
        assert_eq!(spaced.flags.debug, Some(false));
        assert_eq!(before_flag.flags.debug, Some(true));
        assert_eq!(before_flag.flags.secret_name.as_deref(), Some("db-password"));

        Ok(())
    }

    #[test]
    fn version_carries_build_metadata() {
        let command = Cli::command();
        let version = command.get_version().unwrap_or_default();

        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains("(commit: "), "{version}");
        assert!(version.contains(", built: "), "{version}");
    }

    #[test]
    fn help_names_environment_variables() {
        let help = Cli::command().render_help().to_string();

        for variable in [
            "AZURE_KEYVAULT_URL",
            "AZURE_KEYVAULT_SECRET_NAME",
            "AZURE_AUTH_METHOD",
            "AZURE_CLIENT_ID",
            "AZURE_CLIENT_SECRET",
            "AZURE_TENANT_ID",
            "AZURE_USER_ASSIGNED_ID",
            "AZURE_DEBUG",
        ] {
            assert!(help.contains(variable), "help should mention {variable}");
        }
    }
}
