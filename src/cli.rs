// src/cli.rs
use clap::{Parser, Subcommand};

use portfolio_client::portfolio::domain::locale::LocaleCode;

/// portfolio - view published portfolios and manage your own
#[derive(Debug, Parser)]
#[command(name = "portfolio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Content locale (en or vi); defaults to PORTFOLIO_LOCALE
    #[arg(short, long, global = true, value_parser = parse_locale)]
    pub locale: Option<LocaleCode>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a published portfolio
    View {
        /// Slug, `/p/:slug` path, `?slug=` query or full share URL
        target: Option<String>,
    },

    /// Sign in and remember the token
    Login { email: String, password: String },

    /// Create an account and sign in
    Register {
        email: String,
        password: String,
        confirm_password: String,
    },

    /// Forget the stored token
    Logout,

    /// Print your own portfolio and its share link
    Me {
        /// Origin used to build the share link
        #[arg(long, default_value = "http://localhost:3000")]
        origin: String,
    },
}

fn parse_locale(value: &str) -> Result<LocaleCode, String> {
    value.parse::<LocaleCode>().map_err(|e| e.to_string())
}

/// Turns a bare slug into a share path; anything that already looks like a
/// location is passed through.
pub fn location_for(target: Option<&str>) -> String {
    match target.map(str::trim) {
        None | Some("") => "/".to_string(),
        Some(t) if t.contains('/') || t.contains('?') => t.to_string(),
        Some(slug) => format!("/p/{}", slug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "portfolio");
    }

    #[test]
    fn test_parse_view_with_locale() {
        let cli = Cli::try_parse_from(["portfolio", "view", "jane", "--locale", "vi"]).unwrap();

        assert_eq!(cli.locale, Some(LocaleCode::Vi));
        assert!(matches!(cli.command, Command::View { target: Some(ref t) } if t == "jane"));
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        assert!(Cli::try_parse_from(["portfolio", "--locale", "fr", "logout"]).is_err());
    }

    #[test]
    fn test_location_for() {
        assert_eq!(location_for(None), "/");
        assert_eq!(location_for(Some("jane")), "/p/jane");
        assert_eq!(location_for(Some("/?slug=bob")), "/?slug=bob");
        assert_eq!(
            location_for(Some("https://example.com/p/jane")),
            "https://example.com/p/jane"
        );
    }
}
