//! Helix credentials file model and parser.
//!
//! The credentials file is a line-oriented `KEY=VALUE` text file, normally
//! stored at `~/.helix/credentials`:
//!
//! ```text
//! HELIX_API_KEY=a1b2
//! HELIX_API_URL=http://localhost
//! HELIX_ACTIVE_TOOLS=tool=1,tool=2
//! ```
//!
//! Parsing never fails. Blank lines, `#` comments, lines without `=` and
//! unknown keys are skipped. When a key repeats, the last occurrence wins.

use std::fmt;

/// Fallback API URL used when the file has no (or an empty) `HELIX_API_URL`.
pub const DEFAULT_API_URL: &str = "https://app.tryhelix.ai";

/// Key holding the Helix API token.
pub const API_KEY_VAR: &str = "HELIX_API_KEY";

/// Key holding the Helix API URL.
pub const API_URL_VAR: &str = "HELIX_API_URL";

/// Key holding the active tools list.
pub const ACTIVE_TOOLS_VAR: &str = "HELIX_ACTIVE_TOOLS";

/// Configuration extracted from a Helix credentials file.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialConfig {
    /// Value of `HELIX_API_KEY`, empty when absent
    pub api_key: String,
    /// Value of `HELIX_API_URL`, or the parser default
    pub api_url: String,
    /// Raw value of `HELIX_ACTIVE_TOOLS`, empty when absent
    pub active_tools: String,
}

impl CredentialConfig {
    /// Whether a non-empty API key was found.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("api_key", &if self.has_api_key() { "[REDACTED]" } else { "" })
            .field("api_url", &self.api_url)
            .field("active_tools", &self.active_tools)
            .finish()
    }
}

/// Recognized credential keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CredentialKey {
    ApiKey,
    ApiUrl,
    ActiveTools,
}

impl CredentialKey {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            API_KEY_VAR => Some(Self::ApiKey),
            API_URL_VAR => Some(Self::ApiUrl),
            ACTIVE_TOOLS_VAR => Some(Self::ActiveTools),
            _ => None,
        }
    }
}

/// Parser for credentials files.
///
/// Holds the fallback URL explicitly so callers (and tests) can override it
/// instead of relying on [`DEFAULT_API_URL`].
#[derive(Debug, Clone)]
pub struct CredentialParser {
    default_api_url: String,
}

impl CredentialParser {
    /// Create a parser using [`DEFAULT_API_URL`] as the fallback.
    pub fn new() -> Self {
        Self::with_default_api_url(DEFAULT_API_URL)
    }

    /// Create a parser with a custom fallback URL.
    ///
    /// An empty fallback is replaced by [`DEFAULT_API_URL`] so the parsed
    /// `api_url` is never empty.
    pub fn with_default_api_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let default_api_url = if url.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            url
        };
        Self { default_api_url }
    }

    /// The fallback URL applied when no `HELIX_API_URL` value is present.
    pub fn default_api_url(&self) -> &str {
        &self.default_api_url
    }

    /// Parse credentials file contents.
    pub fn parse(&self, contents: &str) -> CredentialConfig {
        let mut config = CredentialConfig {
            api_key: String::new(),
            api_url: self.default_api_url.clone(),
            active_tools: String::new(),
        };

        for (key, value) in contents.split('\n').filter_map(tokenize_line) {
            match key {
                CredentialKey::ApiKey => value.clone_into(&mut config.api_key),
                CredentialKey::ApiUrl if value.is_empty() => {
                    config.api_url.clone_from(&self.default_api_url);
                }
                CredentialKey::ApiUrl => value.clone_into(&mut config.api_url),
                CredentialKey::ActiveTools => value.clone_into(&mut config.active_tools),
            }
        }

        config
    }
}

impl Default for CredentialParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse credentials file contents with the default fallback URL.
pub fn parse_credentials(contents: &str) -> CredentialConfig {
    CredentialParser::new().parse(contents)
}

/// Split a single line into a recognized key and its raw value.
///
/// Only the first `=` separates key from value. Leading indentation is
/// ignored, otherwise the key token must equal a known key exactly; the value
/// is kept as-is.
fn tokenize_line(line: &str) -> Option<(CredentialKey, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    CredentialKey::from_token(key.trim_start()).map(|key| (key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_file() {
        let config = parse_credentials(
            "HELIX_API_KEY=a1b2\nHELIX_API_URL=http://localhost\nHELIX_ACTIVE_TOOLS=web,code\n",
        );
        assert_eq!(config.api_key, "a1b2");
        assert_eq!(config.api_url, "http://localhost");
        assert_eq!(config.active_tools, "web,code");
    }

    #[test]
    fn test_empty_input_uses_defaults() {
        let config = parse_credentials("");
        assert_eq!(config.api_key, "");
        assert_eq!(config.active_tools, "");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_comment_lines_are_skipped() {
        let config = parse_credentials("#HELIX_API_KEY=ignored\nHELIX_API_KEY=real");
        assert_eq!(config.api_key, "real");

        let config = parse_credentials("   # HELIX_API_URL=http://nope\n");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_last_write_wins() {
        let config = parse_credentials("HELIX_API_KEY=first\nHELIX_API_KEY=second");
        assert_eq!(config.api_key, "second");
    }

    #[test]
    fn test_empty_value_overwrites_previous() {
        let config = parse_credentials("HELIX_API_KEY=first\nHELIX_API_KEY=");
        assert_eq!(config.api_key, "");
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_empty_url_falls_back_to_default() {
        let config = parse_credentials("HELIX_API_URL=http://localhost\nHELIX_API_URL=");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_value_may_contain_equals() {
        let config = parse_credentials("HELIX_ACTIVE_TOOLS=tool=1,tool=2");
        assert_eq!(config.active_tools, "tool=1,tool=2");
    }

    #[test]
    fn test_crlf_line_endings() {
        let config = parse_credentials("HELIX_API_KEY=abc\r\nHELIX_API_URL=http://localhost\r\n");
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.api_url, "http://localhost");
    }

    #[test]
    fn test_key_must_match_exactly() {
        let config = parse_credentials(
            "MY_HELIX_API_KEY=wrong\nHELIX_API_KEYS=wrong\nnote: set HELIX_API_KEY=wrong\n",
        );
        assert_eq!(config.api_key, "");
    }

    #[test]
    fn test_indented_key_is_accepted() {
        let config = parse_credentials("  HELIX_API_KEY=abc");
        assert_eq!(config.api_key, "abc");
    }

    #[test]
    fn test_space_before_equals_is_not_a_key() {
        let config = parse_credentials("HELIX_API_KEY =abc
HELIX_API_URL	=http://x");
        assert_eq!(config.api_key, "");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_lines_without_equals_are_ignored() {
        let config = parse_credentials("HELIX_API_KEY\ngarbage\n\n\nHELIX_API_KEY=ok");
        assert_eq!(config.api_key, "ok");
    }

    #[test]
    fn test_custom_default_url() {
        let parser = CredentialParser::with_default_api_url("http://helix.internal");
        assert_eq!(parser.parse("").api_url, "http://helix.internal");
        assert_eq!(
            parser.parse("HELIX_API_URL=http://other").api_url,
            "http://other"
        );
    }

    #[test]
    fn test_empty_custom_default_url_is_replaced() {
        let parser = CredentialParser::with_default_api_url("");
        assert_eq!(parser.default_api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = parse_credentials("HELIX_API_KEY=super-secret-token");
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }
}
