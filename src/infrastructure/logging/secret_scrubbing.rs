use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static BEARER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Bearer\s+[a-zA-Z0-9\-_\.]+").expect("valid bearer pattern"));

static KEY_ASSIGNMENT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([A-Z0-9_]*(?:API_KEY|TOKEN|SECRET|PASSWORD))\s*=\s*\S+")
        .expect("valid key assignment pattern")
});

static JSON_FIELD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(api_key|apikey|token|secret|password)"\s*:\s*"[^"]*""#)
        .expect("valid json field pattern")
});

/// Redacts credentials from strings before they reach the logs.
///
/// Known secret values registered with [`SecretScrubber::with_secret`] are
/// replaced verbatim; common `KEY=value`, JSON field and bearer token shapes
/// are caught by pattern.
#[derive(Clone, Default)]
pub struct SecretScrubber {
    known_secrets: Vec<String>,
}

impl SecretScrubber {
    /// Create a scrubber with pattern matching only
    pub fn new() -> Self {
        Self::default()
    }

    /// Also redact every literal occurrence of `secret`. Empty values are ignored.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if !secret.is_empty() {
            self.known_secrets.push(secret);
        }
        self
    }

    /// Scrub a message of sensitive data
    pub fn scrub_message(&self, message: &str) -> String {
        let mut scrubbed = message.to_string();
        for secret in &self.known_secrets {
            scrubbed = scrubbed.replace(secret.as_str(), "[REDACTED]");
        }

        let scrubbed = BEARER_PATTERN.replace_all(&scrubbed, "Bearer [TOKEN_REDACTED]");
        let scrubbed = KEY_ASSIGNMENT_PATTERN.replace_all(&scrubbed, "$1=[REDACTED]");
        let scrubbed = JSON_FIELD_PATTERN.replace_all(&scrubbed, r#""$1": "[REDACTED]""#);
        scrubbed.into_owned()
    }
}

impl fmt::Debug for SecretScrubber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretScrubber")
            .field("known_secrets", &self.known_secrets.len())
            .finish()
    }
}
