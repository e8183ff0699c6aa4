//! GitHub client construction
//!
//! Builds an [`OctocrabClient`] for github.com or a GitHub Enterprise host,
//! authenticated with whatever token the environment provides. Without a
//! token the client talks to the API anonymously.

use crate::{OctocrabClient, DEFAULT_HOST};
use anyhow::{Context, Result};
use log::{debug, info};
use octocrab::Octocrab;
use std::sync::Arc;

/// Resolves GitHub tokens for different hosts
///
/// Tries multiple sources in order:
/// 1. Host-specific env var (e.g., `GITHUB_TOKEN_GHE_EXAMPLE_COM`)
/// 2. Generic `GITHUB_TOKEN` or `GH_TOKEN` (github.com only)
/// 3. `gh auth token --hostname {host}` command
#[derive(Debug, Clone)]
pub struct TokenResolver {
    /// Cached default token from GITHUB_TOKEN/GH_TOKEN
    default_token: Option<String>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a new token resolver
    pub fn new() -> Self {
        let default_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok()
            .filter(|t| !t.is_empty());

        Self { default_token }
    }

    /// Name of the host-specific token variable, e.g. `GITHUB_TOKEN_GHE_EXAMPLE_COM`
    pub fn env_key(host: &str) -> String {
        format!(
            "GITHUB_TOKEN_{}",
            host.replace(['.', '-'], "_").to_uppercase()
        )
    }

    /// Get a token for the given host, if any source provides one
    ///
    /// # Arguments
    ///
    /// * `host` - The GitHub host (None = github.com)
    pub async fn get_token(&self, host: Option<&str>) -> Option<String> {
        let host = host.unwrap_or(DEFAULT_HOST);

        let env_key = Self::env_key(host);
        if let Ok(token) = std::env::var(&env_key) {
            if !token.is_empty() {
                debug!("Using token from env var {} for host {}", env_key, host);
                return Some(token);
            }
        }

        if host == DEFAULT_HOST {
            if let Some(ref token) = self.default_token {
                debug!("Using default token (GITHUB_TOKEN/GH_TOKEN) for github.com");
                return Some(token.clone());
            }
        }

        debug!("Trying gh auth token for host {}", host);
        match tokio::process::Command::new("gh")
            .args(["auth", "token", "--hostname", host])
            .output()
            .await
        {
            Ok(output) if output.status.success() => {
                let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !token.is_empty() {
                    debug!("Using token from gh CLI for host {}", host);
                    return Some(token);
                }
            }
            Ok(_) => debug!("gh CLI has no token for host {}", host),
            Err(e) => debug!("Could not run 'gh auth token': {}", e),
        }

        None
    }
}

/// Builds GitHub clients for one host
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::ClientFactory;
///
/// let client = ClientFactory::new()
///     .host(Some("ghe.example.com".to_string()))
///     .build()
///     .await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientFactory {
    host: Option<String>,
    api_url: Option<String>,
    token: Option<String>,
    tokens: TokenResolver,
}

impl ClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// GitHub host; `None` or `github.com` means public GitHub
    pub fn host(mut self, host: Option<String>) -> Self {
        self.host = host.filter(|h| !h.is_empty() && h != DEFAULT_HOST);
        self
    }

    /// Explicit API base URI, overriding the one derived from the host
    pub fn api_url(mut self, api_url: Option<String>) -> Self {
        self.api_url = api_url;
        self
    }

    /// Explicit token, skipping token resolution
    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Base URI requests will be sent to, `None` for octocrab's default
    pub fn base_uri(&self) -> Option<String> {
        self.api_url
            .clone()
            .or_else(|| self.host.as_ref().map(|h| format!("https://{}/api/v3", h)))
    }

    /// Resolve a token and build the client
    pub async fn build(self) -> Result<OctocrabClient> {
        let effective_host = self.host.as_deref().unwrap_or(DEFAULT_HOST);
        info!("Creating GitHub client for host: {}", effective_host);

        let token = match self.token.clone() {
            Some(token) => Some(token),
            None => self.tokens.get_token(self.host.as_deref()).await,
        };

        let mut builder = Octocrab::builder();
        match token {
            Some(token) => builder = builder.personal_token(token),
            None => info!(
                "No token found for host '{}', using anonymous access. Set {} or run 'gh auth login'",
                effective_host,
                TokenResolver::env_key(effective_host)
            ),
        }

        if let Some(uri) = self.base_uri() {
            debug!("Using API base URI {}", uri);
            builder = builder
                .base_uri(&uri)
                .with_context(|| format!("Invalid API base URI: {}", uri))?;
        }

        let octocrab = builder.build().context("Failed to build Octocrab client")?;
        Ok(OctocrabClient::new(Arc::new(octocrab)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_resolver_env_key_generation() {
        let hosts = [
            ("github.com", "GITHUB_TOKEN_GITHUB_COM"),
            ("ghe.example.com", "GITHUB_TOKEN_GHE_EXAMPLE_COM"),
            (
                "github-enterprise.corp.com",
                "GITHUB_TOKEN_GITHUB_ENTERPRISE_CORP_COM",
            ),
        ];

        for (host, expected_key) in hosts {
            assert_eq!(
                TokenResolver::env_key(host),
                expected_key,
                "Host '{}' should produce key '{}'",
                host,
                expected_key
            );
        }
    }

    #[test]
    fn test_base_uri_defaults_to_public_github() {
        assert_eq!(ClientFactory::new().base_uri(), None);
        assert_eq!(
            ClientFactory::new()
                .host(Some(DEFAULT_HOST.to_string()))
                .base_uri(),
            None
        );
    }

    #[test]
    fn test_base_uri_for_enterprise_host() {
        let factory = ClientFactory::new().host(Some("ghe.example.com".to_string()));
        assert_eq!(
            factory.base_uri().as_deref(),
            Some("https://ghe.example.com/api/v3")
        );
    }

    #[test]
    fn test_api_url_overrides_host() {
        let factory = ClientFactory::new()
            .host(Some("ghe.example.com".to_string()))
            .api_url(Some("http://localhost:8080".to_string()));
        assert_eq!(factory.base_uri().as_deref(), Some("http://localhost:8080"));
    }

    #[tokio::test]
    async fn test_build_with_explicit_token_and_api_url() {
        let client = ClientFactory::new()
            .api_url(Some("http://localhost:8080".to_string()))
            .token(Some("secret".to_string()))
            .build()
            .await;
        assert!(client.is_ok());
    }
}
