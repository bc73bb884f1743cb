use std::env;

const DEFAULT_TTL_SECS: u64 = 86_400;

/// Session token configuration
///
/// Environment variables:
/// - SESSION_SECRET: HMAC key for signing session tokens (required)
/// - SESSION_TTL_SECS: Token lifetime in seconds (default: 86400)
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub ttl_secs: u64,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let secret = env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET not set, using an insecure development secret");
            "development-secret".to_string()
        });
        let ttl_secs = env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_SECS);

        Self { secret, ttl_secs }
    }
}
