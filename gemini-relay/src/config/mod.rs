use axum::http::Method;
use serde::Deserialize;
use service_core::config::{self as core_config, get_env, is_prod};
use service_core::error::AppError;

/// Default Gemini model for the relay.
const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub cors_policy: CorsPolicy,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
}

/// Which methods the CORS layer advertises.
///
/// The relay only serves POST, but some deployments historically advertised
/// GET as well; `Verbose` preserves that header shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorsPolicy {
    Minimal,
    Verbose,
}

impl CorsPolicy {
    pub fn allowed_methods(self) -> Vec<Method> {
        match self {
            CorsPolicy::Minimal => vec![Method::POST, Method::OPTIONS],
            CorsPolicy::Verbose => vec![Method::GET, Method::POST, Method::OPTIONS],
        }
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = is_prod();

        // An empty key is tolerated outside production so the service can
        // boot in dev/test; the provider rejects requests until one is set.
        let gemini = GeminiSettings {
            api_key: get_env("GEMINI_API_KEY", Some(""), is_prod)?,
            model: get_env("GEMINI_MODEL", Some(DEFAULT_MODEL), is_prod)?,
        };

        let cors_policy = match get_env("RELAY_CORS_POLICY", Some("minimal"), is_prod)?.as_str() {
            "minimal" => CorsPolicy::Minimal,
            "verbose" => CorsPolicy::Verbose,
            other => {
                return Err(AppError::ConfigError(anyhow::anyhow!(
                    "invalid RELAY_CORS_POLICY value: {}",
                    other
                )))
            }
        };

        Ok(RelayConfig {
            common,
            gemini,
            cors_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_policy_omits_get() {
        let methods = CorsPolicy::Minimal.allowed_methods();
        assert!(!methods.contains(&Method::GET));
        assert!(methods.contains(&Method::POST));
        assert!(methods.contains(&Method::OPTIONS));
    }

    #[test]
    fn verbose_policy_advertises_get() {
        let methods = CorsPolicy::Verbose.allowed_methods();
        assert!(methods.contains(&Method::GET));
    }
}
