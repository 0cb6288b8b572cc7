use crate::i18n::Lang;

/// Runtime configuration, gathered once from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the backend REST API, without a trailing slash.
    pub api_base: String,
    /// Bearer credential attached automatically to privileged
    /// `/admin/*` backend paths. Optional in development.
    pub admin_token: Option<String>,
    pub bind_addr: String,
    pub default_lang: Lang,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base = std::env::var("PORTAL_API_BASE")
            .unwrap_or_else(|_| "http://127.0.0.1:9000".to_string())
            .trim_end_matches('/')
            .to_string();

        let admin_token = std::env::var("PORTAL_ADMIN_TOKEN")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let default_lang = std::env::var("PORTAL_DEFAULT_LANG")
            .ok()
            .and_then(|s| Lang::from_code(&s))
            .unwrap_or(Lang::En);

        Self {
            api_base,
            admin_token,
            bind_addr,
            default_lang,
        }
    }
}
