use std::path::Path;

use secrecy::SecretString;

use crate::{AnyOrList, Config, DEFAULT_MODEL, GeminiConfig, TelemetryConfig};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if placeholder expansion, parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Build configuration from process environment alone
    ///
    /// Used when no config file is present. Reads `GEMINI_API_KEY`,
    /// `GEMINI_MODEL` and `LOG_LEVEL`; everything else takes its default.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration fails validation
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok().map(SecretString::from);
        let default_model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_owned());

        let mut telemetry = TelemetryConfig::default();
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            telemetry.log_filter = level.to_lowercase();
        }

        let config = Self {
            gemini: GeminiConfig {
                api_key,
                default_model,
                ..GeminiConfig::default()
            },
            telemetry,
            ..Self::default()
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// A missing API key is not rejected here: the gateway reports it as a
    /// configuration error when it is initialized.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_gemini()?;
        self.validate_server()?;
        Ok(())
    }

    fn validate_gemini(&self) -> anyhow::Result<()> {
        let gemini = &self.gemini;

        if gemini.default_model.trim().is_empty() {
            anyhow::bail!("gemini.default_model must not be empty");
        }

        if gemini.models.is_empty() {
            anyhow::bail!("gemini.models must list at least one model");
        }

        if let Some(model) = gemini.models.iter().find(|m| m.trim().is_empty()) {
            anyhow::bail!("gemini.models contains an empty entry: {model:?}");
        }

        gemini.request_timeout().map_err(anyhow::Error::msg)?;
        gemini.probe_timeout().map_err(anyhow::Error::msg)?;

        if !gemini.route_prefix.starts_with('/') {
            anyhow::bail!("gemini.route_prefix must start with '/': {}", gemini.route_prefix);
        }

        if gemini.route_prefix.ends_with('/') {
            anyhow::bail!(
                "gemini.route_prefix must not be the root or end with '/': {}",
                gemini.route_prefix
            );
        }

        if !gemini.models.contains(&gemini.default_model) {
            tracing::warn!(
                default_model = %gemini.default_model,
                "default model is not part of the advertised model catalog"
            );
        }

        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': {}", health.path);
        }

        if health.enabled && health.path.starts_with(&format!("{}/", self.gemini.route_prefix)) {
            anyhow::bail!(
                "server.health.path {} collides with the gemini routes under {}",
                health.path,
                self.gemini.route_prefix
            );
        }

        if let Some(ref cors) = self.server.cors
            && cors.credentials
            && [&cors.origins, &cors.methods, &cors.headers].contains(&&AnyOrList::Any)
        {
            anyhow::bail!("server.cors.credentials cannot be combined with wildcard origins, methods or headers");
        }

        Ok(())
    }
}
