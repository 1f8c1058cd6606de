use std::path::{Path, PathBuf};

use primex_core::{
    CreditCardConfig, DomainSelection, EmailConfig, GenerationRequest, GeneratorConfig,
    GeneratorKind, PasswordPolicySpec, UsernameConfig, UsernamePattern, request::DEFAULT_COUNT,
};
use primex_generate::ExportFormat;
use serde::{Deserialize, Serialize};

use super::atomic::write_bytes_atomic;
use super::{WorkspaceError, WorkspaceResult};

pub const DEFAULT_SETTINGS_PATH: &str = "primex.toml";

/// Defaults applied to every `generate` invocation; CLI flags override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub generator: GeneratorKind,
    pub count: i64,
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    pub username_pattern: UsernamePattern,
    pub domain: DomainSelection,
    pub password_policy: PasswordPolicySpec,
    pub card: CreditCardConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator: GeneratorKind::Email,
            count: DEFAULT_COUNT,
            format: ExportFormat::Text,
            out_dir: PathBuf::from("out"),
            username_pattern: UsernamePattern::Random,
            domain: DomainSelection::default(),
            password_policy: PasswordPolicySpec::default(),
            card: CreditCardConfig::default(),
        }
    }
}

impl Settings {
    /// Request for `kind` built purely from these settings.
    pub fn request_for(&self, kind: GeneratorKind) -> GenerationRequest {
        let config = match kind {
            GeneratorKind::Email => GeneratorConfig::Email(EmailConfig {
                domain: self.domain.clone(),
                password_policy: self.password_policy.clone(),
            }),
            GeneratorKind::Username => GeneratorConfig::Username(UsernameConfig {
                username_pattern: self.username_pattern,
                password_policy: self.password_policy.clone(),
            }),
            GeneratorKind::CreditCard => GeneratorConfig::CreditCard(self.card.clone()),
            GeneratorKind::Custom1 => GeneratorConfig::Custom1,
            GeneratorKind::Custom2 => GeneratorConfig::Custom2,
        };
        GenerationRequest::new(self.count, config)
    }
}

/// Settings from `path`, or defaults when the file does not exist.
pub fn load_settings(path: &Path) -> WorkspaceResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

/// Write `settings` to `path`; refuses to replace an existing file unless `force`.
pub fn save_settings(path: &Path, settings: &Settings, force: bool) -> WorkspaceResult<()> {
    if path.exists() && !force {
        return Err(WorkspaceError::Invalid(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())
}
