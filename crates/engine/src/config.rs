use crate::confirm::ConfirmMode;
use crate::selector::CountPolicy;
use derive_builder::Builder;
use std::path::PathBuf;

/// Immutable run configuration, built once from the command line.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Regular expression matched against file names.
    pub pattern: String,
    /// Signed count; see [`CountPolicy`].
    #[builder(default)]
    pub number: i64,
    #[builder(default = "PathBuf::from(\".\")")]
    pub path: PathBuf,
    #[builder(default)]
    pub dry_run: bool,
    #[builder(default)]
    pub yes: bool,
    /// File name of the running executable, never selected for deletion.
    #[builder(default)]
    pub self_name: Option<String>,
}

impl Config {
    pub fn policy(&self) -> CountPolicy {
        CountPolicy::from(self.number)
    }

    pub fn confirm_mode(&self) -> ConfirmMode {
        ConfirmMode::from_flags(self.dry_run, self.yes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = ConfigBuilder::default().pattern("\\.log$").build().unwrap();
        assert_eq!(config.number, 0);
        assert_eq!(config.path, PathBuf::from("."));
        assert!(!config.dry_run);
        assert!(!config.yes);
        assert_eq!(config.self_name, None);
        assert_eq!(config.policy(), CountPolicy::All);
        assert_eq!(config.confirm_mode(), ConfirmMode::Prompt);
    }

    #[test]
    fn builder_requires_pattern() {
        assert!(ConfigBuilder::default().number(3).build().is_err());
    }

    #[test]
    fn dry_run_takes_precedence_over_yes() {
        let config = ConfigBuilder::default()
            .pattern("x")
            .dry_run(true)
            .yes(true)
            .build()
            .unwrap();
        assert_eq!(config.confirm_mode(), ConfirmMode::DryRun);
    }
}
