use crate::input::read_preset;
use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use log::info;
use preset_model::{FormatRegistry, ProviderKind, ProviderPreset, Validatable, ValidationContext};
use std::path::PathBuf;

/// Decode a preset record and run its validation.
#[derive(Debug, Parser)]
pub(crate) struct Validate {
    /// The provider the preset is for.
    #[clap(long)]
    kind: ProviderKind,

    /// Only accept the preset if it can be used in this datacenter.
    #[clap(long)]
    datacenter: Option<String>,

    /// Path to the JSON preset record, or `-` for stdin.
    #[clap(value_parser = value_parser!(PathBuf))]
    path: PathBuf,
}

impl Validate {
    pub(crate) fn run(self) -> Result<()> {
        let preset = read_preset(self.kind, &self.path)?;
        let formats = FormatRegistry::default();
        preset
            .validate(Some(&formats))
            .context("Preset failed validation")?;
        preset
            .context_validate(&ValidationContext::new(), Some(&formats))
            .context("Preset failed context validation")?;
        if let Some(datacenter) = &self.datacenter {
            if !preset.is_applicable_to(datacenter) {
                return Err(anyhow::anyhow!(
                    "The {} preset is restricted to datacenter '{}', not '{}'",
                    self.kind,
                    preset.datacenter(),
                    datacenter
                ));
            }
        }
        info!("Validated {} preset '{}'", self.kind, self.path.display());
        println!(
            "'{}' is a valid {} preset (enabled: {}, customizable: {}).",
            self.path.display(),
            self.kind,
            preset.enabled(),
            preset.is_customizable()
        );
        Ok(())
    }
}
