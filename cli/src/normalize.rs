use crate::input::read_preset;
use anyhow::{Context, Result};
use clap::{value_parser, Parser};
use preset_model::ProviderKind;
use std::path::PathBuf;

/// Print the canonical encoding of a preset record. Unknown keys are dropped and keys holding
/// zero values are left out.
#[derive(Debug, Parser)]
pub(crate) struct Normalize {
    /// The provider the preset is for.
    #[clap(long)]
    kind: ProviderKind,

    /// Print the provider-tagged form, e.g. `{"eks":{...}}`.
    #[clap(long)]
    tagged: bool,

    /// Path to the JSON preset record, or `-` for stdin.
    #[clap(value_parser = value_parser!(PathBuf))]
    path: PathBuf,
}

impl Normalize {
    pub(crate) fn run(self) -> Result<()> {
        let preset = read_preset(self.kind, &self.path)?;
        let data = if self.tagged {
            preset.marshal_binary()
        } else {
            preset.marshal_record()
        }
        .context("Unable to encode preset")?;
        println!(
            "{}",
            String::from_utf8(data).context("Encoded preset is not UTF-8")?
        );
        Ok(())
    }
}
