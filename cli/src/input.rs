use anyhow::{Context, Result};
use log::debug;
use preset_model::{CredentialPreset, ProviderKind};
use std::io::Read;
use std::path::Path;

/// Read the preset record for `kind` from `path`, or from stdin when `path` is `-`.
pub(crate) fn read_preset(kind: ProviderKind, path: &Path) -> Result<CredentialPreset> {
    let data = if path == Path::new("-") {
        let mut data = Vec::new();
        std::io::stdin()
            .read_to_end(&mut data)
            .context("Unable to read preset from stdin")?;
        data
    } else {
        std::fs::read(path).context(format!("Unable to read '{}'", path.display()))?
    };
    debug!("Read {} bytes from '{}'", data.len(), path.display());
    CredentialPreset::decode(kind, &data)
        .context(format!("Unable to decode {} preset '{}'", kind, path.display()))
}
