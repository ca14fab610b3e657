use anyhow::Result;
use clap::Parser;
use preset_model::ProviderKind;

/// Print the wire keys of a provider's preset, one per line.
#[derive(Debug, Parser)]
pub(crate) struct Keys {
    /// The provider, e.g. `eks` or `openstack`.
    #[clap(long)]
    kind: ProviderKind,
}

impl Keys {
    pub(crate) fn run(self) -> Result<()> {
        for key in self.kind.wire_keys() {
            println!("{}", key);
        }
        Ok(())
    }
}
