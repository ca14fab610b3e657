/*!

Credential presets for every supported cloud provider.

Each provider has its own record type with the provider's credential fields and the three fields
shared by all presets (`datacenter`, `enabled` and `isCutomizable`). `CredentialPreset` is the sum
of all of them, tagged by `ProviderKind`.

!*/

pub use aks::AksPreset;
pub use aws::AwsPreset;
pub use digitalocean::DigitaloceanPreset;
pub use eks::EksPreset;
pub use gke::GkePreset;
pub use hetzner::HetznerPreset;
pub use openstack::OpenstackPreset;
pub use spec::PresetSpec;

mod aks;
mod aws;
mod digitalocean;
mod eks;
mod gke;
mod hetzner;
mod openstack;
mod spec;

use crate::binary::{decode_value, parse_json, BinaryModel};
use crate::context::ValidationContext;
use crate::error::{self, Result};
use crate::formats::FormatRegistry;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_plain::{derive_display_from_serialize, derive_fromstr_from_deserialize};
use snafu::ResultExt;
use std::str::FromStr;

/// The cloud provider a preset holds credentials for. The string form is the key the provider's
/// preset is stored under on the wire.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Aws,
    Eks,
    Aks,
    Gke,
    Openstack,
    Hetzner,
    Digitalocean,
}

derive_display_from_serialize!(ProviderKind);
derive_fromstr_from_deserialize!(ProviderKind);

impl ProviderKind {
    pub const ALL: [ProviderKind; 7] = [
        ProviderKind::Aws,
        ProviderKind::Eks,
        ProviderKind::Aks,
        ProviderKind::Gke,
        ProviderKind::Openstack,
        ProviderKind::Hetzner,
        ProviderKind::Digitalocean,
    ];

    /// The wire keys of this provider's preset record.
    pub fn wire_keys(self) -> &'static [&'static str] {
        match self {
            ProviderKind::Aws => AwsPreset::WIRE_KEYS,
            ProviderKind::Eks => EksPreset::WIRE_KEYS,
            ProviderKind::Aks => AksPreset::WIRE_KEYS,
            ProviderKind::Gke => GkePreset::WIRE_KEYS,
            ProviderKind::Openstack => OpenstackPreset::WIRE_KEYS,
            ProviderKind::Hetzner => HetznerPreset::WIRE_KEYS,
            ProviderKind::Digitalocean => DigitaloceanPreset::WIRE_KEYS,
        }
    }

    pub fn model_name(self) -> &'static str {
        match self {
            ProviderKind::Aws => AwsPreset::MODEL_NAME,
            ProviderKind::Eks => EksPreset::MODEL_NAME,
            ProviderKind::Aks => AksPreset::MODEL_NAME,
            ProviderKind::Gke => GkePreset::MODEL_NAME,
            ProviderKind::Openstack => OpenstackPreset::MODEL_NAME,
            ProviderKind::Hetzner => HetznerPreset::MODEL_NAME,
            ProviderKind::Digitalocean => DigitaloceanPreset::MODEL_NAME,
        }
    }
}

/// The settings every provider preset has in common.
pub trait ProviderPreset: Validatable {
    fn kind(&self) -> ProviderKind;

    /// The only datacenter this preset may be used in. Empty means any datacenter.
    fn datacenter(&self) -> &str;

    /// Whether the preset is offered for selection in the dashboard.
    fn enabled(&self) -> bool;

    /// Whether non-secret fields can be edited by users during cluster creation. Secrets stay
    /// obscured either way.
    fn is_customizable(&self) -> bool;

    fn is_applicable_to(&self, datacenter: &str) -> bool {
        self.datacenter().is_empty() || self.datacenter() == datacenter
    }
}

/// Implements the model traits for a provider preset record. The record must have `datacenter`,
/// `enabled` and `is_customizable` fields.
macro_rules! provider_preset {
    ($preset:ident, $variant:ident, $name:literal, [$($key:literal),+ $(,)?]) => {
        impl crate::validation::Validatable for $preset {}

        impl crate::binary::BinaryModel for $preset {
            const MODEL_NAME: &'static str = $name;
            const WIRE_KEYS: &'static [&'static str] = &[$($key),+];
        }

        impl crate::preset::ProviderPreset for $preset {
            fn kind(&self) -> crate::preset::ProviderKind {
                crate::preset::ProviderKind::$variant
            }

            fn datacenter(&self) -> &str {
                &self.datacenter
            }

            fn enabled(&self) -> bool {
                self.enabled
            }

            fn is_customizable(&self) -> bool {
                self.is_customizable
            }
        }

        impl From<$preset> for crate::preset::CredentialPreset {
            fn from(preset: $preset) -> Self {
                crate::preset::CredentialPreset::$variant(preset)
            }
        }
    };
}
pub(crate) use provider_preset;

/// A credential preset for any one provider. On the wire this is an object with a single key, the
/// provider kind, e.g. `{"eks":{"accessKeyID":"..."}}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialPreset {
    Aws(AwsPreset),
    Eks(EksPreset),
    Aks(AksPreset),
    Gke(GkePreset),
    Openstack(OpenstackPreset),
    Hetzner(HetznerPreset),
    Digitalocean(DigitaloceanPreset),
}

impl CredentialPreset {
    /// Decode the untagged preset record in `data` as a preset for `kind`.
    pub fn decode(kind: ProviderKind, data: &[u8]) -> Result<Self> {
        decode_record(kind, parse_json(kind.model_name(), data)?)
    }

    /// Encode the tagged form of this preset.
    pub fn marshal_binary(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self).context(error::EncodeSnafu {
            what: "credential preset",
        })?)
    }

    /// Encode only the provider record, without the provider tag.
    pub fn marshal_record(&self) -> Result<Vec<u8>> {
        match self {
            CredentialPreset::Aws(preset) => preset.marshal_binary(),
            CredentialPreset::Eks(preset) => preset.marshal_binary(),
            CredentialPreset::Aks(preset) => preset.marshal_binary(),
            CredentialPreset::Gke(preset) => preset.marshal_binary(),
            CredentialPreset::Openstack(preset) => preset.marshal_binary(),
            CredentialPreset::Hetzner(preset) => preset.marshal_binary(),
            CredentialPreset::Digitalocean(preset) => preset.marshal_binary(),
        }
    }

    /// Decode the tagged form of a preset. The record under the provider key is decoded the same
    /// way as an untagged record.
    pub fn from_binary(data: &[u8]) -> Result<Self> {
        let map = match parse_json("credential preset", data)? {
            Value::Object(map) => map,
            _ => {
                return Err(error::WrongValueTypeSnafu {
                    what: "credential preset",
                }
                .build()
                .into())
            }
        };
        let count = map.len();
        let (name, record) = match map.into_iter().next() {
            Some(entry) if count == 1 => entry,
            _ => return Err(error::ProviderTagSnafu { count }.build().into()),
        };
        let kind = ProviderKind::from_str(&name).context(error::UnknownProviderSnafu {
            name: name.clone(),
        })?;
        decode_record(kind, record)
    }

    pub fn as_provider(&self) -> &dyn ProviderPreset {
        match self {
            CredentialPreset::Aws(preset) => preset,
            CredentialPreset::Eks(preset) => preset,
            CredentialPreset::Aks(preset) => preset,
            CredentialPreset::Gke(preset) => preset,
            CredentialPreset::Openstack(preset) => preset,
            CredentialPreset::Hetzner(preset) => preset,
            CredentialPreset::Digitalocean(preset) => preset,
        }
    }
}

fn decode_record(kind: ProviderKind, value: Value) -> Result<CredentialPreset> {
    Ok(match kind {
        ProviderKind::Aws => decode_value::<AwsPreset>(value)?.into(),
        ProviderKind::Eks => decode_value::<EksPreset>(value)?.into(),
        ProviderKind::Aks => decode_value::<AksPreset>(value)?.into(),
        ProviderKind::Gke => decode_value::<GkePreset>(value)?.into(),
        ProviderKind::Openstack => decode_value::<OpenstackPreset>(value)?.into(),
        ProviderKind::Hetzner => decode_value::<HetznerPreset>(value)?.into(),
        ProviderKind::Digitalocean => decode_value::<DigitaloceanPreset>(value)?.into(),
    })
}

impl Validatable for CredentialPreset {
    fn validate(&self, formats: Option<&FormatRegistry>) -> Result<()> {
        self.as_provider().validate(formats)
    }

    fn context_validate(
        &self,
        ctx: &ValidationContext,
        formats: Option<&FormatRegistry>,
    ) -> Result<()> {
        self.as_provider().context_validate(ctx, formats)
    }
}

impl ProviderPreset for CredentialPreset {
    fn kind(&self) -> ProviderKind {
        self.as_provider().kind()
    }

    fn datacenter(&self) -> &str {
        self.as_provider().datacenter()
    }

    fn enabled(&self) -> bool {
        self.as_provider().enabled()
    }

    fn is_customizable(&self) -> bool {
        self.as_provider().is_customizable()
    }
}
