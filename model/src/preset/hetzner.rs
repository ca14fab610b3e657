use crate::preset::provider_preset;
use crate::schema_utils::{is_false, null_to_default};
use serde::{Deserialize, Serialize};

/// Hetzner Cloud API token and network.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HetznerPreset {
    #[serde(
        rename = "datacenter",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub datacenter: String,

    #[serde(
        rename = "enabled",
        deserialize_with = "null_to_default",
        skip_serializing_if = "is_false"
    )]
    pub enabled: bool,

    #[serde(
        rename = "isCutomizable",
        deserialize_with = "null_to_default",
        skip_serializing_if = "is_false"
    )]
    pub is_customizable: bool,

    #[serde(
        rename = "network",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub network: String,

    #[serde(
        rename = "token",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub token: String,
}

provider_preset!(
    HetznerPreset,
    Hetzner,
    "Hetzner preset",
    ["datacenter", "enabled", "isCutomizable", "network", "token"]
);
