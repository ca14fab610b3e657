use crate::preset::provider_preset;
use crate::schema_utils::{is_false, null_to_default};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitaloceanPreset {
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
        rename = "token",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub token: String,
}

provider_preset!(
    DigitaloceanPreset,
    Digitalocean,
    "DigitalOcean preset",
    ["datacenter", "enabled", "isCutomizable", "token"]
);
