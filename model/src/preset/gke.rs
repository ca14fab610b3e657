use crate::preset::provider_preset;
use crate::schema_utils::{is_false, null_to_default};
use serde::{Deserialize, Serialize};

/// Google Cloud credentials for clusters backed by GKE.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GkePreset {
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

    /// Base64 encoded service account JSON.
    #[serde(
        rename = "serviceAccount",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub service_account: String,
}

provider_preset!(
    GkePreset,
    Gke,
    "GKE preset",
    ["datacenter", "enabled", "isCutomizable", "serviceAccount"]
);
