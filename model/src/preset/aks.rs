use crate::preset::provider_preset;
use crate::schema_utils::{is_false, null_to_default};
use serde::{Deserialize, Serialize};

/// Azure service principal used for clusters backed by AKS.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AksPreset {
    #[serde(
        rename = "clientID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub client_id: String,

    #[serde(
        rename = "clientSecret",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub client_secret: String,

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
        rename = "subscriptionID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub subscription_id: String,

    #[serde(
        rename = "tenantID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub tenant_id: String,
}

provider_preset!(
    AksPreset,
    Aks,
    "AKS preset",
    [
        "clientID",
        "clientSecret",
        "datacenter",
        "enabled",
        "isCutomizable",
        "subscriptionID",
        "tenantID",
    ]
);
