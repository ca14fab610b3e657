use crate::preset::provider_preset;
use crate::schema_utils::{is_false, null_to_default};
use serde::{Deserialize, Serialize};

/// OpenStack credentials, either user/password or an application credential, and the
/// network settings new clusters are placed in.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenstackPreset {
    #[serde(
        rename = "applicationCredentialID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub application_credential_id: String,

    #[serde(
        rename = "applicationCredentialSecret",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub application_credential_secret: String,

    #[serde(
        rename = "datacenter",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub datacenter: String,

    #[serde(
        rename = "domain",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub domain: String,

    #[serde(
        rename = "enabled",
        deserialize_with = "null_to_default",
        skip_serializing_if = "is_false"
    )]
    pub enabled: bool,

    #[serde(
        rename = "floatingIPPool",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub floating_ip_pool: String,

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
        rename = "password",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub password: String,

    /// Project (tenant) name.
    #[serde(
        rename = "project",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub project: String,

    #[serde(
        rename = "projectID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub project_id: String,

    #[serde(
        rename = "routerID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub router_id: String,

    #[serde(
        rename = "securityGroups",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub security_groups: String,

    #[serde(
        rename = "subnetID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub subnet_id: String,

    /// Authenticate with the user's token instead of credentials.
    #[serde(
        rename = "useToken",
        deserialize_with = "null_to_default",
        skip_serializing_if = "is_false"
    )]
    pub use_token: bool,

    #[serde(
        rename = "username",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub username: String,
}

provider_preset!(
    OpenstackPreset,
    Openstack,
    "OpenStack preset",
    [
        "applicationCredentialID",
        "applicationCredentialSecret",
        "datacenter",
        "domain",
        "enabled",
        "floatingIPPool",
        "isCutomizable",
        "network",
        "password",
        "project",
        "projectID",
        "routerID",
        "securityGroups",
        "subnetID",
        "useToken",
        "username",
    ]
);
