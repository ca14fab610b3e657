use crate::preset::provider_preset;
use crate::schema_utils::{is_false, null_to_default};
use serde::{Deserialize, Serialize};

/// AWS credentials and network settings for clusters on plain EC2.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsPreset {
    #[serde(
        rename = "accessKeyID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub access_key_id: String,

    /// IAM role assumed through STS AssumeRole when handling resources.
    #[serde(
        rename = "assumeRoleARN",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub assume_role_arn: String,

    #[serde(
        rename = "assumeRoleExternalID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub assume_role_external_id: String,

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
        rename = "instanceProfileName",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub instance_profile_name: String,

    #[serde(
        rename = "isCutomizable",
        deserialize_with = "null_to_default",
        skip_serializing_if = "is_false"
    )]
    pub is_customizable: bool,

    /// The IAM role used by the control plane.
    #[serde(
        rename = "roleARN",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub control_plane_role_arn: String,

    #[serde(
        rename = "routeTableID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub route_table_id: String,

    #[serde(
        rename = "secretAccessKey",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub secret_access_key: String,

    #[serde(
        rename = "securityGroupID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub security_group_id: String,

    #[serde(
        rename = "vpcID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub vpc_id: String,
}

provider_preset!(
    AwsPreset,
    Aws,
    "AWS preset",
    [
        "accessKeyID",
        "assumeRoleARN",
        "assumeRoleExternalID",
        "datacenter",
        "enabled",
        "instanceProfileName",
        "isCutomizable",
        "roleARN",
        "routeTableID",
        "secretAccessKey",
        "securityGroupID",
        "vpcID",
    ]
);
