use crate::preset::provider_preset;
use crate::schema_utils::{is_false, null_to_default};
use serde::{Deserialize, Serialize};

/// AWS credentials and settings for creating clusters backed by Amazon EKS.
///
/// All fields are optional on the wire and left out when they hold their zero value. The
/// customizable flag is sent as `isCutomizable`; consumers already depend on that spelling.
///
/// `unmarshal_binary` replaces the whole record through `&mut self`, so sharing a preset between
/// threads while it is being decoded into requires the caller's own synchronization.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EksPreset {
    /// The access key ID used to authenticate against AWS.
    #[serde(
        rename = "accessKeyID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub access_key_id: String,

    /// The ARN of an IAM role to assume when handling resources on AWS. Temporary credentials for
    /// it are requested through STS AssumeRole whenever an AWS session is created.
    #[serde(
        rename = "assumeRoleARN",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub assume_role_arn: String,

    /// The external ID passed to STS AssumeRole, which guards against the "confused deputy"
    /// problem.
    #[serde(
        rename = "assumeRoleExternalID",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub assume_role_external_id: String,

    /// If set, the preset is only applicable to this datacenter.
    #[serde(
        rename = "datacenter",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub datacenter: String,

    /// Only enabled presets are available in the dashboard.
    #[serde(
        rename = "enabled",
        deserialize_with = "null_to_default",
        skip_serializing_if = "is_false"
    )]
    pub enabled: bool,

    /// Marks the preset as editable during cluster creation. Credentials stay obscured, but the
    /// other fields are shown and may be changed.
    #[serde(
        rename = "isCutomizable",
        deserialize_with = "null_to_default",
        skip_serializing_if = "is_false"
    )]
    pub is_customizable: bool,

    /// The secret access key belonging to `access_key_id`.
    #[serde(
        rename = "secretAccessKey",
        deserialize_with = "null_to_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub secret_access_key: String,
}

provider_preset!(
    EksPreset,
    Eks,
    "EKS preset",
    [
        "accessKeyID",
        "assumeRoleARN",
        "assumeRoleExternalID",
        "datacenter",
        "enabled",
        "isCutomizable",
        "secretAccessKey",
    ]
);
