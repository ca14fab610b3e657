use crate::binary::{canonical_keys, BinaryModel};
use crate::preset::{
    AksPreset, AwsPreset, CredentialPreset, DigitaloceanPreset, EksPreset, GkePreset,
    HetznerPreset, OpenstackPreset, ProviderKind, ProviderPreset,
};
use crate::schema_utils::null_to_default;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The contents of a preset: at most one credential preset per provider, plus settings that apply
/// to all of them.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetSpec {
    /// Users whose email address matches one of these (or is in one of these domains) may use the
    /// preset. Empty means everybody.
    #[serde(
        rename = "requiredEmails",
        deserialize_with = "null_to_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub required_emails: Vec<String>,

    /// Projects the preset is limited to. Empty means every project.
    #[serde(
        rename = "projects",
        deserialize_with = "null_to_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub projects: Vec<String>,

    /// Disables the whole preset when `false`. Absent means enabled.
    #[serde(rename = "enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(rename = "aws", skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsPreset>,
    #[serde(rename = "eks", skip_serializing_if = "Option::is_none")]
    pub eks: Option<EksPreset>,
    #[serde(rename = "aks", skip_serializing_if = "Option::is_none")]
    pub aks: Option<AksPreset>,
    #[serde(rename = "gke", skip_serializing_if = "Option::is_none")]
    pub gke: Option<GkePreset>,
    #[serde(rename = "openstack", skip_serializing_if = "Option::is_none")]
    pub openstack: Option<OpenstackPreset>,
    #[serde(rename = "hetzner", skip_serializing_if = "Option::is_none")]
    pub hetzner: Option<HetznerPreset>,
    #[serde(rename = "digitalocean", skip_serializing_if = "Option::is_none")]
    pub digitalocean: Option<DigitaloceanPreset>,
}

impl PresetSpec {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// The preset configured for `kind`, if any.
    pub fn get(&self, kind: ProviderKind) -> Option<&dyn ProviderPreset> {
        match kind {
            ProviderKind::Aws => self.aws.as_ref().map(|p| p as &dyn ProviderPreset),
            ProviderKind::Eks => self.eks.as_ref().map(|p| p as &dyn ProviderPreset),
            ProviderKind::Aks => self.aks.as_ref().map(|p| p as &dyn ProviderPreset),
            ProviderKind::Gke => self.gke.as_ref().map(|p| p as &dyn ProviderPreset),
            ProviderKind::Openstack => self.openstack.as_ref().map(|p| p as &dyn ProviderPreset),
            ProviderKind::Hetzner => self.hetzner.as_ref().map(|p| p as &dyn ProviderPreset),
            ProviderKind::Digitalocean => {
                self.digitalocean.as_ref().map(|p| p as &dyn ProviderPreset)
            }
        }
    }

    /// Store `preset` under its provider, returning the preset it replaced.
    pub fn set(&mut self, preset: CredentialPreset) -> Option<CredentialPreset> {
        match preset {
            CredentialPreset::Aws(p) => self.aws.replace(p).map(CredentialPreset::Aws),
            CredentialPreset::Eks(p) => self.eks.replace(p).map(CredentialPreset::Eks),
            CredentialPreset::Aks(p) => self.aks.replace(p).map(CredentialPreset::Aks),
            CredentialPreset::Gke(p) => self.gke.replace(p).map(CredentialPreset::Gke),
            CredentialPreset::Openstack(p) => {
                self.openstack.replace(p).map(CredentialPreset::Openstack)
            }
            CredentialPreset::Hetzner(p) => self.hetzner.replace(p).map(CredentialPreset::Hetzner),
            CredentialPreset::Digitalocean(p) => self
                .digitalocean
                .replace(p)
                .map(CredentialPreset::Digitalocean),
        }
    }

    /// The configured presets, in `ProviderKind::ALL` order.
    pub fn providers(&self) -> Vec<&dyn ProviderPreset> {
        ProviderKind::ALL
            .iter()
            .filter_map(|kind| self.get(*kind))
            .collect()
    }

    /// Whether the preset can be offered for a `kind` cluster in `datacenter`.
    pub fn available(&self, kind: ProviderKind, datacenter: &str) -> bool {
        self.is_enabled()
            && self
                .get(kind)
                .map(|p| p.enabled() && p.is_applicable_to(datacenter))
                .unwrap_or(false)
    }
}

impl Validatable for PresetSpec {}

impl BinaryModel for PresetSpec {
    const MODEL_NAME: &'static str = "preset spec";
    const WIRE_KEYS: &'static [&'static str] = &[
        "requiredEmails",
        "projects",
        "enabled",
        "aws",
        "eks",
        "aks",
        "gke",
        "openstack",
        "hetzner",
        "digitalocean",
    ];

    fn canonical_map(map: Map<String, Value>) -> Map<String, Value> {
        let mut map = canonical_keys(Self::MODEL_NAME, Self::WIRE_KEYS, map);
        for kind in ProviderKind::ALL {
            if let Some(Value::Object(record)) = map.get_mut(&kind.to_string()) {
                let original = std::mem::take(record);
                *record = canonical_keys(kind.model_name(), kind.wire_keys(), original);
            }
        }
        map
    }
}

#[cfg(test)]
mod test {
    use super::PresetSpec;
    use crate::preset::{CredentialPreset, EksPreset, HetznerPreset, ProviderKind};
    use crate::BinaryModel;

    const SPEC: &[u8] = br#"{
        "requiredEmails": ["example.com"],
        "projects": null,
        "eks": {"accessKeyID": "a", "secretAccessKey": "s", "enabled": true, "datacenter": "eu"},
        "hetzner": {"token": "t"},
        "kubevirt": {"kubeconfig": "ignored"}
    }"#;

    #[test]
    fn decode() {
        let spec = PresetSpec::from_binary(SPEC).unwrap();
        assert_eq!(spec.required_emails, vec!["example.com".to_string()]);
        assert!(spec.projects.is_empty());
        assert!(spec.is_enabled());
        assert_eq!(spec.eks.as_ref().unwrap().access_key_id, "a");
        assert_eq!(spec.hetzner.as_ref().unwrap().token, "t");
        assert!(spec.aws.is_none());
        let kinds: Vec<ProviderKind> = spec.providers().iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, vec![ProviderKind::Eks, ProviderKind::Hetzner]);
    }

    #[test]
    fn availability() {
        let mut spec = PresetSpec::from_binary(SPEC).unwrap();
        assert!(spec.available(ProviderKind::Eks, "eu"));
        assert!(!spec.available(ProviderKind::Eks, "us"));
        // Present but not enabled.
        assert!(!spec.available(ProviderKind::Hetzner, "eu"));
        assert!(!spec.available(ProviderKind::Aws, "eu"));

        spec.enabled = Some(false);
        assert!(!spec.available(ProviderKind::Eks, "eu"));
    }

    #[test]
    fn set_replaces() {
        let mut spec = PresetSpec::default();
        let first = EksPreset {
            access_key_id: "first".to_string(),
            ..EksPreset::default()
        };
        assert_eq!(spec.set(first.clone().into()), None);
        let replaced = spec.set(
            EksPreset {
                access_key_id: "second".to_string(),
                ..EksPreset::default()
            }
            .into(),
        );
        assert_eq!(replaced, Some(CredentialPreset::Eks(first)));
        assert_eq!(spec.eks.as_ref().unwrap().access_key_id, "second");

        spec.set(
            HetznerPreset {
                enabled: true,
                ..HetznerPreset::default()
            }
            .into(),
        );
        assert!(spec.get(ProviderKind::Hetzner).unwrap().enabled());
    }

    #[test]
    fn round_trip() {
        let spec = PresetSpec::from_binary(SPEC).unwrap();
        let data = spec.marshal_binary().unwrap();
        let text = String::from_utf8(data.clone()).unwrap();
        assert!(!text.contains("kubevirt"));
        assert!(!text.contains("projects"));
        assert_eq!(PresetSpec::from_binary(&data).unwrap(), spec);
    }

    #[test]
    fn nested_records_use_wire_keys() {
        let spec = PresetSpec::from_binary(
            br#"{
                "EKS": {"ACCESSKEYID": "x", "Enabled": true, "legacy": 1},
                "hetzner": null,
                "Projects": ["p1"]
            }"#,
        )
        .unwrap();
        let eks = spec.eks.as_ref().unwrap();
        assert_eq!(eks.access_key_id, "x");
        assert!(eks.enabled);
        assert!(spec.hetzner.is_none());
        assert_eq!(spec.projects, vec!["p1".to_string()]);
        assert_eq!(
            spec.marshal_binary().unwrap(),
            br#"{"projects":["p1"],"eks":{"accessKeyID":"x","enabled":true}}"#
        );
    }

    #[test]
    fn nested_type_mismatch() {
        let err = PresetSpec::from_binary(br#"{"gke":{"ServiceAccount":7}}"#).unwrap_err();
        assert!(err.is_decode());
    }
}
