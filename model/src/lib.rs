/*!

This library provides the cloud credential preset models of the cluster management API, their
JSON wire encoding, and the validation hooks shared by all API models.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use binary::BinaryModel;
pub use context::ValidationContext;
pub use error::{Error, Result};
pub use formats::{FormatChecker, FormatRegistry};
pub use preset::{
    AksPreset, AwsPreset, CredentialPreset, DigitaloceanPreset, EksPreset, GkePreset,
    HetznerPreset, OpenstackPreset, PresetSpec, ProviderKind, ProviderPreset,
};
pub use validation::Validatable;

mod binary;
mod context;
mod error;
pub mod formats;
pub mod preset;
mod schema_utils;
mod validation;
