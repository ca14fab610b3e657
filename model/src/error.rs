use snafu::Snafu;

/// The error returned when a preset cannot be encoded to, or decoded from, its wire form.
#[derive(Debug, Snafu)]
pub struct Error(OpaqueError);
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error happened while decoding a payload.
    pub fn is_decode(&self) -> bool {
        matches!(
            self.0,
            OpaqueError::Decode { .. }
                | OpaqueError::WrongValueType { .. }
                | OpaqueError::ProviderTag { .. }
                | OpaqueError::UnknownProvider { .. }
        )
    }

    /// Whether this error happened while encoding a value.
    pub fn is_encode(&self) -> bool {
        matches!(self.0, OpaqueError::Encode { .. })
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum OpaqueError {
    #[snafu(display("Error decoding {}: {}", what, source))]
    Decode {
        what: &'static str,
        source: serde_json::Error,
    },

    #[snafu(display("Error encoding {}: {}", what, source))]
    Encode {
        what: &'static str,
        source: serde_json::Error,
    },

    #[snafu(display(
        "Error decoding {}: expected a JSON object but got something else.",
        what
    ))]
    WrongValueType { what: &'static str },

    #[snafu(display(
        "Error decoding credential preset: expected exactly one provider key but got {}",
        count
    ))]
    ProviderTag { count: usize },

    #[snafu(display("Error decoding credential preset: unknown provider '{}'", name))]
    UnknownProvider {
        name: String,
        source: serde_plain::Error,
    },
}
