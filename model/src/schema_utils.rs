use serde::{Deserialize, Deserializer};

/// Preset fields are plain values rather than `Option`s. A JSON `null` is accepted for any of them
/// and decodes to the field's zero value, the same as an absent key.
pub(crate) fn null_to_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::deserialize(d)?;
    let val = opt.unwrap_or_default();
    Ok(val)
}

/// Used with `skip_serializing_if` so that `false` booleans are left off the wire.
pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}
