use crate::error::{self, Result};
use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use snafu::ResultExt;

/// Binary (JSON) marshalling for API models that are handed to a generic storage or transport
/// layer.
pub trait BinaryModel: Serialize + DeserializeOwned + Default + Sized {
    /// The name used in errors and log messages.
    const MODEL_NAME: &'static str;

    /// Every key this model reads from or writes to the wire. Keys outside of this table are
    /// ignored on decode.
    const WIRE_KEYS: &'static [&'static str];

    /// Encode `self` as compact JSON.
    fn marshal_binary(&self) -> Result<Vec<u8>> {
        let data = serde_json::to_vec(self).context(error::EncodeSnafu {
            what: Self::MODEL_NAME,
        })?;
        trace!("Encoded {} ({} bytes)", Self::MODEL_NAME, data.len());
        Ok(data)
    }

    /// Like `marshal_binary` but for a model that may be absent. There is nothing to encode for
    /// `None`, which is not an error.
    fn marshal_optional(model: Option<&Self>) -> Result<Option<Vec<u8>>> {
        model.map(Self::marshal_binary).transpose()
    }

    /// Replace the whole state of `self` with the model decoded from `data`. `self` is only
    /// written once decoding has succeeded, so it is left untouched on error.
    fn unmarshal_binary(&mut self, data: &[u8]) -> Result<()> {
        *self = Self::from_binary(data)?;
        Ok(())
    }

    /// Decode a fresh model from `data`.
    fn from_binary(data: &[u8]) -> Result<Self> {
        decode_value(parse_json(Self::MODEL_NAME, data)?)
    }

    /// Rewrite the keys of a decoded object onto `WIRE_KEYS` before it is deserialized. Models
    /// that embed other models override this to rewrite the embedded objects too.
    fn canonical_map(map: Map<String, Value>) -> Map<String, Value> {
        canonical_keys(Self::MODEL_NAME, Self::WIRE_KEYS, map)
    }
}

/// Parse `data` as JSON. Invalid UTF-8 is replaced with U+FFFD rather than rejected.
pub(crate) fn parse_json(what: &'static str, data: &[u8]) -> Result<Value> {
    Ok(serde_json::from_str(&String::from_utf8_lossy(data))
        .context(error::DecodeSnafu { what })?)
}

/// Decode `value` into `T`. A top-level `null` decodes to the zero-valued model and anything that
/// is not an object is rejected.
pub(crate) fn decode_value<T>(value: Value) -> Result<T>
where
    T: BinaryModel,
{
    let map = match value {
        Value::Null => return Ok(T::default()),
        Value::Object(map) => T::canonical_map(map),
        _ => {
            return Err(error::WrongValueTypeSnafu {
                what: T::MODEL_NAME,
            }
            .build()
            .into())
        }
    };
    Ok(
        serde_json::from_value(Value::Object(map)).context(error::DecodeSnafu {
            what: T::MODEL_NAME,
        })?,
    )
}

/// Map every key of `map` onto its entry in `wire_keys`. A key that matches exactly is kept; a key
/// that only matches ignoring ASCII case is renamed, unless the exact key is also present, in
/// which case the exact key wins. Keys that match nothing are dropped and logged.
pub(crate) fn canonical_keys(
    what: &str,
    wire_keys: &[&'static str],
    map: Map<String, Value>,
) -> Map<String, Value> {
    let (exact, folded): (Vec<_>, Vec<_>) = map
        .into_iter()
        .partition(|(key, _)| wire_keys.contains(&key.as_str()));
    let mut canonical: Map<String, Value> = exact.into_iter().collect();
    for (key, value) in folded {
        match wire_keys
            .iter()
            .find(|wire_key| wire_key.eq_ignore_ascii_case(&key))
        {
            Some(wire_key) if canonical.contains_key(*wire_key) => {
                debug!(
                    "Ignoring key '{}' in {}, '{}' is already set",
                    key, what, wire_key
                );
            }
            Some(wire_key) => {
                trace!("Reading key '{}' in {} as '{}'", key, what, wire_key);
                canonical.insert(wire_key.to_string(), value);
            }
            None => debug!("Ignoring unknown key '{}' in {}", key, what),
        }
    }
    canonical
}

#[cfg(test)]
mod test {
    use super::canonical_keys;
    use serde_json::{json, Map, Value};

    const KEYS: &[&str] = &["accessKeyID", "enabled"];

    fn canonical(value: Value) -> Value {
        let map: Map<String, Value> = serde_json::from_value(value).unwrap();
        Value::Object(canonical_keys("sample", KEYS, map))
    }

    #[test]
    fn case_variants_are_renamed() {
        assert_eq!(
            canonical(json!({"ACCESSKEYID": "x", "Enabled": true})),
            json!({"accessKeyID": "x", "enabled": true})
        );
    }

    #[test]
    fn exact_key_wins() {
        assert_eq!(
            canonical(json!({"accesskeyid": "folded", "accessKeyID": "exact"})),
            json!({"accessKeyID": "exact"})
        );
    }

    #[test]
    fn unknown_keys_are_dropped() {
        assert_eq!(
            canonical(json!({"accessKey": "x", "isEnabled": true})),
            json!({})
        );
    }
}
