use chrono::DateTime;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::net::Ipv4Addr;

const UUID_PATTERN_REGEX: &str =
    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$";
const HOSTNAME_PATTERN_REGEX: &str =
    r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$";

lazy_static! {
    static ref UUID: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(UUID_PATTERN_REGEX).unwrap()
    };
    static ref HOSTNAME: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(HOSTNAME_PATTERN_REGEX).unwrap()
    };
}

/// Checks whether a string conforms to a named format.
pub type FormatChecker = fn(&str) -> bool;

pub const DATE_TIME: &str = "date-time";
pub const UUID_FORMAT: &str = "uuid";
pub const IPV4: &str = "ipv4";
pub const HOSTNAME_FORMAT: &str = "hostname";

/// A registry of named string formats (`date-time`, `uuid`, ...) that schema validation may check
/// string fields against. The preset models do not constrain any of their strings, so they accept
/// any registry, or none at all.
#[derive(Clone)]
pub struct FormatRegistry {
    formats: BTreeMap<String, FormatChecker>,
}

impl FormatRegistry {
    /// Create a registry with no formats in it.
    pub fn empty() -> Self {
        Self {
            formats: BTreeMap::new(),
        }
    }

    /// Register `checker` under `name`, replacing any checker previously registered for it.
    pub fn add<S>(&mut self, name: S, checker: FormatChecker) -> &mut Self
    where
        S: Into<String>,
    {
        self.formats.insert(name.into(), checker);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Check `value` against the format registered as `name`. Returns `None` if no such format is
    /// registered.
    pub fn validates(&self, name: &str, value: &str) -> Option<bool> {
        self.formats.get(name).map(|checker| checker(value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .add(DATE_TIME, |s| DateTime::parse_from_rfc3339(s).is_ok())
            .add(UUID_FORMAT, |s| UUID.is_match(s))
            .add(IPV4, |s| s.parse::<Ipv4Addr>().is_ok())
            .add(HOSTNAME_FORMAT, |s| s.len() <= 253 && HOSTNAME.is_match(s));
        registry
    }
}

impl Debug for FormatRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
