//! Phone number validation.
//!
//! Only one regional format is accepted: `+7 (XXX) XXX-XX-XX`, where every
//! `X` is a single ASCII digit.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

static CANONICAL: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^\+7 \([0-9]{3}\) [0-9]{3}-[0-9]{2}-[0-9]{2}$")
    .expect("canonical phone pattern compiles")
});

/// A phone number in canonical `+7 (999) 123-45-67` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
  /// Validate `raw` against the canonical format. The whole string must match;
  /// callers are responsible for trimming user input first.
  pub fn parse(raw: impl Into<String>) -> Result<Self> {
    let raw = raw.into();
    if !is_canonical(&raw) {
      return Err(Error::InvalidPhone(raw));
    }
    Ok(Self(raw))
  }

  pub fn as_str(&self) -> &str { &self.0 }

  pub fn into_inner(self) -> String { self.0 }
}

/// `true` if `phone` is exactly in canonical form.
pub fn is_canonical(phone: &str) -> bool { CANONICAL.is_match(phone) }

impl fmt::Display for PhoneNumber {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl Serialize for PhoneNumber {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.0.serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for PhoneNumber {
  fn deserialize<D: Deserializer<'de>>(
    deserializer: D,
  ) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    PhoneNumber::parse(s).map_err(serde::de::Error::custom)
  }
}
