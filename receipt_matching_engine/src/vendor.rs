//! Vendor classification
//!
//! Transactions and receipts are only ever compared when they belong to the same vendor. The vendor is derived from
//! free text (the transaction description, or the email subject) by looking for any of the configured vendor tokens
//! inside the text.
//!
//! The rules are deliberately naive:
//! * Matching is case-insensitive substring containment. `"AMAZON.co.uk"` and `"amazonprime"` both contain `amazon`.
//! * When more than one vendor token occurs in the text, the one configured first wins.
//! * Blank tokens are dropped when the list is built, so a trailing comma in the configuration never matches
//!   everything.
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_VENDORS: &str = "beatport,amazon,apple";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("A vendor key cannot be empty.")]
pub struct VendorKeyError;

//--------------------------------------     VendorKey       ---------------------------------------------------------
/// A normalised, non-empty, lower-case vendor identifier. This is the primary join key between transactions and
/// receipts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VendorKey(String);

impl VendorKey {
    pub fn new<S: AsRef<str>>(key: S) -> Result<Self, VendorKeyError> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return Err(VendorKeyError);
        }
        Ok(Self(key.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for VendorKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VendorKey {
    type Err = VendorKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for VendorKey {
    type Error = VendorKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VendorKey> for String {
    fn from(value: VendorKey) -> Self {
        value.0
    }
}

//--------------------------------------     VendorList       --------------------------------------------------------
/// The ordered list of vendors the system knows about. Order matters: see [`VendorList::classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorList {
    vendors: Vec<VendorKey>,
}

impl VendorList {
    /// Builds a vendor list from individual tokens, silently dropping blank ones.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vendors = tokens.into_iter().filter_map(|t| VendorKey::new(t).ok()).collect();
        Self { vendors }
    }

    /// Parses a comma-separated list, e.g. `"beatport, amazon,apple,"`.
    pub fn from_csv(s: &str) -> Self {
        Self::new(s.split(','))
    }

    /// Returns the first configured vendor that occurs, ignoring case, anywhere in `text`.
    pub fn classify(&self, text: &str) -> Option<&VendorKey> {
        let haystack = text.to_lowercase();
        self.vendors.iter().find(|v| haystack.contains(v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VendorKey> {
        self.vendors.iter()
    }
}

impl Display for VendorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.vendors.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(", ");
        f.write_str(&names)
    }
}
