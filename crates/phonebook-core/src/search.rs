//! Free-text contact search.
//!
//! A query matches a contact by case-insensitive name substring, or by digit
//! substring against the phone number with all formatting stripped. Matching
//! filters an already-sorted list and never reorders it.

use crate::contact::Contact;

/// A non-empty, pre-folded search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
  lowered: String,
  /// May be empty, in which case only the name branch can match.
  digits:  String,
}

impl SearchQuery {
  /// Returns `None` when `raw` is empty after trimming, meaning "no filter".
  pub fn parse(raw: &str) -> Option<Self> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
      return None;
    }
    Some(Self {
      lowered: trimmed.to_lowercase(),
      digits:  digits_of(trimmed),
    })
  }

  pub fn matches(&self, contact: &Contact) -> bool {
    if contact.name.to_lowercase().contains(&self.lowered) {
      return true;
    }
    !self.digits.is_empty() && digits_of(&contact.phone).contains(&self.digits)
  }

  /// Keep matching contacts, preserving their relative order.
  pub fn filter(&self, contacts: Vec<Contact>) -> Vec<Contact> {
    contacts.into_iter().filter(|c| self.matches(c)).collect()
  }
}

/// The ASCII decimal digits of `s`, in order.
pub fn digits_of(s: &str) -> String {
  s.chars().filter(char::is_ascii_digit).collect()
}
