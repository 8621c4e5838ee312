//! Contact info parser — pulls name, email and phone out of extracted résumé text.
//!
//! Absent fields carry the `NOT_FOUND` sentinel rather than `None`, so tip
//! generation and callers compare by value.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const NOT_FOUND: &str = "Not found";

/// Only the first lines of a résumé are considered when looking for the name.
const NAME_SEARCH_LINES: usize = 10;
const NAME_MAX_CHARS: usize = 50;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    // country code, area code, exchange, subscriber. Each separator belongs to
    // the group before it, so a match always starts on a digit or `+`.
    // Unanchored: long digit runs such as IDs also match.
    static ref PHONE_PATTERN: Regex = Regex::new(
        r"(?:(\+?\d{1,4})[-.\s]?)?(?:\(?(\d{3})\)?[-.\s]?)?(\d{3})[-.\s]?(\d{4})"
    )
    .unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn has_name(&self) -> bool {
        self.name != NOT_FOUND
    }

    pub fn has_email(&self) -> bool {
        self.email != NOT_FOUND
    }

    pub fn has_phone(&self) -> bool {
        self.phone != NOT_FOUND
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            name: NOT_FOUND.to_string(),
            email: NOT_FOUND.to_string(),
            phone: NOT_FOUND.to_string(),
        }
    }
}

pub fn parse_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        name: find_name(text).unwrap_or_else(|| NOT_FOUND.to_string()),
        email: find_email(text).unwrap_or_else(|| NOT_FOUND.to_string()),
        phone: find_phone(text).unwrap_or_else(|| NOT_FOUND.to_string()),
    }
}

fn find_email(text: &str) -> Option<String> {
    EMAIL_PATTERN.find(text).map(|m| m.as_str().to_string())
}

/// First phone-like match, reported as its captured groups joined without separators.
fn find_phone(text: &str) -> Option<String> {
    let caps = PHONE_PATTERN.captures(text)?;
    let phone: String = caps
        .iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .collect();
    Some(phone)
}

/// The first of the leading lines that reads like a personal name:
/// two or more words, short, and free of `@` and digits.
fn find_name(text: &str) -> Option<String> {
    text.split('\n')
        .take(NAME_SEARCH_LINES)
        .map(str::trim)
        .find(|line| {
            line.split_whitespace().count() >= 2
                && line.chars().count() < NAME_MAX_CHARS
                && !line.contains('@')
                && !line.chars().any(|c| c.is_ascii_digit())
        })
        .map(String::from)
}
