// ABOUTME: Canonicalization of student identity fields to digit-only strings
// ABOUTME: Phone normalizes to absent when empty; national ID must never end up empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! Identity field normalization.
//!
//! Phones and national IDs arrive with whatever mask the client applied
//! ("(11) 98765-4321", "123.456.789-01"). Storage and uniqueness comparisons
//! operate on digit-only strings, so everything funnels through here before
//! any guard or write runs. These functions are pure; length validation is
//! the caller's job.

/// Strip every non-digit character from `raw`
fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalize a phone number to its digits, mapping empty to absent.
///
/// An empty or all-punctuation input yields `None`: an optional phone that
/// normalizes to nothing is "no phone", not an empty string.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits = strip_non_digits(raw);
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Normalize a national ID to its digits.
///
/// Unlike [`normalize_phone`] this never maps to absent: the field is
/// mandatory, so an empty result is a validation failure the caller must
/// raise (the 11-digit check catches it).
pub fn normalize_national_id(raw: &str) -> String {
    strip_non_digits(raw)
}

/// Whether a digit-only phone has an acceptable length (10 or 11 digits)
pub fn phone_length_ok(digits: &str) -> bool {
    matches!(digits.len(), 10 | 11)
}

/// Whether a digit-only national ID has the mandatory 11 digits
pub fn national_id_length_ok(digits: &str) -> bool {
    digits.len() == 11
}
