// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conditional two-track form validation.
//!
//! Validation never short-circuits: every field is checked and every failure
//! reported, keyed by wire field name, so a client can annotate the whole
//! form in one round trip.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use atelier_core::types::ServiceType;
use regex::Regex;

use crate::fields::{self, FieldMap};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("{e}")));

// Applied after stripping whitespace from the candidate value.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\+]?[(]?[0-9]{1,4}[)]?[-\s\.]?[(]?[0-9]{1,4}[)]?[-\s\.]?[0-9]{1,9}$")
        .unwrap_or_else(|e| panic!("{e}"))
});

pub const ERR_REQUIRED: &str = "This field is required";
pub const ERR_EMAIL_REQUIRED: &str = "Email is required";
pub const ERR_EMAIL_INVALID: &str = "Please enter a valid email address";
pub const ERR_PHONE_REQUIRED: &str = "Phone number is required";
pub const ERR_PHONE_INVALID: &str = "Please enter a valid phone number";
pub const ERR_SERVICE_INTEREST: &str = "Please select a service interest";
pub const ERR_SERVICE_TYPE: &str = "Please select a service type";

/// Syntactic email check shared with the confirmation endpoint.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Syntactic phone check; whitespace in the value is ignored.
pub fn is_valid_phone(value: &str) -> bool {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_RE.is_match(&stripped)
}

fn trimmed<'a>(values: &'a FieldMap, key: &str) -> Option<&'a str> {
    values
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// Validate a full submission. Returns a map of field name to error message;
/// an empty map means the submission is valid.
pub fn validate_form(
    service_type: Option<ServiceType>,
    values: &FieldMap,
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    match trimmed(values, "name") {
        Some(_) => {}
        None => {
            errors.insert("name".to_string(), ERR_REQUIRED.to_string());
        }
    }

    match trimmed(values, "contact") {
        Some(contact) => {
            if !is_valid_phone(contact) {
                errors.insert("contact".to_string(), ERR_PHONE_INVALID.to_string());
            }
        }
        None => {
            errors.insert("contact".to_string(), ERR_PHONE_REQUIRED.to_string());
        }
    }

    match trimmed(values, "email") {
        Some(email) => {
            if !is_valid_email(email) {
                errors.insert("email".to_string(), ERR_EMAIL_INVALID.to_string());
            }
        }
        None => {
            errors.insert("email".to_string(), ERR_EMAIL_REQUIRED.to_string());
        }
    }

    match service_type {
        Some(service_type) => {
            for field in fields::group_required(service_type) {
                if trimmed(values, field).is_none() {
                    let message = if *field == "serviceInterest" {
                        ERR_SERVICE_INTEREST
                    } else {
                        ERR_REQUIRED
                    };
                    errors.insert(field.to_string(), message.to_string());
                }
            }
        }
        None => {
            errors.insert("serviceType".to_string(), ERR_SERVICE_TYPE.to_string());
        }
    }

    errors
}
