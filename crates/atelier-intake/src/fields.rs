// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field names and grouping for the two-track inquiry form.
//!
//! Field names here are the wire names (camelCase), shared by the submission
//! API, the remote mirror payload, and client form state.

use std::collections::BTreeMap;

use atelier_core::types::ServiceType;

/// Raw field values keyed by wire name. BTreeMap keeps serialized output and
/// error listings deterministically ordered.
pub type FieldMap = BTreeMap<String, String>;

/// Base fields shared by both tracks, present and valid on every submission.
pub const BASE_REQUIRED: &[&str] = &["name", "contact", "email"];

/// The to-business conditional group.
pub const TOB_FIELDS: &[&str] = &[
    "company",
    "industry",
    "companySize",
    "role",
    "challenges",
    "objectives",
    "budget",
    "timeline",
];

/// Required subset of the to-business group.
pub const TOB_REQUIRED: &[&str] = &["company", "challenges"];

/// The to-consumer conditional group.
pub const TOC_FIELDS: &[&str] = &[
    "city",
    "timezone",
    "serviceInterest",
    "vision",
    "referral",
    "travelBudget",
    "travelDates",
];

/// Required subset of the to-consumer group.
pub const TOC_REQUIRED: &[&str] = &["serviceInterest", "vision", "referral"];

/// Free-text note accepted on either track.
pub const ADDITIONAL_FIELD: &str = "additional";

/// All fields belonging to the given track's conditional group.
pub fn group_fields(service_type: ServiceType) -> &'static [&'static str] {
    match service_type {
        ServiceType::Tob => TOB_FIELDS,
        ServiceType::Toc => TOC_FIELDS,
    }
}

/// Required fields of the given track's conditional group.
pub fn group_required(service_type: ServiceType) -> &'static [&'static str] {
    match service_type {
        ServiceType::Tob => TOB_REQUIRED,
        ServiceType::Toc => TOC_REQUIRED,
    }
}

/// All required fields for a full submission on the given track.
pub fn required_fields(service_type: ServiceType) -> Vec<&'static str> {
    let mut fields = BASE_REQUIRED.to_vec();
    fields.extend_from_slice(group_required(service_type));
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_disjoint() {
        for field in TOB_FIELDS {
            assert!(!TOC_FIELDS.contains(field));
        }
    }

    #[test]
    fn required_fields_are_members_of_their_group() {
        for field in TOB_REQUIRED {
            assert!(TOB_FIELDS.contains(field));
        }
        for field in TOC_REQUIRED {
            assert!(TOC_FIELDS.contains(field));
        }
    }

    #[test]
    fn required_fields_include_base_and_group() {
        let tob = required_fields(ServiceType::Tob);
        assert!(tob.contains(&"email"));
        assert!(tob.contains(&"company"));
        assert!(!tob.contains(&"referral"));
    }
}
