// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-progress form state with exclusive track selection.

use std::collections::BTreeMap;

use atelier_core::types::ServiceType;

use crate::fields::{self, FieldMap};
use crate::validate;

/// Mutable state of a form being filled in.
///
/// Selecting a track clears the values of the other track's conditional
/// group, so a submission can never carry a mixed group.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    service_type: Option<ServiceType>,
    values: FieldMap,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service_type(&self) -> Option<ServiceType> {
        self.service_type
    }

    pub fn values(&self) -> &FieldMap {
        &self.values
    }

    /// Select a track. Re-selecting the current track is a no-op; switching
    /// tracks clears the other group's values while base fields survive.
    pub fn select_service(&mut self, service_type: ServiceType) {
        if self.service_type == Some(service_type) {
            return;
        }
        let other = match service_type {
            ServiceType::Tob => ServiceType::Toc,
            ServiceType::Toc => ServiceType::Tob,
        };
        for field in fields::group_fields(other) {
            self.values.remove(*field);
        }
        self.service_type = Some(service_type);
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), value.to_string());
    }

    /// Required field names for the currently selected track, empty when no
    /// track is selected yet.
    pub fn required_fields(&self) -> Vec<&'static str> {
        match self.service_type {
            Some(st) => fields::required_fields(st),
            None => Vec::new(),
        }
    }

    /// Validate the current state. Empty map means submittable.
    pub fn validate(&self) -> BTreeMap<String, String> {
        validate::validate_form(self.service_type, &self.values)
    }
}
