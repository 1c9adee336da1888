// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side identifier generation.
//!
//! Inquiry and chat-session ids follow the `<prefix>_<unix-millis>_<suffix>`
//! shape the stored records have always used, so ids remain sortable by
//! creation time and collision-safe without coordination.

use rand::Rng;
use rand::distributions::Alphanumeric;

const SUFFIX_LEN: usize = 9;

/// Generate a unique inquiry id, e.g. `inq_1756200000000_k3f9a2b1c`.
pub fn inquiry_id() -> String {
    prefixed_id("inq")
}

/// Generate a chat session id, e.g. `session_1756200000000_x7q2m9d4e`.
pub fn session_id() -> String {
    prefixed_id("session")
}

fn prefixed_id(prefix: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();
    format!("{prefix}_{millis}_{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inquiry_ids_carry_prefix_and_suffix() {
        let id = inquiry_id();
        let parts: Vec<&str> = id.splitn(3, '_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "inq");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
    }

    #[test]
    fn session_ids_carry_prefix() {
        assert!(session_id().starts_with("session_"));
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(inquiry_id()));
        }
    }
}
