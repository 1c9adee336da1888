// SPDX-FileCopyrightText: 2026 Atelier Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Confirmation email rendering.

use atelier_core::types::ServiceType;

/// Human-readable label for the selected service track.
pub fn service_label(service_type: ServiceType) -> &'static str {
    match service_type {
        ServiceType::Tob => "Corporate Consulting (ToB)",
        ServiceType::Toc => "Private Excellence (ToC)",
    }
}

pub fn confirmation_subject() -> &'static str {
    "We received your inquiry"
}

/// Render the confirmation body. `name` is inserted verbatim after HTML
/// escaping; the layout is inline-styled for mail client compatibility.
pub fn confirmation_html(name: &str, service_type: ServiceType) -> String {
    let name = escape_html(name);
    let label = service_label(service_type);
    format!(
        r#"<div style="font-family: Georgia, serif; max-width: 600px; margin: 0 auto; color: #1a1a1a;">
  <h1 style="font-weight: normal; letter-spacing: 1px;">Thank you, {name}</h1>
  <p>Your inquiry has been received and is being reviewed personally.</p>
  <p>Selected service: <strong>{label}</strong></p>
  <p>You can expect a personal response within 48 hours.</p>
  <hr style="border: none; border-top: 1px solid #e0e0e0; margin: 24px 0;" />
  <p style="color: #888; font-size: 13px;">This is an automated confirmation. Please do not reply to this email.</p>
</div>"#
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_includes_name_and_service_label() {
        let html = confirmation_html("Jane", ServiceType::Tob);
        assert!(html.contains("Thank you, Jane"));
        assert!(html.contains("Corporate Consulting (ToB)"));
        assert!(html.contains("48 hours"));
    }

    #[test]
    fn name_is_escaped() {
        let html = confirmation_html("<script>alert(1)</script>", ServiceType::Toc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
