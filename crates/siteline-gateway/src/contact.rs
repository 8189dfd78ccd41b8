// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sanitization and validation for contact submissions.
//!
//! Sanitization strips embedded `<script>` elements and trims whitespace;
//! it runs before validation so limits apply to what would actually be
//! stored. Validation checks rules in a fixed order and reports only the
//! first violated rule's message.

use std::sync::LazyLock;

use regex::Regex;
use siteline_core::types::NewContactMessage;

use crate::handlers::ContactRequest;

/// Complete `<script ...>...</script>` elements, case-insensitive, spanning
/// newlines.
static SCRIPT_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").unwrap());

/// Minimal `local@domain.tld` shape: no whitespace, exactly one `@`, a dot in
/// the domain.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Loose phone shape: optional leading `+`, then 7-20 digits, spaces,
/// hyphens, or parentheses.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s()-]{7,20}$").unwrap());

/// A sanitized contact form, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    /// `Some` whenever the request carried a phone field, even if blank;
    /// blank phones are treated as absent by validation and persistence.
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Convert into the persistence type, dropping a blank phone.
    pub fn into_new_message(self) -> NewContactMessage {
        NewContactMessage {
            name: self.name,
            email: self.email,
            phone: self.phone.filter(|p| !p.is_empty()),
            message: self.message,
        }
    }
}

/// Strip embedded script elements, then trim surrounding whitespace.
///
/// Strip-then-trim makes the function idempotent: a second pass has nothing
/// left to strip and nothing left to trim.
pub fn sanitize_input(input: &str) -> String {
    SCRIPT_TAG_RE.replace_all(input, "").trim().to_string()
}

/// Sanitize every text field of an inbound request. Missing fields become
/// empty strings so validation reports them as too short rather than the
/// request as malformed.
pub fn sanitize_request(req: ContactRequest) -> ContactForm {
    ContactForm {
        name: sanitize_input(&req.name.unwrap_or_default()),
        email: sanitize_input(&req.email.unwrap_or_default()),
        phone: req.phone.as_deref().map(sanitize_input),
        message: sanitize_input(&req.message.unwrap_or_default()),
    }
}

/// Validate a sanitized form. Returns the first violated rule's user-visible
/// message, or `None` when every rule passes.
pub fn validate(form: &ContactForm) -> Option<&'static str> {
    let name_len = form.name.chars().count();
    if name_len < 2 {
        return Some("Name must be at least 2 characters long");
    }
    if name_len > 100 {
        return Some("Name is too long (max 100 characters)");
    }

    if form.email.is_empty() || !EMAIL_RE.is_match(&form.email) {
        return Some("Please provide a valid email address");
    }
    if form.email.chars().count() > 255 {
        return Some("Email is too long (max 255 characters)");
    }

    let message_len = form.message.chars().count();
    if message_len < 10 {
        return Some("Message must be at least 10 characters long");
    }
    if message_len > 2000 {
        return Some("Message is too long (max 2000 characters)");
    }

    if let Some(phone) = form.phone.as_deref()
        && !phone.is_empty()
    {
        if !PHONE_RE.is_match(phone) {
            return Some("Please provide a valid phone number");
        }
        if phone.chars().count() > 20 {
            return Some("Phone number is too long (max 20 characters)");
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: None,
            message: "Hello there, testing".to_string(),
        }
    }

    #[test]
    fn sanitize_trims_whitespace() {
        assert_eq!(sanitize_input("  hello  "), "hello");
    }

    #[test]
    fn sanitize_strips_script_elements() {
        assert_eq!(
            sanitize_input("before<script>alert(1)</script>after"),
            "beforeafter"
        );
        assert_eq!(
            sanitize_input("<SCRIPT type=\"text/javascript\">evil()</SCRIPT>ok"),
            "ok"
        );
    }

    #[test]
    fn sanitize_strips_multiline_script() {
        let input = "keep\n<script>\nline1();\nline2();\n</script>\nthis";
        assert_eq!(sanitize_input(input), "keep\n\nthis");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for input in [
            "  plain text  ",
            "a<script>x</script>b",
            "  <script>x</script>  trailing  ",
            "no markup at all",
        ] {
            let once = sanitize_input(input);
            assert_eq!(sanitize_input(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn sanitize_runs_on_every_field() {
        let req = ContactRequest {
            name: Some("<script>a</script>Jo".to_string()),
            email: Some(" jo@x.com ".to_string()),
            phone: Some(" +1 555-0100 ".to_string()),
            message: Some("Hi<script>b</script> there, testing".to_string()),
        };
        let form = sanitize_request(req);
        assert_eq!(form.name, "Jo");
        assert_eq!(form.email, "jo@x.com");
        assert_eq!(form.phone.as_deref(), Some("+1 555-0100"));
        assert_eq!(form.message, "Hi there, testing");
    }

    #[test]
    fn boundary_lengths_pass() {
        // name length 2 and message length 20 are both on the boundary.
        let form = valid_form();
        assert_eq!(form.name.chars().count(), 2);
        assert_eq!(form.message.chars().count(), 20);
        assert_eq!(validate(&form), None);
    }

    #[test]
    fn name_rule_fires_before_message_rule() {
        let form = ContactForm {
            name: "J".to_string(),
            email: "jo@x.com".to_string(),
            phone: None,
            message: "short".to_string(),
        };
        assert_eq!(
            validate(&form),
            Some("Name must be at least 2 characters long")
        );
    }

    #[test]
    fn overlong_name_is_rejected() {
        let mut form = valid_form();
        form.name = "x".repeat(101);
        assert_eq!(validate(&form), Some("Name is too long (max 100 characters)"));
    }

    #[test]
    fn email_shape_is_enforced() {
        let mut form = valid_form();
        for bad in ["", "plainaddress", "no@dot", "two@@x.com", "has space@x.com"] {
            form.email = bad.to_string();
            assert_eq!(
                validate(&form),
                Some("Please provide a valid email address"),
                "email: {bad:?}"
            );
        }
    }

    #[test]
    fn overlong_email_is_rejected() {
        let mut form = valid_form();
        form.email = format!("{}@x.com", "a".repeat(250));
        assert_eq!(validate(&form), Some("Email is too long (max 255 characters)"));
    }

    #[test]
    fn short_and_long_messages_are_rejected() {
        let mut form = valid_form();
        form.message = "too short".to_string();
        assert_eq!(
            validate(&form),
            Some("Message must be at least 10 characters long")
        );
        form.message = "x".repeat(2001);
        assert_eq!(
            validate(&form),
            Some("Message is too long (max 2000 characters)")
        );
    }

    #[test]
    fn phone_is_optional_and_blank_is_absent() {
        let mut form = valid_form();
        form.phone = Some(String::new());
        assert_eq!(validate(&form), None);
        assert_eq!(form.into_new_message().phone, None);
    }

    #[test]
    fn phone_shapes() {
        let mut form = valid_form();
        for good in ["+1 555-0100", "(020) 7946 0958", "5550100"] {
            form.phone = Some(good.to_string());
            assert_eq!(validate(&form), None, "phone: {good:?}");
        }
        for bad in ["123", "555-CALL-NOW", "12+34567"] {
            form.phone = Some(bad.to_string());
            assert_eq!(
                validate(&form),
                Some("Please provide a valid phone number"),
                "phone: {bad:?}"
            );
        }
    }

    #[test]
    fn twenty_digits_after_plus_exceed_length_cap() {
        // Passes the shape rule (7-20 after the `+`) but is 21 chars overall.
        let mut form = valid_form();
        form.phone = Some(format!("+{}", "1".repeat(20)));
        assert_eq!(
            validate(&form),
            Some("Phone number is too long (max 20 characters)")
        );
    }

    #[test]
    fn multibyte_names_count_characters_not_bytes() {
        let mut form = valid_form();
        form.name = "Ωλ".to_string();
        assert_eq!(validate(&form), None);
    }
}
