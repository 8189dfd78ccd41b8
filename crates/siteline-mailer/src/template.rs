// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML bodies and subjects for the two transactional messages.
//!
//! Bodies are deliberately plain; they are not part of the functional
//! contract. User-supplied fields are HTML-escaped before interpolation.

use siteline_core::types::ContactMessage;

/// Subject line for the internal notification.
pub fn notification_subject(name: &str) -> String {
    format!("New contact message from {name}")
}

/// Subject line for the submitter auto-reply.
pub fn reply_subject(site_name: &str, name: &str) -> String {
    format!("Thank you for contacting {site_name}, {name}!")
}

/// Body of the internal notification: who wrote, how to reach them, and what
/// they said.
pub fn notification_html(msg: &ContactMessage, site_name: &str) -> String {
    let name = escape_html(&msg.name);
    let email = escape_html(&msg.email);
    let phone = msg
        .phone
        .as_deref()
        .map(escape_html)
        .unwrap_or_else(|| "-".to_string());
    let body = escape_html(&msg.message);
    format!(
        "<html><body>\
         <h2>{site_name}: new contact message</h2>\
         <p><strong>Name:</strong> {name}<br>\
         <strong>Email:</strong> {email}<br>\
         <strong>Phone:</strong> {phone}</p>\
         <blockquote>{body}</blockquote>\
         <p>Sent from the {site_name} contact form.</p>\
         </body></html>"
    )
}

/// Body of the auto-reply acknowledgment.
pub fn reply_html(name: &str, site_name: &str) -> String {
    let name = escape_html(name);
    format!(
        "<html><body>\
         <h2>Hi {name},</h2>\
         <p>Thank you for reaching out to {site_name}. We have received your \
         message and will get back to you within 24-48 hours.</p>\
         <p>Best regards,<br>The {site_name} Team</p>\
         <p><small>This is an automated confirmation; please do not reply to \
         this email.</small></p>\
         </body></html>"
    )
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
