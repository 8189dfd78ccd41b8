// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound transactional email for the Siteline website backend.
//!
//! Two message types exist: an internal notification for each accepted
//! contact submission, and an auto-reply acknowledgment to the submitter.
//! Both go through the configured SMTP relay. The `Mailer` trait is the
//! seam the gateway depends on, so tests can substitute a recording fake.

pub mod template;

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use siteline_config::model::MailConfig;
use siteline_core::types::ContactMessage;
use siteline_core::SitelineError;

/// Email-sending collaborator for the contact pipeline.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the internal notification for an accepted submission.
    async fn send_contact_notification(&self, msg: &ContactMessage) -> Result<(), SitelineError>;

    /// Send the acknowledgment auto-reply to the submitter.
    async fn send_contact_reply(&self, msg: &ContactMessage) -> Result<(), SitelineError>;
}

/// SMTP-backed `Mailer` using lettre's async transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: MailConfig,
    site_name: String,
    timeout: Duration,
}

impl SmtpMailer {
    /// Build the STARTTLS transport from configuration. Credentials are only
    /// attached when both username and password are set.
    pub fn new(config: MailConfig, site_name: impl Into<String>) -> Result<Self, SitelineError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| SitelineError::Mail {
                message: format!("invalid SMTP relay `{}`", config.smtp_host),
                source: Some(Box::new(e)),
            })?
            .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let timeout = Duration::from_secs(config.send_timeout_secs);
        Ok(Self {
            transport: builder.build(),
            config,
            site_name: site_name.into(),
            timeout,
        })
    }

    fn from_mailbox(&self) -> Result<Mailbox, SitelineError> {
        mailbox(&self.config.from_name, &self.config.from_address)
    }

    /// Dispatch with the configured per-send timeout.
    async fn send(&self, email: Message) -> Result<(), SitelineError> {
        match tokio::time::timeout(self.timeout, self.transport.send(email)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(SitelineError::Mail {
                message: "smtp dispatch failed".to_string(),
                source: Some(Box::new(e)),
            }),
            Err(_) => Err(SitelineError::Timeout {
                duration: self.timeout,
            }),
        }
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_contact_notification(&self, msg: &ContactMessage) -> Result<(), SitelineError> {
        let email = Message::builder()
            .from(self.from_mailbox()?)
            .to(mailbox(
                &format!("{} Support", self.site_name),
                &self.config.notify_address,
            )?)
            // Replying to the notification reaches the submitter directly.
            .reply_to(mailbox(&msg.name, &msg.email)?)
            .subject(template::notification_subject(&msg.name))
            .header(ContentType::TEXT_HTML)
            .body(template::notification_html(msg, &self.site_name))
            .map_err(|e| SitelineError::Mail {
                message: "failed to build notification email".to_string(),
                source: Some(Box::new(e)),
            })?;

        self.send(email).await?;
        tracing::debug!(id = msg.id, "contact notification sent");
        Ok(())
    }

    async fn send_contact_reply(&self, msg: &ContactMessage) -> Result<(), SitelineError> {
        let email = Message::builder()
            .from(self.from_mailbox()?)
            .to(mailbox(&msg.name, &msg.email)?)
            .subject(template::reply_subject(&self.site_name, &msg.name))
            .header(ContentType::TEXT_HTML)
            .body(template::reply_html(&msg.name, &self.site_name))
            .map_err(|e| SitelineError::Mail {
                message: "failed to build auto-reply email".to_string(),
                source: Some(Box::new(e)),
            })?;

        self.send(email).await?;
        tracing::debug!(id = msg.id, "contact auto-reply sent");
        Ok(())
    }
}

/// Build a mailbox from a display name and address without going through the
/// `"Name <addr>"` parse path, so user-supplied names cannot break parsing.
fn mailbox(name: &str, address: &str) -> Result<Mailbox, SitelineError> {
    let address = address
        .parse::<Address>()
        .map_err(|e| SitelineError::Mail {
            message: format!("invalid mail address `{address}`"),
            source: Some(Box::new(e)),
        })?;
    Ok(Mailbox::new(Some(name.to_string()), address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smtp_mailer_builds_from_default_config() {
        let mailer = SmtpMailer::new(MailConfig::default(), "Siteline").unwrap();
        assert_eq!(mailer.timeout, Duration::from_secs(10));
        assert_eq!(mailer.site_name, "Siteline");
    }

    #[test]
    fn mailbox_accepts_angle_brackets_in_display_name() {
        // A display name the "Name <addr>" parse path would choke on.
        let mbox = mailbox("Jo <Jo>", "jo@x.com").unwrap();
        assert_eq!(mbox.email.to_string(), "jo@x.com");
    }

    #[test]
    fn mailbox_rejects_invalid_address() {
        let err = mailbox("Jo", "not-an-address").unwrap_err();
        assert!(matches!(err, SitelineError::Mail { .. }));
    }
}
