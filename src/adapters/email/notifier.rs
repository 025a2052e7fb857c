//! SMTP outcome notifier
//!
//! Sends success, no-data, and error notifications for a report date.
//! Success mail attaches the artifact when it fits the configured
//! attachment cap; oversized artifacts are referenced by path instead.

use crate::adapters::traits::Notifier;
use crate::adapters::validation::validate_file_size;
use crate::config::schema::EmailConfig;
use crate::domain::date::ReportDate;
use crate::domain::errors::HeraldError;
use crate::domain::result::Result;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use std::path::Path;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// SMTP notifier
///
/// Administratively disabled when `email.enabled = false`: every notify
/// method then returns `Ok(false)` without touching the network.
pub struct EmailNotifier {
    config: EmailConfig,
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
}

impl EmailNotifier {
    /// Create a notifier from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP transport cannot be built.
    pub fn new(config: EmailConfig) -> Result<Self> {
        let transport = if config.enabled {
            let builder = if config.use_ssl {
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host).map_err(|e| {
                    HeraldError::Notification(format!("Invalid SMTP relay configuration: {e}"))
                })?
            } else {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            };

            let mut builder = builder.port(config.smtp_port);
            if let Some(password) = &config.password {
                builder = builder.credentials(Credentials::new(
                    config.sender.clone(),
                    password.expose_secret().as_ref().to_string(),
                ));
            }

            Some(builder.build())
        } else {
            None
        };

        Ok(Self { config, transport })
    }

    /// Whether the channel is administratively enabled
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Validate an artifact against the attachment size cap
    ///
    /// # Errors
    ///
    /// Returns a validation error if the file is missing or oversized.
    pub fn validate_attachment_size(&self, path: &Path) -> Result<bool> {
        validate_file_size(path, Some(self.config.max_attachment_mb))
    }

    fn parse_mailbox(address: &str) -> Result<Mailbox> {
        address
            .parse()
            .map_err(|e| HeraldError::Notification(format!("Invalid address '{address}': {e}")))
    }

    async fn send(
        &self,
        recipients: &[String],
        subject: String,
        body: String,
        attachment: Option<&Path>,
    ) -> Result<bool> {
        let Some(transport) = &self.transport else {
            return Ok(false);
        };

        let mut builder = Message::builder()
            .from(Self::parse_mailbox(&self.config.sender)?)
            .subject(subject);
        for recipient in recipients {
            builder = builder.to(Self::parse_mailbox(recipient)?);
        }

        let message = match attachment {
            Some(path) => {
                let content = tokio::fs::read(path).await.map_err(|e| {
                    HeraldError::Notification(format!(
                        "Cannot read attachment {}: {e}",
                        path.display()
                    ))
                })?;
                let filename = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "report.xlsx".to_string());
                let content_type = ContentType::parse(XLSX_MIME)
                    .map_err(|e| HeraldError::Notification(e.to_string()))?;

                builder
                    .multipart(
                        MultiPart::mixed()
                            .singlepart(
                                SinglePart::builder()
                                    .header(ContentType::TEXT_PLAIN)
                                    .body(body),
                            )
                            .singlepart(Attachment::new(filename).body(content, content_type)),
                    )
                    .map_err(|e| HeraldError::Notification(e.to_string()))?
            }
            None => builder
                .body(body)
                .map_err(|e| HeraldError::Notification(e.to_string()))?,
        };

        transport
            .send(message)
            .await
            .map_err(|e| HeraldError::Notification(format!("SMTP delivery failed: {e}")))?;

        Ok(true)
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify_success(
        &self,
        date: ReportDate,
        artifact: Option<&Path>,
        records: usize,
        total_amount: Option<f64>,
    ) -> Result<bool> {
        if !self.config.enabled {
            return Ok(false);
        }

        let subject = format!("Daily report {date} generated");
        let mut body = format!(
            "The report for {date} was generated successfully.\n\nRecords processed: {records}\n"
        );
        if let Some(total) = total_amount {
            body.push_str(&format!("Total amount: {total:.2}\n"));
        }

        // Attach the artifact only when it passes the size cap; otherwise
        // reference it by path so the mail still goes out.
        let attachment = match artifact {
            Some(path) => match self.validate_attachment_size(path) {
                Ok(_) => Some(path),
                Err(e) => {
                    tracing::warn!(
                        artifact = %path.display(),
                        error = %e,
                        "Artifact not attached to success notification"
                    );
                    body.push_str(&format!("\nArtifact (not attached): {}\n", path.display()));
                    None
                }
            },
            None => None,
        };

        self.send(&self.config.recipients, subject, body, attachment)
            .await
    }

    async fn notify_no_data(&self, date: ReportDate) -> Result<bool> {
        if !self.config.enabled {
            return Ok(false);
        }

        let subject = format!("Daily report {date}: no data available");
        let body = format!(
            "No source data exists for {date}. No report was generated and no file was delivered.\n"
        );

        self.send(&self.config.recipients, subject, body, None).await
    }

    async fn notify_error(
        &self,
        error: &str,
        date: ReportDate,
        include_detail: bool,
    ) -> Result<bool> {
        if !self.config.enabled {
            return Ok(false);
        }

        let subject = format!("Daily report {date} failed");
        let body = if include_detail {
            format!("The report run for {date} failed.\n\nError: {error}\n")
        } else {
            format!("The report run for {date} failed. See the pipeline logs for details.\n")
        };

        let recipients = self.config.error_recipients_or_default().to_vec();
        self.send(&recipients, subject, body, None).await
    }
}
