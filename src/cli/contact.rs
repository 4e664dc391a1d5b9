use portfolio_client::{ContactForm, HttpEndpoint, StdoutOpener, SubmitOutcome};
use portfolio_contact::ContactSubmission;

/// Sends one message through a running server's contact endpoint.
pub async fn send(
    config: portfolio::Config,
    url: String,
    fields: ContactSubmission,
) -> anyhow::Result<()> {
    let mut form = ContactForm::new(
        HttpEndpoint::new(url),
        StdoutOpener,
        config.contact.recipient,
    );
    form.fields = fields;

    match form.submit().await {
        SubmitOutcome::Sent { message } => {
            tracing::info!("{message}");
            Ok(())
        }
        SubmitOutcome::Incomplete => anyhow::bail!("All fields are required"),
        SubmitOutcome::Failed { error } => anyhow::bail!(error),
        SubmitOutcome::FallbackOpened { error, .. } => {
            tracing::warn!("{error}");
            Ok(())
        }
    }
}
