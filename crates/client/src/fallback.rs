use portfolio_contact::{ContactSubmission, SUBJECT_PREFIX};

/// Opens a link in a context outside the form (browser tab, mail app, terminal).
pub trait Opener: Send + Sync {
    fn open(&self, link: &str) -> anyhow::Result<()>;
}

/// Prints the link for the user to follow.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOpener;

impl Opener for StdoutOpener {
    fn open(&self, link: &str) -> anyhow::Result<()> {
        println!("Open this link to send the message from your mail app:\n{link}");

        Ok(())
    }
}

/// Builds a `mailto:` link pre-filled from the form fields.
pub fn mailto_link(recipient: &str, fields: &ContactSubmission) -> String {
    let subject = format!("{SUBJECT_PREFIX}{}", fields.subject);
    let body = format!(
        "Name: {}\nEmail: {}\n\n{}",
        fields.full_name(),
        fields.email,
        fields.message
    );

    format!(
        "mailto:{recipient}?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}
