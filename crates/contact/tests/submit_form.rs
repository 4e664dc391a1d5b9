use helpers::{Behavior, RecordingMailer};
use portfolio_contact::{DeliveryError, Error, INVALID_EMAIL_MESSAGE, REQUIRED_MESSAGE};

mod helpers;

#[tokio::test]
async fn test_submit_form_sends_composed_message() -> anyhow::Result<()> {
    let mailer = RecordingMailer::new(Behavior::Accept);
    let cmd = helpers::command(Some(mailer.clone()));

    let receipt = cmd.submit_form(helpers::ann()).await?;
    assert_eq!(receipt.message_id.as_deref(), Some("msg-1"));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "owner@portfolio.localhost");
    assert_eq!(sent[0].reply_to, "ann@x.com");
    assert_eq!(sent[0].subject, "Portfolio Contact: Hi");
    assert!(sent[0].html.contains("Ann Lee"));
    assert!(sent[0].html.contains("Hello<br>World"));
    assert!(sent[0].text.contains("Hello\nWorld"));

    Ok(())
}

#[tokio::test]
async fn test_missing_fields_never_reach_provider() -> anyhow::Result<()> {
    let mailer = RecordingMailer::new(Behavior::Accept);
    let cmd = helpers::command(Some(mailer.clone()));

    let blanks: [fn(&mut portfolio_contact::ContactSubmission); 5] = [
        |s| s.first_name.clear(),
        |s| s.last_name.clear(),
        |s| s.email.clear(),
        |s| s.subject.clear(),
        |s| s.message = "  \n ".to_owned(),
    ];

    for blank in blanks {
        let mut input = helpers::ann();
        blank(&mut input);

        let err = cmd.submit_form(input).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.public_message(), REQUIRED_MESSAGE);
    }

    assert!(mailer.sent().is_empty());
    assert_eq!(*mailer.verified.lock().unwrap(), 0);

    Ok(())
}

#[tokio::test]
async fn test_invalid_email_is_rejected() -> anyhow::Result<()> {
    let mailer = RecordingMailer::new(Behavior::Accept);
    let cmd = helpers::command(Some(mailer.clone()));

    for email in ["ann", "ann@", "ann@x", "ann.x.com", "ann@ x.com"] {
        let mut input = helpers::ann();
        input.email = email.to_owned();

        let err = cmd.submit_form(input).await.unwrap_err();
        assert_eq!(err.public_message(), INVALID_EMAIL_MESSAGE, "{email}");
    }

    assert!(mailer.sent().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_missing_credentials_is_configuration_error() -> anyhow::Result<()> {
    let cmd = helpers::command(None);
    assert!(!cmd.is_configured());

    let err = cmd.submit_form(helpers::ann()).await.unwrap_err();
    assert!(matches!(err, Error::Configuration));
    assert!(err.fallback());

    Ok(())
}

#[tokio::test]
async fn test_verification_failure_skips_send() -> anyhow::Result<()> {
    let mailer = RecordingMailer::new(Behavior::FailVerify);
    let cmd = helpers::command(Some(mailer.clone()));

    let err = cmd.submit_form(helpers::ann()).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Delivery(DeliveryError::Authentication(_))
    ));
    assert!(err.fallback());
    assert!(mailer.sent().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_provider_failures_ask_for_fallback() -> anyhow::Result<()> {
    for (behavior, expected) in [
        (Behavior::Reject, "Failed to send message"),
        (Behavior::NetworkDown, "Network error. Please try again."),
    ] {
        let cmd = helpers::command(Some(RecordingMailer::new(behavior)));

        let err = cmd.submit_form(helpers::ann()).await.unwrap_err();
        assert!(err.fallback());
        assert_eq!(err.public_message(), expected);
    }

    Ok(())
}
