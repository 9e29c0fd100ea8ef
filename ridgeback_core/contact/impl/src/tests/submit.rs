use anyhow::anyhow;
use futures::FutureExt;
use pretty_assertions::assert_eq;
use ridgeback_core_contact_contracts::{
    ContactFormFeedback, ContactFormService, ContactFormStatus, ContactFormSubmitError,
};
use ridgeback_demo::{JANE, JANE_DRAFT, JOHN, JOHN_DRAFT};
use ridgeback_extern_contracts::contact::{ContactApiError, MockContactApiService};
use ridgeback_models::contact::{ContactDraft, ContactField, ContactValidationError};
use ridgeback_utils::assert_matches;
use tokio::sync::oneshot;

use crate::tests::make_sut;

#[tokio::test]
async fn ok() {
    // Arrange
    let contact_api = MockContactApiService::new().with_submit(JOHN.clone(), Ok(()));

    let sut = make_sut(contact_api, JOHN_DRAFT.clone());

    // Act
    let result = sut.submit().await;

    // Assert
    result.unwrap();
    let state = sut.state();
    assert_eq!(state.draft, ContactDraft::default());
    assert_eq!(state.status, ContactFormStatus::Submitted);
    assert_eq!(
        state.feedback(),
        Some(ContactFormFeedback::Success(
            "Thanks! Your message has been sent."
        ))
    );
}

#[tokio::test]
async fn ok_with_phone() {
    // Arrange
    let contact_api = MockContactApiService::new().with_submit(JANE.clone(), Ok(()));

    let sut = make_sut(contact_api, JANE_DRAFT.clone());

    // Act
    let result = sut.submit().await;

    // Assert
    result.unwrap();
    let state = sut.state();
    assert_eq!(state.draft, ContactDraft::default());
    assert!(!state.draft.phone_touched);
}

#[tokio::test]
async fn missing_required_fields() {
    // Arrange
    let draft = ContactDraft {
        name: String::new(),
        ..JOHN_DRAFT.clone()
    };

    let sut = make_sut(MockContactApiService::new(), draft.clone());

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(
        result,
        Err(ContactFormSubmitError::Validation(
            ContactValidationError::MissingRequiredFields
        ))
    );
    let state = sut.state();
    assert_eq!(state.draft, draft);
    assert_eq!(
        state.status,
        ContactFormStatus::ValidationFailed(ContactValidationError::MissingRequiredFields)
    );
}

#[tokio::test]
async fn whitespace_only_fields() {
    for draft in [
        ContactDraft {
            email: "  ".into(),
            ..JOHN_DRAFT.clone()
        },
        ContactDraft {
            message: "\n".into(),
            ..JOHN_DRAFT.clone()
        },
    ] {
        // Arrange
        let sut = make_sut(MockContactApiService::new(), draft);

        // Act
        let result = sut.submit().await;

        // Assert
        assert_matches!(
            result,
            Err(ContactFormSubmitError::Validation(
                ContactValidationError::MissingRequiredFields
            ))
        );
    }
}

#[tokio::test]
async fn invalid_phone() {
    // Arrange
    let sut = make_sut(MockContactApiService::new(), JOHN_DRAFT.clone());
    sut.update_field(ContactField::Phone, "555-123".into());
    let draft = sut.state().draft;

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(
        result,
        Err(ContactFormSubmitError::Validation(
            ContactValidationError::InvalidPhone
        ))
    );
    let state = sut.state();
    assert_eq!(state.draft, draft);
    assert_eq!(
        state.feedback(),
        Some(ContactFormFeedback::Error(
            "Please enter a valid 10-digit phone number."
        ))
    );
}

#[tokio::test]
async fn untouched_phone_is_optional() {
    // Arrange
    let draft = ContactDraft {
        phone: "12".into(),
        ..JOHN_DRAFT.clone()
    };
    let mut expected = JOHN.clone();
    expected.phone = "12".into();

    let contact_api = MockContactApiService::new().with_submit(expected, Ok(()));

    let sut = make_sut(contact_api, draft);

    // Act
    let result = sut.submit().await;

    // Assert
    result.unwrap();
}

#[tokio::test]
async fn transmission_failed() {
    for error in [
        ContactApiError::Status(500),
        ContactApiError::Other(anyhow!("connection refused")),
    ] {
        // Arrange
        let contact_api = MockContactApiService::new().with_submit(JOHN.clone(), Err(error));

        let sut = make_sut(contact_api, JOHN_DRAFT.clone());

        // Act
        let result = sut.submit().await;

        // Assert
        assert_matches!(result, Err(ContactFormSubmitError::Transmission(_)));
        let state = sut.state();
        assert_eq!(state.draft, *JOHN_DRAFT);
        assert_matches!(&state.status, ContactFormStatus::SubmitFailed(_));
        assert_eq!(
            state.feedback(),
            Some(ContactFormFeedback::Error(
                "Failed to submit. Please try again."
            ))
        );
    }
}

#[tokio::test]
async fn retry_after_failure() {
    // Arrange
    let mut contact_api = MockContactApiService::new();
    let mut seq = mockall::Sequence::new();
    contact_api
        .expect_submit()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_| {
            Box::pin(std::future::ready(Err::<(), _>(ContactApiError::Status(
                500,
            ))))
        });
    contact_api
        .expect_submit()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_| {
            Box::pin(std::future::ready(Ok::<_, ContactApiError>(())))
        });

    let sut = make_sut(contact_api, JOHN_DRAFT.clone());

    // Act
    let first = sut.submit().await;
    let second = sut.submit().await;

    // Assert
    assert_matches!(first, Err(ContactFormSubmitError::Transmission(_)));
    second.unwrap();
    assert_eq!(sut.state().status, ContactFormStatus::Submitted);
}

#[tokio::test]
async fn busy_while_in_flight() {
    // Arrange
    let (release, released) = oneshot::channel::<()>();
    let mut contact_api = MockContactApiService::new();
    contact_api.expect_submit().once().return_once(move |_| {
        Box::pin(async move {
            let _ = released.await;
            Ok::<_, ContactApiError>(())
        })
    });

    let sut = make_sut(contact_api, JOHN_DRAFT.clone());

    // Act
    let (first, second) = tokio::join!(sut.submit(), async {
        while !sut.state().submitting() {
            tokio::task::yield_now().await;
        }
        let second = sut.submit().await;
        release.send(()).unwrap();
        second
    });

    // Assert
    first.unwrap();
    assert_matches!(second, Err(ContactFormSubmitError::Busy));
    assert_eq!(sut.state().status, ContactFormStatus::Submitted);
}

#[tokio::test]
async fn abandoned_submission_releases_form() {
    // Arrange
    let mut contact_api = MockContactApiService::new();
    let mut seq = mockall::Sequence::new();
    contact_api
        .expect_submit()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_| Box::pin(std::future::pending::<Result<(), ContactApiError>>()));
    contact_api
        .expect_submit()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_| Box::pin(std::future::ready(Ok::<_, ContactApiError>(()))));

    let sut = make_sut(contact_api, JOHN_DRAFT.clone());

    // Act
    let abandoned = sut.submit().now_or_never();
    let state_after_drop = sut.state();
    let retried = sut.submit().await;

    // Assert
    assert!(abandoned.is_none());
    assert_eq!(state_after_drop.status, ContactFormStatus::Idle);
    assert_eq!(state_after_drop.draft, *JOHN_DRAFT);
    retried.unwrap();
    assert_eq!(sut.state().status, ContactFormStatus::Submitted);
}
