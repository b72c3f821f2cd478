//! Delete lifecycle tests

mod common;

use cleanrooms_handlers::constants::MAX_RETRIES;
use cleanrooms_handlers::handlers;
use cleanrooms_handlers::resources::{AnalysisTemplate, Collaboration};
use cleanrooms_handlers::{
    Action, ApiError, CallbackContext, HandlerErrorCode, OperationStatus, ResourceHandlerRequest,
    ResourceIdentity, ResourceModel,
};
use common::{init_tracing, Call, FakeControlPlane};

const ID: &str = "collab-9";

fn model() -> Collaboration {
    Collaboration::from_identity(&ResourceIdentity::new(ID))
}

fn pending(retries_remaining: i32) -> Option<CallbackContext> {
    Some(CallbackContext {
        retries_remaining,
        pending_stabilization: true,
    })
}

fn not_found() -> Result<Collaboration, ApiError> {
    Err(ApiError::NotFound(format!("collaboration {ID}")))
}

#[tokio::test]
async fn test_fresh_delete_checks_existence_then_deletes() {
    init_tracing();
    let fake = FakeControlPlane::existing(model());

    let event = handlers::invoke(&fake, Action::Delete, ResourceHandlerRequest::new(model()), None).await;

    assert_eq!(event.status, OperationStatus::InProgress);
    assert_eq!(event.callback_context, pending(MAX_RETRIES));
    assert_eq!(fake.calls(), vec![Call::Get(ID.into()), Call::Delete(ID.into())]);
}

#[tokio::test]
async fn test_delete_of_missing_resource_is_not_found() {
    init_tracing();
    let fake = FakeControlPlane::existing(model());
    fake.set_get(not_found());

    let event = handlers::invoke(&fake, Action::Delete, ResourceHandlerRequest::new(model()), None).await;

    assert_eq!(event.status, OperationStatus::Failed);
    assert_eq!(event.error_code, Some(HandlerErrorCode::NotFound));
    assert!(event.resource_model.is_none());
    assert_eq!(fake.count(|c| matches!(c, Call::Delete(_))), 0);
}

#[tokio::test]
async fn test_delete_call_failure_carries_no_model() {
    init_tracing();
    let fake = FakeControlPlane::existing(model());
    fake.set_delete(Err(ApiError::Conflict("membership still active".into())));

    let event = handlers::invoke(&fake, Action::Delete, ResourceHandlerRequest::new(model()), None).await;

    assert_eq!(event.status, OperationStatus::Failed);
    assert_eq!(event.error_code, Some(HandlerErrorCode::ResourceConflict));
    assert!(event.resource_model.is_none());
}

#[tokio::test]
async fn test_delete_waits_until_both_sources_report_absence() {
    init_tracing();
    let fake = FakeControlPlane::existing(model());
    let request = || ResourceHandlerRequest::new(model());

    // Still readable and listed
    let first = handlers::invoke(&fake, Action::Delete, request(), pending(MAX_RETRIES)).await;
    assert_eq!(first.status, OperationStatus::InProgress);
    assert_eq!(first.callback_context, pending(MAX_RETRIES - 1));

    // Gone from point lookup, still listed
    fake.set_get(not_found());
    let second = handlers::invoke(&fake, Action::Delete, request(), first.callback_context).await;
    assert_eq!(second.status, OperationStatus::InProgress);
    assert_eq!(second.callback_context, pending(MAX_RETRIES - 2));

    // Gone from both
    fake.set_pages(vec![vec![ResourceIdentity::new("other")], Vec::new()]);
    let third = handlers::invoke(&fake, Action::Delete, request(), second.callback_context).await;
    assert_eq!(third.status, OperationStatus::Success);
    assert!(third.resource_model.is_none());
    assert!(third.callback_context.is_none());
}

#[tokio::test]
async fn test_delete_absent_from_listing_but_readable_keeps_waiting() {
    init_tracing();
    let fake = FakeControlPlane::existing(model());
    fake.set_pages(vec![Vec::new()]);

    let event = handlers::invoke(&fake, Action::Delete, ResourceHandlerRequest::new(model()), pending(2)).await;

    assert_eq!(event.status, OperationStatus::InProgress);
    assert_eq!(event.callback_context, pending(1));
}

#[tokio::test]
async fn test_delete_with_spent_budget_fails_without_reads() {
    init_tracing();
    let fake = FakeControlPlane::existing(model());
    fake.set_get(not_found());
    fake.set_pages(vec![Vec::new()]);

    let event = handlers::invoke(&fake, Action::Delete, ResourceHandlerRequest::new(model()), pending(0)).await;

    assert_eq!(event.status, OperationStatus::Failed);
    assert_eq!(event.error_code, Some(HandlerErrorCode::NotStabilized));
    assert!(event.resource_model.is_none());
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_listing_error_on_final_retry_leads_to_exhaustion() {
    init_tracing();
    let fake = FakeControlPlane::existing(model());
    fake.set_get(not_found());
    fake.set_list_error(Some(ApiError::Throttled("rate exceeded".into())));

    let last_retry = handlers::invoke(&fake, Action::Delete, ResourceHandlerRequest::new(model()), pending(1)).await;
    assert_eq!(last_retry.status, OperationStatus::InProgress);
    assert_eq!(last_retry.callback_context, pending(0));

    let exhausted = handlers::invoke(
        &fake,
        Action::Delete,
        ResourceHandlerRequest::new(model()),
        last_retry.callback_context,
    )
    .await;
    assert_eq!(exhausted.status, OperationStatus::Failed);
    assert_eq!(exhausted.error_code, Some(HandlerErrorCode::NotStabilized));
}

#[tokio::test]
async fn test_delete_without_identifier_is_not_found() {
    init_tracing();
    let fake = FakeControlPlane::existing(model());
    fake.clear_calls();

    let event = handlers::invoke(
        &fake,
        Action::Delete,
        ResourceHandlerRequest::new(Collaboration::default()),
        None,
    )
    .await;

    assert_eq!(event.status, OperationStatus::Failed);
    assert_eq!(event.error_code, Some(HandlerErrorCode::NotFound));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn test_scoped_delete_lists_within_membership() {
    init_tracing();
    let identity = ResourceIdentity::scoped("membership-1", "template-1");
    let template = AnalysisTemplate::from_identity(&identity);
    let fake = FakeControlPlane::<AnalysisTemplate>::new(identity.clone());
    fake.set_pages(vec![vec![ResourceIdentity::scoped("membership-1", "template-2")]]);

    let event = handlers::invoke(&fake, Action::Delete, ResourceHandlerRequest::new(template), pending(MAX_RETRIES)).await;

    assert_eq!(event.status, OperationStatus::Success);
    assert_eq!(
        fake.calls(),
        vec![
            Call::Get("template-1".into()),
            Call::ListPage {
                scope: Some("membership-1".into()),
                next_token: None
            },
        ]
    );
}

#[tokio::test]
async fn test_transient_existence_check_fails_without_deleting() {
    init_tracing();
    let fake = FakeControlPlane::existing(model());
    fake.set_get(Err(ApiError::Throttled("rate exceeded".into())));

    let event = handlers::invoke(&fake, Action::Delete, ResourceHandlerRequest::new(model()), None).await;

    assert_eq!(event.status, OperationStatus::Failed);
    assert_eq!(event.error_code, Some(HandlerErrorCode::Throttling));
    assert!(event.resource_model.is_none());
    assert_eq!(fake.calls(), vec![Call::Get(ID.into())]);
}

#[tokio::test]
async fn test_transient_read_while_pending_is_retried() {
    init_tracing();
    let fake = FakeControlPlane::existing(model());
    fake.set_get(Err(ApiError::Service("internal error".into())));
    fake.set_pages(vec![Vec::new()]);

    let event = handlers::invoke(&fake, Action::Delete, ResourceHandlerRequest::new(model()), pending(3)).await;

    assert_eq!(event.status, OperationStatus::InProgress);
    assert_eq!(event.callback_context, pending(2));
    assert!(event.error_code.is_none());
    assert_eq!(fake.count(|c| matches!(c, Call::Delete(_))), 0);
}
