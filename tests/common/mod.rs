//! Common test utilities for handler integration tests
//!
//! Provides an in-memory control plane whose read paths can be changed
//! between invocations, and a call log to assert which reads a handler
//! actually issued.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use async_trait::async_trait;
use cleanrooms_handlers::{ApiError, ControlPlane, ListPage, ListPages, ResourceIdentity, ResourceModel};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, Once};

static TRACING_INIT: Once = Once::new();

/// Install a test subscriber once; `RUST_LOG` controls verbosity
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Control-plane call as seen by the fake
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create,
    Get(String),
    Delete(String),
    Update,
    ListPage {
        scope: Option<String>,
        next_token: Option<String>,
    },
    Tag(Vec<String>),
    Untag(Vec<String>),
}

impl Call {
    pub fn is_read(&self) -> bool {
        matches!(self, Call::Get(_) | Call::ListPage { .. })
    }
}

/// In-memory control plane for one resource type
///
/// `get` and the listing are independent, so tests can make them disagree the
/// way an eventually consistent service does.
pub struct FakeControlPlane<M> {
    create_result: Mutex<Result<ResourceIdentity, ApiError>>,
    get_result: Mutex<Result<M, ApiError>>,
    delete_result: Mutex<Result<(), ApiError>>,
    update_result: Mutex<Result<(), ApiError>>,
    tag_result: Mutex<Result<(), ApiError>>,
    /// Listing pages; the token of page `n` is `n`
    pages: Mutex<Vec<Vec<ResourceIdentity>>>,
    list_error: Mutex<Option<ApiError>>,
    calls: Mutex<Vec<Call>>,
}

impl<M: ResourceModel> FakeControlPlane<M> {
    /// Nothing exists yet; `create` will hand out `assigned`
    pub fn new(assigned: ResourceIdentity) -> Self {
        Self {
            create_result: Mutex::new(Ok(assigned)),
            get_result: Mutex::new(Err(ApiError::NotFound("not created".into()))),
            delete_result: Mutex::new(Ok(())),
            update_result: Mutex::new(Ok(())),
            tag_result: Mutex::new(Ok(())),
            pages: Mutex::new(vec![Vec::new()]),
            list_error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A resource that is already visible through both read paths
    pub fn existing(model: M) -> Self {
        let identity = model.identity().expect("existing model needs an identity");
        let fake = Self::new(identity.clone());
        fake.set_get(Ok(model));
        fake.set_pages(vec![vec![ResourceIdentity::new("other")], vec![identity]]);
        fake
    }

    pub fn set_create(&self, result: Result<ResourceIdentity, ApiError>) {
        *self.create_result.lock().unwrap() = result;
    }

    pub fn set_get(&self, result: Result<M, ApiError>) {
        *self.get_result.lock().unwrap() = result;
    }

    pub fn set_delete(&self, result: Result<(), ApiError>) {
        *self.delete_result.lock().unwrap() = result;
    }

    pub fn set_update(&self, result: Result<(), ApiError>) {
        *self.update_result.lock().unwrap() = result;
    }

    pub fn set_tag(&self, result: Result<(), ApiError>) {
        *self.tag_result.lock().unwrap() = result;
    }

    pub fn set_pages(&self, pages: Vec<Vec<ResourceIdentity>>) {
        *self.pages.lock().unwrap() = pages;
    }

    pub fn set_list_error(&self, error: Option<ApiError>) {
        *self.list_error.lock().unwrap() = error;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| predicate(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl<M: ResourceModel> ListPages for FakeControlPlane<M> {
    async fn list_page(
        &self,
        scope: Option<&str>,
        next_token: Option<&str>,
    ) -> Result<ListPage, ApiError> {
        self.record(Call::ListPage {
            scope: scope.map(str::to_string),
            next_token: next_token.map(str::to_string),
        });
        if let Some(error) = self.list_error.lock().unwrap().clone() {
            return Err(error);
        }
        let pages = self.pages.lock().unwrap();
        let index: usize = match next_token {
            Some(token) => token
                .parse()
                .map_err(|_| ApiError::Validation(format!("bad token {token}")))?,
            None => 0,
        };
        let items = pages.get(index).cloned().unwrap_or_default();
        let next = (index + 1 < pages.len()).then(|| (index + 1).to_string());
        Ok(ListPage::new(items, next))
    }
}

#[async_trait]
impl<M: ResourceModel> ControlPlane for FakeControlPlane<M> {
    type Model = M;

    async fn create(&self, _desired: &M) -> Result<ResourceIdentity, ApiError> {
        self.record(Call::Create);
        self.create_result.lock().unwrap().clone()
    }

    async fn get(&self, identity: &ResourceIdentity) -> Result<M, ApiError> {
        self.record(Call::Get(identity.id.clone()));
        self.get_result.lock().unwrap().clone()
    }

    async fn delete(&self, identity: &ResourceIdentity) -> Result<(), ApiError> {
        self.record(Call::Delete(identity.id.clone()));
        self.delete_result.lock().unwrap().clone()
    }

    async fn update(&self, _desired: &M) -> Result<(), ApiError> {
        self.record(Call::Update);
        self.update_result.lock().unwrap().clone()
    }

    async fn tag_resource(
        &self,
        _arn: &str,
        tags: &BTreeMap<String, String>,
    ) -> Result<(), ApiError> {
        self.record(Call::Tag(tags.keys().cloned().collect()));
        self.tag_result.lock().unwrap().clone()
    }

    async fn untag_resource(&self, _arn: &str, keys: &BTreeSet<String>) -> Result<(), ApiError> {
        self.record(Call::Untag(keys.iter().cloned().collect()));
        Ok(())
    }
}
