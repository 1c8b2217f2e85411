use async_trait::async_trait;
use shared_types::{ListQuery, Page, RegistryError, Resource};
use std::marker::PhantomData;

use crate::http::RegistryClient;

/// Where a list controller gets its pages from.
#[async_trait]
pub trait ListSource<T>: Send + Sync + 'static {
    async fn fetch(&self, query: &ListQuery) -> Result<Page<T>, RegistryError>;
}

/// Lists `R` through the registry REST client.
pub struct ResourceSource<R> {
    client: RegistryClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceSource<R> {
    pub fn new(client: RegistryClient) -> Self {
        Self {
            client,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: Resource> ListSource<R> for ResourceSource<R> {
    async fn fetch(&self, query: &ListQuery) -> Result<Page<R>, RegistryError> {
        self.client.list::<R>(query).await
    }
}
