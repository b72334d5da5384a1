//! Value operations on a collection.

use super::StorageAdapterClient;
use crate::error::StorageResult;
use crate::http::HttpBackend;
use crate::models::{CreateValueRequest, UpdateValueRequest, ValueApiModel, ValueListApiModel};
use crate::url::{build_value_url, build_values_url};

impl<B: HttpBackend> StorageAdapterClient<B> {
    /// `GET collections/{c}/values/{k}`
    pub(crate) async fn get_value(
        &self,
        collection: &str,
        key: &str,
    ) -> StorageResult<ValueApiModel> {
        let url = build_value_url(&self.base_url, collection, key)?;
        self.backend.get_json(&url).await
    }

    /// `GET collections/{c}/values`
    pub(crate) async fn list_values(&self, collection: &str) -> StorageResult<Vec<ValueApiModel>> {
        let url = build_values_url(&self.base_url, collection)?;
        let list: ValueListApiModel = self.backend.get_json(&url).await?;
        Ok(list.items)
    }

    /// `POST collections/{c}/values`
    pub(crate) async fn create_value(
        &self,
        collection: &str,
        data: &str,
    ) -> StorageResult<ValueApiModel> {
        let url = build_values_url(&self.base_url, collection)?;
        self.backend
            .post_json(&url, &CreateValueRequest { data })
            .await
    }

    /// `PUT collections/{c}/values/{k}`
    pub(crate) async fn update_value(
        &self,
        collection: &str,
        key: &str,
        data: &str,
        etag: &str,
    ) -> StorageResult<ValueApiModel> {
        let url = build_value_url(&self.base_url, collection, key)?;
        self.backend
            .put_json(&url, &UpdateValueRequest { data, etag })
            .await
    }

    /// `DELETE collections/{c}/values/{k}`
    pub(crate) async fn delete_value(&self, collection: &str, key: &str) -> StorageResult<()> {
        let url = build_value_url(&self.base_url, collection, key)?;
        self.backend.delete(&url).await
    }
}
