use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use serde_json::Value;
use shared_types::{
    parse_page, parse_record, ApiSettings, ListQuery, Page, PaguAnggaran, RegistryError, Resource,
};
use std::collections::HashMap;
use std::time::Duration;
use validator::Validate;

const API_KEY_HEADER: &str = "X-API-Key";

/// Fields the backend owns and never accepts from a form.
const SERVER_MANAGED_FIELDS: &[&str] = &["id", "created_at", "updated_at"];

/// REST client for the registry backend.
///
/// Every resource lives under `<base_url>/<R::PATH>`. Responses are run
/// through envelope normalization, so callers never see the two backend
/// envelope shapes.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

struct RawResponse {
    ok: bool,
    status: u16,
    body: String,
}

fn transport_error(e: reqwest::Error) -> RegistryError {
    if e.is_timeout() {
        RegistryError::network(format!("request timed out: {e}"))
    } else {
        RegistryError::network(e.to_string())
    }
}

impl RegistryClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| RegistryError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: settings.base().to_string(),
            api_key: settings.api_key.clone().filter(|k| !k.is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url<R: Resource>(&self) -> String {
        format!("{}/{}", self.base_url, R::PATH)
    }

    fn record_url<R: Resource>(&self, id: i64) -> String {
        format!("{}/{}/{}", self.base_url, R::PATH, id)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<RawResponse, RegistryError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        Ok(RawResponse {
            ok: status.is_success(),
            status: status.as_u16(),
            body,
        })
    }

    async fn send_record<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, RegistryError> {
        let raw = self.send(request).await?;
        let result = parse_record::<T>(raw.ok, Some(raw.status), &raw.body);
        if let Err(e) = &result {
            tracing::warn!(status = raw.status, error = %e, "Registry request failed");
        }
        result
    }

    /// One page of `R`. Unpaginated resources receive only the filters.
    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    pub async fn list<R: Resource>(&self, query: &ListQuery) -> Result<Page<R>, RegistryError> {
        let params = if R::PAGINATED {
            query.to_query_string()
        } else {
            query.filters_query_string()
        };
        let url = if params.is_empty() {
            self.collection_url::<R>()
        } else {
            format!("{}?{}", self.collection_url::<R>(), params)
        };

        let raw = self.send(self.http.get(url)).await?;
        let page = parse_page::<R>(raw.ok, Some(raw.status), &raw.body);
        match &page {
            Ok(page) => tracing::debug!(
                items = page.items.len(),
                current_page = page.meta.current_page,
                last_page = page.meta.last_page,
                "Listed records"
            ),
            Err(e) => tracing::warn!(status = raw.status, error = %e, "List request failed"),
        }
        page
    }

    /// A single record; `None` when the backend answers 404.
    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    pub async fn get<R: Resource>(&self, id: i64) -> Result<Option<R>, RegistryError> {
        let raw = self.send(self.http.get(self.record_url::<R>(id))).await?;
        if raw.status == 404 {
            return Ok(None);
        }
        parse_record::<R>(raw.ok, Some(raw.status), &raw.body)
    }

    #[tracing::instrument(skip(self, record), fields(resource = R::PATH))]
    pub async fn create<R: Resource>(&self, record: &R) -> Result<Option<R>, RegistryError> {
        record.validate()?;
        let request = self.authorized(self.http.post(self.collection_url::<R>()).json(record));
        self.send_record(request).await
    }

    #[tracing::instrument(skip(self, record), fields(resource = R::PATH))]
    pub async fn update<R: Resource>(&self, id: i64, record: &R) -> Result<Option<R>, RegistryError> {
        record.validate()?;
        let request = self.authorized(self.http.put(self.record_url::<R>(id)).json(record));
        self.send_record(request).await
    }

    /// Create a record that carries file attachments.
    #[tracing::instrument(skip(self, upload), fields(resource = R::PATH))]
    pub async fn create_multipart<R: Resource>(
        &self,
        upload: Upload,
    ) -> Result<Option<R>, RegistryError> {
        let request = self
            .authorized(self.http.post(self.collection_url::<R>()))
            .multipart(upload.into_form());
        self.send_record(request).await
    }

    /// Update a record with attachments.
    ///
    /// PHP backends only parse multipart bodies on POST, so the update is
    /// sent as POST with a `_method=PUT` field.
    #[tracing::instrument(skip(self, upload), fields(resource = R::PATH))]
    pub async fn update_multipart<R: Resource>(
        &self,
        id: i64,
        upload: Upload,
    ) -> Result<Option<R>, RegistryError> {
        let request = self
            .authorized(self.http.post(self.record_url::<R>(id)))
            .multipart(upload.text("_method", "PUT").into_form());
        self.send_record(request).await
    }

    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    pub async fn delete<R: Resource>(&self, id: i64) -> Result<(), RegistryError> {
        let request = self.authorized(self.http.delete(self.record_url::<R>(id)));
        self.send_record::<Value>(request).await?;
        tracing::info!(id, "Record deleted");
        Ok(())
    }

    /// Create or replace the ceiling for a DIPA category and year.
    #[tracing::instrument(skip(self, pagu))]
    pub async fn upsert_pagu(&self, pagu: &PaguAnggaran) -> Result<Option<PaguAnggaran>, RegistryError> {
        pagu.validate()?;
        let request = self.authorized(self.http.post(self.collection_url::<PaguAnggaran>()).json(pagu));
        self.send_record(request).await
    }

    /// Create `record` when it has no id yet, update it otherwise.
    ///
    /// Resources with [`Resource::ATTACHMENTS`] go out as multipart form data
    /// together with `files`. The rest are sent as JSON and take no files.
    pub async fn save<R: Resource>(
        &self,
        record: &R,
        files: Vec<FilePart>,
    ) -> Result<Option<R>, RegistryError> {
        if !R::is_multipart() {
            if !files.is_empty() {
                tracing::warn!(resource = R::PATH, count = files.len(), "Files ignored for JSON resource");
            }
            return match record.id() {
                Some(id) => self.update(id, record).await,
                None => self.create(record).await,
            };
        }

        let upload = files
            .into_iter()
            .fold(Upload::from_record(record)?, |upload, part| {
                upload.file(part.field, part.file_name, part.bytes)
            });
        match record.id() {
            Some(id) => self.update_multipart::<R>(id, upload).await,
            None => self.create_multipart::<R>(upload).await,
        }
    }
}

/// A file attached to a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `multipart/form-data` body for records with attachments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Upload {
    fields: Vec<(String, String)>,
    files: Vec<FilePart>,
}

impl Upload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text fields from a validated record. Null values and server-managed
    /// fields are left out; non-string scalars are sent in their JSON form.
    pub fn from_record<R: Resource>(record: &R) -> Result<Self, RegistryError> {
        record.validate()?;
        let value = serde_json::to_value(record).map_err(|e| {
            RegistryError::validation(format!("Data tidak dapat dikirim: {e}"), HashMap::new())
        })?;

        let mut upload = Self::new();
        if let Value::Object(map) = value {
            for (name, value) in map {
                if SERVER_MANAGED_FIELDS.contains(&name.as_str()) {
                    continue;
                }
                match value {
                    Value::Null => {}
                    Value::String(s) => upload = upload.text(name, s),
                    other => upload = upload.text(name, other.to_string()),
                }
            }
        }
        Ok(upload)
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(
        mut self,
        field: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.files.push(FilePart {
            field: field.into(),
            file_name: file_name.into(),
            bytes,
        });
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn files(&self) -> &[FilePart] {
        &self.files
    }

    fn into_form(self) -> Form {
        let form = self
            .fields
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));
        self.files.into_iter().fold(form, |form, file| {
            form.part(file.field, Part::bytes(file.bytes).file_name(file.file_name))
        })
    }
}
