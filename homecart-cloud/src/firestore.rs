//! REST client for the document store.

use crate::config::AdminConfig;
use crate::error::{CloudError, CloudResult};
use crate::values;
use async_trait::async_trait;
use homecart_store::{ensure_batch_size, Doc, DocumentStore, StoreResult, WriteKind, WriteOp};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

/// Document-store client over the Firestore v1 REST surface.
pub struct FirestoreStore {
    client: Client,
    base_url: String,
    project_id: String,
    token: String,
}

impl FirestoreStore {
    pub fn new(config: &AdminConfig, token: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: config.firestore_base_url.clone(),
            project_id: config.project_id.clone(),
            token,
        }
    }

    fn documents_root(&self) -> String {
        format!(
            "projects/{}/databases/(default)/documents",
            self.project_id
        )
    }

    fn doc_name(&self, collection: &str, doc_id: &str) -> String {
        format!("{}/{collection}/{doc_id}", self.documents_root())
    }

    async fn fetch(&self, collection: &str, doc_id: &str) -> CloudResult<Option<Doc>> {
        let url = format!("{}/{}", self.base_url, self.doc_name(collection, doc_id));
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = check(resp, "document get").await?;
        let body: Value = resp.json().await?;
        Ok(Some(decode_document(&body)?))
    }

    async fn run_query(
        &self,
        collection: &str,
        filter: Option<(&str, &Value)>,
        limit: Option<usize>,
    ) -> CloudResult<Vec<Doc>> {
        let mut query = json!({ "from": [{ "collectionId": collection }] });
        if let Some((field, value)) = filter {
            query["where"] = json!({
                "fieldFilter": {
                    "field": { "fieldPath": field },
                    "op": "EQUAL",
                    "value": values::to_value(value)?,
                }
            });
        }
        if let Some(limit) = limit {
            query["limit"] = json!(limit);
        }

        let url = format!("{}/{}:runQuery", self.base_url, self.documents_root());
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "structuredQuery": query }))
            .send()
            .await?;
        let resp = check(resp, "query").await?;

        // The response is a stream of result entries; only some carry a
        // document (the rest are read-time/skipped markers).
        let entries: Vec<Value> = resp.json().await?;
        entries
            .iter()
            .filter_map(|entry| entry.get("document"))
            .map(decode_document)
            .collect()
    }

    async fn commit_writes(&self, writes: &[WriteOp]) -> CloudResult<()> {
        let encoded = writes
            .iter()
            .map(|op| self.encode_write(op))
            .collect::<CloudResult<Vec<_>>>()?;

        let url = format!("{}/{}:commit", self.base_url, self.documents_root());
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&json!({ "writes": encoded }))
            .send()
            .await?;
        check(resp, "commit").await?;
        debug!(writes = writes.len(), "batch committed");
        Ok(())
    }

    fn encode_write(&self, op: &WriteOp) -> CloudResult<Value> {
        let name = self.doc_name(&op.collection, &op.doc_id);
        Ok(match &op.kind {
            WriteKind::Set {
                data,
                merge,
                stamps,
            } => {
                let mut write = json!({
                    "update": { "name": name, "fields": values::to_fields(data)? }
                });
                if *merge {
                    let paths: Vec<&String> = data
                        .as_object()
                        .map(|object| object.keys().collect())
                        .unwrap_or_default();
                    write["updateMask"] = json!({ "fieldPaths": paths });
                }
                attach_transforms(&mut write, stamps);
                write
            }
            WriteKind::Update {
                fields,
                stamps,
                deletes,
            } => {
                // Field paths in the mask but absent from `fields` are
                // deleted by the backend — that is the deletion sentinel.
                let mut paths: Vec<String> = fields.keys().cloned().collect();
                paths.extend(deletes.iter().cloned());
                let body = Value::Object(fields.clone());
                let mut write = json!({
                    "update": { "name": name, "fields": values::to_fields(&body)? },
                    "updateMask": { "fieldPaths": paths },
                    "currentDocument": { "exists": true },
                });
                attach_transforms(&mut write, stamps);
                write
            }
            WriteKind::Delete => json!({ "delete": name }),
        })
    }
}

fn attach_transforms(write: &mut Value, stamps: &[String]) {
    if stamps.is_empty() {
        return;
    }
    let transforms: Vec<Value> = stamps
        .iter()
        .map(|field| json!({ "fieldPath": field, "setToServerTime": "REQUEST_TIME" }))
        .collect();
    write["updateTransforms"] = Value::Array(transforms);
}

fn decode_document(body: &Value) -> CloudResult<Doc> {
    let name = body
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| CloudError::Api("document without a name".to_string()))?;
    let id = name.rsplit('/').next().unwrap_or_default().to_string();

    let fields = body
        .get("fields")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    Ok(Doc {
        id,
        data: values::from_fields(&fields)?,
    })
}

async fn check(resp: reqwest::Response, context: &str) -> CloudResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(CloudError::Api(format!("{context}: HTTP {status}: {message}")))
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn get(&self, collection: &str, doc_id: &str) -> StoreResult<Option<Doc>> {
        Ok(self.fetch(collection, doc_id).await?)
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<Doc>> {
        Ok(self.run_query(collection, Some((field, value)), None).await?)
    }

    async fn list(&self, collection: &str, limit: usize) -> StoreResult<Vec<Doc>> {
        Ok(self.run_query(collection, None, Some(limit)).await?)
    }

    async fn commit(&self, writes: &[WriteOp]) -> StoreResult<()> {
        ensure_batch_size(writes)?;
        Ok(self.commit_writes(writes).await?)
    }
}
