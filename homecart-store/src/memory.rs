//! In-memory implementations of both seams, for tests.

use crate::directory::{AuthDirectory, AuthUser, AuthUserUpdate, NewAuthUser};
use crate::document::{Doc, DocumentStore};
use crate::error::{StoreError, StoreResult};
use crate::write::{ensure_batch_size, WriteKind, WriteOp};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

#[derive(Default)]
struct StoreInner {
    collections: HashMap<String, BTreeMap<String, Value>>,
    commits: usize,
}

/// An in-memory document store with the same commit semantics as the real
/// backend: batches are atomic (validated before any mutation), server
/// stamps materialize as the commit wall-clock time, and updates require the
/// target document to exist.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of batch commits issued so far.
    pub fn commit_count(&self) -> usize {
        self.inner.lock().unwrap().commits
    }

    /// Number of documents currently in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    /// Seeds a document directly, bypassing the commit counter.
    pub fn insert_doc(&self, collection: &str, doc_id: &str, data: Value) {
        self.inner
            .lock()
            .unwrap()
            .collections
            .entry(collection.to_string())
            .or_default()
            .insert(doc_id.to_string(), data);
    }
}

fn server_stamp() -> Value {
    Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
}

fn apply(inner: &mut StoreInner, op: &WriteOp) {
    let docs = inner.collections.entry(op.collection.clone()).or_default();
    match &op.kind {
        WriteKind::Set {
            data,
            merge,
            stamps,
        } => {
            let mut body = if *merge {
                let mut existing = docs.get(&op.doc_id).cloned().unwrap_or(Value::Null);
                if !existing.is_object() {
                    existing = Value::Object(serde_json::Map::new());
                }
                existing
            } else {
                Value::Object(serde_json::Map::new())
            };
            if let (Some(target), Some(source)) = (body.as_object_mut(), data.as_object()) {
                for (key, value) in source {
                    target.insert(key.clone(), value.clone());
                }
                for field in stamps {
                    target.insert(field.clone(), server_stamp());
                }
            }
            docs.insert(op.doc_id.clone(), body);
        }
        WriteKind::Update {
            fields,
            stamps,
            deletes,
        } => {
            // Existence was validated before the batch started mutating.
            if let Some(body) = docs.get_mut(&op.doc_id).and_then(Value::as_object_mut) {
                for (key, value) in fields {
                    body.insert(key.clone(), value.clone());
                }
                for field in stamps {
                    body.insert(field.clone(), server_stamp());
                }
                for field in deletes {
                    body.remove(field);
                }
            }
        }
        WriteKind::Delete => {
            docs.remove(&op.doc_id);
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, doc_id: &str) -> StoreResult<Option<Doc>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .collections
            .get(collection)
            .and_then(|docs| docs.get(doc_id))
            .map(|data| Doc {
                id: doc_id.to_string(),
                data: data.clone(),
            }))
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> StoreResult<Vec<Doc>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, data)| data.get(field) == Some(value))
                    .map(|(id, data)| Doc {
                        id: id.clone(),
                        data: data.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn list(&self, collection: &str, limit: usize) -> StoreResult<Vec<Doc>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .take(limit)
                    .map(|(id, data)| Doc {
                        id: id.clone(),
                        data: data.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn commit(&self, writes: &[WriteOp]) -> StoreResult<()> {
        ensure_batch_size(writes)?;
        let mut inner = self.inner.lock().unwrap();

        // Validate the whole batch before mutating anything, so a failed
        // commit leaves no partial state behind.
        for op in writes {
            if let WriteKind::Update { .. } = op.kind {
                let exists = inner
                    .collections
                    .get(&op.collection)
                    .is_some_and(|docs| docs.contains_key(&op.doc_id));
                if !exists {
                    return Err(StoreError::NotFound(format!(
                        "{}/{}",
                        op.collection, op.doc_id
                    )));
                }
            }
        }

        for op in writes {
            apply(&mut inner, op);
        }
        inner.commits += 1;
        Ok(())
    }
}

// ── Directory ───────────────────────────────────────────────────────────

#[derive(Default)]
struct DirectoryInner {
    users: Vec<AuthUser>,
}

/// An in-memory auth directory.
#[derive(Default)]
pub struct MemoryDirectory {
    inner: Mutex<DirectoryInner>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().unwrap().users.len()
    }
}

#[async_trait]
impl AuthDirectory for MemoryDirectory {
    async fn get_user_by_email(&self, email: &str) -> StoreResult<AuthUser> {
        let inner = self.inner.lock().unwrap();
        inner
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned()
            .ok_or_else(|| StoreError::UserNotFound(email.to_string()))
    }

    async fn create_user(&self, new_user: NewAuthUser) -> StoreResult<AuthUser> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|user| user.email == new_user.email) {
            return Err(StoreError::DuplicateEmail(new_user.email));
        }
        let user = AuthUser {
            uid: uuid::Uuid::new_v4().simple().to_string(),
            email: new_user.email,
            display_name: Some(new_user.display_name).filter(|name| !name.is_empty()),
            email_verified: new_user.email_verified,
            created_at: Some(Utc::now()),
            last_sign_in_at: None,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, uid: &str, update: AuthUserUpdate) -> StoreResult<AuthUser> {
        let mut inner = self.inner.lock().unwrap();
        let user = inner
            .users
            .iter_mut()
            .find(|user| user.uid == uid)
            .ok_or_else(|| StoreError::UserNotFound(uid.to_string()))?;
        if let Some(display_name) = update.display_name {
            user.display_name = Some(display_name);
        }
        Ok(user.clone())
    }

    async fn list_users(&self) -> StoreResult<Vec<AuthUser>> {
        Ok(self.inner.lock().unwrap().users.clone())
    }

    async fn delete_user(&self, uid: &str) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.users.len();
        inner.users.retain(|user| user.uid != uid);
        if inner.users.len() == before {
            return Err(StoreError::UserNotFound(uid.to_string()));
        }
        Ok(())
    }
}
