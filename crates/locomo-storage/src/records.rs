//! Typed save/load wrappers for the persisted domain records.

use aws_sdk_s3::Client;
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

use locomo_core::models::check::CheckRecord;
use locomo_core::models::subject::Subject;
use locomo_core::s3_keys;

use crate::error::StorageError;
use crate::objects;

/// Load a JSON record from S3.
pub async fn load_json<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<T, StorageError> {
    let body = objects::get_object(client, bucket, key).await?;
    let value: T = serde_json::from_slice(&body)?;
    Ok(value)
}

/// Save a JSON record to S3.
pub async fn save_json<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_object(client, bucket, key, body, Some("application/json")).await
}

pub async fn save_subject(
    client: &Client,
    bucket: &str,
    subject: &Subject,
) -> Result<(), StorageError> {
    let key = s3_keys::subject(subject.id);
    tracing::debug!(%subject.id, key = %key, "saving subject");
    save_json(client, bucket, &key, subject).await
}

pub async fn load_subject(
    client: &Client,
    bucket: &str,
    id: Uuid,
) -> Result<Subject, StorageError> {
    load_json(client, bucket, &s3_keys::subject(id)).await
}

pub async fn save_check(
    client: &Client,
    bucket: &str,
    check: &CheckRecord,
) -> Result<(), StorageError> {
    let key = s3_keys::check(check.subject_id, check.id);
    tracing::debug!(%check.id, %check.subject_id, key = %key, "saving check record");
    save_json(client, bucket, &key, check).await
}

pub async fn load_check(
    client: &Client,
    bucket: &str,
    subject_id: Uuid,
    check_id: Uuid,
) -> Result<CheckRecord, StorageError> {
    load_json(client, bucket, &s3_keys::check(subject_id, check_id)).await
}

/// List the keys of all check records stored for a subject.
pub async fn list_checks(
    client: &Client,
    bucket: &str,
    subject_id: Uuid,
) -> Result<Vec<String>, StorageError> {
    objects::list_objects(client, bucket, &s3_keys::subject_checks_prefix(subject_id)).await
}
