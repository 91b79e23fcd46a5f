//! Field-level diff computation for audit entries.

use serde::Serialize;

use ordem_core::{DiffMap, FieldChange};

use crate::error::StoreError;

/// Compute the audit diff for a partial update.
///
/// The patch is serialized to learn which wire fields it touched (untouched
/// fields skip serialization entirely), then the old and updated records are
/// compared field by field under strict JSON inequality. A touched field
/// whose value did not actually change produces no diff entry, so an empty
/// patch yields an empty diff.
pub(crate) fn patch_diff<T, P>(old: &T, updated: &T, patch: &P) -> Result<DiffMap, StoreError>
where
    T: Serialize,
    P: Serialize,
{
    let old_value = to_value(old)?;
    let new_value = to_value(updated)?;
    let patch_value = to_value(patch)?;

    let mut diff = DiffMap::new();
    let Some(touched) = patch_value.as_object() else {
        return Ok(diff);
    };

    for field in touched.keys() {
        // Fields absent from a record serialize away (e.g. cleared
        // signatures); treat absence as JSON null on both sides.
        let old_field = old_value.get(field).cloned().unwrap_or_default();
        let new_field = new_value.get(field).cloned().unwrap_or_default();
        if old_field != new_field {
            diff.insert(
                field.clone(),
                FieldChange {
                    old: old_field,
                    new: new_field,
                },
            );
        }
    }

    Ok(diff)
}

/// Compute the audit diff for a replace-style update (every field is
/// touched). Compares the union of both records' wire fields, except the
/// identity field which is never overwritten.
pub(crate) fn full_diff<T: Serialize>(old: &T, updated: &T) -> Result<DiffMap, StoreError> {
    let old_value = to_value(old)?;
    let new_value = to_value(updated)?;

    let mut fields: Vec<&String> = Vec::new();
    for value in [&old_value, &new_value] {
        if let Some(object) = value.as_object() {
            fields.extend(object.keys().filter(|k| k.as_str() != "id"));
        }
    }
    fields.sort();
    fields.dedup();

    let mut diff = DiffMap::new();
    for field in fields {
        let old_field = old_value.get(field).cloned().unwrap_or_default();
        let new_field = new_value.get(field).cloned().unwrap_or_default();
        if old_field != new_field {
            diff.insert(
                field.clone(),
                FieldChange {
                    old: old_field,
                    new: new_field,
                },
            );
        }
    }

    Ok(diff)
}

fn to_value<T: Serialize>(value: &T) -> Result<serde_json::Value, StoreError> {
    serde_json::to_value(value).map_err(|e| StoreError::Persistence(e.to_string()))
}
