//! Records and collections.
//!
//! A [`Record`] is one entity with an optional server-assigned id; a
//! [`Collection`] is the ordered client-side copy of one remote collection.
//! Mutation happens through [`ResourceStore`](crate::ResourceStore), which is
//! the only place a collection is changed after it is loaded.

mod collection;

pub use collection::Collection;

use serde::{Deserialize, Serialize};

use crate::types::RecordId;

/// One persisted or about-to-be-persisted entity.
///
/// On the wire the id sits next to the entity fields:
/// `{"id": 1, "marque": "Toyota", ...}`. The id is omitted until the
/// server assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(flatten)]
    pub fields: T,
}

impl<T> Record<T> {
    /// A record that has not been persisted yet.
    pub fn draft(fields: T) -> Self {
        Self { id: None, fields }
    }

    /// A record with a server-assigned id.
    pub fn persisted(id: RecordId, fields: T) -> Self {
        Self {
            id: Some(id),
            fields,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
