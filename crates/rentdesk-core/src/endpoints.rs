//! REST endpoint paths.
//!
//! Every collection follows the same layout under its path segment:
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | load | GET | `{Resource}/data` |
//! | create | POST | `{Resource}/submit` |
//! | update | PUT | `{Resource}/update/{id}` |
//! | delete | DELETE | `{Resource}/delete/{id}` |

use crate::types::RecordId;

pub fn data(resource: &str) -> String {
    format!("{resource}/data")
}

pub fn submit(resource: &str) -> String {
    format!("{resource}/submit")
}

pub fn update(resource: &str, id: RecordId) -> String {
    format!("{resource}/update/{id}")
}

pub fn delete(resource: &str, id: RecordId) -> String {
    format!("{resource}/delete/{id}")
}
