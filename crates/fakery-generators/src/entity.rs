//! Display capability shared by every generated entity.

use serde::Serialize;

/// A generated aggregate of fields.
///
/// The default display string is the entity's pretty-printed JSON form.
pub trait Entity: Serialize {
    fn to_display_string(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
