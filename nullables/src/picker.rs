//! Nullable image picker — scripted pick results.

use antifraude_types::{AttachmentHandle, ImagePicker};
use std::sync::Mutex;

/// A deterministic image picker for testing.
///
/// Returns pre-configured results in order; `None` entries simulate the user
/// dismissing the picker. Once the script is exhausted every pick returns
/// `None`.
pub struct NullPicker {
    results: Mutex<Vec<Option<AttachmentHandle>>>,
    index: Mutex<usize>,
}

impl NullPicker {
    pub fn new(results: Vec<Option<AttachmentHandle>>) -> Self {
        Self {
            results: Mutex::new(results),
            index: Mutex::new(0),
        }
    }

    /// A picker that always delivers the same handle.
    pub fn returning(uri: impl Into<String>) -> Self {
        Self::new(vec![Some(AttachmentHandle::new(uri))])
    }

    /// A picker the user always dismisses.
    pub fn dismissed() -> Self {
        Self::new(Vec::new())
    }
}

impl ImagePicker for NullPicker {
    fn pick_image(&self, _mime_filter: &str) -> Option<AttachmentHandle> {
        let results = self.results.lock().unwrap();
        let mut idx = self.index.lock().unwrap();
        if results.is_empty() {
            return None;
        }
        let current = (*idx).min(results.len() - 1);
        *idx += 1;
        results[current].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_results_play_in_order() {
        let picker = NullPicker::new(vec![Some(AttachmentHandle::new("content://a")), None]);
        assert_eq!(
            picker.pick_image("image/*"),
            Some(AttachmentHandle::new("content://a"))
        );
        assert_eq!(picker.pick_image("image/*"), None);
    }

    #[test]
    fn dismissed_picker_never_delivers() {
        let picker = NullPicker::dismissed();
        assert_eq!(picker.pick_image("image/*"), None);
    }
}
