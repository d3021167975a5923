use super::render::render_preview;
use crate::form::FormSnapshot;

/// Tracks what was last written to the preview element
#[derive(Debug, Default)]
pub struct PreviewState {
    last_html: Option<String>,
    writes: usize,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the snapshot and return the markup only if it differs from the last write
    pub fn refresh(&mut self, snapshot: &FormSnapshot) -> Option<&str> {
        let html = render_preview(snapshot);
        if self.last_html.as_deref() == Some(html.as_str()) {
            log::trace!("Preview unchanged");
            return None;
        }
        self.writes += 1;
        self.last_html = Some(html);
        self.last_html.as_deref()
    }

    pub fn last_html(&self) -> Option<&str> {
        self.last_html.as_deref()
    }

    /// Number of times the preview markup actually changed
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Forget the last write so the next refresh always produces markup
    pub fn invalidate(&mut self) {
        self.last_html = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldControl;

    #[test]
    fn test_unchanged_form_is_not_rewritten() {
        let mut state = PreviewState::new();
        let snapshot = FormSnapshot::new();
        assert!(state.refresh(&snapshot).is_some());
        assert!(state.refresh(&snapshot).is_none());
        assert_eq!(state.writes(), 1);
    }

    #[test]
    fn test_edit_triggers_write() {
        let mut state = PreviewState::new();
        state.refresh(&FormSnapshot::new());
        let edited = FormSnapshot::new().with_control(FieldControl::input().with_id("phone").with_value("555"));
        let html = state.refresh(&edited).unwrap();
        assert!(html.contains("555"));
        assert_eq!(state.writes(), 2);
    }

    #[test]
    fn test_invalidate_forces_write() {
        let mut state = PreviewState::new();
        let snapshot = FormSnapshot::new();
        state.refresh(&snapshot);
        state.invalidate();
        assert!(state.refresh(&snapshot).is_some());
    }
}
