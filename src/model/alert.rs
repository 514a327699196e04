//! Status Alert Data
//!
//! The one-shot status notice and its severity classification.

/// Status/message pair embedded on the alert marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AlertNotice {
    pub status: String,
    pub message: String,
}

impl AlertNotice {
    /// Build from the marker's `data-status` / `data-message` strings,
    /// treating missing attributes as empty.
    pub fn from_attrs(status: Option<String>, message: Option<String>) -> Self {
        Self {
            status: status.unwrap_or_default(),
            message: message.unwrap_or_default(),
        }
    }

    /// An empty message means there is nothing to show.
    pub fn is_displayable(&self) -> bool {
        !self.message.is_empty()
    }

    pub fn severity(&self) -> Severity {
        Severity::classify(&self.status)
    }
}

/// Display severity derived from the raw status string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Case-insensitive keyword match, highest priority first. Anything
    /// unrecognized is an informational update.
    pub fn classify(status: &str) -> Self {
        let status = status.to_ascii_lowercase();
        if status.contains("success") {
            Severity::Success
        } else if status.contains("error") || status.contains("danger") {
            Severity::Error
        } else if status.contains("warning") {
            Severity::Warning
        } else {
            Severity::Info
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Update",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "✕",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    /// Suffix for the modal's severity-specific CSS class.
    pub fn css_name(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Success notices dismiss themselves; everything else stays up.
    pub fn auto_dismiss_ms(self) -> Option<u32> {
        matches!(self, Severity::Success).then_some(2000)
    }

    /// Severities without a timer wait for the confirm button.
    pub fn requires_confirmation(self) -> bool {
        self.auto_dismiss_ms().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_matches_substrings_case_insensitively() {
        assert_eq!(Severity::classify("Update failed (Error)"), Severity::Error);
        assert_eq!(Severity::classify("SUCCESS"), Severity::Success);
        assert_eq!(Severity::classify("warning: low stock"), Severity::Warning);
    }

    #[test]
    fn danger_counts_as_error() {
        assert_eq!(Severity::classify("danger"), Severity::Error);
        assert_eq!(Severity::classify("Dangerous interaction"), Severity::Error);
    }

    #[test]
    fn success_takes_priority_over_later_keywords() {
        assert_eq!(
            Severity::classify("success despite earlier error"),
            Severity::Success
        );
    }

    #[test]
    fn unknown_statuses_are_informational() {
        assert_eq!(Severity::classify("note"), Severity::Info);
        assert_eq!(Severity::classify(""), Severity::Info);
        assert_eq!(Severity::Info.title(), "Update");
    }

    #[test]
    fn titles_match_severities() {
        assert_eq!(Severity::Success.title(), "Success");
        assert_eq!(Severity::Error.title(), "Error");
        assert_eq!(Severity::Warning.title(), "Warning");
    }

    #[test]
    fn only_success_auto_dismisses() {
        assert_eq!(Severity::Success.auto_dismiss_ms(), Some(2000));
        assert!(!Severity::Success.requires_confirmation());

        for severity in [Severity::Error, Severity::Warning, Severity::Info] {
            assert_eq!(severity.auto_dismiss_ms(), None);
            assert!(severity.requires_confirmation());
        }
    }

    #[test]
    fn empty_message_is_not_displayable() {
        let notice = AlertNotice::from_attrs(Some("success".to_string()), None);
        assert!(!notice.is_displayable());

        let notice = AlertNotice::from_attrs(None, Some("Stock updated.".to_string()));
        assert!(notice.is_displayable());
        assert_eq!(notice.severity(), Severity::Info);
    }
}
