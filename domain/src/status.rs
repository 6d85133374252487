/// Badge style for a fruit's processing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Processed,
    ToBeProcessed,
    Other,
}

impl StatusKind {
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "processed" => StatusKind::Processed,
            "to be processed" => StatusKind::ToBeProcessed,
            _ => StatusKind::Other,
        }
    }

    /// CSS class used by the badge widget.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Processed => "status-success",
            StatusKind::ToBeProcessed => "status-info",
            StatusKind::Other => "status-neutral",
        }
    }
}
