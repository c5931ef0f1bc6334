// Status categories for status pills

/// Every class a status pill may carry. Cleared before a new status is applied.
pub const STATUS_CLASSES: [&str; 4] = [
    "status-ok",
    "status-degraded",
    "status-unavailable",
    "status-pending",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Ok,
    Degraded,
    Unavailable,
}

impl StatusCategory {
    /// Classify a free-form status string. Unrecognized values are neutral.
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "ok" | "online" | "complete" => Some(StatusCategory::Ok),
            "degraded" | "in_progress" => Some(StatusCategory::Degraded),
            "unavailable" | "pending" => Some(StatusCategory::Unavailable),
            _ => None,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StatusCategory::Ok => "status-ok",
            StatusCategory::Degraded => "status-degraded",
            StatusCategory::Unavailable => "status-unavailable",
        }
    }
}

/// Pill class for an implementation progress item.
pub fn progress_class(status: &str) -> &'static str {
    match status {
        "complete" => "status-ok",
        "in_progress" => "status-degraded",
        _ => "status-pending",
    }
}
