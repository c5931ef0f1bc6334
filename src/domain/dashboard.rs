// Dashboard domain model - the set of data domains shown on the page
use std::fmt;

/// One of the documents the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Domain {
    System,
    Pipeline,
    Ventures,
    Activity,
    Progress,
    Finance,
}

impl Domain {
    pub const ALL: [Domain; 6] = [
        Domain::System,
        Domain::Pipeline,
        Domain::Ventures,
        Domain::Activity,
        Domain::Progress,
        Domain::Finance,
    ];

    /// Key used for tabs, panels and configuration.
    pub fn key(self) -> &'static str {
        match self {
            Domain::System => "system",
            Domain::Pipeline => "pipeline",
            Domain::Ventures => "ventures",
            Domain::Activity => "activity",
            Domain::Progress => "progress",
            Domain::Finance => "finance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Domain::System => "System Health",
            Domain::Pipeline => "Pipeline",
            Domain::Ventures => "Ventures",
            Domain::Activity => "Activity",
            Domain::Progress => "Progress",
            Domain::Finance => "Finance",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
