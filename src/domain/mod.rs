// Domain layer - Dashboard documents and view-independent state
pub mod dashboard;
pub mod documents;
pub mod status;
pub mod tabs;
