// Application layer - Use cases, rendering and the seams they depend on
pub mod dashboard_service;
pub mod document_source;
pub mod format;
pub mod markup;
pub mod renderers;
pub mod view;
