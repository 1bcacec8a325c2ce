//! Tracing targets used by style composition.

/// Target names for log filtering.
pub mod targets {
    /// Directive folding target.
    pub const COMPOSE: &str = "horizon_classname_style::compose";
}
