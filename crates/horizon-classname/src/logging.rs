//! Tracing targets used by the class-name parser.
//!
//! The crate only emits events; install a subscriber in the application to
//! see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_max_level(tracing::Level::TRACE)
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Token resolution target. Dropped tokens are reported here at `trace`.
    pub const RESOLVER: &str = "horizon_classname::resolver";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_classname::config";
}
