// crates/trim_marker/src/lib.rs

//! Literal values shared by the truncation tool‑chain.

/// Marker whose first occurrence ends the kept part of the file.
pub const SUBSCRIPTIONS_MARKER: &str = "export default SubscriptionsPage;";

/// Project‑relative file truncated when no path is given.
pub const SUBSCRIPTIONS_PAGE_PATH: &str = "src/pages/Subscriptions.tsx";
