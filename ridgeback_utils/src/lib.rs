mod macros;

/// Returns the version of the Ridgeback backend
pub fn ridgeback_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
