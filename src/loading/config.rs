use std::path::PathBuf;

/// Paths to the two tabular sources a street network is built from
#[derive(Debug, Clone, Default)]
pub struct NetworkConfig {
    /// Link table: one row per directed link
    /// (columns `A`, `B`, `STREETNAME`, `TYPE`, `DISTANCE`, ...)
    pub links_path: PathBuf,
    /// Node table: one row per node (columns `N`, `X`, `Y`, ...)
    pub nodes_path: PathBuf,
}
