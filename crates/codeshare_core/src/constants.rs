//! Shared constants used across CodeShare crates.

/// Default API port for the CodeShare server.
pub const DEFAULT_PORT: u16 = 5050;

/// Default maximum snippet size accepted by the API layer.
pub const DEFAULT_MAX_SNIPPET_SIZE: usize = 1024 * 1024;

/// Default base URL for CLI/API clients.
pub const DEFAULT_CLI_SERVER_URL: &str = "http://localhost:5050";

/// Length of the random base-36 fragment in generated snippet ids.
pub const SNIPPET_ID_RANDOM_LEN: usize = 7;
