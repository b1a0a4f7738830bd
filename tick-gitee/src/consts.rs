//! Constants for the tick-gitee client

/// Base URL for the Gitee-style REST API
pub const API_BASE_URL: &str = "https://gitee.com/api/v5";

/// User-Agent header value for the API client
pub const USER_AGENT: &str = concat!("tick-cli/", env!("CARGO_PKG_VERSION"));
