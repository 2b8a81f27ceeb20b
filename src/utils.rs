//! Helper functions could be used in api/, front/, ...

use std::sync::LazyLock;

/// Client to make http requests
pub static REQUEST_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);
