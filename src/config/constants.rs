use std::time::Duration;

/// Raw file base of the repository the lists are published from
pub const LIST_REPOSITORY_BASE: &str =
    "https://raw.githubusercontent.com/monad-crypto/token-list/refs/heads/main";

pub const LIST_LOGO_URI: &str =
    "https://raw.githubusercontent.com/monad-crypto/token-list/refs/heads/main/assets/monad.svg";

pub const DEFAULT_LIST_VERSION: &str = "0.0.1";

/// Decimals accepted for new submissions
pub const DEFAULT_MIN_DECIMALS: u8 = 6;
pub const DEFAULT_MAX_DECIMALS: u8 = 36;

/// Maximum number of concurrent HEAD requests when checking logos
pub const LOGO_CHECK_CONCURRENCY: usize = 8;

pub const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

pub const ENTRY_FILE_NAME: &str = "data.json";

pub const IMAGE_CONTENT_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/jpg", "image/svg+xml"];
