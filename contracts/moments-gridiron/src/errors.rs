use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum CatalogError {
    Unauthorized(String),
    InvalidInput(String),
    NotFound(String),
    AlreadyClosed(String),
    AlreadyInitialized(String),
    SeriesClosed(String),
    EditionClosed(String),
    EditionFull(String),
    DuplicateEditionKey(String),
    DuplicateSerial(String),
    DuplicateSlug(String),
    InvalidTier(String),
    AllocatorExhausted(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::AlreadyClosed(msg) => write!(f, "Already closed: {}", msg),
            Self::AlreadyInitialized(msg) => write!(f, "Already initialized: {}", msg),
            Self::SeriesClosed(msg) => write!(f, "Series closed: {}", msg),
            Self::EditionClosed(msg) => write!(f, "Edition closed: {}", msg),
            Self::EditionFull(msg) => write!(f, "Edition full: {}", msg),
            Self::DuplicateEditionKey(msg) => write!(f, "Duplicate edition key: {}", msg),
            Self::DuplicateSerial(msg) => write!(f, "Duplicate serial: {}", msg),
            Self::DuplicateSlug(msg) => write!(f, "Duplicate slug: {}", msg),
            Self::InvalidTier(msg) => write!(f, "Invalid tier: {}", msg),
            Self::AllocatorExhausted(msg) => write!(f, "Allocator exhausted: {}", msg),
        }
    }
}

impl CatalogError {
    pub fn series_not_found(id: u64) -> Self {
        Self::NotFound(format!("Series {} not found", id))
    }
    pub fn set_not_found(id: u64) -> Self {
        Self::NotFound(format!("Set {} not found", id))
    }
    pub fn play_not_found(id: u64) -> Self {
        Self::NotFound(format!("Play {} not found", id))
    }
    pub fn edition_not_found(id: u64) -> Self {
        Self::NotFound(format!("Edition {} not found", id))
    }
    pub fn moment_not_found(id: u64) -> Self {
        Self::NotFound(format!("Moment {} not found", id))
    }
    pub fn badge_not_found(slug: &str) -> Self {
        Self::NotFound(format!("Badge '{}' not found", slug))
    }
    pub fn leaderboard_not_found(name: &str) -> Self {
        Self::NotFound(format!("Leaderboard '{}' not found", name))
    }
    pub fn collection_not_setup(account_id: &near_sdk::AccountId) -> Self {
        Self::NotFound(format!("No moment collection set up for {}", account_id))
    }
    pub fn moment_not_in_collection(id: u64, account_id: &near_sdk::AccountId) -> Self {
        Self::NotFound(format!("Moment {} not in collection of {}", id, account_id))
    }
    pub fn only_owner() -> Self {
        Self::Unauthorized("Only the contract owner can perform this action".into())
    }
}
