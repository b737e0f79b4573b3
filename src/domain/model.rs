use serde::{Deserialize, Serialize};

/// 沒有該尺寸頭像時使用的佔位值
pub const NO_AVATAR: &str = "-";

/// One author account returned by a site's `/wp-json/wp/v2/users/` endpoint,
/// flattened into the columns of the report tables.
///
/// `domain` always comes from the list being processed, never from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub domain: String,
    pub id: i64,
    pub name: String,
    pub url: String,
    pub description: String,
    pub slug: String,
    pub slug_link: String,
    #[serde(rename = "avatar_urls_24")]
    pub avatar_24: String,
    #[serde(rename = "avatar_urls_48")]
    pub avatar_48: String,
    #[serde(rename = "avatar_urls_96")]
    pub avatar_96: String,
    /// HTML cells for the 24/48/96 avatars, resolved during normalization.
    #[serde(skip)]
    pub avatar_cells: AvatarCells,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarCells {
    pub x24: String,
    pub x48: String,
    pub x96: String,
}

/// Number of users fetched for one listed domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainCount {
    pub domain: String,
    pub count: usize,
}

impl DomainCount {
    pub fn new(domain: impl Into<String>, count: usize) -> Self {
        Self {
            domain: domain.into(),
            count,
        }
    }
}

/// Result of querying a single domain. A soft failure carries its reason and
/// no records.
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub records: Vec<UserRecord>,
    pub count: usize,
    pub failure: Option<String>,
}

impl FetchOutcome {
    pub fn success(records: Vec<UserRecord>) -> Self {
        let count = records.len();
        Self {
            records,
            count,
            failure: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            count: 0,
            failure: Some(reason.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFailure {
    pub domain: String,
    pub reason: String,
}

/// Everything accumulated over one pass of the domain list.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub records: Vec<UserRecord>,
    pub counts: Vec<DomainCount>,
    pub failures: Vec<DomainFailure>,
    pub tables_written: Vec<String>,
}

impl Aggregate {
    pub fn total_users(&self) -> usize {
        self.records.len()
    }
}
