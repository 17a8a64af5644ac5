use serde::{Deserialize, Serialize};

/// A physical/logical location grouping nodes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Location {
    pub id: u32,
    pub short: String,
    pub long: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLocation {
    pub short: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

/// Related resources embeddable in location responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationInclude {
    Nodes,
    Servers,
}

impl LocationInclude {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nodes => "nodes",
            Self::Servers => "servers",
        }
    }
}
