use serde::{Deserialize, Serialize};

/// A network allocation (ip:port pair) owned by a node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Allocation {
    pub id: u32,
    pub ip: String,
    pub alias: Option<String>,
    pub port: u16,
    pub notes: Option<String>,
    pub assigned: bool,
}

/// `POST /nodes/{id}/allocations` payload; `ports` accepts single ports and
/// ranges (`"25565"`, `"25570-25580"`). The panel returns 204 on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAllocations {
    pub ip: String,
    pub ports: Vec<String>,
}

/// Related resources embeddable in allocation responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationInclude {
    Node,
    Server,
}

impl AllocationInclude {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Server => "server",
        }
    }
}
