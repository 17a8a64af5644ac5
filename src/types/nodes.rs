use serde::{Deserialize, Serialize};

/// A daemon node registered with the panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Node {
    pub id: u32,
    pub uuid: String,
    pub public: bool,
    pub name: String,
    pub description: Option<String>,
    pub location_id: u32,
    pub fqdn: String,
    pub scheme: String,
    pub behind_proxy: bool,
    pub maintenance_mode: bool,
    pub memory: i64,
    pub memory_overallocate: i64,
    pub disk: i64,
    pub disk_overallocate: i64,
    pub upload_size: i64,
    pub daemon_listen: u16,
    pub daemon_sftp: u16,
    pub daemon_base: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_resources: Option<AllocatedResources>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocatedResources {
    pub memory: i64,
    pub disk: i64,
}

/// Wings configuration document from `GET /nodes/{id}/configuration`.
///
/// Unlike every other response this is not wrapped in a fractal envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NodeConfiguration {
    pub debug: bool,
    pub uuid: String,
    pub token_id: String,
    pub token: String,
    pub api: NodeConfigurationApi,
    pub system: NodeConfigurationSystem,
    pub remote: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfigurationApi {
    pub host: String,
    pub port: u16,
    pub ssl: NodeConfigurationSsl,
    pub upload_limit: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfigurationSsl {
    pub enabled: bool,
    pub cert: String,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfigurationSystem {
    pub data: String,
    pub sftp: NodeConfigurationSftp,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfigurationSftp {
    pub bind_port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNode {
    pub name: String,
    pub location_id: u32,
    pub fqdn: String,
    pub scheme: String,
    pub memory: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_overallocate: Option<i64>,
    pub disk: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_overallocate: Option<i64>,
    pub upload_size: i64,
    pub daemon_sftp: u16,
    pub daemon_listen: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behind_proxy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
}

/// `PATCH /nodes/{id}` accepts the same field set as creation.
pub type UpdateNode = CreateNode;

/// Related resources embeddable in node responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeInclude {
    Allocations,
    Location,
    Servers,
}

impl NodeInclude {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allocations => "allocations",
            Self::Location => "location",
            Self::Servers => "servers",
        }
    }
}
