use crate::types::common::FractalItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A game server managed by the panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Server {
    pub id: u32,
    pub external_id: Option<String>,
    pub uuid: String,
    pub identifier: String,
    pub name: String,
    pub description: Option<String>,
    pub suspended: bool,
    pub limits: ServerLimits,
    pub feature_limits: ServerFeatureLimits,
    pub user: u32,
    pub node: u32,
    pub allocation: u32,
    pub nest: u32,
    pub egg: u32,
    pub pack: Option<u32>,
    pub container: ServerContainer,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<ServerRelationships>,
}

/// `-1` means unlimited for `memory`, `swap` and `disk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerLimits {
    pub memory: i64,
    pub swap: i64,
    pub disk: i64,
    pub io: i64,
    pub cpu: i64,
    #[serde(default)]
    pub threads: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerFeatureLimits {
    pub databases: u32,
    pub allocations: u32,
    #[serde(default)]
    pub backups: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerContainer {
    pub startup_command: String,
    pub image: String,
    pub installed: bool,
    pub environment: HashMap<String, String>,
}

/// Sub-resources embedded when `include=databases` is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ServerRelationships {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<ServerDatabaseList>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerDatabaseList {
    pub object: String,
    pub data: Vec<FractalItem<ServerDatabase>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ServerDatabase {
    pub id: u32,
    pub server: u32,
    pub host: u32,
    pub database: String,
    pub username: String,
    pub remote: String,
    pub max_connections: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServer {
    pub name: String,
    pub user: u32,
    pub egg: u32,
    pub docker_image: String,
    pub startup: String,
    pub environment: HashMap<String, String>,
    pub limits: NewServerLimits,
    pub feature_limits: NewServerFeatureLimits,
    pub allocation: ServerAllocationSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_scripts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oom_disabled: Option<bool>,
}

/// Partial limits accepted on creation and build updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewServerLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub io: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewServerFeatureLimits {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub databases: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocations: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backups: Option<u32>,
}

/// Default allocation plus any additional allocation ids assigned at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerAllocationSpec {
    pub default: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServerDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServerBuild {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<NewServerLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_limits: Option<NewServerFeatureLimits>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_allocations: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_allocations: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oom_disabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateServerStartup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egg: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_scripts: Option<bool>,
}

/// Related resources embeddable in server responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerInclude {
    Allocations,
    User,
    Subusers,
    Pack,
    Nest,
    Egg,
    Variables,
    Location,
    Node,
    Databases,
}

impl ServerInclude {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allocations => "allocations",
            Self::User => "user",
            Self::Subusers => "subusers",
            Self::Pack => "pack",
            Self::Nest => "nest",
            Self::Egg => "egg",
            Self::Variables => "variables",
            Self::Location => "location",
            Self::Node => "node",
            Self::Databases => "databases",
        }
    }
}
