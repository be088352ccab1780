use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::items::Item;

/// Health check response
#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
    pub hostname: String,
}

/// Service description returned from `/`
#[derive(Serialize, Debug)]
pub struct InfoResponse {
    pub message: &'static str,
    pub hostname: String,
    pub endpoints: Endpoints,
}

/// Ordered `"METHOD /path" -> description` listing
#[derive(Debug, Clone, Copy)]
pub struct Endpoints(pub &'static [(&'static str, &'static str)]);

impl Serialize for Endpoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (signature, description) in self.0 {
            map.serialize_entry(signature, description)?;
        }
        map.end()
    }
}

/// All items held by this instance
#[derive(Serialize, Debug)]
pub struct ItemListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Item>,
    pub hostname: String,
}

/// A single item
#[derive(Serialize, Debug)]
pub struct ItemResponse {
    pub success: bool,
    pub data: Item,
    pub hostname: String,
}

/// Confirmation for a removed item
#[derive(Serialize, Debug)]
pub struct ItemDeletedResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: Item,
    pub hostname: String,
}

/// Create item request
#[derive(Deserialize, Debug, Default)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Update item request
///
/// `description: null` is treated the same as leaving the field out.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
