//! In-memory item collection
//!
//! `ItemRegistry` owns the ordered list of items for one running instance.
//! It is not synchronized on its own: the server keeps it behind a
//! `tokio::sync::RwLock` so that mutations are exclusive and readers never
//! see a half-applied change.

use crate::error::{RegistryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Registry handle shared by all request handlers
pub type SharedRegistry = Arc<RwLock<ItemRegistry>>;

/// A single item record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(
        default,
        with = "iso_millis_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: Vec<Item>,
    next_id: u64,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a fresh registry for sharing between handlers
    pub fn shared() -> SharedRegistry {
        Arc::new(RwLock::new(Self::new()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    pub fn get(&self, id: &str) -> Result<Item> {
        self.position(id)
            .map(|index| self.items[index].clone())
            .ok_or_else(|| RegistryError::ItemNotFound(id.to_string()))
    }

    /// Create a new item and append it to the end of the collection.
    ///
    /// A missing or empty `name` is rejected and leaves the collection untouched.
    /// A missing `description` defaults to the empty string.
    pub fn create(
        &mut self,
        name: Option<&str>,
        description: Option<&str>,
        instance: &str,
    ) -> Result<Item> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(RegistryError::NameRequired),
        };

        let item = Item {
            id: self.allocate_id(),
            name: name.to_string(),
            description: description.unwrap_or_default().to_string(),
            created_at: Utc::now(),
            created_by: instance.to_string(),
            updated_at: None,
            updated_by: None,
        };

        self.items.push(item.clone());
        Ok(item)
    }

    /// Apply a partial update to an existing item.
    ///
    /// An empty `name` is ignored, while an empty `description` overwrites
    /// the previous one.
    pub fn update(
        &mut self,
        id: &str,
        name: Option<&str>,
        description: Option<&str>,
        instance: &str,
    ) -> Result<Item> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::ItemNotFound(id.to_string()))?;
        let item = &mut self.items[index];

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            item.name = name.to_string();
        }
        if let Some(description) = description {
            item.description = description.to_string();
        }
        item.updated_at = Some(Utc::now());
        item.updated_by = Some(instance.to_string());

        Ok(item.clone())
    }

    /// Remove an item, returning its last value
    pub fn delete(&mut self, id: &str) -> Result<Item> {
        let index = self
            .position(id)
            .ok_or_else(|| RegistryError::ItemNotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    // Ids come from a counter that only moves forward, so a deleted id is never reused.
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}

/// RFC 3339 timestamps with millisecond precision and a `Z` suffix
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

mod iso_millis_opt {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => super::iso_millis::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(serde::de::Error::custom)
            })
            .transpose()
    }
}
