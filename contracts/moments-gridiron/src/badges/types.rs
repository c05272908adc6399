use crate::constants::DELIMITER;
use near_sdk::near;
use std::collections::HashMap;

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Badge {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub visible: bool,
    pub slug_v2: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub created_at: u64,
}

/// Partial badge update. Absent fields are no-ops; a provided `metadata`
/// replaces the stored map wholesale (pass an empty map to clear it).
#[near(serializers = [json])]
#[derive(Clone, Default)]
pub struct BadgeUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub slug_v2: Option<String>,
    #[serde(default)]
    pub metadata: Option<HashMap<String, String>>,
}

#[near(serializers = [borsh, json])]
#[serde(rename_all = "snake_case")]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntityType {
    Play,
    Edition,
    Moment,
}

impl EntityType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Edition => "edition",
            Self::Moment => "moment",
        }
    }
}

#[near(serializers = [json])]
#[derive(Clone, Copy)]
pub struct EntityRef {
    pub entity_type: EntityType,
    pub entity_id: u64,
}

impl EntityRef {
    pub(crate) fn key(&self) -> String {
        format!("{}{}{}", self.entity_type.as_str(), DELIMITER, self.entity_id)
    }
}
