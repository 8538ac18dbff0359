//! Showcase data as delivered by the parsed-profile endpoint.
//!
//! Every type here is a read-only snapshot deserialised once per render.

use crate::error::{CardError, CardResult};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// An upstream icon path such as `icon/property/IconMaxHP.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(pub String);

impl AssetRef {
    /// Last path segment, which is what local asset directories are keyed by.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl From<&str> for AssetRef {
    fn from(path: &str) -> Self {
        AssetRef(path.to_string())
    }
}

/// The full payload: one player and the characters they display.
#[derive(Debug, Clone, Deserialize)]
pub struct ShowcasePayload {
    pub player: PlayerProfile,
    #[serde(default)]
    pub characters: Vec<CharacterRecord>,
}

impl ShowcasePayload {
    pub fn from_json(json: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> CardResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The character at `index`, or a range error when it does not exist.
    pub fn select(&self, index: usize) -> CardResult<&CharacterRecord> {
        if self.characters.is_empty() {
            return Err(CardError::EmptyShowcase);
        }
        self.characters
            .get(index)
            .ok_or(CardError::CharacterIndex {
                index,
                available: self.characters.len(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "PlayerPayload")]
pub struct PlayerProfile {
    pub uid: String,
    pub nickname: String,
    pub level: u32,
    pub world_level: u32,
    pub friend_count: u32,
    pub avatar_count: u32,
    pub achievement_count: u32,
    pub avatar_ref: AssetRef,
}

#[derive(Deserialize)]
struct PlayerPayload {
    uid: String,
    nickname: String,
    level: u32,
    world_level: u32,
    #[serde(default)]
    friend_count: u32,
    avatar: AvatarPayload,
    #[serde(default)]
    space_info: SpaceInfoPayload,
}

#[derive(Deserialize)]
struct AvatarPayload {
    icon: AssetRef,
}

#[derive(Default, Deserialize)]
struct SpaceInfoPayload {
    #[serde(default)]
    avatar_count: u32,
    #[serde(default)]
    achievement_count: u32,
}

impl From<PlayerPayload> for PlayerProfile {
    fn from(p: PlayerPayload) -> Self {
        Self {
            uid: p.uid,
            nickname: p.nickname,
            level: p.level,
            world_level: p.world_level,
            friend_count: p.friend_count,
            avatar_count: p.space_info.avatar_count,
            achievement_count: p.space_info.achievement_count,
            avatar_ref: p.avatar.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterRecord {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub rank: u32,
    pub element: Element,
    pub path: CharacterPath,
    #[serde(default, deserialize_with = "empty_object_as_none")]
    pub light_cone: Option<LightConeRecord>,
    #[serde(default)]
    pub attributes: Vec<StatEntry>,
    #[serde(default)]
    pub additions: Vec<StatEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub relics: Vec<RelicEntry>,
}

impl CharacterRecord {
    /// Trailblazer ids start with 8 and display under a fixed name.
    pub fn display_name(&self) -> &str {
        if self.id.starts_with('8') {
            "Trailblazer"
        } else {
            &self.name
        }
    }

    /// Skills that carry a real icon, in payload order.
    pub fn active_skills(&self) -> impl Iterator<Item = &SkillEntry> {
        self.skills.iter().filter(|skill| !skill.is_placeholder())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Element {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CharacterPath {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatEntry {
    pub name: String,
    #[serde(rename = "icon")]
    pub icon_ref: AssetRef,
    pub value: f64,
    pub display: String,
    #[serde(rename = "percent", default)]
    pub is_percent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LightConeRecord {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub rarity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum SkillType {
    Normal,
    Skill,
    Ultimate,
    Talent,
    #[serde(rename = "BPSkill")]
    BpSkill,
    #[serde(rename = "Maze")]
    Technique,
    MazeNormal,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    #[serde(default)]
    pub type_text: String,
    pub level: u32,
}

impl SkillEntry {
    /// Unreleased or locked skills come back with their id as name.
    pub fn is_placeholder(&self) -> bool {
        self.name == self.id
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RelicEntry {
    #[serde(rename = "icon")]
    pub icon_ref: AssetRef,
    pub rarity: u8,
    pub level: u32,
    pub main_affix: StatEntry,
    #[serde(rename = "sub_affix", default)]
    pub sub_affixes: Vec<StatEntry>,
}

/// `light_cone: {}` and `light_cone: null` both mean no light cone equipped.
fn empty_object_as_none<'de, D>(deserializer: D) -> Result<Option<LightConeRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(serde_json::Value::Object(map)) if map.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}
