//! Asset keys, the resolver contract, and the filesystem resolver.

use crate::error::{CardError, CardResult};
use crate::fonts::FontFace;
use crate::model::SkillType;
use rayon::prelude::*;
use starcard_canvas::{CanvasImage, CustomFont};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Everything a card may ask its resolver for.
///
/// String payloads are upstream identifiers or icon file names, never paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetKey {
    /// Round player avatar, by icon file name.
    Avatar(String),
    /// Caller-supplied avatar replacing the player's own.
    CustomAvatar(String),
    Background,
    CharacterCountIcon,
    FriendIcon,
    AchievementIcon,
    /// Character splash art, by character id.
    DrawCard(String),
    /// Light cone art, by light cone id.
    LightCone(String),
    Star,
    /// Path emblem, by path id.
    PathIcon(String),
    /// Element emblem, by element id.
    ElementIcon(String),
    /// Stat icon, by icon file name.
    AttributeIcon(String),
    SkillIcon {
        character_id: String,
        skill_type: SkillType,
    },
    /// Relic icon, by icon file name.
    RelicIcon(String),
    Font(FontFace),
}

impl AssetKey {
    /// Location of the asset relative to an asset root.
    pub fn relative_path(&self) -> CardResult<PathBuf> {
        let path = match self {
            AssetKey::Avatar(file) => Path::new("avatars/rounded").join(self.checked(file)?),
            AssetKey::CustomAvatar(file) => Path::new("common").join(self.checked(file)?),
            AssetKey::Background => PathBuf::from("common/background.png"),
            AssetKey::CharacterCountIcon => PathBuf::from("icons/AvatarIcon.png"),
            AssetKey::FriendIcon => PathBuf::from("icons/FriendIcon.png"),
            AssetKey::AchievementIcon => PathBuf::from("icons/AchievementIcon.png"),
            AssetKey::DrawCard(id) => {
                Path::new("avatars/drawcard").join(format!("{}.png", self.checked(id)?))
            }
            AssetKey::LightCone(id) => {
                Path::new("lightcones").join(format!("{}.png", self.checked(id)?))
            }
            AssetKey::Star => PathBuf::from("icons/UI_Star_01.png"),
            AssetKey::PathIcon(id) => {
                Path::new("icons/paths").join(format!("BgPaths{}.png", self.checked(id)?))
            }
            AssetKey::ElementIcon(id) => Path::new("icons/elements")
                .join(format!("IconAttribute{}.png", self.checked(id)?)),
            AssetKey::AttributeIcon(file) => {
                Path::new("icons/attributes").join(self.checked(file)?)
            }
            AssetKey::SkillIcon {
                character_id,
                skill_type,
            } => Path::new("icons/skills").join(format!(
                "SkillIcon_{}_{}.png",
                skill_icon_character(self.checked(character_id)?),
                skill_icon_suffix(*skill_type)
            )),
            AssetKey::RelicIcon(file) => Path::new("relics").join(self.checked(file)?),
            AssetKey::Font(face) => Path::new("fonts").join(face.file_name()),
        };
        Ok(path)
    }

    /// Reject identifiers that would escape their asset directory.
    fn checked<'a>(&self, segment: &'a str) -> CardResult<&'a str> {
        if segment.is_empty() || segment.contains(['/', '\\']) || segment.contains("..") {
            return Err(CardError::AssetMissing {
                key: self.to_string(),
                reason: format!("{segment:?} is not a plain asset name"),
            });
        }
        Ok(segment)
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKey::Avatar(file) => write!(f, "avatar {file}"),
            AssetKey::CustomAvatar(file) => write!(f, "custom avatar {file}"),
            AssetKey::Background => write!(f, "background"),
            AssetKey::CharacterCountIcon => write!(f, "character count icon"),
            AssetKey::FriendIcon => write!(f, "friend icon"),
            AssetKey::AchievementIcon => write!(f, "achievement icon"),
            AssetKey::DrawCard(id) => write!(f, "draw card {id}"),
            AssetKey::LightCone(id) => write!(f, "light cone {id}"),
            AssetKey::Star => write!(f, "star"),
            AssetKey::PathIcon(id) => write!(f, "path icon {id}"),
            AssetKey::ElementIcon(id) => write!(f, "element icon {id}"),
            AssetKey::AttributeIcon(file) => write!(f, "attribute icon {file}"),
            AssetKey::SkillIcon {
                character_id,
                skill_type,
            } => write!(f, "skill icon {character_id} {skill_type:?}"),
            AssetKey::RelicIcon(file) => write!(f, "relic icon {file}"),
            AssetKey::Font(face) => write!(f, "font {}", face.file_name()),
        }
    }
}

/// Alternate Trailblazer ids share the icons of their first form.
fn skill_icon_character(character_id: &str) -> String {
    character_id.replace("8002", "8001").replace("8004", "8003")
}

fn skill_icon_suffix(skill_type: SkillType) -> &'static str {
    match skill_type {
        SkillType::Normal => "Normal",
        SkillType::Skill => "Skill",
        SkillType::Ultimate => "Ultimate",
        SkillType::Talent => "Passive",
        SkillType::BpSkill => "BP",
        SkillType::Technique => "Maze",
        SkillType::MazeNormal => "MazeNormal",
    }
}

/// Source of raw asset bytes. Failing to produce bytes aborts the render.
pub trait AssetResolver: Sync {
    fn load(&self, key: &AssetKey) -> CardResult<Vec<u8>>;
}

/// Resolves assets from a directory laid out like the bundled `assets/` tree.
#[derive(Debug, Clone)]
pub struct FsAssetResolver {
    root: PathBuf,
}

impl FsAssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &AssetKey) -> CardResult<PathBuf> {
        Ok(self.root.join(key.relative_path()?))
    }
}

impl AssetResolver for FsAssetResolver {
    fn load(&self, key: &AssetKey) -> CardResult<Vec<u8>> {
        let path = self.path_for(key)?;
        log::debug!("loading {key} from {}", path.display());
        std::fs::read(&path).map_err(|err| CardError::AssetMissing {
            key: key.to_string(),
            reason: format!("{}: {err}", path.display()),
        })
    }
}

/// Load and decode one image.
pub fn load_image(resolver: &dyn AssetResolver, key: &AssetKey) -> CardResult<CanvasImage> {
    let bytes = resolver.load(key)?;
    CanvasImage::decode(&bytes).map_err(|source| CardError::AssetDecode {
        key: key.to_string(),
        source,
    })
}

/// Images fetched up front in one parallel batch.
#[derive(Default)]
pub struct ImageSet {
    images: HashMap<AssetKey, CanvasImage>,
}

impl ImageSet {
    /// Resolve and decode every key concurrently; the first failure wins.
    pub fn preload(resolver: &dyn AssetResolver, keys: &[AssetKey]) -> CardResult<Self> {
        let images = keys
            .par_iter()
            .map(|key| load_image(resolver, key).map(|image| (key.clone(), image)))
            .collect::<CardResult<HashMap<_, _>>>()?;
        log::debug!("preloaded {} images", images.len());
        Ok(Self { images })
    }

    pub fn get(&self, key: &AssetKey) -> CardResult<&CanvasImage> {
        self.images.get(key).ok_or_else(|| CardError::AssetMissing {
            key: key.to_string(),
            reason: "not part of the preloaded batch".to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Fetch and parse every font face concurrently.
///
/// A face whose bytes hold no parsable font is an [`CardError::AssetDecode`],
/// so a card is never drawn with a silently missing typeface.
pub fn load_fonts(resolver: &dyn AssetResolver) -> CardResult<Vec<CustomFont>> {
    FontFace::ALL
        .par_iter()
        .map(|face| {
            let key = AssetKey::Font(*face);
            let bytes = resolver.load(&key)?;
            CustomFont::parse(bytes).map_err(|source| CardError::AssetDecode {
                key: key.to_string(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    #[case(AssetKey::Avatar("201006.png".into()), "avatars/rounded/201006.png")]
    #[case(AssetKey::CustomAvatar("me.jpg".into()), "common/me.jpg")]
    #[case(AssetKey::Background, "common/background.png")]
    #[case(AssetKey::DrawCard("1006".into()), "avatars/drawcard/1006.png")]
    #[case(AssetKey::LightCone("23007".into()), "lightcones/23007.png")]
    #[case(AssetKey::PathIcon("Knight".into()), "icons/paths/BgPathsKnight.png")]
    #[case(AssetKey::ElementIcon("Quantum".into()), "icons/elements/IconAttributeQuantum.png")]
    #[case(AssetKey::AttributeIcon("IconMaxHP.png".into()), "icons/attributes/IconMaxHP.png")]
    #[case(AssetKey::RelicIcon("61041_0.png".into()), "relics/61041_0.png")]
    #[case(AssetKey::Font(FontFace::SemiBold), "fonts/Rubik-SemiBold.ttf")]
    fn test_relative_paths(#[case] key: AssetKey, #[case] expected: &str) {
        assert_eq!(key.relative_path().unwrap(), PathBuf::from(expected));
    }

    #[rstest]
    #[case("1006", SkillType::BpSkill, "SkillIcon_1006_BP.png")]
    #[case("1006", SkillType::Talent, "SkillIcon_1006_Passive.png")]
    #[case("1006", SkillType::Technique, "SkillIcon_1006_Maze.png")]
    #[case("8002", SkillType::Ultimate, "SkillIcon_8001_Ultimate.png")]
    #[case("8004", SkillType::MazeNormal, "SkillIcon_8003_MazeNormal.png")]
    #[case("8003", SkillType::Normal, "SkillIcon_8003_Normal.png")]
    fn test_skill_icon_names(
        #[case] character_id: &str,
        #[case] skill_type: SkillType,
        #[case] file: &str,
    ) {
        let key = AssetKey::SkillIcon {
            character_id: character_id.into(),
            skill_type,
        };
        assert_eq!(
            key.relative_path().unwrap(),
            Path::new("icons/skills").join(file)
        );
    }

    #[rstest]
    #[case("../secret.png")]
    #[case("a/b.png")]
    #[case("")]
    fn test_escaping_names_rejected(#[case] name: &str) {
        let err = AssetKey::RelicIcon(name.into()).relative_path().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AssetMissing);
    }

    #[test]
    fn test_fs_resolver_missing_file() {
        let resolver = FsAssetResolver::new("/nonexistent-asset-root");
        let err = resolver.load(&AssetKey::Star).unwrap_err();
        assert!(matches!(err, CardError::AssetMissing { .. }));
        assert!(err.to_string().contains("star"));
    }

    struct Garbage;

    impl AssetResolver for Garbage {
        fn load(&self, _key: &AssetKey) -> CardResult<Vec<u8>> {
            Ok(b"definitely not a png".to_vec())
        }
    }

    #[test]
    fn test_undecodable_image() {
        let err = load_image(&Garbage, &AssetKey::Background).unwrap_err();
        assert!(matches!(err, CardError::AssetDecode { .. }));
        assert_eq!(err.kind(), ErrorKind::AssetMissing);
    }

    #[test]
    fn test_preload_get_unknown_key() {
        let set = ImageSet::preload(&Garbage, &[]).unwrap();
        assert!(set.is_empty());
        assert!(set.get(&AssetKey::Star).is_err());
    }

    #[test]
    fn test_unparsable_font_is_decode_error() {
        let err = load_fonts(&Garbage).unwrap_err();
        assert!(matches!(
            err,
            CardError::AssetDecode { ref key, .. } if key.starts_with("font Rubik-")
        ));
        assert_eq!(err.kind(), ErrorKind::AssetMissing);
    }
}
