// Allow deprecated APIs (assert_cmd::cargo_bin is deprecated but still works)
#![allow(deprecated)]

use base64::Engine;
use predicates::prelude::*;
use rstest::rstest;
use starcard_rs::fonts::FontFace;
use starcard_rs::model::SkillType;
use starcard_rs::starcard_canvas::encode_png;
use starcard_rs::AssetKey;
use std::fs;
use std::path::Path;
use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

const TUFFY: &[u8] = include_bytes!("../../starcard-rs/tests/fixtures/Tuffy.ttf");

const SHOWCASE: &str = r#"{
  "player": {
    "uid": "801341249", "nickname": "rushkii", "level": 70, "world_level": 6,
    "friend_count": 12, "avatar": {"icon": "icon/avatar/201006.png"},
    "space_info": {"avatar_count": 30, "achievement_count": 321}
  },
  "characters": [{
    "id": "1006", "name": "Silver Wolf", "level": 80, "rank": 6,
    "element": {"id": "Quantum", "name": "Quantum"},
    "path": {"id": "Knight"},
    "light_cone": {"id": "23007", "name": "Incessant Rain", "level": 80, "rarity": 5},
    "attributes": [
      {"name": "CRIT Rate", "icon": "icon/property/IconCriticalChance.png",
       "value": 0.05, "display": "5.0%", "percent": true}
    ],
    "additions": [
      {"name": "CRIT Rate", "icon": "icon/property/IconCriticalChance.png",
       "value": 0.3246, "display": "32.4%", "percent": true}
    ],
    "skills": [
      {"id": "100602", "name": "Allow Changes?", "type": "BPSkill",
       "type_text": "Skill", "level": 12}
    ],
    "relics": [{
      "icon": "icon/relic/61041_0.png", "rarity": 5, "level": 15,
      "main_affix": {"name": "HP", "icon": "icon/property/IconMaxHP.png",
                     "value": 705.6, "display": "705"},
      "sub_affix": [
        {"name": "SPD", "icon": "icon/property/IconSpeed.png",
         "value": 2.3, "display": "2"}
      ]
    }]
  }]
}"#;

/// Asset tree holding every file the showcase above needs.
fn asset_root() -> TempDir {
    let root = tempdir().unwrap();
    let png = encode_png(&[90u8; 2 * 2 * 4], 2, 2).unwrap();

    let keys = [
        AssetKey::Avatar("201006.png".into()),
        AssetKey::CustomAvatar("me.png".into()),
        AssetKey::Background,
        AssetKey::CharacterCountIcon,
        AssetKey::FriendIcon,
        AssetKey::AchievementIcon,
        AssetKey::DrawCard("1006".into()),
        AssetKey::PathIcon("Knight".into()),
        AssetKey::ElementIcon("Quantum".into()),
        AssetKey::LightCone("23007".into()),
        AssetKey::Star,
        AssetKey::AttributeIcon("IconCriticalChance.png".into()),
        AssetKey::AttributeIcon("IconMaxHP.png".into()),
        AssetKey::AttributeIcon("IconSpeed.png".into()),
        AssetKey::SkillIcon {
            character_id: "1006".into(),
            skill_type: SkillType::BpSkill,
        },
        AssetKey::RelicIcon("61041_0.png".into()),
    ];
    for key in &keys {
        write_asset(root.path(), key, &png);
    }
    for face in FontFace::ALL {
        write_asset(root.path(), &AssetKey::Font(face), TUFFY);
    }
    root
}

fn write_asset(root: &Path, key: &AssetKey, data: &[u8]) {
    let path = root.join(key.relative_path().unwrap());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, data).unwrap();
}

fn write_showcase(dir: &Path, json: &str) -> String {
    let path = dir.join("showcase.json");
    fs::write(&path, json).unwrap();
    path.to_str().unwrap().to_string()
}

fn starcard(assets: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("starcard").unwrap();
    cmd.arg("--assets")
        .arg(assets.path())
        .arg("--no-system-fonts");
    cmd
}

#[test]
fn test_writes_png_named_after_player() {
    let assets = asset_root();
    let work = tempdir().unwrap();
    let input = write_showcase(work.path(), SHOWCASE);
    let output_dir = work.path().join("cards");

    starcard(&assets)
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Image saved to"));

    let png = fs::read(output_dir.join("801341249-rushkii.png")).unwrap();
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!(img.height(), 80 + 620 + 70);
    assert_eq!(img.width(), 2720 + 10 * "CRIT Rate".len() as u32);
}

#[test]
fn test_base64_from_stdin() {
    let assets = asset_root();

    let output = starcard(&assets)
        .arg("--base64")
        .arg("--rounded-photo")
        .arg("me.png")
        .write_stdin(SHOWCASE)
        .output()
        .unwrap();
    assert!(output.status.success());

    let png = base64::engine::general_purpose::STANDARD
        .decode(&output.stdout)
        .unwrap();
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[rstest]
#[case("--character", "3", 2)]
#[case("--rounded-photo", "absent.png", 4)]
fn test_failure_exit_codes(#[case] flag: &str, #[case] value: &str, #[case] code: i32) {
    let assets = asset_root();
    let work = tempdir().unwrap();
    let input = write_showcase(work.path(), SHOWCASE);

    starcard(&assets)
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(work.path())
        .arg(flag)
        .arg(value)
        .assert()
        .failure()
        .code(code)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_malformed_payload() {
    let assets = asset_root();
    let work = tempdir().unwrap();
    let input = write_showcase(work.path(), r#"{"player": {"uid": "1"}}"#);

    starcard(&assets)
        .arg("--input")
        .arg(&input)
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_missing_relic_icon() {
    let assets = asset_root();
    fs::remove_file(assets.path().join("relics/61041_0.png")).unwrap();
    let work = tempdir().unwrap();
    let input = write_showcase(work.path(), SHOWCASE);

    starcard(&assets)
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(work.path())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("relic icon 61041_0.png"));

    assert!(!work.path().join("801341249-rushkii.png").exists());
}

#[test]
fn test_corrupt_font_file() {
    let assets = asset_root();
    write_asset(
        assets.path(),
        &AssetKey::Font(FontFace::Light),
        b"this is not a font file",
    );
    let work = tempdir().unwrap();
    let input = write_showcase(work.path(), SHOWCASE);

    starcard(&assets)
        .arg("--input")
        .arg(&input)
        .arg("--output-dir")
        .arg(work.path())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Rubik-Light.ttf"));

    assert!(!work.path().join("801341249-rushkii.png").exists());
}

#[test]
fn test_missing_input_file() {
    let assets = asset_root();
    starcard(&assets)
        .arg("--input")
        .arg("/nonexistent/showcase.json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read input file"));
}
