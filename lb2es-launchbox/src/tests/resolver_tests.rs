use super::*;
use std::fs;

use lb2es_core::map_game;
use tempfile::TempDir;

fn game(title: &str, region: &str) -> (LbGame, EsGame) {
    let lb = LbGame {
        title: title.to_string(),
        region: region.to_string(),
        platform: "Super Nintendo".to_string(),
        application_path: r"Roms\Rom Name.sfc".to_string(),
        max_players: "1".to_string(),
        ..Default::default()
    };
    let es = map_game(&lb).game;
    (lb, es)
}

fn touch(dir: &Path, name: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), b"data").unwrap();
}

#[test]
fn test_art_dir_with_region() {
    let (lb, _) = game("Test Game", "USA");
    assert_eq!(
        art_dir(Path::new("/lb"), &lb, MediaCategory::Cover),
        Path::new("/lb/Images/Super Nintendo/Box - Front/USA").to_path_buf()
    );
}

#[test]
fn test_art_dir_universal_has_no_region_segment() {
    let (lb, _) = game("Test Game", UNIVERSAL_REGION);
    assert_eq!(
        art_dir(Path::new("/lb"), &lb, MediaCategory::Marquee),
        Path::new("/lb/Images/Super Nintendo/Arcade - Marquee").to_path_buf()
    );
}

#[test]
fn test_resolve_art_uses_source_extension() {
    let tmp = TempDir::new().unwrap();
    let (lb, es) = game("Test Game", "USA");
    let dir = art_dir(tmp.path(), &lb, MediaCategory::Cover);
    touch(&dir, "Test Game-01.jpg");

    let asset = resolve_art(tmp.path(), &lb, &es, MediaCategory::Cover).unwrap();
    assert_eq!(asset.source, dir.join("Test Game-01.jpg"));
    assert_eq!(asset.dest_filename, "Rom Name.jpg");
}

#[test]
fn test_resolve_art_scrubs_title() {
    let tmp = TempDir::new().unwrap();
    let (lb, es) = game("Zelda: Link's Awakening", "USA");
    let dir = art_dir(tmp.path(), &lb, MediaCategory::Screenshot);
    touch(&dir, "Zelda_ Link_s Awakening-01.png");

    let asset = resolve_art(tmp.path(), &lb, &es, MediaCategory::Screenshot).unwrap();
    assert_eq!(asset.dest_filename, "Rom Name.png");
}

#[test]
fn test_resolve_art_is_deterministic() {
    let tmp = TempDir::new().unwrap();
    let (lb, es) = game("Test Game", "USA");
    let dir = art_dir(tmp.path(), &lb, MediaCategory::Cover);
    touch(&dir, "Test Game-01.png");
    touch(&dir, "Test Game-01.jpg");

    for _ in 0..5 {
        let asset = resolve_art(tmp.path(), &lb, &es, MediaCategory::Cover).unwrap();
        assert_eq!(asset.source, dir.join("Test Game-01.jpg"));
    }
}

#[test]
fn test_resolve_art_ignores_other_numbers_and_titles() {
    let tmp = TempDir::new().unwrap();
    let (lb, es) = game("Test Game", "USA");
    let dir = art_dir(tmp.path(), &lb, MediaCategory::Cover);
    touch(&dir, "Test Game-02.png");
    touch(&dir, "Test Game 2-01.png");

    let err = resolve_art(tmp.path(), &lb, &es, MediaCategory::Cover).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_resolve_art_missing_dir_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let (lb, es) = game("Test Game", "USA");
    let err = resolve_art(tmp.path(), &lb, &es, MediaCategory::Fanart).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_resolve_art_does_not_recurse() {
    let tmp = TempDir::new().unwrap();
    let (lb, es) = game("Test Game", UNIVERSAL_REGION);
    let dir = art_dir(tmp.path(), &lb, MediaCategory::Cover);
    touch(&dir.join("USA"), "Test Game-01.png");

    assert!(resolve_art(tmp.path(), &lb, &es, MediaCategory::Cover).is_err());
}

#[test]
fn test_resolve_art_leaves_records_untouched() {
    let tmp = TempDir::new().unwrap();
    let (lb, es) = game("Test Game", "USA");
    touch(&art_dir(tmp.path(), &lb, MediaCategory::Cover), "Test Game-01.png");
    let (lb_before, es_before) = (lb.clone(), es.clone());

    resolve_art(tmp.path(), &lb, &es, MediaCategory::Cover).unwrap();
    assert_eq!(lb, lb_before);
    assert_eq!(es, es_before);
}

#[test]
fn test_resolve_video() {
    let tmp = TempDir::new().unwrap();
    let (_, es) = game("Test Game", "USA");
    touch(tmp.path(), "Rom Name.mp4");
    touch(tmp.path(), "Rom Name (Beta).mp4");

    let asset = resolve_video(tmp.path(), &es).unwrap();
    assert_eq!(asset.source, tmp.path().join("Rom Name.mp4"));
    assert_eq!(asset.dest_filename, "Rom Name.mp4");
}

#[test]
fn test_resolve_video_not_found() {
    let tmp = TempDir::new().unwrap();
    let (_, es) = game("Test Game", "USA");
    touch(tmp.path(), "Other.mp4");
    assert!(resolve_video(tmp.path(), &es).unwrap_err().is_not_found());
}

#[test]
fn test_resolve_video_without_rom_ignores_dotfiles() {
    let tmp = TempDir::new().unwrap();
    let lb = LbGame {
        title: "No Rom".to_string(),
        region: "USA".to_string(),
        max_players: "1".to_string(),
        ..Default::default()
    };
    let es = map_game(&lb).game;
    assert_eq!(es.rom_stem(), "");
    touch(tmp.path(), ".DS_Store");

    assert!(resolve_video(tmp.path(), &es).unwrap_err().is_not_found());
}
