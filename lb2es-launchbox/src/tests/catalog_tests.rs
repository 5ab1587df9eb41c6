use super::*;

const SAMPLE_CATALOG: &str = r#"<?xml version="1.0" standalone="yes"?>
<LaunchBox>
  <Game>
    <ApplicationPath>Games\Super Nintendo\Test Game.sfc</ApplicationPath>
    <CommunityStarRating>3.5</CommunityStarRating>
    <Developer>Dev Co</Developer>
    <Genre>Action;Adventure</Genre>
    <MaxPlayers>2</MaxPlayers>
    <Notes>Rescue the princess &amp; save the "kingdom".</Notes>
    <Platform>Super Nintendo Entertainment System</Platform>
    <Publisher>Pub Co</Publisher>
    <ReleaseDate>1995-06-01T00:00:00-07:00</ReleaseDate>
    <Title>Test Game</Title>
    <Region>North America</Region>
    <Favorite>false</Favorite>
  </Game>
  <AdditionalApplication>
    <ApplicationPath>Games\Super Nintendo\Other.sfc</ApplicationPath>
    <Title>Not a game</Title>
  </AdditionalApplication>
  <Game>
    <ApplicationPath>Games\Super Nintendo\Second.sfc</ApplicationPath>
    <Title>Second</Title>
    <Region />
  </Game>
  <Platform>
    <Name>Super Nintendo Entertainment System</Name>
  </Platform>
</LaunchBox>"#;

#[test]
fn test_parse_catalog() {
    let games = parse_catalog(SAMPLE_CATALOG.as_bytes()).unwrap();
    assert_eq!(games.len(), 2);

    let g = &games[0];
    assert_eq!(g.title, "Test Game");
    assert_eq!(g.application_path, r"Games\Super Nintendo\Test Game.sfc");
    assert_eq!(g.star_rating, 3.5);
    assert_eq!(g.developer, "Dev Co");
    assert_eq!(g.publisher, "Pub Co");
    assert_eq!(g.genre, "Action;Adventure");
    assert_eq!(g.max_players, "2");
    assert_eq!(g.platform, "Super Nintendo Entertainment System");
    assert_eq!(g.release_date, "1995-06-01T00:00:00-07:00");
    assert_eq!(g.region, "North America");
    assert_eq!(g.notes, r#"Rescue the princess & save the "kingdom"."#);
}

#[test]
fn test_missing_fields_default_to_empty() {
    let games = parse_catalog(SAMPLE_CATALOG.as_bytes()).unwrap();
    let g = &games[1];
    assert_eq!(g.title, "Second");
    assert_eq!(g.region, "");
    assert_eq!(g.max_players, "");
    assert_eq!(g.star_rating, 0.0);
}

#[test]
fn test_other_top_level_elements_ignored() {
    let games = parse_catalog(SAMPLE_CATALOG.as_bytes()).unwrap();
    assert!(games.iter().all(|g| g.title != "Not a game"));
}

#[test]
fn test_empty_catalog() {
    let games = parse_catalog(r#"<?xml version="1.0"?><LaunchBox></LaunchBox>"#.as_bytes()).unwrap();
    assert!(games.is_empty());
}

#[test]
fn test_bad_star_rating_is_an_error() {
    let xml = r#"<LaunchBox><Game><Title>Broken</Title><CommunityStarRating>lots</CommunityStarRating></Game></LaunchBox>"#;
    let err = parse_catalog(xml.as_bytes()).unwrap_err();
    match err {
        CatalogError::InvalidField { field, title, .. } => {
            assert_eq!(field, "CommunityStarRating");
            assert_eq!(title, "Broken");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_cdata_notes() {
    let xml = r#"<LaunchBox><Game><Title>T</Title><Notes><![CDATA[Line one
Line two]]></Notes></Game></LaunchBox>"#;
    let games = parse_catalog(xml.as_bytes()).unwrap();
    assert_eq!(games[0].notes, "Line one\nLine two");
}

#[test]
fn test_malformed_xml_is_an_error() {
    let xml = r#"<LaunchBox><Game><Title>T</Game></LaunchBox>"#;
    assert!(parse_catalog(xml.as_bytes()).is_err());
}

#[test]
fn test_catalog_path() {
    let p = catalog_path(Path::new("/lb"), "Super Nintendo");
    assert_eq!(
        p,
        Path::new("/lb/Data/Platforms/Super Nintendo.xml").to_path_buf()
    );
}

#[test]
fn test_missing_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_catalog_file(&dir.path().join("nope.xml")).unwrap_err();
    assert!(matches!(err, CatalogError::Missing(_)));
}

#[test]
fn test_crlf_line_endings_become_lf() {
    let xml = "<LaunchBox>\r\n  <Game>\r\n    <Title>T</Title>\r\n    \
               <Notes>Line one\r\nLine two\rLine three</Notes>\r\n  </Game>\r\n</LaunchBox>";
    let games = parse_catalog(xml.as_bytes()).unwrap();
    assert_eq!(games[0].notes, "Line one\nLine two\nLine three");
    assert_eq!(games[0].title, "T");
}

#[test]
fn test_field_whitespace_is_preserved() {
    let xml = "<LaunchBox>\n  <Game>\n    <Title>Spaced Title </Title>\n    \
               <Notes>  indented</Notes>\n  </Game>\n</LaunchBox>";
    let games = parse_catalog(xml.as_bytes()).unwrap();
    assert_eq!(games[0].title, "Spaced Title ");
    assert_eq!(games[0].notes, "  indented");
}

#[test]
fn test_normalize_newlines() {
    assert_eq!(normalize_newlines("a\r\nb"), "a\nb");
    assert_eq!(normalize_newlines("a\rb"), "a\nb");
    assert_eq!(normalize_newlines("a\nb"), "a\nb");
}
