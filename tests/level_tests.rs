//! Map loading, derived grids and entity placement.

use tile_escape::core::{
    entities, level_name_from_file, Level, LevelOptions, MapFormatError, RawMap, SimpleRng,
    TileGrid, WalkabilityGrid,
};
use tile_escape::types::{Coord, Direction, MarkerPolicy, TileKind, TREE_VARIANTS, WATER_VARIANTS};

const FOREST: &str = "\
##########
#S  T  W #
# TT - K #
#W  K   X#
##########";

#[test]
fn test_map_is_indexed_by_column_then_row() {
    let map = RawMap::parse(FOREST).unwrap();
    assert_eq!(map.width(), 10);
    assert_eq!(map.height(), 5);
    assert_eq!(map.get(Coord::new(1, 1)), Some('S'));
    assert_eq!(map.get(Coord::new(8, 3)), Some('X'));
    assert_eq!(map.get(Coord::new(5, 2)), Some('-'));
    assert_eq!(map.get(Coord::new(10, 0)), None);
    assert_eq!(map.get(Coord::new(-1, 0)), None);
}

#[test]
fn test_crlf_and_trailing_blank_lines_are_accepted() {
    let unix = RawMap::parse("#S#\n#X#\n").unwrap();
    let windows = RawMap::parse("#S#\r\n#X#\r\n\r\n\r\n").unwrap();
    assert_eq!(unix, windows);
}

#[test]
fn test_malformed_maps_are_rejected() {
    assert!(matches!(RawMap::parse(""), Err(MapFormatError::Empty)));
    assert!(matches!(RawMap::parse("\n\n"), Err(MapFormatError::Empty)));
    assert!(matches!(
        RawMap::parse("#S#\n#X"),
        Err(MapFormatError::RaggedRow {
            row: 1,
            expected: 3,
            found: 2
        })
    ));
    assert!(matches!(
        RawMap::parse("S?X"),
        Err(MapFormatError::UnknownChar { ch: '?', .. })
    ));
    assert!(matches!(RawMap::parse("  X"), Err(MapFormatError::MissingStart)));
    assert!(matches!(RawMap::parse("S  "), Err(MapFormatError::MissingExit)));
}

#[test]
fn test_walkability_matches_characters_everywhere() {
    let map = RawMap::parse(FOREST).unwrap();
    let walk = WalkabilityGrid::from_raw(&map);
    for (at, ch) in map.cells() {
        let expected = matches!(ch, ' ' | 'X' | '-' | 'K' | 'S');
        assert_eq!(walk.is_walkable(at), expected, "{:?} at {:?}", ch, at);
    }
    for off in [Coord::new(-1, 2), Coord::new(10, 2), Coord::new(3, -1), Coord::new(3, 5)] {
        assert!(!walk.is_walkable(off));
        assert!(walk.is_out_of_bounds(off));
    }
}

#[test]
fn test_tiles_follow_characters() {
    let map = RawMap::parse(FOREST).unwrap();
    let tiles = TileGrid::from_raw(&map, &mut SimpleRng::new(9));
    for (at, ch) in map.cells() {
        let tile = tiles.get(at).unwrap();
        match ch {
            ' ' | 'S' | 'K' => assert_eq!(tile, TileKind::Grass),
            '#' => assert_eq!(tile, TileKind::Wall),
            '-' => assert_eq!(tile, TileKind::Nothing),
            'X' => assert_eq!(tile, TileKind::Exit),
            'W' => assert!(matches!(tile, TileKind::Water(v) if v < WATER_VARIANTS)),
            'T' => assert!(matches!(tile, TileKind::Tree(v) if v < TREE_VARIANTS)),
            other => panic!("unexpected {:?}", other),
        }
    }
}

#[test]
fn test_same_seed_same_tiles() {
    let map = RawMap::parse(FOREST).unwrap();
    let a = TileGrid::from_raw(&map, &mut SimpleRng::new(77));
    let b = TileGrid::from_raw(&map, &mut SimpleRng::new(77));
    assert_eq!(a, b);
}

#[test]
fn test_entities_from_markers() {
    let map = RawMap::parse(FOREST).unwrap();
    let ents = entities::extract(&map, MarkerPolicy::UseFirst).unwrap();
    assert_eq!(ents.start, Coord::new(1, 1));
    assert_eq!(ents.exit, Coord::new(8, 3));
    let spawns: Vec<Coord> = ents.npcs.iter().map(|n| n.pos).collect();
    // Column-major: x=4 comes before x=7.
    assert_eq!(spawns, vec![Coord::new(4, 3), Coord::new(7, 2)]);
    assert!(ents.npcs.iter().all(|n| n.facing == Direction::West));
}

#[test]
fn test_duplicate_start_markers() {
    // Column 0 holds the second-row S, which wins in column-major order.
    let map = RawMap::parse("X S\nS  ").unwrap();
    let ents = entities::extract(&map, MarkerPolicy::UseFirst).unwrap();
    assert_eq!(ents.start, Coord::new(0, 1));

    assert!(matches!(
        entities::extract(&map, MarkerPolicy::Reject),
        Err(MapFormatError::DuplicateMarker { marker: 'S', count: 2 })
    ));
}

#[test]
fn test_level_bundles_everything() {
    let options = LevelOptions {
        player_facing: Direction::East,
        enemy_tick_ms: 250,
        ..LevelOptions::default()
    };
    let level = Level::parse("forest", FOREST, &options, &mut SimpleRng::new(1)).unwrap();
    assert_eq!(level.name(), "forest");
    assert_eq!(level.player(), Coord::new(1, 1));
    assert_eq!(level.player_facing(), Direction::East);
    assert_eq!(level.exit(), Coord::new(8, 3));
    assert_eq!(level.npcs().len(), 2);
    assert_eq!(level.enemy_tick_ms(), 250);
    assert_eq!(level.tiles().width(), level.walkability().width());
    assert!(level.source().is_none());
}

#[test]
fn test_default_facing_is_south() {
    let level = Level::parse("a", "S X", &LevelOptions::default(), &mut SimpleRng::new(1)).unwrap();
    assert_eq!(level.player_facing(), Direction::South);
}

#[test]
fn test_level_names_from_file_names() {
    assert_eq!(level_name_from_file("02_dungeon.map"), "dungeon");
    assert_eq!(level_name_from_file("01_forest.map"), "forest");
    assert_eq!(level_name_from_file("meadow.map"), "meadow");
}

#[test]
fn test_level_load_reports_path_on_io_error() {
    let missing = std::env::temp_dir().join("tile-escape-no-such-dir/01_none.map");
    let err = Level::load(&missing, &LevelOptions::default(), &mut SimpleRng::new(1)).unwrap_err();
    assert!(matches!(err, MapFormatError::Io { .. }));
    assert!(err.to_string().contains("01_none.map"));
}
