mod common;

use common::hash_dot;
use terrain_ascii::{
    domain::terrain::TileStyle,
    heightmap::HeightMap,
    ui::{self, palette::Palette},
};

fn render_to_string(map: &HeightMap) -> String {
    let mut out = Vec::new();
    ui::print_heightmap(&mut out, map, Palette::plain()).expect("print");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn valley_under_fixed_ceiling() {
    let map = HeightMap::from_heights(vec![0, 1, 2, 3, 2, 1, 0, -1, 0], Some(5), hash_dot())
        .expect("valid walk");
    assert_eq!(map.non_negative_heights(), &[1, 2, 3, 4, 3, 2, 1, 0, 1, 5]);
    insta::assert_snapshot!(render_to_string(&map), @r"
    .........#
    ...#.....#
    ..###....#
    .#####...#
    #######.##
    ");
}

#[test]
fn dip_with_derived_ceiling() {
    let style = TileStyle {
        ground: '#',
        sky: '~',
    };
    let map = HeightMap::from_heights(vec![0, -1, -2, -1, 0, 1], None, style).expect("valid walk");
    assert_eq!(map.ceiling(), 4);
    insta::assert_snapshot!(render_to_string(&map), @r"
    ~~~~~~#
    ~~~~~##
    #~~~###
    ##~####
    ");
}

#[test]
fn column_of_two_under_three_reads_ground_first() {
    let map = HeightMap::from_heights(vec![2], Some(3), hash_dot()).expect("valid walk");
    assert_eq!(map.grid().column(0), Some(&['#', '#', '.'][..]));
    insta::assert_snapshot!(render_to_string(&map), @r"
    .#
    ##
    ##
    ");
}
