use std::str::FromStr;

use itertools::Itertools;

use crate::{render::Glyphs, Error, Grid, GridSimulator, Named, Pattern};

/// A whole grid drawn with `o` and `.`.
fn grid(s: &str) -> Grid {
    let pattern = Pattern::from_str(s).unwrap();
    let mut sim = GridSimulator::new(pattern.rows(), pattern.cols()).unwrap();
    sim.set_pattern(&pattern, (0, 0)).unwrap();
    sim.snapshot().clone()
}

fn stamped(rows: usize, cols: usize, named: Named, at: (usize, usize)) -> GridSimulator {
    let mut sim = GridSimulator::new(rows, cols).unwrap();
    sim.set_pattern(&named.pattern(), at).unwrap();
    sim
}

const TOAD_STATES: [&str; 2] = [
    "
    ......
    ......
    ..ooo.
    .ooo..
    ......
    ......",
    "
    ......
    ...o..
    .o..o.
    .o..o.
    ..o...
    ......",
];

#[test]
fn test_empty_stays_empty() {
    for (rows, cols) in [(1, 1), (2, 2), (3, 7), (16, 16)] {
        let mut sim = GridSimulator::new(rows, cols).unwrap();
        sim.advance();
        assert_eq!(sim.population(), 0);
        sim.advance_parallel();
        assert_eq!(sim.population(), 0);
    }
}

#[test]
fn test_still_lifes() {
    for named in [Named::Block, Named::Beehive, Named::Pond] {
        let mut sim = stamped(8, 8, named, (2, 2));
        let before = sim.snapshot().clone();
        for _ in 0..5 {
            sim.advance();
            assert_eq!(sim.snapshot(), &before, "{named}");
        }
    }
}

#[test]
fn test_blinker() {
    // Blinker blinks with period 2.
    let mut sim = stamped(5, 5, Named::Blinker, (2, 1));
    let state_1 = sim.snapshot().clone();
    let state_2 = grid(
        "
        .....
        ..o..
        ..o..
        ..o..
        .....
    ",
    );
    sim.advance();
    assert_eq!(sim.snapshot(), &state_2);
    sim.advance();
    assert_eq!(sim.snapshot(), &state_1);
}

#[test]
fn test_vertical_bar() {
    let mut sim = GridSimulator::new(5, 5).unwrap();
    let bar = Pattern::from_rows(&[[0u8, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
    sim.set_pattern(&bar, (1, 1)).unwrap();
    sim.advance();
    let alive = sim.snapshot().alive_cells().collect_vec();
    assert_eq!(alive, [(2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_toad() {
    let states = TOAD_STATES.map(grid);
    let mut sim = stamped(6, 6, Named::Toad, (2, 1));
    for (a, b) in states.iter().cycle().take(5).tuple_windows() {
        assert_eq!(sim.snapshot(), a);
        sim.advance();
        assert_eq!(sim.snapshot(), b);
    }
}

#[test]
fn test_pulsar() {
    // Pulsar has period 3.
    let mut sim = stamped(17, 17, Named::Pulsar, (2, 2));
    let start = sim.snapshot().clone();
    let populations = (0..3)
        .map(|_| {
            sim.advance();
            sim.population()
        })
        .collect_vec();
    assert_eq!(populations, [56, 72, 48]);
    assert_eq!(sim.snapshot(), &start);
}

#[test]
fn test_glider() {
    // Test that the glider moves down and right one cell every 4 generations.
    let mut sim = stamped(12, 12, Named::Glider, (1, 1));
    for i in 1..=6 {
        sim.advance_by(4);
        let expected = stamped(12, 12, Named::Glider, (1 + i, 1 + i));
        assert_eq!(sim.snapshot(), expected.snapshot(), "after {} generations", 4 * i);
    }
}

#[test]
fn test_glider_wraps() {
    // On an 8x8 torus the glider is back where it started after 8 periods.
    let mut sim = stamped(8, 8, Named::Glider, (0, 0));
    let start = sim.snapshot().clone();
    for _ in 0..31 {
        sim.advance();
        assert_eq!(sim.population(), 5);
    }
    assert_ne!(sim.snapshot(), &start);
    sim.advance();
    assert_eq!(sim.snapshot(), &start);
}

#[test]
fn test_lwss() {
    // Moves two cells left every 4 generations.
    let mut sim = stamped(12, 16, Named::Lwss, (4, 8));
    sim.advance_by(4);
    assert_eq!(
        sim.snapshot(),
        stamped(12, 16, Named::Lwss, (4, 6)).snapshot()
    );
}

#[test]
fn test_single_cell_neighbours() {
    let mut sim = GridSimulator::new(6, 9).unwrap();
    sim.set_pattern(&Pattern::from_str("o").unwrap(), (0, 0)).unwrap();
    let wrapped = [
        (5, 8),
        (5, 0),
        (5, 1),
        (0, 8),
        (0, 1),
        (1, 8),
        (1, 0),
        (1, 1),
    ];
    for (row, col) in (0..6).cartesian_product(0..9) {
        let expected = if wrapped.contains(&(row, col)) { 1 } else { 0 };
        assert_eq!(sim.count_live_neighbors(row, col), Ok(expected));
    }
    // A lone cell dies.
    sim.advance();
    assert_eq!(sim.population(), 0);
}

#[test]
fn test_rejected_stamp_keeps_grid() {
    let mut sim = stamped(10, 10, Named::Glider, (3, 3));
    let before = sim.snapshot().render(Glyphs::PLAIN);
    let err = sim.set_pattern(&Named::Pulsar.pattern(), (0, 0)).unwrap_err();
    assert_eq!(
        err,
        Error::OutOfBounds {
            row: 0,
            col: 0,
            height: 13,
            width: 13,
            rows: 10,
            cols: 10,
        }
    );
    assert_eq!(sim.snapshot().render(Glyphs::PLAIN), before);
}

#[test]
fn test_plain_render_round_trips() {
    let text = TOAD_STATES[1]
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .join("\n");
    assert_eq!(grid(&text).render(Glyphs::PLAIN), text);
}
