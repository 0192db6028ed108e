use letterpress::{capturable_cells, capture, BoardState, Grid, Owner, Side};
use proptest::prelude::*;

const CELLS: usize = 16;

/// A sequence of captures, each with its side and requested cells.
fn capture_script() -> impl Strategy<Value = Vec<(bool, Vec<usize>)>> {
    proptest::collection::vec(
        (any::<bool>(), proptest::collection::vec(0..CELLS, 1..8)),
        0..12,
    )
}

fn side(p1: bool) -> Side {
    if p1 {
        Side::Player1
    } else {
        Side::Player2
    }
}

fn board_after(script: &[(bool, Vec<usize>)]) -> BoardState<4> {
    let grid = Grid::<4>::from_str_letters("abcdefghijklmnop").unwrap();
    let mut board = BoardState::new(grid);
    for (p1, cells) in script {
        capture(&mut board, side(*p1), cells);
    }
    board
}

/// Lock status computed directly from the neighbour list.
fn naive_locked(board: &BoardState<4>, index: usize) -> bool {
    match board.owner(index) {
        Owner::Neutral => false,
        Owner::Owned(s) => Grid::<4>::neighbors(index).all(|n| board.owner(n) == Owner::Owned(s)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn ownership_counts_cover_grid(script in capture_script()) {
        let board = board_after(&script);
        let p1 = board.owned_by(Side::Player1);
        let p2 = board.owned_by(Side::Player2);
        prop_assert!(p1.is_disjoint(&p2));
        prop_assert_eq!(p1.count() + p2.count() + board.neutral().count(), CELLS);
    }

    #[test]
    fn capturable_sets_are_disjoint_and_exclude_own_and_locked(
        script in capture_script(),
        p1 in any::<bool>(),
    ) {
        let board = board_after(&script);
        let acting = side(p1);
        let caps = capturable_cells(&board, acting);
        prop_assert!(caps.neutral.is_disjoint(&caps.opposing));
        for i in caps.all() {
            prop_assert_ne!(board.owner(i), Owner::Owned(acting));
            prop_assert!(!board.is_locked(i));
        }
        // every neutral and every unlocked opposing cell is included
        for i in 0..CELLS {
            let expected = match board.owner(i) {
                Owner::Neutral => true,
                Owner::Owned(s) => s != acting && !board.is_locked(i),
            };
            prop_assert_eq!(caps.contains(i), expected);
        }
    }

    #[test]
    fn lock_matches_neighbours(script in capture_script()) {
        let board = board_after(&script);
        for i in 0..CELLS {
            prop_assert_eq!(board.is_locked(i), naive_locked(&board, i));
        }
    }

    #[test]
    fn capture_never_shrinks_acting_side(
        script in capture_script(),
        p1 in any::<bool>(),
        pick in proptest::collection::vec(any::<proptest::sample::Index>(), 0..6),
    ) {
        let mut board = board_after(&script);
        let acting = side(p1);
        let caps: Vec<usize> = capturable_cells(&board, acting).all().iter().collect();
        let indices: Vec<usize> = if caps.is_empty() {
            Vec::new()
        } else {
            pick.iter().map(|ix| caps[ix.index(caps.len())]).collect()
        };
        let before = board.score(acting);
        let taken = capture(&mut board, acting, &indices);
        prop_assert!(board.score(acting) >= before);
        prop_assert_eq!(board.score(acting), before + taken.count());
        for i in &indices {
            prop_assert_eq!(board.owner(*i), Owner::Owned(acting));
        }
    }

    #[test]
    fn capture_of_own_cells_is_noop(script in capture_script(), p1 in any::<bool>()) {
        let mut board = board_after(&script);
        let acting = side(p1);
        let own: Vec<usize> = board.owned_by(acting).iter().collect();
        let before = board.clone();
        let taken = capture(&mut board, acting, &own);
        prop_assert!(taken.is_empty());
        prop_assert_eq!(board, before);
    }
}
