//! Canonical matchup matrices, keyed by (weeks, team count).
//!
//! Each matrix is `weeks` rows by `team_count` slots. A cell holds the
//! 1-based slot of the opponent that week, or `None` for a bye. The catalog
//! value is authoritative; the scheduler never repairs or reshuffles it.
//! Today the league plays 18-week seasons with 5 through 10 teams per
//! flight; adding a season shape means adding a table here.

const W18_T5: [[Option<u8>; 5]; 18] = [
    [Some(4), Some(3), Some(2), Some(1), None],
    [None, Some(5), Some(4), Some(3), Some(2)],
    [Some(3), None, Some(1), Some(5), Some(4)],
    [Some(5), Some(4), None, Some(2), Some(1)],
    [Some(2), Some(1), Some(5), None, Some(3)],
    [Some(4), Some(3), Some(2), Some(1), None],
    [None, Some(5), Some(4), Some(3), Some(2)],
    [Some(3), None, Some(1), Some(5), Some(4)],
    [Some(5), Some(4), None, Some(2), Some(1)],
    [Some(2), Some(1), Some(5), None, Some(3)],
    [Some(4), Some(3), Some(2), Some(1), None],
    [None, Some(5), Some(4), Some(3), Some(2)],
    [Some(3), None, Some(1), Some(5), Some(4)],
    [Some(5), Some(4), None, Some(2), Some(1)],
    [Some(2), Some(1), Some(5), None, Some(3)],
    [Some(4), Some(3), Some(2), Some(1), None],
    [None, Some(5), Some(4), Some(3), Some(2)],
    [Some(3), None, Some(1), Some(5), Some(4)],
];

const W18_T6: [[Option<u8>; 6]; 18] = [
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1)],
    [Some(3), Some(6), Some(1), Some(5), Some(4), Some(2)],
    [Some(5), Some(4), Some(6), Some(2), Some(1), Some(3)],
    [Some(2), Some(1), Some(5), Some(6), Some(3), Some(4)],
    [Some(4), Some(3), Some(2), Some(1), Some(6), Some(5)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1)],
    [Some(3), Some(6), Some(1), Some(5), Some(4), Some(2)],
    [Some(5), Some(4), Some(6), Some(2), Some(1), Some(3)],
    [Some(2), Some(1), Some(5), Some(6), Some(3), Some(4)],
    [Some(4), Some(3), Some(2), Some(1), Some(6), Some(5)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1)],
    [Some(3), Some(6), Some(1), Some(5), Some(4), Some(2)],
    [Some(5), Some(4), Some(6), Some(2), Some(1), Some(3)],
    [Some(2), Some(1), Some(5), Some(6), Some(3), Some(4)],
    [Some(4), Some(3), Some(2), Some(1), Some(6), Some(5)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1)],
    [Some(3), Some(6), Some(1), Some(5), Some(4), Some(2)],
    [Some(5), Some(4), Some(6), Some(2), Some(1), Some(3)],
];

const W18_T7: [[Option<u8>; 7]; 18] = [
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), None],
    [None, Some(7), Some(6), Some(5), Some(4), Some(3), Some(2)],
    [Some(3), None, Some(1), Some(7), Some(6), Some(5), Some(4)],
    [Some(5), Some(4), None, Some(2), Some(1), Some(7), Some(6)],
    [Some(7), Some(6), Some(5), None, Some(3), Some(2), Some(1)],
    [Some(2), Some(1), Some(7), Some(6), None, Some(4), Some(3)],
    [Some(4), Some(3), Some(2), Some(1), Some(7), None, Some(5)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), None],
    [None, Some(7), Some(6), Some(5), Some(4), Some(3), Some(2)],
    [Some(3), None, Some(1), Some(7), Some(6), Some(5), Some(4)],
    [Some(5), Some(4), None, Some(2), Some(1), Some(7), Some(6)],
    [Some(7), Some(6), Some(5), None, Some(3), Some(2), Some(1)],
    [Some(2), Some(1), Some(7), Some(6), None, Some(4), Some(3)],
    [Some(4), Some(3), Some(2), Some(1), Some(7), None, Some(5)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), None],
    [None, Some(7), Some(6), Some(5), Some(4), Some(3), Some(2)],
    [Some(3), None, Some(1), Some(7), Some(6), Some(5), Some(4)],
    [Some(5), Some(4), None, Some(2), Some(1), Some(7), Some(6)],
];

const W18_T8: [[Option<u8>; 8]; 18] = [
    [Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2), Some(1)],
    [Some(3), Some(8), Some(1), Some(7), Some(6), Some(5), Some(4), Some(2)],
    [Some(5), Some(4), Some(8), Some(2), Some(1), Some(7), Some(6), Some(3)],
    [Some(7), Some(6), Some(5), Some(8), Some(3), Some(2), Some(1), Some(4)],
    [Some(2), Some(1), Some(7), Some(6), Some(8), Some(4), Some(3), Some(5)],
    [Some(4), Some(3), Some(2), Some(1), Some(7), Some(8), Some(5), Some(6)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), Some(8), Some(7)],
    [Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2), Some(1)],
    [Some(3), Some(8), Some(1), Some(7), Some(6), Some(5), Some(4), Some(2)],
    [Some(5), Some(4), Some(8), Some(2), Some(1), Some(7), Some(6), Some(3)],
    [Some(7), Some(6), Some(5), Some(8), Some(3), Some(2), Some(1), Some(4)],
    [Some(2), Some(1), Some(7), Some(6), Some(8), Some(4), Some(3), Some(5)],
    [Some(4), Some(3), Some(2), Some(1), Some(7), Some(8), Some(5), Some(6)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), Some(8), Some(7)],
    [Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2), Some(1)],
    [Some(3), Some(8), Some(1), Some(7), Some(6), Some(5), Some(4), Some(2)],
    [Some(5), Some(4), Some(8), Some(2), Some(1), Some(7), Some(6), Some(3)],
    [Some(7), Some(6), Some(5), Some(8), Some(3), Some(2), Some(1), Some(4)],
];

const W18_T9: [[Option<u8>; 9]; 18] = [
    [Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), None],
    [None, Some(9), Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2)],
    [Some(3), None, Some(1), Some(9), Some(8), Some(7), Some(6), Some(5), Some(4)],
    [Some(5), Some(4), None, Some(2), Some(1), Some(9), Some(8), Some(7), Some(6)],
    [Some(7), Some(6), Some(5), None, Some(3), Some(2), Some(1), Some(9), Some(8)],
    [Some(9), Some(8), Some(7), Some(6), None, Some(4), Some(3), Some(2), Some(1)],
    [Some(2), Some(1), Some(9), Some(8), Some(7), None, Some(5), Some(4), Some(3)],
    [Some(4), Some(3), Some(2), Some(1), Some(9), Some(8), None, Some(6), Some(5)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), Some(9), None, Some(7)],
    [Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), None],
    [None, Some(9), Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2)],
    [Some(3), None, Some(1), Some(9), Some(8), Some(7), Some(6), Some(5), Some(4)],
    [Some(5), Some(4), None, Some(2), Some(1), Some(9), Some(8), Some(7), Some(6)],
    [Some(7), Some(6), Some(5), None, Some(3), Some(2), Some(1), Some(9), Some(8)],
    [Some(9), Some(8), Some(7), Some(6), None, Some(4), Some(3), Some(2), Some(1)],
    [Some(2), Some(1), Some(9), Some(8), Some(7), None, Some(5), Some(4), Some(3)],
    [Some(4), Some(3), Some(2), Some(1), Some(9), Some(8), None, Some(6), Some(5)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), Some(9), None, Some(7)],
];

const W18_T10: [[Option<u8>; 10]; 18] = [
    [Some(10), Some(9), Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2), Some(1)],
    [Some(3), Some(10), Some(1), Some(9), Some(8), Some(7), Some(6), Some(5), Some(4), Some(2)],
    [Some(5), Some(4), Some(10), Some(2), Some(1), Some(9), Some(8), Some(7), Some(6), Some(3)],
    [Some(7), Some(6), Some(5), Some(10), Some(3), Some(2), Some(1), Some(9), Some(8), Some(4)],
    [Some(9), Some(8), Some(7), Some(6), Some(10), Some(4), Some(3), Some(2), Some(1), Some(5)],
    [Some(2), Some(1), Some(9), Some(8), Some(7), Some(10), Some(5), Some(4), Some(3), Some(6)],
    [Some(4), Some(3), Some(2), Some(1), Some(9), Some(8), Some(10), Some(6), Some(5), Some(7)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), Some(9), Some(10), Some(7), Some(8)],
    [Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), Some(10), Some(9)],
    [Some(10), Some(9), Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2), Some(1)],
    [Some(3), Some(10), Some(1), Some(9), Some(8), Some(7), Some(6), Some(5), Some(4), Some(2)],
    [Some(5), Some(4), Some(10), Some(2), Some(1), Some(9), Some(8), Some(7), Some(6), Some(3)],
    [Some(7), Some(6), Some(5), Some(10), Some(3), Some(2), Some(1), Some(9), Some(8), Some(4)],
    [Some(9), Some(8), Some(7), Some(6), Some(10), Some(4), Some(3), Some(2), Some(1), Some(5)],
    [Some(2), Some(1), Some(9), Some(8), Some(7), Some(10), Some(5), Some(4), Some(3), Some(6)],
    [Some(4), Some(3), Some(2), Some(1), Some(9), Some(8), Some(10), Some(6), Some(5), Some(7)],
    [Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), Some(9), Some(10), Some(7), Some(8)],
    [Some(8), Some(7), Some(6), Some(5), Some(4), Some(3), Some(2), Some(1), Some(10), Some(9)],
];

fn to_rows<const N: usize>(matrix: &[[Option<u8>; N]; 18]) -> Vec<Vec<Option<u8>>> {
    matrix.iter().map(|row| row.to_vec()).collect()
}

/// Looks up the matchup matrix for a season shape. `None` means the league
/// has no template for that (weeks, team_count) pair.
pub fn matchup_matrix(weeks: i64, team_count: usize) -> Option<Vec<Vec<Option<u8>>>> {
    if weeks != 18 {
        return None;
    }
    match team_count {
        5 => Some(to_rows(&W18_T5)),
        6 => Some(to_rows(&W18_T6)),
        7 => Some(to_rows(&W18_T7)),
        8 => Some(to_rows(&W18_T8)),
        9 => Some(to_rows(&W18_T9)),
        10 => Some(to_rows(&W18_T10)),
        _ => None,
    }
}
