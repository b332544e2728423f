use utils::Move;

/// Captures before quiet moves; generator order is kept within each group.
#[inline(always)]
pub fn order_captures_first(moves: &mut [Move]) {
    moves.sort_by_key(|mv| !mv.is_capture());
}

/// Root ordering used by best-move search: captures before quiet moves, with no promise
/// about the order inside each group. Looser than [`order_captures_first`] on purpose.
#[inline(always)]
pub fn order_root_captures_first(moves: &mut [Move]) {
    moves.sort_unstable_by_key(|mv| !mv.is_capture());
}
