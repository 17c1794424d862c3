use crate::config::{DIGIT_HEIGHT, DIGIT_MAX_TETRIMINOS, DIGIT_WIDTH};
use crate::face::tetromino;

/// Glyph identifiers beyond the plain digits 0-9.
pub const GLYPH_COLON: i8 = 10;
pub const GLYPH_BLANK: i8 = 11;

/// One tetromino placement inside a digit box. `x`/`y` are the mask origin
/// and may be negative as long as the mask cells land inside the box; `y` is
/// far negative while a piece is still above the visible field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TetriminoPos {
    pub letter: char,
    pub x: i32,
    pub y: i32,
    pub rotation: u8,
}

const fn pos(letter: char, x: i32, y: i32, rotation: u8) -> TetriminoPos {
    TetriminoPos {
        letter,
        x,
        y,
        rotation,
    }
}

// Hand-tuned tilings of each glyph, 6x10 box, entries ordered bottom row
// first so pieces assemble upward.
const D0: [TetriminoPos; 12] = [
    pos('L', -1, 7, 1),
    pos('I', 2, 7, 2),
    pos('L', 0, 6, 1),
    pos('J', 3, 6, 3),
    pos('I', 3, 5, 1),
    pos('Z', 0, 4, 3),
    pos('Z', 4, 3, 3),
    pos('Z', -1, 2, 1),
    pos('Z', 4, 1, 3),
    pos('L', 0, 0, 2),
    pos('S', 3, 0, 0),
    pos('I', 0, -1, 0),
];
const D1: [TetriminoPos; 5] = [
    pos('O', 4, 8, 0),
    pos('I', 3, 4, 3),
    pos('I', 4, 4, 3),
    pos('I', 3, 0, 3),
    pos('I', 3, 0, 1),
];
const D2: [TetriminoPos; 11] = [
    pos('I', 0, 8, 0),
    pos('O', 4, 8, 0),
    pos('I', 0, 6, 2),
    pos('I', -2, 4, 1),
    pos('I', 0, 4, 3),
    pos('O', 2, 4, 0),
    pos('J', 4, 3, 3),
    pos('I', 3, 1, 3),
    pos('L', 4, 0, 3),
    pos('I', 0, -1, 2),
    pos('I', 0, -1, 0),
];
const D3: [TetriminoPos; 11] = [
    pos('O', 0, 8, 0),
    pos('I', 2, 8, 0),
    pos('L', 2, 7, 0),
    pos('I', 3, 5, 1),
    pos('J', 2, 4, 2),
    pos('O', 0, 4, 0),
    pos('L', 2, 3, 0),
    pos('I', 4, 1, 3),
    pos('J', 3, 0, 1),
    pos('I', 0, -1, 2),
    pos('I', 0, -1, 0),
];
const D4: [TetriminoPos; 9] = [
    pos('J', 4, 7, 3),
    pos('J', 3, 6, 1),
    pos('I', 0, 4, 0),
    pos('J', 4, 3, 3),
    pos('I', 0, 2, 2),
    pos('I', 3, 1, 3),
    pos('I', -2, 0, 1),
    pos('I', 0, 0, 3),
    pos('L', 4, 0, 3),
];
const D5: [TetriminoPos; 11] = [
    pos('L', 0, 7, 2),
    pos('L', 1, 8, 0),
    pos('J', 4, 7, 3),
    pos('I', 3, 5, 3),
    pos('L', 4, 4, 3),
    pos('I', 0, 4, 0),
    pos('I', -1, 1, 3),
    pos('J', 1, 3, 0),
    pos('L', 0, 0, 3),
    pos('I', 2, -1, 2),
    pos('I', 2, -1, 0),
];
const D6: [TetriminoPos; 12] = [
    pos('J', -1, 7, 1),
    pos('L', 1, 7, 2),
    pos('I', 2, 8, 0),
    pos('I', 2, 5, 1),
    pos('I', 3, 5, 1),
    pos('S', 0, 4, 2),
    pos('I', -1, 2, 3),
    pos('L', 3, 3, 2),
    pos('L', 0, 2, 1),
    pos('L', 0, -1, 2),
    pos('I', 1, 0, 0),
    pos('J', 3, -1, 2),
];
const D7: [TetriminoPos; 7] = [
    pos('O', 4, 8, 0),
    pos('J', 4, 5, 3),
    pos('I', 2, 3, 1),
    pos('L', 4, 2, 3),
    pos('L', 0, -1, 2),
    pos('I', 1, 0, 0),
    pos('J', 3, -1, 2),
];
const D8: [TetriminoPos; 13] = [
    pos('L', 0, 8, 0),
    pos('J', 3, 8, 0),
    pos('J', 0, 6, 3),
    pos('L', 3, 6, 1),
    pos('I', -2, 4, 1),
    pos('I', 3, 4, 1),
    pos('I', -1, 2, 1),
    pos('O', 2, 4, 0),
    pos('J', 3, 3, 1),
    pos('I', -1, 0, 3),
    pos('J', 4, 0, 3),
    pos('L', 1, -1, 2),
    pos('L', 2, 0, 0),
];
const D9: [TetriminoPos; 12] = [
    pos('L', 0, 7, 2),
    pos('I', 1, 8, 0),
    pos('I', 3, 6, 1),
    pos('J', 3, 6, 3),
    pos('L', -1, 3, 1),
    pos('T', 1, 3, 2),
    pos('L', 3, 4, 0),
    pos('I', 3, 1, 3),
    pos('S', -1, 1, 1),
    pos('I', 3, 0, 1),
    pos('T', 0, -1, 2),
    pos('S', 2, -1, 2),
];
const COLON: [TetriminoPos; 2] = [pos('O', 2, 6, 0), pos('O', 2, 2, 0)];

/// Target assembly for a glyph. Unknown identifiers (including the sentinel
/// used before the first tick) resolve to the empty blank assembly.
pub fn assembly(glyph: i8) -> &'static [TetriminoPos] {
    match glyph {
        0 => &D0,
        1 => &D1,
        2 => &D2,
        3 => &D3,
        4 => &D4,
        5 => &D5,
        6 => &D6,
        7 => &D7,
        8 => &D8,
        9 => &D9,
        g if g == GLYPH_COLON => &COLON,
        _ => &[],
    }
}

/// Reorder `target` so that, position by position, its letters line up with
/// the letters of the assembly that was on screen before the change. Pieces
/// then respawn as the shapes they vanished as, which reads as the old digit
/// rebuilding itself. Ordering-only: the result is a permutation of `target`.
pub fn reorder(previous: &[TetriminoPos], target: &[TetriminoPos]) -> Vec<TetriminoPos> {
    let mut used = vec![false; target.len()];
    let mut out = Vec::with_capacity(target.len());
    for prev in previous {
        if let Some(i) = target
            .iter()
            .enumerate()
            .position(|(i, t)| !used[i] && t.letter == prev.letter)
        {
            used[i] = true;
            out.push(target[i]);
        }
    }
    for (i, t) in target.iter().enumerate() {
        if !used[i] {
            out.push(*t);
        }
    }
    out
}

/// Startup check over the whole table: piece counts within the fixed storage
/// bound, and every resting assembly tiles its glyph without overlapping
/// cells or leaving the digit box.
pub fn validate_tables() -> Result<(), String> {
    for glyph in 0..=GLYPH_BLANK {
        let def = assembly(glyph);
        if def.len() > DIGIT_MAX_TETRIMINOS {
            return Err(format!(
                "glyph {glyph} has {} pieces, storage holds {DIGIT_MAX_TETRIMINOS}",
                def.len()
            ));
        }
        let mut cells = std::collections::HashSet::new();
        for tp in def {
            for &(mx, my) in tetromino::cells(tp.letter, tp.rotation) {
                let cell = (tp.x + mx, tp.y + my);
                if cell.0 < 0 || cell.0 >= DIGIT_WIDTH || cell.1 < 0 || cell.1 >= DIGIT_HEIGHT {
                    return Err(format!("glyph {glyph} cell {cell:?} outside the digit box"));
                }
                if !cells.insert(cell) {
                    return Err(format!("glyph {glyph} overlaps at {cell:?}"));
                }
            }
        }
    }
    Ok(())
}
