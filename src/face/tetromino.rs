use crate::field::Rgb;

/// Static description of one tetromino letter: bounding-box side length,
/// number of visually distinct orientations, and its display color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TetriminoDef {
    pub letter: char,
    pub size: i32,
    pub unique_shapes: u8,
    pub color: Rgb,
}

pub const LETTERS: [char; 7] = ['I', 'O', 'T', 'S', 'Z', 'J', 'L'];

pub fn def(letter: char) -> &'static TetriminoDef {
    match letter {
        'I' => &I_DEF,
        'O' => &O_DEF,
        'T' => &T_DEF,
        'S' => &S_DEF,
        'Z' => &Z_DEF,
        'J' => &J_DEF,
        _ => &L_DEF,
    }
}

const I_DEF: TetriminoDef = TetriminoDef {
    letter: 'I',
    size: 4,
    unique_shapes: 2,
    color: Rgb::new(0, 230, 230),
};
const O_DEF: TetriminoDef = TetriminoDef {
    letter: 'O',
    size: 2,
    unique_shapes: 1,
    color: Rgb::new(230, 230, 0),
};
const T_DEF: TetriminoDef = TetriminoDef {
    letter: 'T',
    size: 3,
    unique_shapes: 4,
    color: Rgb::new(160, 0, 240),
};
const S_DEF: TetriminoDef = TetriminoDef {
    letter: 'S',
    size: 3,
    unique_shapes: 2,
    color: Rgb::new(0, 230, 0),
};
const Z_DEF: TetriminoDef = TetriminoDef {
    letter: 'Z',
    size: 3,
    unique_shapes: 2,
    color: Rgb::new(230, 0, 0),
};
const J_DEF: TetriminoDef = TetriminoDef {
    letter: 'J',
    size: 3,
    unique_shapes: 4,
    color: Rgb::new(60, 60, 240),
};
const L_DEF: TetriminoDef = TetriminoDef {
    letter: 'L',
    size: 3,
    unique_shapes: 4,
    color: Rgb::new(240, 160, 0),
};

/// Mask cells of a letter at a rotation, as offsets from the placement
/// origin. Every cell stays inside the letter's `size` square.
pub fn cells(letter: char, rotation: u8) -> &'static [(i32, i32); 4] {
    const I: [[(i32, i32); 4]; 4] = [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ];
    const O: [[(i32, i32); 4]; 4] = [
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
    ];
    const T: [[(i32, i32); 4]; 4] = [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ];
    const S: [[(i32, i32); 4]; 4] = [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ];
    const Z: [[(i32, i32); 4]; 4] = [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ];
    const J: [[(i32, i32); 4]; 4] = [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ];
    const L: [[(i32, i32); 4]; 4] = [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ];

    let r = (rotation % 4) as usize;
    match letter {
        'I' => &I[r],
        'O' => &O[r],
        'T' => &T[r],
        'S' => &S[r],
        'Z' => &Z[r],
        'J' => &J[r],
        _ => &L[r],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_stay_inside_size_box() {
        for letter in LETTERS {
            let d = def(letter);
            for rotation in 0..4 {
                for &(x, y) in cells(letter, rotation) {
                    assert!(
                        x >= 0 && y >= 0 && x < d.size && y < d.size,
                        "{letter} r{rotation} cell ({x},{y}) outside {}x{} box",
                        d.size,
                        d.size
                    );
                }
            }
        }
    }

    #[test]
    fn masks_have_four_distinct_cells() {
        for letter in LETTERS {
            for rotation in 0..4 {
                let m = cells(letter, rotation);
                for i in 0..4 {
                    for j in i + 1..4 {
                        assert_ne!(m[i], m[j], "{letter} r{rotation} repeats a cell");
                    }
                }
            }
        }
    }

    #[test]
    fn unique_shape_counts() {
        assert_eq!(def('O').unique_shapes, 1);
        assert_eq!(def('I').unique_shapes, 2);
        assert_eq!(def('S').unique_shapes, 2);
        assert_eq!(def('Z').unique_shapes, 2);
        assert_eq!(def('T').unique_shapes, 4);
        assert_eq!(def('J').unique_shapes, 4);
        assert_eq!(def('L').unique_shapes, 4);
    }

    #[test]
    fn defs_resolve_their_own_letter() {
        for letter in LETTERS {
            assert_eq!(def(letter).letter, letter);
        }
    }
}
