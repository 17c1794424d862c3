use rand::Rng;

use crate::config::{ANIMATION_SPACING_Y, DIGIT_WIDTH, Settings, TETRIMINO_MASK_SIZE};
use crate::face::digits::{self, TetriminoPos};
use crate::face::tetromino;

/// Animation state of one digit slot.
///
/// `next_value`/`next_offset_x` hold the latest pending request and are
/// consumed only after the blink-out gate has run its course; later requests
/// simply overwrite earlier ones. `current` grows piece by piece toward
/// `target` while `falling`, and `ages` runs parallel to `current`.
#[derive(Clone, Debug)]
pub struct DigitState {
    pub offset_x: i32,
    pub next_offset_x: i32,
    pub offset_y: i32,

    pub falling: bool,

    pub target_value: i8,
    pub next_value: i8,
    pub target: Vec<TetriminoPos>,
    pub current: Vec<TetriminoPos>,
    pub ages: Vec<i32>,

    pub action_height: i32,
    pub vanishing_frame: i32,

    pub restricted_spawn_width: bool,
}

impl DigitState {
    pub fn new() -> Self {
        Self {
            offset_x: 0,
            next_offset_x: 0,
            offset_y: 0,
            falling: false,
            target_value: -1,
            next_value: -1,
            target: Vec::new(),
            current: Vec::new(),
            ages: Vec::new(),
            action_height: 0,
            vanishing_frame: 0,
            restricted_spawn_width: false,
        }
    }

    /// Record a pending glyph/offset request. The caller is responsible for
    /// kicking the frame scheduler if it is currently idle.
    pub fn request(&mut self, value: i8, offset_x: i32) {
        self.next_value = value;
        self.next_offset_x = offset_x;
    }

    pub fn has_pending(&self) -> bool {
        self.next_value != self.target_value || self.next_offset_x != self.offset_x
    }

    /// True while the slot still needs frame ticks.
    pub fn is_animating(&self) -> bool {
        self.falling || self.vanishing_frame > 0
    }

    /// Advance the slot by one simulated frame.
    pub fn step<R: Rng>(&mut self, settings: &Settings, rng: &mut R) {
        if !self.falling {
            if self.has_pending() {
                if self.vanishing_frame > settings.blink_cycles * settings.blink_period() {
                    self.commit_pending(settings);
                } else {
                    self.vanishing_frame += 1;
                    return;
                }
            } else {
                return;
            }
        }

        let max_age = settings.max_tetrimino_age();
        let mut last_y = TETRIMINO_MASK_SIZE;
        for i in 0..self.current.len() {
            let target_pos = self.target[i];
            let cur = &mut self.current[i];

            let height_remaining = target_pos.y - cur.y;
            let moves_needed = (target_pos.x - cur.x).abs();
            let rotations_needed =
                (i32::from(target_pos.rotation) - i32::from(cur.rotation)).rem_euclid(4);
            let actions_needed = moves_needed + rotations_needed;

            // Recompute only when the piece crosses the previous threshold;
            // the remaining actions are spread over the remaining fall, with
            // one pure fall step always held back.
            if self.action_height >= cur.y {
                self.action_height = cur.y + height_remaining / (actions_needed + 1);
            }

            if cur.y < target_pos.y {
                cur.y += 1;
            } else if self.ages[i] < max_age {
                self.ages[i] += 1;
            }

            if cur.y >= self.action_height {
                if moves_needed > rotations_needed {
                    cur.x += (target_pos.x - cur.x).signum();
                } else if rotations_needed > 0 {
                    cur.rotation = (cur.rotation + 1) % 4;
                }
            }

            last_y = cur.y;
        }

        if self.current.len() < self.target.len() {
            let target_pos = self.target[self.current.len()];
            let def = tetromino::def(target_pos.letter);

            let start_y = -self.offset_y - def.size + 1;
            if last_y >= start_y + ANIMATION_SPACING_Y {
                let x = if self.restricted_spawn_width {
                    let spawn_width = 4;
                    rng.gen_range(0..spawn_width - def.size + 1) + (DIGIT_WIDTH - spawn_width) / 2
                } else {
                    rng.gen_range(0..DIGIT_WIDTH - def.size + 1)
                };
                let rotation_unique = rng.gen_range(0..i32::from(def.unique_shapes));
                let rotation =
                    (i32::from(target_pos.rotation) - rotation_unique).rem_euclid(4) as u8;
                self.current.push(TetriminoPos {
                    letter: target_pos.letter,
                    x,
                    y: start_y,
                    rotation,
                });
                self.ages.push(0);
                self.action_height = start_y;
            }
        }

        if self.current.len() == self.target.len() {
            let settled = match self.current.last() {
                None => true,
                Some(last) => {
                    *last == self.target[self.target.len() - 1]
                        && self.ages[self.ages.len() - 1] >= max_age
                }
            };
            if settled {
                self.falling = false;
            }
        }
    }

    fn commit_pending(&mut self, settings: &Settings) {
        self.target_value = self.next_value;
        self.offset_x = self.next_offset_x;
        let table = digits::assembly(self.target_value);
        self.target = if settings.dynamic_assembly {
            digits::reorder(&self.current, table)
        } else {
            table.to_vec()
        };
        self.current.clear();
        self.ages.clear();
        self.falling = true;
        self.vanishing_frame = 0;
    }

    /// Jump straight to the settled end state of the pending request. Used
    /// when the initial assembly animation is disabled.
    pub fn force_settle<R: Rng>(&mut self, settings: &Settings, rng: &mut R) {
        self.vanishing_frame = settings.blink_cycles * settings.blink_period() + 1;
        self.step(settings, rng);
        self.current = self.target.clone();
        self.ages = vec![settings.max_tetrimino_age(); self.current.len()];
    }
}

impl Default for DigitState {
    fn default() -> Self {
        Self::new()
    }
}
