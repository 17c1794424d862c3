use rand::Rng;

use crate::config::{
    DIGIT_HEIGHT, DateMode, FIELD_HEIGHT, SEPARATOR_SLOT, SLOT_COUNT, Settings,
};

mod digits;
mod state;
mod tetromino;

pub use digits::{
    GLYPH_BLANK, GLYPH_COLON, TetriminoPos, assembly, reorder, validate_tables,
};
pub use state::DigitState;
pub use tetromino::{LETTERS, TetriminoDef, cells, def};

/// The five digit slots plus the face-wide animation counters.
pub struct Face {
    pub slots: [DigitState; SLOT_COUNT],
    /// Countdown for the date reveal slide; zero once the date is in place.
    pub date_frame: i32,
    pub show_second_dot: bool,
}

impl Face {
    pub fn new(settings: &Settings) -> Self {
        let mut face = Self {
            slots: std::array::from_fn(|_| DigitState::new()),
            date_frame: 0,
            show_second_dot: true,
        };
        face.slots[SEPARATOR_SLOT].restricted_spawn_width = true;
        face.apply_settings(settings);
        face
    }

    /// Re-derive per-slot layout and the reveal counter from settings.
    pub fn apply_settings(&mut self, settings: &Settings) {
        let mut offset_y = (FIELD_HEIGHT as i32 - DIGIT_HEIGHT) / 2;
        if settings.date_mode != DateMode::Off {
            offset_y -= settings.time_offset;
        }
        for slot in &mut self.slots {
            slot.offset_y = offset_y;
        }

        self.date_frame = if settings.skip_intro {
            0
        } else {
            (FIELD_HEIGHT as i32 - self.final_date_split_height(settings))
                * settings.date_period_frames
        };
    }

    /// Resting y of the boundary between the clock and the date area.
    pub fn final_date_split_height(&self, settings: &Settings) -> i32 {
        self.slots[0].offset_y + DIGIT_HEIGHT + settings.time_date_spacing_1
    }

    /// Boundary y for the current frame, still sliding while the reveal
    /// counter is positive.
    pub fn date_split_height(&self, settings: &Settings) -> i32 {
        self.final_date_split_height(settings)
            + (self.date_frame + settings.date_period_frames - 1) / settings.date_period_frames
    }

    /// Record pending glyph requests for a minute tick. Returns true when any
    /// slot picked up a new request, in which case an idle scheduler must be
    /// kicked.
    pub fn apply_layout(&mut self, layout: [(i8, i32); SLOT_COUNT]) -> bool {
        let mut changed = false;
        for (slot, (value, offset_x)) in self.slots.iter_mut().zip(layout) {
            if slot.next_value != value || slot.next_offset_x != offset_x {
                slot.request(value, offset_x);
                changed = true;
            }
        }
        changed
    }

    /// One scheduler tick: advance the reveal counter and every slot.
    pub fn step_frame<R: Rng>(&mut self, settings: &Settings, rng: &mut R) {
        if self.date_frame > 0 {
            self.date_frame -= 1;
        }
        for slot in &mut self.slots {
            slot.step(settings, rng);
        }
    }

    /// True while the scheduler must keep re-arming its timer.
    pub fn is_animating(&self) -> bool {
        self.date_frame > 0 || self.slots.iter().any(|s| s.is_animating())
    }

    /// Settle every slot on its pending request without animating.
    pub fn skip_intro<R: Rng>(&mut self, settings: &Settings, rng: &mut R) {
        for slot in &mut self.slots {
            slot.force_settle(settings, rng);
        }
    }

    pub fn separator(&self) -> &DigitState {
        &self.slots[SEPARATOR_SLOT]
    }
}
