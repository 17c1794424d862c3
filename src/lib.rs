pub mod app;
pub mod clock;
pub mod config;
pub mod face;
pub mod field;
pub mod font;
pub mod ui;

pub use config::{
    ANIMATION_SPACING_Y, DIGIT_HEIGHT, DIGIT_MAX_TETRIMINOS, DIGIT_WIDTH, FIELD_HEIGHT,
    FIELD_WIDTH, SEPARATOR_SLOT, SLOT_COUNT, Settings,
};
pub use face::{DigitState, Face};
