// Field/glyph geometry and the runtime settings store.
//
// The pixel field is sized so that two pixel rows collapse into one terminal
// row when flushed with half-block glyphs.
pub const FIELD_WIDTH: usize = 36;
pub const FIELD_HEIGHT: usize = 42;

pub const DIGIT_WIDTH: i32 = 6;
pub const DIGIT_HEIGHT: i32 = 10;

/// Five slots: hours-tens, hours-ones, minutes-tens, minutes-ones, separator.
pub const SLOT_COUNT: usize = 5;
pub const SEPARATOR_SLOT: usize = 4;

/// Fixed storage bound for pieces per glyph; the assembly table is checked
/// against this at startup.
pub const DIGIT_MAX_TETRIMINOS: usize = 13;

pub const TETRIMINO_MASK_SIZE: i32 = 4;
/// Vertical gap a piece must clear before the next one may spawn above it.
pub const ANIMATION_SPACING_Y: i32 = TETRIMINO_MASK_SIZE + 1;

pub const MAX_TETRIMINO_AGE_STEPS: i32 = 3;
/// Channel units moved toward the foreground color per age step. Three steps
/// cover the full 8-bit range, so a fully aged piece always reaches it.
pub const AGE_COLOR_UNIT: i32 = 85;

/// Minimal terminal area: the field plus a one-cell border.
pub const MIN_COLS: u16 = FIELD_WIDTH as u16 + 2;
pub const MIN_ROWS: u16 = (FIELD_HEIGHT / 2) as u16 + 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DateMode {
    Inverted,
    SameColor,
    Off,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MonthFormat {
    MonthBefore,
    MonthAfter,
    WeekdayBefore,
    WeekdayAfter,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WeekdayFormat {
    Marked,
    Letter,
    Text,
    Hidden,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub light_theme: bool,
    pub monochrome: bool,
    pub twelve_hour: bool,
    pub animate_second_dot: bool,
    pub skip_intro: bool,
    /// Match old pieces to new target pieces by shape on commit.
    pub dynamic_assembly: bool,

    pub date_mode: DateMode,
    pub month_format: MonthFormat,
    pub weekday_format: WeekdayFormat,
    /// 0 = Sunday.
    pub first_weekday: u32,

    pub time_offset: i32,
    pub time_date_spacing_1: i32,
    pub time_date_spacing_2: i32,
    pub date_word_spacing: i32,
    pub date_line_spacing: i32,

    pub frame_ms: u64,
    pub blink_visible_frames: i32,
    pub blink_invisible_frames: i32,
    pub blink_cycles: i32,
    pub date_period_frames: i32,
    pub age_step_frames: i32,

    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            light_theme: false,
            monochrome: false,
            twelve_hour: false,
            animate_second_dot: true,
            skip_intro: false,
            dynamic_assembly: false,
            date_mode: DateMode::Inverted,
            month_format: MonthFormat::MonthBefore,
            weekday_format: WeekdayFormat::Text,
            first_weekday: 0,
            time_offset: 0,
            time_date_spacing_1: 2,
            time_date_spacing_2: 2,
            date_word_spacing: 3,
            date_line_spacing: 2,
            frame_ms: 100,
            blink_visible_frames: 2,
            blink_invisible_frames: 1,
            blink_cycles: 3,
            date_period_frames: 4,
            age_step_frames: 5,
            seed: None,
        }
    }
}

impl Settings {
    /// Defaults overridden by `CLOCK_*` environment variables.
    pub fn from_env() -> Self {
        let mut s = Self::default();
        if let Some(v) = env_flag("CLOCK_LIGHT") {
            s.light_theme = v;
        }
        if let Some(v) = env_flag("CLOCK_MONO") {
            s.monochrome = v;
        }
        if let Some(v) = env_flag("CLOCK_12H") {
            s.twelve_hour = v;
        }
        if let Some(v) = env_flag("CLOCK_SECOND_DOT") {
            s.animate_second_dot = v;
        }
        if let Some(v) = env_flag("CLOCK_SKIP_INTRO") {
            s.skip_intro = v;
        }
        if let Some(v) = env_flag("CLOCK_REASSEMBLY") {
            s.dynamic_assembly = v;
        }
        if let Ok(v) = std::env::var("CLOCK_DATE") {
            s.date_mode = match v.as_str() {
                "inverted" => DateMode::Inverted,
                "same" => DateMode::SameColor,
                "off" => DateMode::Off,
                _ => s.date_mode,
            };
        }
        if let Ok(v) = std::env::var("CLOCK_WEEKDAY") {
            s.weekday_format = match v.as_str() {
                "marked" => WeekdayFormat::Marked,
                "letter" => WeekdayFormat::Letter,
                "text" => WeekdayFormat::Text,
                "off" => WeekdayFormat::Hidden,
                _ => s.weekday_format,
            };
        }
        if let Ok(v) = std::env::var("CLOCK_MONTH") {
            s.month_format = match v.as_str() {
                "before" => MonthFormat::MonthBefore,
                "after" => MonthFormat::MonthAfter,
                "weekday-before" => MonthFormat::WeekdayBefore,
                "weekday-after" => MonthFormat::WeekdayAfter,
                _ => s.month_format,
            };
        }
        if let Some(v) = env_num("CLOCK_FIRST_WEEKDAY") {
            s.first_weekday = v as u32;
        }
        if let Some(v) = env_num("CLOCK_FRAME_MS") {
            s.frame_ms = v;
        }
        if let Some(v) = env_num("CLOCK_SEED") {
            s.seed = Some(v);
        }
        s
    }

    /// Clamp every numeric option into its working range and derive the
    /// layout values that depend on other options.
    pub fn normalize(&mut self) {
        self.first_weekday %= 7;
        self.frame_ms = self.frame_ms.max(16);
        self.blink_visible_frames = self.blink_visible_frames.max(1);
        self.blink_invisible_frames = self.blink_invisible_frames.max(0);
        self.blink_cycles = self.blink_cycles.max(0);
        self.date_period_frames = self.date_period_frames.max(1);
        self.age_step_frames = self.age_step_frames.max(1);

        // A dedicated text weekday line next to a weekday word in the date
        // line would repeat the same name; drop the dedicated line.
        if self.weekday_format == WeekdayFormat::Text
            && matches!(
                self.month_format,
                MonthFormat::WeekdayBefore | MonthFormat::WeekdayAfter
            )
        {
            self.weekday_format = WeekdayFormat::Hidden;
        }

        self.time_offset = if self.date_mode == DateMode::Off {
            0
        } else {
            match self.weekday_format {
                WeekdayFormat::Marked => 1,
                WeekdayFormat::Letter => 2,
                WeekdayFormat::Text => 2,
                WeekdayFormat::Hidden => 1,
            }
        };
    }

    pub fn blink_period(&self) -> i32 {
        self.blink_visible_frames + self.blink_invisible_frames
    }

    pub fn max_tetrimino_age(&self) -> i32 {
        MAX_TETRIMINO_AGE_STEPS * self.age_step_frames
    }
}

fn env_flag(key: &str) -> Option<bool> {
    match std::env::var(key).ok()?.as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn env_num(key: &str) -> Option<u64> {
    std::env::var(key).ok()?.parse().ok()
}
