//! Field-level rendering tests: full faces flushed into the pixel field and
//! probed pixel by pixel.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tetroclock::clock::{self, DateStamp};
use tetroclock::config::{DateMode, FIELD_HEIGHT, FIELD_WIDTH, Settings, WeekdayFormat};
use tetroclock::face::Face;
use tetroclock::field::Field;
use tetroclock::ui;

fn settled_face(settings: &Settings, seed: u64) -> Face {
    let mut face = Face::new(settings);
    let mut rng = StdRng::seed_from_u64(seed);
    face.apply_layout(clock::digit_layout(12, 34, false));
    face.skip_intro(settings, &mut rng);
    face.step_frame(settings, &mut rng);
    face.date_frame = 0;
    face
}

fn count_color(field: &Field, color: tetroclock::field::Rgb) -> usize {
    let mut n = 0;
    for y in 0..FIELD_HEIGHT as i32 {
        for x in 0..FIELD_WIDTH as i32 {
            if field.get(x, y) == Some(color) {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn hidden_second_dot_removes_only_the_separator() {
    let mut settings = Settings::default();
    settings.date_mode = DateMode::Off;
    settings.normalize();
    let mut face = settled_face(&settings, 20);
    let (_, fg) = ui::theme(&settings);

    let mut field = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
    ui::draw_face(&mut field, &face, &DateStamp::default(), &settings);
    let with_dot = count_color(&field, fg);

    face.show_second_dot = false;
    ui::draw_face(&mut field, &face, &DateStamp::default(), &settings);
    let without_dot = count_color(&field, fg);

    let separator_cells = face.separator().current.len() * 4;
    assert_eq!(with_dot - without_dot, separator_cells);
}

#[test]
fn blink_gate_toggles_a_slot_in_the_rendered_field() {
    let mut settings = Settings::default();
    settings.date_mode = DateMode::Off;
    settings.normalize();
    let mut face = settled_face(&settings, 21);
    let (_, fg) = ui::theme(&settings);

    let mut field = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
    ui::draw_face(&mut field, &face, &DateStamp::default(), &settings);
    let settled = count_color(&field, fg);
    let slot_cells = face.slots[3].current.len() * 4;

    // First gate frame falls in the invisible part of the period.
    face.slots[3].vanishing_frame = 1;
    ui::draw_face(&mut field, &face, &DateStamp::default(), &settings);
    assert_eq!(count_color(&field, fg), settled - slot_cells);

    // Second frame is visible again.
    face.slots[3].vanishing_frame = 2;
    ui::draw_face(&mut field, &face, &DateStamp::default(), &settings);
    assert_eq!(count_color(&field, fg), settled);
}

#[test]
fn inverted_date_mode_fills_the_band_below_the_split() {
    let mut settings = Settings::default();
    settings.date_mode = DateMode::Inverted;
    settings.weekday_format = WeekdayFormat::Marked;
    settings.normalize();
    let face = settled_face(&settings, 22);
    let (bg, fg) = ui::theme(&settings);

    let date = DateStamp {
        day: 17,
        month0: 7,
        weekday0: 1,
    };
    let mut field = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
    ui::draw_face(&mut field, &face, &date, &settings);

    let split = face.date_split_height(&settings);
    assert!(split < FIELD_HEIGHT as i32);
    // Band edges carry the inverted fill; the text inside is background
    // colored, so probe the outermost columns.
    for y in split..FIELD_HEIGHT as i32 {
        assert_eq!(field.get(0, y), Some(fg));
        assert_eq!(field.get(FIELD_WIDTH as i32 - 1, y), Some(fg));
    }
    // Some pixels inside the band must be carved out for the date text.
    let mut carved = 0;
    for y in split..FIELD_HEIGHT as i32 {
        for x in 0..FIELD_WIDTH as i32 {
            if field.get(x, y) == Some(bg) {
                carved += 1;
            }
        }
    }
    assert!(carved > 0, "date text missing from the inverted band");
}

#[test]
fn same_color_date_mode_draws_text_without_the_band() {
    let mut settings = Settings::default();
    settings.date_mode = DateMode::SameColor;
    settings.weekday_format = WeekdayFormat::Text;
    settings.normalize();
    let face = settled_face(&settings, 23);
    let (_, fg) = ui::theme(&settings);

    let date = DateStamp {
        day: 3,
        month0: 0,
        weekday0: 6,
    };

    let mut with_date = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
    ui::draw_face(&mut with_date, &face, &date, &settings);

    let mut off = settings.clone();
    off.date_mode = DateMode::Off;
    let mut without_date = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
    ui::draw_face(&mut without_date, &face, &date, &off);

    let split = face.date_split_height(&settings);
    assert_eq!(with_date.get(0, split), without_date.get(0, split));
    assert!(count_color(&with_date, fg) > count_color(&without_date, fg));
}

#[test]
fn field_lines_cover_half_the_pixel_rows() {
    let settings = {
        let mut s = Settings::default();
        s.normalize();
        s
    };
    let face = settled_face(&settings, 24);
    let mut field = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
    ui::draw_face(&mut field, &face, &DateStamp::default(), &settings);

    let lines = field.lines();
    assert_eq!(lines.len(), FIELD_HEIGHT / 2);
    for line in &lines {
        let cells: usize = line
            .spans
            .iter()
            .map(|s| s.content.chars().count())
            .sum();
        assert_eq!(cells, FIELD_WIDTH);
    }
}
