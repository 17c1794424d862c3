use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::clock::DateStamp;
use crate::config::{
    AGE_COLOR_UNIT, DateMode, FIELD_HEIGHT, FIELD_WIDTH, MIN_COLS, MIN_ROWS, MonthFormat,
    Settings, WeekdayFormat,
};
use crate::face::{DigitState, Face, TetriminoDef, TetriminoPos};
use crate::field::{Field, Rgb};
use crate::font;

pub const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];
pub const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
const DAY_LETTERS: [char; 7] = ['S', 'M', 'T', 'W', 'T', 'F', 'S'];

pub fn theme(settings: &Settings) -> (Rgb, Rgb) {
    if settings.light_theme {
        (Rgb::new(255, 255, 255), Rgb::new(0, 0, 0))
    } else {
        (Rgb::new(0, 0, 0), Rgb::new(255, 255, 255))
    }
}

/// Rebuild the whole field from the face state: four digits, the separator
/// (subject to the second-dot toggle), and the date area.
pub fn draw_face(field: &mut Field, face: &Face, date: &DateStamp, settings: &Settings) {
    let (bg, fg) = theme(settings);
    field.reset(bg);

    for slot in &face.slots[..crate::config::SEPARATOR_SLOT] {
        draw_digit_state(field, slot, settings, fg);
    }
    let sep = face.separator();
    if face.show_second_dot || sep.falling || sep.vanishing_frame > 0 {
        draw_digit_state(field, sep, settings, fg);
    }

    draw_date(field, face, date, settings, fg, bg);
}

/// Fast path for the second-dot toggle: overwrite just the separator's
/// pixels in the already-drawn field instead of rebuilding everything.
pub fn draw_separator_direct(field: &mut Field, face: &Face, settings: &Settings) {
    let (bg, fg) = theme(settings);
    let sep = face.separator();
    let color = if face.show_second_dot { fg } else { bg };
    for tp in &sep.current {
        draw_tetrimino_flat(field, tp, sep.offset_x, sep.offset_y, color);
    }
}

/// A slot mid-blink is invisible during the leading part of each period.
fn slot_hidden(state: &DigitState, settings: &Settings) -> bool {
    if state.vanishing_frame == 0 {
        return false;
    }
    let in_period = (state.vanishing_frame - 1) % settings.blink_period();
    in_period < settings.blink_invisible_frames
}

fn draw_digit_state(field: &mut Field, state: &DigitState, settings: &Settings, fg: Rgb) {
    if slot_hidden(state, settings) {
        return;
    }
    for (tp, age) in state.current.iter().zip(&state.ages) {
        let def = crate::face::def(tp.letter);
        let color = piece_color(def, *age, settings, fg);
        draw_tetrimino_flat(field, tp, state.offset_x, state.offset_y, color);
    }
}

fn draw_tetrimino_flat(field: &mut Field, tp: &TetriminoPos, ox: i32, oy: i32, color: Rgb) {
    for &(mx, my) in crate::face::cells(tp.letter, tp.rotation) {
        field.draw(tp.x + mx + ox, tp.y + my + oy, color);
    }
}

/// Age-based interpolation from the shape color toward the foreground, one
/// color unit per elapsed age step, clamped per channel. Monochrome
/// rendering skips the fade entirely.
fn piece_color(def: &TetriminoDef, age: i32, settings: &Settings, fg: Rgb) -> Rgb {
    if settings.monochrome || age >= settings.max_tetrimino_age() {
        return fg;
    }
    let age_step = age / settings.age_step_frames;
    if age_step == 0 {
        return def.color;
    }
    let max_step = age_step * AGE_COLOR_UNIT;
    Rgb {
        r: step_toward(def.color.r, fg.r, max_step),
        g: step_toward(def.color.g, fg.g, max_step),
        b: step_toward(def.color.b, fg.b, max_step),
    }
}

fn step_toward(current: u8, target: u8, max_step: i32) -> u8 {
    let current = i32::from(current);
    let target = i32::from(target);
    if current > target {
        (current - max_step.min(current - target)) as u8
    } else {
        (current + max_step.min(target - current)) as u8
    }
}

fn draw_date(
    field: &mut Field,
    face: &Face,
    date: &DateStamp,
    settings: &Settings,
    fg: Rgb,
    bg: Rgb,
) {
    if settings.date_mode == DateMode::Off {
        return;
    }

    let split = face.date_split_height(settings);
    let date_color = if settings.date_mode == DateMode::Inverted {
        for y in split..FIELD_HEIGHT as i32 {
            for x in 0..FIELD_WIDTH as i32 {
                field.draw(x, y, fg);
            }
        }
        bg
    } else {
        fg
    };

    let first_line = split + settings.time_date_spacing_2;
    let second_line = first_line + font::GLYPH_HEIGHT + settings.date_line_spacing;

    draw_date_line(field, date, settings, first_line, date_color);
    match settings.weekday_format {
        WeekdayFormat::Marked => {
            draw_marked_weekday_line(field, date, settings, second_line - 1, date_color, false)
        }
        WeekdayFormat::Letter => {
            draw_marked_weekday_line(field, date, settings, second_line, date_color, true)
        }
        WeekdayFormat::Text => draw_weekday_line(field, date, second_line, date_color),
        WeekdayFormat::Hidden => {}
    }
}

fn date_word(date: &DateStamp, settings: &Settings) -> &'static str {
    match settings.month_format {
        MonthFormat::MonthBefore | MonthFormat::MonthAfter => MONTHS[date.month0 as usize % 12],
        MonthFormat::WeekdayBefore | MonthFormat::WeekdayAfter => {
            WEEKDAYS[date.weekday0 as usize % 7]
        }
    }
}

fn draw_date_line(field: &mut Field, date: &DateStamp, settings: &Settings, y: i32, color: Rgb) {
    let day = date.day.to_string();
    let word = date_word(date, settings);
    let word_before = matches!(
        settings.month_format,
        MonthFormat::MonthBefore | MonthFormat::WeekdayBefore
    );

    let width = font::text_width(&day) + font::text_width(word) + settings.date_word_spacing;
    let mut offset = (FIELD_WIDTH as i32 - width + 1) / 2;

    if word_before {
        font::draw_text_move(field, &mut offset, y, word, color, settings.date_word_spacing);
        font::draw_text(field, offset, y, &day, color);
    } else {
        font::draw_text_move(field, &mut offset, y, &day, color, settings.date_word_spacing);
        font::draw_text(field, offset, y, word, color);
    }
}

fn draw_weekday_line(field: &mut Field, date: &DateStamp, y: i32, color: Rgb) {
    let word = WEEKDAYS[date.weekday0 as usize % 7];
    let x = (FIELD_WIDTH as i32 - font::text_width(word) + 1) / 2;
    font::draw_text(field, x, y, word, color);
}

fn draw_marked_weekday_line(
    field: &mut Field,
    date: &DateStamp,
    settings: &Settings,
    y: i32,
    color: Rgb,
    use_letter: bool,
) {
    let width = 7 * font::GLYPH_WIDTH + 6 * font::LETTER_SPACING;
    let mut x = (FIELD_WIDTH as i32 - width + 1) / 2;
    for i in 0..7 {
        let day = (settings.first_weekday + i) % 7;
        if day == date.weekday0 {
            if use_letter {
                if let Some(g) = font::glyph(DAY_LETTERS[day as usize]) {
                    font::draw_glyph(field, g, x, y, color);
                }
            } else {
                font::draw_glyph(field, &font::MARK_BLOCK, x, y, color);
            }
        } else {
            font::draw_glyph(field, &font::MARK_DOT, x, y, color);
        }
        x += font::GLYPH_WIDTH + font::LETTER_SPACING;
    }
}

/// Flush the field into the terminal frame, centered inside a thin border.
pub fn render(frame: &mut Frame, field: &Field) {
    let area = frame.size();

    if area.width < MIN_COLS || area.height < MIN_ROWS {
        let msg = Paragraph::new(format!("RESIZE TERMINAL (min {MIN_COLS}x{MIN_ROWS})"))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("TETROCLOCK"));
        frame.render_widget(msg, area);
        return;
    }

    let col = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(MIN_COLS),
            Constraint::Min(0),
        ])
        .split(area)[1];
    let cell = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(MIN_ROWS),
            Constraint::Min(0),
        ])
        .split(col)[1];

    let block = Block::default()
        .title("TETROCLOCK")
        .border_type(BorderType::Rounded)
        .borders(Borders::ALL);
    let inner = block.inner(cell);
    frame.render_widget(block, cell);
    frame.render_widget(Paragraph::new(field.lines()), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn settings() -> Settings {
        let mut s = Settings::default();
        s.normalize();
        s
    }

    fn settled_face(settings: &Settings) -> Face {
        let mut face = Face::new(settings);
        let mut rng = StdRng::seed_from_u64(11);
        face.apply_layout(clock::digit_layout(12, 34, false));
        face.skip_intro(settings, &mut rng);
        face.step_frame(settings, &mut rng);
        face.date_frame = 0;
        face
    }

    #[test]
    fn fresh_pieces_wear_their_shape_color() {
        let s = settings();
        let (_, fg) = theme(&s);
        let def = crate::face::def('Z');
        assert_eq!(piece_color(def, 0, &s, fg), def.color);
        assert_eq!(piece_color(def, s.max_tetrimino_age(), &s, fg), fg);
    }

    #[test]
    fn fade_is_monotonic_per_channel() {
        let s = settings();
        let (_, fg) = theme(&s);
        let def = crate::face::def('T');
        let mut last = piece_color(def, 0, &s, fg);
        for age in 1..=s.max_tetrimino_age() {
            let c = piece_color(def, age, &s, fg);
            for (prev, (cur, target)) in [last.r, last.g, last.b]
                .into_iter()
                .zip([c.r, c.g, c.b].into_iter().zip([fg.r, fg.g, fg.b]))
            {
                let before = i32::from(prev).abs_diff(i32::from(target));
                let after = i32::from(cur).abs_diff(i32::from(target));
                assert!(after <= before, "channel moved away from foreground");
            }
            last = c;
        }
        assert_eq!(last, fg);
    }

    #[test]
    fn monochrome_skips_the_fade() {
        let mut s = settings();
        s.monochrome = true;
        let (_, fg) = theme(&s);
        assert_eq!(piece_color(crate::face::def('I'), 1, &s, fg), fg);
    }

    #[test]
    fn blink_hides_the_invisible_part_of_each_period() {
        let s = settings(); // invis 1, vis 2: frame 1 of each period is dark
        let mut state = DigitState::new();
        state.vanishing_frame = 1;
        assert!(slot_hidden(&state, &s));
        state.vanishing_frame = 2;
        assert!(!slot_hidden(&state, &s));
        state.vanishing_frame = 3;
        assert!(!slot_hidden(&state, &s));
        state.vanishing_frame = 4;
        assert!(slot_hidden(&state, &s));
        state.vanishing_frame = 0;
        assert!(!slot_hidden(&state, &s));
    }

    #[test]
    fn settled_face_paints_every_resting_cell() {
        let mut s = settings();
        s.date_mode = DateMode::Off;
        s.normalize();
        let face = settled_face(&s);
        let (_, fg) = theme(&s);
        let mut field = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
        let date = DateStamp::default();
        draw_face(&mut field, &face, &date, &s);

        let expected: usize = face.slots.iter().map(|sl| sl.current.len() * 4).sum();
        let mut painted = 0;
        for y in 0..FIELD_HEIGHT as i32 {
            for x in 0..FIELD_WIDTH as i32 {
                if field.get(x, y) == Some(fg) {
                    painted += 1;
                }
            }
        }
        assert_eq!(painted, expected);
    }

    #[test]
    fn separator_direct_draw_toggles_only_the_dots() {
        let mut s = settings();
        s.date_mode = DateMode::Off;
        s.normalize();
        let mut face = settled_face(&s);
        let (bg, fg) = theme(&s);
        let mut field = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
        draw_face(&mut field, &face, &DateStamp::default(), &s);

        let sep = face.separator();
        let probe = sep.current[0];
        let (mx, my) = crate::face::cells(probe.letter, probe.rotation)[0];
        let px = probe.x + mx + sep.offset_x;
        let py = probe.y + my + sep.offset_y;
        assert_eq!(field.get(px, py), Some(fg));

        face.show_second_dot = false;
        draw_separator_direct(&mut field, &face, &s);
        assert_eq!(field.get(px, py), Some(bg));

        face.show_second_dot = true;
        draw_separator_direct(&mut field, &face, &s);
        assert_eq!(field.get(px, py), Some(fg));
    }
}
