use std::error::Error;
use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::clock::{self, DateStamp};
use crate::config::{FIELD_HEIGHT, FIELD_WIDTH, Settings};
use crate::face::{self, Face};
use crate::field::Field;
use crate::ui;

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), Box<dyn Error>> {
    // A broken assembly table is a build defect; refuse to start on one.
    face::validate_tables()?;

    let mut settings = Settings::from_env();
    settings.normalize();

    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), &settings)
}

/// What changed since the last paint. Full redraws subsume the second-dot
/// fast path, and repeated marks coalesce into one paint.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Redraw {
    Full,
    SecondDot,
    None,
}

impl Redraw {
    fn mark(&mut self, want: Redraw) {
        if want == Redraw::Full || *self == Redraw::None {
            *self = want;
        }
    }
}

fn run_loop(terminal: &mut Term, settings: &Settings) -> Result<(), Box<dyn Error>> {
    let mut rng: StdRng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut face = Face::new(settings);
    let mut field = Field::new(FIELD_WIDTH, FIELD_HEIGHT);
    let frame_interval = Duration::from_millis(settings.frame_ms);

    // Prime the face from the current wall clock before the first paint.
    let first = clock::now();
    let mut date = DateStamp::from(first);
    face.apply_layout(clock::digit_layout(first.hour, first.minute, settings.twelve_hour));
    if !settings.animate_second_dot {
        face.show_second_dot = true;
    }
    if settings.skip_intro {
        face.skip_intro(settings, &mut rng);
    }
    face.step_frame(settings, &mut rng);
    let mut animating = face.is_animating();
    let mut last_frame = Instant::now();
    let mut last_time = Some(first);
    let mut redraw = Redraw::Full;

    loop {
        let now = clock::now();
        let units = clock::changed_units(last_time, now);
        last_time = Some(now);

        if units.day {
            date = DateStamp::from(now);
            redraw.mark(Redraw::Full);
        }

        if units.minute {
            let layout = clock::digit_layout(now.hour, now.minute, settings.twelve_hour);
            let changed = face.apply_layout(layout);
            // The scheduler never polls for pending work; whoever queues a
            // change while it sleeps must kick it.
            if changed && !animating {
                face.step_frame(settings, &mut rng);
                last_frame = Instant::now();
                animating = face.is_animating();
                redraw.mark(Redraw::Full);
            }
        }

        if units.second && settings.animate_second_dot {
            face.show_second_dot = now.second % 2 == 1;
            if animating {
                redraw.mark(Redraw::Full);
            } else {
                redraw.mark(Redraw::SecondDot);
            }
        }

        if animating && last_frame.elapsed() >= frame_interval {
            face.step_frame(settings, &mut rng);
            last_frame = Instant::now();
            animating = face.is_animating();
            redraw.mark(Redraw::Full);
        }

        match redraw {
            Redraw::Full => ui::draw_face(&mut field, &face, &date, settings),
            Redraw::SecondDot => ui::draw_separator_direct(&mut field, &face, settings),
            Redraw::None => {}
        }
        terminal.draw(|frame| ui::render(frame, &field))?;
        redraw = Redraw::None;

        let timeout = if animating {
            frame_interval.saturating_sub(last_frame.elapsed())
        } else {
            Duration::from_millis(50)
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    _ => {}
                },
                Event::Resize(_, _) => redraw.mark(Redraw::Full),
                _ => {}
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
