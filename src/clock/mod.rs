use chrono::{Datelike, Local, Timelike};

use crate::config::SLOT_COUNT;
use crate::face::{GLYPH_BLANK, GLYPH_COLON};

/// One sample of wall-clock time, reduced to the fields the face needs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub day: u32,
    /// 0 = January.
    pub month0: u32,
    /// 0 = Sunday.
    pub weekday0: u32,
}

pub fn now() -> ClockTime {
    let t = Local::now();
    ClockTime {
        hour: t.hour(),
        minute: t.minute(),
        second: t.second(),
        day: t.day(),
        month0: t.month0(),
        weekday0: t.weekday().num_days_from_sunday(),
    }
}

/// The calendar fields the date area renders; refreshed on day changes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct DateStamp {
    pub day: u32,
    pub month0: u32,
    pub weekday0: u32,
}

impl From<ClockTime> for DateStamp {
    fn from(t: ClockTime) -> Self {
        Self {
            day: t.day,
            month0: t.month0,
            weekday0: t.weekday0,
        }
    }
}

/// Which time units changed between two samples. The first sample (no
/// predecessor) reports everything as changed.
#[derive(Clone, Copy, Default, Debug)]
pub struct ChangedUnits {
    pub day: bool,
    pub hour: bool,
    pub minute: bool,
    pub second: bool,
}

pub fn changed_units(prev: Option<ClockTime>, cur: ClockTime) -> ChangedUnits {
    match prev {
        None => ChangedUnits {
            day: true,
            hour: true,
            minute: true,
            second: true,
        },
        Some(p) => ChangedUnits {
            day: p.day != cur.day || p.month0 != cur.month0,
            hour: p.hour != cur.hour,
            minute: p.minute != cur.minute,
            second: p.second != cur.second,
        },
    }
}

// Slot x offsets. Suppressing a leading zero in 12-hour mode frees room, so
// the remaining digits shift left to stay centered.
const OFFSETS_WIDE: [i32; SLOT_COUNT] = [1, 9, 21, 29, 15];
const OFFSETS_NARROW: [i32; SLOT_COUNT] = [0, 5, 17, 25, 11];

/// Glyph value and x offset per slot for a given time of day.
pub fn digit_layout(hour: u32, minute: u32, twelve_hour: bool) -> [(i8, i32); SLOT_COUNT] {
    let mut hour = hour;
    if twelve_hour {
        hour %= 12;
        if hour == 0 {
            hour = 12;
        }
    }

    let mut values = [
        (hour / 10) as i8,
        (hour % 10) as i8,
        (minute / 10) as i8,
        (minute % 10) as i8,
        GLYPH_COLON,
    ];

    let offsets = if twelve_hour && values[0] == 0 {
        values[0] = GLYPH_BLANK;
        OFFSETS_NARROW
    } else {
        OFFSETS_WIDE
    };

    std::array::from_fn(|i| (values[i], offsets[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_24h_keeps_the_leading_zero() {
        let layout = digit_layout(9, 5, false);
        assert_eq!(layout[0].0, 0);
        assert_eq!(layout[1].0, 9);
        assert_eq!(layout[2].0, 0);
        assert_eq!(layout[3].0, 5);
        assert_eq!(layout[4].0, GLYPH_COLON);
        assert_eq!(layout[0].1, OFFSETS_WIDE[0]);
    }

    #[test]
    fn layout_12h_blanks_the_leading_zero_and_shifts() {
        let layout = digit_layout(21, 30, true);
        assert_eq!(layout[0].0, GLYPH_BLANK);
        assert_eq!(layout[1].0, 9);
        assert_eq!(layout[0].1, OFFSETS_NARROW[0]);
        assert_eq!(layout[4].1, OFFSETS_NARROW[4]);
    }

    #[test]
    fn layout_12h_midnight_reads_twelve() {
        let layout = digit_layout(0, 0, true);
        assert_eq!(layout[0].0, 1);
        assert_eq!(layout[1].0, 2);
        assert_eq!(layout[0].1, OFFSETS_WIDE[0]);
    }

    #[test]
    fn layout_12h_ten_and_later_keep_two_digits() {
        let layout = digit_layout(22, 0, true);
        assert_eq!(layout[0].0, 1);
        assert_eq!(layout[1].0, 0);
        assert_eq!(layout[0].1, OFFSETS_WIDE[0]);
    }

    #[test]
    fn changed_units_first_sample_reports_everything() {
        let t = ClockTime {
            hour: 1,
            minute: 2,
            second: 3,
            day: 4,
            month0: 5,
            weekday0: 6,
        };
        let u = changed_units(None, t);
        assert!(u.day && u.hour && u.minute && u.second);
    }

    #[test]
    fn changed_units_tracks_single_fields() {
        let a = ClockTime {
            hour: 10,
            minute: 20,
            second: 30,
            day: 1,
            month0: 0,
            weekday0: 0,
        };
        let mut b = a;
        b.second = 31;
        let u = changed_units(Some(a), b);
        assert!(u.second && !u.minute && !u.hour && !u.day);
    }
}
