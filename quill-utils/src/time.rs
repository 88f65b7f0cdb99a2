use chrono::{Local, NaiveTime};

/// How entry timestamps are displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockFormat {
    #[default]
    H24,
    H12,
}

impl ClockFormat {
    pub fn from_24h(enabled: bool) -> Self {
        if enabled { Self::H24 } else { Self::H12 }
    }

    fn pattern(self) -> &'static str {
        match self {
            ClockFormat::H24 => "%H:%M",
            ClockFormat::H12 => "%I:%M %p",
        }
    }
}

/// Format a wall-clock time as hour:minute.
pub fn format_clock(time: &NaiveTime, format: ClockFormat) -> String {
    time.format(format.pattern()).to_string()
}

/// Current local time as hour:minute.
pub fn now_clock(format: ClockFormat) -> String {
    format_clock(&Local::now().time(), format)
}
