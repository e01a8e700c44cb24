//! Countdown State
//!
//! Remaining-time bookkeeping of the quiz timer, independent of the page.

use crate::config::TimerConfig;

/// Lenient integer parse of the remaining-seconds attribute: leading
/// whitespace, an optional sign, then decimal digits. Anything after the
/// digits is ignored ("90s" is 90). No digits, or a value that does not fit
/// in `i64`, yields `None`.
pub fn parse_seconds(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// `M:SS`, minutes unpadded
pub fn format_clock(seconds: i64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Still running; show this label
    Show(String),
    Expired,
    /// Remaining time is no longer a number
    Fault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    time_left: Option<i64>,
}

impl Countdown {
    /// Countdown from the raw attribute value.
    /// `None` means the quiz has no time limit.
    pub fn from_attr(raw: Option<&str>) -> Option<Self> {
        let seconds = raw.and_then(parse_seconds)?;
        (seconds > 0).then(|| Self::new(seconds))
    }

    pub fn new(seconds: i64) -> Self {
        Self {
            time_left: Some(seconds),
        }
    }

    pub fn time_left(&self) -> Option<i64> {
        self.time_left
    }

    /// Show the current time, then count one second down.
    /// `0:00` is still shown; the tick after it expires.
    pub fn tick(&mut self) -> Tick {
        let Some(left) = self.time_left else {
            return Tick::Fault;
        };
        if left < 0 {
            return Tick::Expired;
        }

        let label = format_clock(left);
        self.time_left = left.checked_sub(1);
        Tick::Show(label)
    }
}

/// What the page should do after a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: String,
    /// Navigate here
    pub redirect: Option<String>,
    /// No further ticks are wanted
    pub finished: bool,
}

/// Countdown plus the texts and redirect target of one timer display.
/// Once a step reports `finished`, every later call returns `None`.
pub struct Ticker {
    countdown: Countdown,
    end_url: Option<String>,
    expired_message: String,
    error_message: String,
    finished: bool,
}

impl Ticker {
    pub fn new(countdown: Countdown, end_url: Option<String>, config: &TimerConfig) -> Self {
        Self {
            countdown,
            end_url,
            expired_message: config.expired_message.clone(),
            error_message: config.error_message.clone(),
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn step(&mut self) -> Option<Step> {
        if self.finished {
            return None;
        }

        let step = match self.countdown.tick() {
            Tick::Show(label) => Step {
                label,
                redirect: None,
                finished: false,
            },
            Tick::Expired => Step {
                label: self.expired_message.clone(),
                redirect: self.end_url.clone(),
                finished: true,
            },
            Tick::Fault => Step {
                label: self.error_message.clone(),
                redirect: None,
                finished: true,
            },
        };
        self.finished = step.finished;
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("120"), Some(120));
        assert_eq!(parse_seconds("  45"), Some(45));
        assert_eq!(parse_seconds("90s"), Some(90));
        assert_eq!(parse_seconds("3.7"), Some(3));
        assert_eq!(parse_seconds("-5"), Some(-5));
        assert_eq!(parse_seconds("+8"), Some(8));
        assert_eq!(parse_seconds(""), None);
        assert_eq!(parse_seconds("abc"), None);
        assert_eq!(parse_seconds("-"), None);
        assert_eq!(parse_seconds("99999999999999999999999"), None);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(9), "0:09");
        assert_eq!(format_clock(60), "1:00");
        assert_eq!(format_clock(605), "10:05");
    }

    #[test]
    fn test_no_limit_values() {
        assert_eq!(Countdown::from_attr(None), None);
        assert_eq!(Countdown::from_attr(Some("")), None);
        assert_eq!(Countdown::from_attr(Some("0")), None);
        assert_eq!(Countdown::from_attr(Some("-10")), None);
        assert_eq!(Countdown::from_attr(Some("none")), None);
        assert_eq!(Countdown::from_attr(Some("30")), Some(Countdown::new(30)));
    }

    #[test]
    fn test_tick_counts_down_to_expiry() {
        let mut countdown = Countdown::new(2);
        assert_eq!(countdown.tick(), Tick::Show("0:02".into()));
        assert_eq!(countdown.tick(), Tick::Show("0:01".into()));
        assert_eq!(countdown.tick(), Tick::Show("0:00".into()));
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.tick(), Tick::Expired);
        assert_eq!(countdown.time_left(), Some(-1));
    }

    #[test]
    fn test_last_second_shows_zero_before_expiry() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick(), Tick::Show("0:01".into()));
        assert_eq!(countdown.tick(), Tick::Show("0:00".into()));
        assert_eq!(countdown.tick(), Tick::Expired);
    }

    #[test]
    fn test_invalid_time_faults() {
        let mut countdown = Countdown { time_left: None };
        assert_eq!(countdown.tick(), Tick::Fault);
    }

    #[test]
    fn test_ticker_redirects_once_and_stops() {
        let config = TimerConfig::default();
        let mut ticker = Ticker::new(Countdown::new(2), Some("/quiz/end/".into()), &config);

        let labels: Vec<String> = (0..3)
            .map(|_| ticker.step().unwrap())
            .inspect(|s| assert!(s.redirect.is_none() && !s.finished))
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, vec!["0:02", "0:01", "0:00"]);

        let last = ticker.step().unwrap();
        assert_eq!(last.label, config.expired_message);
        assert_eq!(last.redirect.as_deref(), Some("/quiz/end/"));
        assert!(last.finished);

        assert!(ticker.is_finished());
        assert_eq!(ticker.step(), None);
        assert_eq!(ticker.step(), None);
    }

    #[test]
    fn test_ticker_without_end_url() {
        let config = TimerConfig::default();
        let mut ticker = Ticker::new(Countdown::new(1), None, &config);
        assert_eq!(ticker.step().unwrap().label, "0:01");
        assert_eq!(ticker.step().unwrap().label, "0:00");
        let last = ticker.step().unwrap();
        assert!(last.finished);
        assert_eq!(last.redirect, None);
    }

    #[test]
    fn test_ticker_fault_shows_error() {
        let config = TimerConfig::default();
        let mut ticker = Ticker::new(Countdown { time_left: None }, Some("/end".into()), &config);
        let step = ticker.step().unwrap();
        assert_eq!(step.label, config.error_message);
        assert_eq!(step.redirect, None);
        assert!(step.finished);
        assert_eq!(ticker.step(), None);
    }
}
