//! Time service trait and desktop implementation.

use std::time::Instant;

use termfolio_types::error::Result;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A simple UTC wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl SystemTime {
    /// Break a Unix timestamp down into UTC calendar fields.
    pub fn from_unix_secs(secs: u64) -> Self {
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let (year, month, day) = days_to_ymd(days);
        Self {
            year,
            month,
            day,
            hour: (time_of_day / 3600) as u8,
            minute: ((time_of_day % 3600) / 60) as u8,
            second: (time_of_day % 60) as u8,
        }
    }

    /// Day of week, 0 = Sunday.
    pub fn weekday(&self) -> u8 {
        // Tomohiko Sakamoto's algorithm.
        let t = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let month = self.month.clamp(1, 12) as usize;
        let y = if month < 3 {
            self.year as i32 - 1
        } else {
            self.year as i32
        };
        ((y + y / 4 - y / 100 + y / 400 + t[month - 1] + self.day as i32) % 7) as u8
    }

    /// Long form, e.g. `Mon Oct 19 2026 14:03:07 GMT+0000`.
    pub fn to_date_string(&self) -> String {
        format!(
            "{} {} {:02} {:04} {:02}:{:02}:{:02} GMT+0000",
            WEEKDAYS[self.weekday() as usize],
            MONTHS[(self.month.clamp(1, 12) - 1) as usize],
            self.day,
            self.year,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Short numeric date, e.g. `10/19/2026`.
    pub fn to_short_date(&self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }
}

impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

/// Abstraction over platform time services.
pub trait TimeService {
    /// Current wall-clock time (UTC).
    fn now(&self) -> Result<SystemTime>;

    /// Seconds since the console session started.
    fn uptime_secs(&self) -> Result<u64>;
}

/// Desktop clock using `std` facilities. Uptime counts from construction.
pub struct DesktopClock {
    start_time: Instant,
}

impl DesktopClock {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }
}

impl Default for DesktopClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopClock {
    fn now(&self) -> Result<SystemTime> {
        use std::time::SystemTime as StdTime;
        let secs = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Ok(SystemTime::from_unix_secs(secs))
    }

    fn uptime_secs(&self) -> Result<u64> {
        Ok(self.start_time.elapsed().as_secs())
    }
}

// ---------------------------------------------------------------------------
// Date helper
// ---------------------------------------------------------------------------

/// Convert days since Unix epoch to (year, month, day).
fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    loop {
        let year_days = if is_leap(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    let feb = if is_leap(year) { 29 } else { 28 };
    let month_days: [u64; 12] = [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut month = 12u8;
    for (i, &md) in month_days.iter().enumerate() {
        if days < md {
            month = (i + 1) as u8;
            break;
        }
        days -= md;
    }
    (year, month, (days + 1) as u8)
}

fn is_leap(y: u16) -> bool {
    (y.is_multiple_of(4) && !y.is_multiple_of(100)) || y.is_multiple_of(400)
}
