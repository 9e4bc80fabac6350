//! Thin host boundary for browser environment queries.
//!
//! The shell only needs wall-clock time for the menu bar. Non-wasm builds
//! (tests, tooling) get a fixed snapshot so output stays deterministic.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local wall-clock snapshot for the menu-bar clock.
pub struct ClockSnapshot {
    pub hours: u32,
    pub minutes: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hours: date.get_hours(),
                minutes: date.get_minutes(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                hours: 9,
                minutes: 41,
            }
        }
    }

    /// 12-hour display label, e.g. `9:41 AM`.
    pub fn label(self) -> String {
        let meridiem = if self.hours < 12 { "AM" } else { "PM" };
        let display_hours = match self.hours % 12 {
            0 => 12,
            hours => hours,
        };
        format!("{display_hours}:{:02} {meridiem}", self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_label_uses_twelve_hour_time() {
        let cases = [
            (0, 5, "12:05 AM"),
            (9, 41, "9:41 AM"),
            (12, 0, "12:00 PM"),
            (13, 7, "1:07 PM"),
            (23, 59, "11:59 PM"),
        ];
        for (hours, minutes, expected) in cases {
            assert_eq!(ClockSnapshot { hours, minutes }.label(), expected);
        }
    }
}
