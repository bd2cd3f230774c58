//! Game clock with a 24-hour day/night cycle
//!
//! Hours are fractional (a move costs 0.5h); days increment as the hour
//! wraps past 24. The engine consumes the `TimeChange` returned from each
//! advance to drive need decay and condition checks.

use serde::{Deserialize, Serialize};

/// Coarse time-of-day buckets for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimePeriod {
    Morning, // 06:00-12:00
    Day,     // 12:00-18:00
    Evening, // 18:00-22:00
    Night,   // 22:00-06:00
}

impl TimePeriod {
    pub fn from_hour(hour: f32) -> Self {
        match hour {
            h if (6.0..12.0).contains(&h) => TimePeriod::Morning,
            h if (12.0..18.0).contains(&h) => TimePeriod::Day,
            h if (18.0..22.0).contains(&h) => TimePeriod::Evening,
            _ => TimePeriod::Night, // 22-24, 0-6
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Morning => "Morning",
            TimePeriod::Day => "Day",
            TimePeriod::Evening => "Evening",
            TimePeriod::Night => "Night",
        }
    }
}

/// Details of a single clock advance, consumed synchronously by the engine
#[derive(Debug, Clone, Copy)]
pub struct TimeChange {
    pub previous_hour: f32,
    pub previous_day: u32,
    pub current_hour: f32,
    pub current_day: u32,
    pub hours_elapsed: f32,
}

/// Serializable clock state (snapshot wire shape)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockState {
    pub current_hour: f32,
    pub current_day: u32,
    pub total_hours: f32,
}

/// Tracks in-game time: hour within the day, day counter, total elapsed hours
#[derive(Debug, Clone)]
pub struct Clock {
    current_hour: f32,
    current_day: u32,
    total_hours: f32,
    day_start_hour: f32,
    night_start_hour: f32,
}

impl Clock {
    pub fn new(start_hour: f32, day_start_hour: f32, night_start_hour: f32) -> Self {
        Self {
            current_hour: start_hour,
            current_day: 1,
            total_hours: start_hour,
            day_start_hour,
            night_start_hour,
        }
    }

    /// Advance the clock, wrapping past 24 into day increments
    ///
    /// A single advance may span multiple days. `total_hours` is monotonic.
    pub fn advance(&mut self, hours: f32) -> TimeChange {
        debug_assert!(hours >= 0.0, "clock cannot run backwards");
        let previous_hour = self.current_hour;
        let previous_day = self.current_day;

        self.total_hours += hours;
        self.current_hour += hours;

        while self.current_hour >= 24.0 {
            self.current_hour -= 24.0;
            self.current_day += 1;
        }

        TimeChange {
            previous_hour,
            previous_day,
            current_hour: self.current_hour,
            current_day: self.current_day,
            hours_elapsed: hours,
        }
    }

    pub fn is_daytime(&self) -> bool {
        self.current_hour >= self.day_start_hour && self.current_hour < self.night_start_hour
    }

    pub fn is_nighttime(&self) -> bool {
        !self.is_daytime()
    }

    pub fn current_hour(&self) -> f32 {
        self.current_hour
    }

    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    pub fn total_hours(&self) -> f32 {
        self.total_hours
    }

    pub fn period(&self) -> TimePeriod {
        TimePeriod::from_hour(self.current_hour)
    }

    /// Display string, e.g. "Day 3, 10:30 (Day)"
    pub fn time_string(&self) -> String {
        let hour = self.current_hour.floor();
        let minutes = ((self.current_hour - hour) * 60.0).floor();
        let phase = if self.is_daytime() { "Day" } else { "Night" };
        format!(
            "Day {}, {:02}:{:02} ({})",
            self.current_day, hour as u32, minutes as u32, phase
        )
    }

    pub fn state(&self) -> ClockState {
        ClockState {
            current_hour: self.current_hour,
            current_day: self.current_day,
            total_hours: self.total_hours,
        }
    }

    pub fn restore(&mut self, state: &ClockState) {
        self.current_hour = state.current_hour.rem_euclid(24.0);
        self.current_day = state.current_day.max(1);
        self.total_hours = state.total_hours;
    }

    pub fn reset(&mut self, start_hour: f32) {
        self.current_hour = start_hour;
        self.current_day = 1;
        self.total_hours = start_hour;
    }
}
