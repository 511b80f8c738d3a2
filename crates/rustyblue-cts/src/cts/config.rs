//! Current Time Service configuration

/// How the day-of-month field is written on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayOfMonthEncoding {
    /// Calendar day plus one (the 15th is sent as 16). Matches what deployed
    /// firmware has always sent, so existing centrals keep parsing it the
    /// same way.
    #[default]
    Legacy,
    /// Calendar day, 1-31, as the characteristic definition specifies
    Calendar,
}

impl DayOfMonthEncoding {
    /// Wire value for a 1-based calendar day
    pub fn encode(&self, day: u32) -> u8 {
        match self {
            DayOfMonthEncoding::Legacy => (day + 1) as u8,
            DayOfMonthEncoding::Calendar => day as u8,
        }
    }
}

/// Current Time Service configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentTimeConfig {
    /// Register the service at startup
    pub enable: bool,
    /// Day-of-month wire encoding
    pub day_of_month: DayOfMonthEncoding,
}

impl CurrentTimeConfig {
    /// Set whether the service is registered
    pub fn with_enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    /// Set the day-of-month wire encoding
    pub fn with_day_of_month(mut self, day_of_month: DayOfMonthEncoding) -> Self {
        self.day_of_month = day_of_month;
        self
    }
}
