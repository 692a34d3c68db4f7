//! Default value for an empty due-date field.

use crate::config::DueDateConfig;
use crate::error::PageguardError;
use chrono::{DateTime, Days, NaiveTime, TimeZone};

/// `datetime-local` input format, minute precision.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// When a new assignment is due if the user leaves the field empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDatePolicy {
    days_ahead: u64,
    time: NaiveTime,
}

impl DueDatePolicy {
    pub fn new(days_ahead: u64, hour: u32, minute: u32) -> Result<Self, PageguardError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or(PageguardError::InvalidDueTime { hour, minute })?;
        Ok(Self { days_ahead, time })
    }

    pub fn from_config(cfg: &DueDateConfig) -> Result<Self, PageguardError> {
        Self::new(cfg.days_ahead, cfg.hour, cfg.minute)
    }

    /// Value to put in the field, or `None` when it already holds one.
    ///
    /// The date is computed in `now`'s own time zone so the field shows the
    /// user's wall-clock deadline. This differs from formatting a local 23:59
    /// through UTC (as `Date.toISOString` does), which shifts the value outside UTC.
    pub fn default_value<Tz: TimeZone>(
        &self,
        current: Option<&str>,
        now: &DateTime<Tz>,
    ) -> Option<String> {
        if current.is_some_and(|v| !v.is_empty()) {
            return None;
        }
        let date = now.date_naive().checked_add_days(Days::new(self.days_ahead))?;
        Some(date.and_time(self.time).format(DATETIME_LOCAL_FORMAT).to_string())
    }
}

impl Default for DueDatePolicy {
    fn default() -> Self {
        Self {
            days_ahead: 1,
            time: NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn tomorrow_at_2359() {
        let p = DueDatePolicy::default();
        assert_eq!(
            p.default_value(None, &utc("2026-10-18T09:30:00Z")).as_deref(),
            Some("2026-10-19T23:59")
        );
        assert_eq!(
            p.default_value(Some(""), &utc("2026-10-18T09:30:00Z")).as_deref(),
            Some("2026-10-19T23:59")
        );
    }

    #[test]
    fn existing_value_kept() {
        let p = DueDatePolicy::default();
        assert_eq!(
            p.default_value(Some("2026-11-01T08:00"), &utc("2026-10-18T09:30:00Z")),
            None
        );
    }

    #[test]
    fn rolls_over_month_and_year() {
        let p = DueDatePolicy::default();
        assert_eq!(
            p.default_value(None, &utc("2026-02-28T12:00:00Z")).as_deref(),
            Some("2026-03-01T23:59")
        );
        assert_eq!(
            p.default_value(None, &utc("2026-12-31T23:59:59Z")).as_deref(),
            Some("2027-01-01T23:59")
        );
    }

    #[test]
    fn uses_local_calendar_date() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = utc("2026-10-18T20:00:00Z").with_timezone(&tokyo);
        assert_eq!(
            DueDatePolicy::default().default_value(None, &now).as_deref(),
            Some("2026-10-20T23:59")
        );
    }

    #[test]
    fn wall_clock_time_kept_outside_utc() {
        let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = utc("2026-10-18T14:00:00Z").with_timezone(&new_york);
        assert_eq!(
            DueDatePolicy::default().default_value(None, &now).as_deref(),
            Some("2026-10-19T23:59")
        );
    }

    #[test]
    fn custom_policy() {
        let p = DueDatePolicy::new(7, 17, 0).unwrap();
        assert_eq!(
            p.default_value(None, &utc("2026-10-18T09:30:00Z")).as_deref(),
            Some("2026-10-25T17:00")
        );
    }

    #[test]
    fn invalid_time_rejected() {
        assert!(matches!(
            DueDatePolicy::new(1, 24, 0),
            Err(PageguardError::InvalidDueTime { hour: 24, minute: 0 })
        ));
        assert!(DueDatePolicy::new(1, 23, 60).is_err());
    }
}
