use chrono::{NaiveDate, NaiveDateTime};

pub trait Clock: Send + Sync {
    /// Wall-clock time in the user's timezone, used for block timestamps.
    fn local_now(&self) -> NaiveDateTime;

    /// Current UTC date, used to name export files.
    fn utc_today(&self) -> NaiveDate;
}
