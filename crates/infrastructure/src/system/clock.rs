use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use rkn_roulette_application::ports::Clock;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn utc_today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
