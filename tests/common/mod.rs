use std::cell::RefCell;

use almacen_core::core::time::FixedClock;
use almacen_core::prompt::Prompter;
use chrono::{NaiveDate, TimeZone, Utc};

pub fn fixed_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap())
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Prompter that answers with a fixed choice and records every message.
pub struct RecordingPrompter {
    pub answer: bool,
    pub confirms: RefCell<Vec<String>>,
    pub notices: RefCell<Vec<String>>,
}

impl RecordingPrompter {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirms: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for RecordingPrompter {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}
