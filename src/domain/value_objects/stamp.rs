//! Generation timestamp
//!
//! Computed once per run and passed to every renderer so all generated files
//! agree on the same instant.

use chrono::{Local, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStamp(NaiveDateTime);

impl GenerationStamp {
    /// Current local wall-clock time
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    pub fn at(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// `YYYY-MM-DD HH:MM:SS`, used in comments and the README
    pub fn long(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// `YYYY/MM/DD`, the LaTeX `\ProvidesPackage` date format
    pub fn package_date(&self) -> String {
        self.0.format("%Y/%m/%d").to_string()
    }
}

impl From<NaiveDateTime> for GenerationStamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::at(datetime)
    }
}
