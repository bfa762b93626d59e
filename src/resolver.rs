//! Date-keyed lookups over a [`Catalog`].
//!
//! Every date is reduced to a plain calendar day before it is compared. A
//! timestamp counts as the day it falls on in its own offset, and "today" is
//! the viewer's local day. Stored dates carry no offset, so no UTC
//! conversion happens on either side.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::record::WallpaperRecord;

/// Anything that names a calendar day.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Parse `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its own day.
pub fn parse_day(input: &str) -> Result<NaiveDate, CatalogError> {
    let input = input.trim();
    if let Ok(date) = input.parse::<NaiveDate>() {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(input)
        .map(|ts| ts.calendar_day())
        .map_err(|_| CatalogError::InvalidDate(input.to_string()))
}

pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub struct Resolver {
    catalog: Catalog,
    clock: Box<dyn Clock>,
}

impl Resolver {
    pub fn new(catalog: Catalog, clock: Box<dyn Clock>) -> Self {
        Self { catalog, clock }
    }

    pub fn find_by_date(&self, date: impl CalendarDay) -> Option<&WallpaperRecord> {
        self.catalog.get(date.calendar_day())
    }

    /// Only a malformed `input` is an error; a valid day without a wallpaper is `Ok(None)`.
    pub fn find_by_day_str(&self, input: &str) -> Result<Option<&WallpaperRecord>, CatalogError> {
        Ok(self.find_by_date(parse_day(input)?))
    }

    /// Read the clock on every call so a long-running window rolls over at midnight.
    pub fn find_today(&self) -> Option<&WallpaperRecord> {
        self.find_by_date(self.today())
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn dates_with_records(&self) -> BTreeSet<NaiveDate> {
        self.catalog.dates().collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the whole catalog, e.g. after the user opened another file.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }
}
