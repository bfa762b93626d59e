use chrono::NaiveDate;

use crate::calendar::{month_of, next_month, prev_month};
use crate::record::WallpaperRecord;
use crate::resolver::Resolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Full-size display of the current selection.
    Today,
    Calendar,
}

/// Everything the window shows that is not catalog data.
///
/// Owned by the app and only changed through the handlers below.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub view: View,
    pub selected_date: NaiveDate,
    pub selected: Option<WallpaperRecord>,
    pub month: (i32, u32),
    pub dark_mode: bool,
}

impl ViewState {
    pub fn new(resolver: &Resolver, dark_mode: bool) -> Self {
        let today = resolver.today();
        Self {
            view: View::Today,
            selected_date: today,
            selected: resolver.find_today().cloned(),
            month: month_of(today),
            dark_mode,
        }
    }

    pub fn show_today(&mut self) {
        self.view = View::Today;
    }

    pub fn show_calendar(&mut self) {
        self.month = month_of(self.selected_date);
        self.view = View::Calendar;
    }

    /// Days after today cannot be picked. Landing on a wallpaper opens it.
    pub fn select_date(&mut self, resolver: &Resolver, date: NaiveDate) {
        if date > resolver.today() {
            return;
        }
        self.selected_date = date;
        self.selected = resolver.find_by_date(date).cloned();
        self.month = month_of(date);
        if self.selected.is_some() {
            self.view = View::Today;
        }
    }

    pub fn jump_to_today(&mut self, resolver: &Resolver) {
        let today = resolver.today();
        self.selected_date = today;
        self.selected = resolver.find_today().cloned();
        self.month = month_of(today);
        self.view = View::Today;
    }

    pub fn prev_month(&mut self) {
        self.month = prev_month(self.month);
    }

    pub fn can_go_next_month(&self, today: NaiveDate) -> bool {
        self.month < month_of(today)
    }

    pub fn next_month(&mut self, today: NaiveDate) {
        if self.can_go_next_month(today) {
            self.month = next_month(self.month);
        }
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Re-resolve the selected day after the catalog has been replaced.
    pub fn refresh(&mut self, resolver: &Resolver) {
        self.selected = resolver.find_by_date(self.selected_date).cloned();
    }
}
