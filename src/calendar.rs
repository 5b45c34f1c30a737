use chrono::NaiveDate;

use crate::angles;
use crate::trace::{trace_event, trace_span};
use crate::types::{AngleResult, CalendarSegment, MountingPositions};

/// Days walked per calendar. Day 366 of a leap year is never evaluated, so
/// December 31 of a leap year falls outside every segment.
pub const DAYS_EVALUATED: u32 = 365;

/// Per-year segmentation of recommended mounting positions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct YearlyCalendar {
    pub year: i32,
    pub latitude: f64,
    pub segments: Vec<CalendarSegment>,
}

impl YearlyCalendar {
    /// Calendar date of a day-of-year ordinal in this calendar's year.
    pub fn date_of(&self, day_of_year: u32) -> Option<NaiveDate> {
        NaiveDate::from_yo_opt(self.year, day_of_year)
    }

    pub fn start_date(&self, segment: &CalendarSegment) -> Option<NaiveDate> {
        self.date_of(segment.start_day)
    }

    pub fn end_date(&self, segment: &CalendarSegment) -> Option<NaiveDate> {
        self.date_of(segment.end_day)
    }

    pub fn last_evaluated_date(&self) -> Option<NaiveDate> {
        self.date_of(DAYS_EVALUATED)
    }

    pub fn segment_for_day(&self, day_of_year: u32) -> Option<&CalendarSegment> {
        self.segments.iter().find(|s| s.contains(day_of_year))
    }
}

struct OpenSegment {
    start_day: u32,
    position: f64,
    position_index: usize,
}

impl OpenSegment {
    fn close(self, end_day: u32) -> CalendarSegment {
        CalendarSegment {
            start_day: self.start_day,
            end_day,
            position: self.position,
            position_index: self.position_index,
        }
    }
}

#[derive(Default)]
struct Segmenter {
    closed: Vec<CalendarSegment>,
    open: Option<OpenSegment>,
    last_day: u32,
}

impl Segmenter {
    fn push(mut self, result: &AngleResult) -> Self {
        let day = result.day_of_year;
        let changed = self
            .open
            .as_ref()
            .map_or(true, |open| open.position_index != result.position_index);
        if changed {
            if let Some(open) = self.open.take() {
                self.closed.push(open.close(day.saturating_sub(1)));
            }
            self.open = Some(OpenSegment {
                start_day: day,
                position: result.recommended_position,
                position_index: result.position_index,
            });
        }
        self.last_day = day;
        self
    }

    fn finish(mut self) -> Vec<CalendarSegment> {
        if let Some(open) = self.open.take() {
            self.closed.push(open.close(self.last_day));
        }
        self.closed
    }
}

/// Per-day results for days 1 through [`DAYS_EVALUATED`], in day order.
pub fn daily_results(latitude: f64, positions: &MountingPositions) -> Vec<AngleResult> {
    (1..=DAYS_EVALUATED)
        .map(|day| angles::compute_for_day(latitude, day, positions))
        .collect()
}

/// Groups consecutive days sharing a position into inclusive segments.
///
/// Expects results sorted by day with no gaps. The open segment is closed on
/// the last day supplied; nothing wraps into the following year.
pub fn segment<'a, I>(results: I) -> Vec<CalendarSegment>
where
    I: IntoIterator<Item = &'a AngleResult>,
{
    results
        .into_iter()
        .fold(Segmenter::default(), Segmenter::push)
        .finish()
}

/// Segments days 1..=365 of `year` by recommended mounting position.
pub fn build_yearly_calendar(
    latitude: f64,
    year: i32,
    positions: &MountingPositions,
) -> YearlyCalendar {
    let _guard = trace_span!("build_yearly_calendar", latitude, year).entered();

    let results = daily_results(latitude, positions);
    let segments = segment(&results);

    trace_event!("calendar_built", segments = segments.len());

    YearlyCalendar {
        year,
        latitude,
        segments,
    }
}
