//! The two-month picker: window, selector, confirmed range and visibility
//! composed behind one event-returning API.
//!
//! Every inbound operation returns the [`PickerEvent`]s it raised, in order.
//! A rendering layer applies them and never inspects selector internals.

use std::rc::Rc;

use tracing::{debug, instrument, warn};

use crate::config::PickerConfig;
use crate::date::{CalendarDate, DateError};
use crate::month::YearMonth;
use crate::range::ConfirmedRange;
use crate::selector::{RangeSelector, SelectionMark, SelectorEvent};
use crate::subscription::{OutsideClickSource, OutsideClickSubscription};
use crate::window::TwoMonthWindow;

/// Where a document-level click landed, as classified by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickTarget {
    /// Inside the calendar element.
    Calendar,
    /// On the input box that toggles the calendar.
    Trigger,
    /// Anywhere else.
    Outside,
}

/// Notifications for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerEvent {
    /// A two-click selection completed.
    ConfirmedRangeChanged {
        check_in:  CalendarDate,
        check_out: CalendarDate,
    },
    /// The in-progress highlight changed.
    SelectionPreviewChanged { anchor: usize, cursor: Option<usize> },
    /// The visible months changed.
    WindowChanged { first: YearMonth, second: YearMonth },
    Opened,
    Closed,
}

pub struct DateRangePicker<S: OutsideClickSource + ?Sized> {
    config:       PickerConfig,
    window:       TwoMonthWindow,
    selector:     RangeSelector,
    confirmed:    Option<ConfirmedRange>,
    source:       Rc<S>,
    subscription: Option<OutsideClickSubscription<S>>,
}

impl<S: OutsideClickSource + ?Sized> DateRangePicker<S> {
    /// Creates a closed picker showing `first` and the month after it.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` when `first` is December 9999.
    pub fn new(first: YearMonth, source: Rc<S>, config: PickerConfig) -> Result<Self, DateError> {
        Ok(Self {
            config,
            window: TwoMonthWindow::new(first)?,
            selector: RangeSelector::new(),
            confirmed: None,
            source,
            subscription: None,
        })
    }

    pub const fn window(&self) -> &TwoMonthWindow {
        &self.window
    }

    pub const fn selector(&self) -> RangeSelector {
        self.selector
    }

    pub const fn confirmed(&self) -> Option<ConfirmedRange> {
        self.confirmed
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub const fn is_open(&self) -> bool {
        self.subscription.is_some()
    }

    /// Text for the input box: the confirmed range, or empty before the first one.
    pub fn display_value(&self) -> String {
        self.confirmed
            .map(|range| range.display_with(&self.config.range_separator))
            .unwrap_or_default()
    }

    pub fn mark(&self, index: usize) -> SelectionMark {
        self.selector.mark(index)
    }

    /// Shows the calendar and starts listening for outside clicks.
    pub fn open(&mut self) -> Vec<PickerEvent> {
        if self.is_open() {
            return Vec::new();
        }
        self.subscription = Some(OutsideClickSubscription::acquire(Rc::clone(&self.source)));
        debug!(window = %self.window, "picker opened");
        vec![PickerEvent::Opened]
    }

    /// Hides the calendar, releasing the listener and any partial selection.
    pub fn close(&mut self) -> Vec<PickerEvent> {
        let Some(subscription) = self.subscription.take() else {
            return Vec::new();
        };
        drop(subscription);
        self.selector = self.selector.reset();
        debug!("picker closed");
        vec![PickerEvent::Closed]
    }

    /// Click on the input box.
    pub fn toggle(&mut self) -> Vec<PickerEvent> {
        if self.is_open() { self.close() } else { self.open() }
    }

    /// Click anywhere in the document while the listener is registered.
    pub fn on_document_click(&mut self, target: ClickTarget) -> Vec<PickerEvent> {
        match target {
            ClickTarget::Outside if self.is_open() => self.close(),
            _ => Vec::new(),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn on_day_click(&mut self, index: usize) -> Vec<PickerEvent> {
        let (selector, event) = self.selector.on_day_click(index);
        self.selector = selector;
        event.and_then(|event| self.apply(event)).into_iter().collect()
    }

    pub fn on_day_hover(&mut self, index: usize) -> Vec<PickerEvent> {
        let (selector, event) = self.selector.on_day_hover(index);
        self.selector = selector;
        event.and_then(|event| self.apply(event)).into_iter().collect()
    }

    /// Abandons the selection in progress. The confirmed range is kept.
    pub fn reset(&mut self) {
        self.selector = self.selector.reset();
    }

    /// Shows the following month pair.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` past December 9999; the picker is unchanged.
    pub fn next_month(&mut self) -> Result<Vec<PickerEvent>, DateError> {
        let window = self.window.next()?;
        Ok(self.show(window))
    }

    /// Shows the preceding month pair.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` before January of year 1; the picker is unchanged.
    pub fn previous_month(&mut self) -> Result<Vec<PickerEvent>, DateError> {
        let window = self.window.previous()?;
        Ok(self.show(window))
    }

    fn show(&mut self, window: TwoMonthWindow) -> Vec<PickerEvent> {
        self.reset();
        self.window = window;
        debug!(window = %self.window, "window changed");
        vec![PickerEvent::WindowChanged {
            first:  self.window.first(),
            second: self.window.second(),
        }]
    }

    fn apply(&mut self, event: SelectorEvent) -> Option<PickerEvent> {
        match event {
            SelectorEvent::PreviewChanged { anchor, cursor } => {
                Some(PickerEvent::SelectionPreviewChanged { anchor, cursor })
            },
            SelectorEvent::Committed { lo, hi } => self.confirm(lo, hi),
            SelectorEvent::Collapsed { index } if self.config.allow_single_day => {
                self.confirm(index, index)
            },
            SelectorEvent::Collapsed { .. } => None,
        }
    }

    fn confirm(&mut self, lo: usize, hi: usize) -> Option<PickerEvent> {
        let (Some(check_in), Some(check_out)) = (self.window.slot_at(lo), self.window.slot_at(hi))
        else {
            warn!(lo, hi, len = self.window.len(), "selection outside the visible window");
            return None;
        };
        let range = ConfirmedRange::ordered(check_in, check_out);
        debug!(%check_in, %check_out, nights = range.nights(), "range confirmed");
        self.confirmed = Some(range);
        Some(PickerEvent::ConfirmedRangeChanged {
            check_in:  range.check_in(),
            check_out: range.check_out(),
        })
    }
}
