//! Framework-independent core of a two-month date range picker.
//!
//! The picker shows a month and the month after it as one flattened
//! sequence of day slots. The first click on a slot anchors a selection,
//! hovering previews it, and the second click confirms a check-in/check-out
//! range ordered by date regardless of click order. Navigating between
//! months abandons a selection in progress.
//!
//! ```
//! use std::rc::Rc;
//! use date_range_picker::{
//!     CalendarDate, DateRangePicker, ListenerId, OutsideClickSource, PickerConfig, YearMonth,
//! };
//!
//! struct NoopSource;
//!
//! impl OutsideClickSource for NoopSource {
//!     fn register(&self) -> ListenerId {
//!         ListenerId(0)
//!     }
//!     fn unregister(&self, _id: ListenerId) {}
//! }
//!
//! let january = YearMonth::new(2024, 1)?;
//! let mut picker = DateRangePicker::new(january, Rc::new(NoopSource), PickerConfig::default())?;
//! picker.on_day_click(9);
//! picker.on_day_click(4);
//!
//! let range = picker.confirmed().expect("two distinct clicks confirm a range");
//! assert_eq!(range.check_in(), CalendarDate::new(2024, 1, 5)?);
//! assert_eq!(range.check_out(), CalendarDate::new(2024, 1, 10)?);
//! # Ok::<(), date_range_picker::DateError>(())
//! ```

mod config;
mod consts;
mod date;
mod month;
mod picker;
mod prelude;
mod range;
mod selector;
mod subscription;
mod types;
mod window;

pub use config::{ConfigError, PickerConfig};
pub use consts::*;
pub use date::{CalendarDate, DateError};
pub use month::{YearMonth, generate_month_days};
pub use picker::{ClickTarget, DateRangePicker, PickerEvent};
pub use range::{ConfirmedRange, RangeError};
pub use selector::{RangeSelector, SelectionMark, SelectorEvent};
pub use subscription::{ListenerId, OutsideClickSource, OutsideClickSubscription};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use window::{DaySlot, TwoMonthWindow};
