use std::cell::Cell;
use std::rc::Rc;

use date_range_picker::{
    CalendarDate, ClickTarget, DateRangePicker, ListenerId, OutsideClickSource, PickerConfig,
    PickerEvent, RangeSelector, SelectionMark, YearMonth, generate_month_days,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct CountingSource {
    live: Cell<i32>,
    next: Cell<u64>,
}

impl OutsideClickSource for CountingSource {
    fn register(&self) -> ListenerId {
        self.live.set(self.live.get() + 1);
        let id = self.next.get();
        self.next.set(id + 1);
        ListenerId(id)
    }

    fn unregister(&self, _id: ListenerId) {
        self.live.set(self.live.get() - 1);
    }
}

fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("valid date")
}

fn january_2024() -> (DateRangePicker<CountingSource>, Rc<CountingSource>) {
    init_tracing();
    let source = Rc::new(CountingSource::default());
    let first = YearMonth::new(2024, 1).expect("valid month");
    let picker = DateRangePicker::new(first, Rc::clone(&source), PickerConfig::default())
        .expect("valid picker");
    (picker, source)
}

#[test]
fn february_2024_has_29_days() {
    let days = generate_month_days(2024, 1).expect("generate february");
    assert_eq!(days.len(), 29);
    assert_eq!(days.last(), Some(&date(2024, 2, 29)));
}

#[test]
fn click_hover_click_confirms_stay() {
    let (mut picker, _) = january_2024();
    picker.open();

    picker.on_day_click(4);
    picker.on_day_hover(9);
    assert_eq!(picker.mark(4), SelectionMark::Endpoint);
    assert_eq!(picker.mark(6), SelectionMark::Interior);
    assert_eq!(picker.mark(9), SelectionMark::Endpoint);

    let events = picker.on_day_click(9);
    assert_eq!(
        events,
        vec![PickerEvent::ConfirmedRangeChanged {
            check_in: date(2024, 1, 5),
            check_out: date(2024, 1, 10),
        }]
    );
    assert!(!picker.mark(6).is_selected());
}

#[test]
fn reverse_click_order_confirms_same_stay() {
    let (mut picker, _) = january_2024();
    picker.on_day_click(9);
    let events = picker.on_day_click(4);
    assert_eq!(
        events,
        vec![PickerEvent::ConfirmedRangeChanged {
            check_in: date(2024, 1, 5),
            check_out: date(2024, 1, 10),
        }]
    );
}

#[test]
fn every_distinct_pair_confirms_min_and_max() {
    let (mut picker, _) = january_2024();
    let len = picker.window().len();
    for i in (0..len).step_by(7) {
        for j in (0..len).step_by(5) {
            if i == j {
                continue;
            }
            picker.on_day_click(i);
            picker.on_day_click(j);
            let range = picker.confirmed().expect("range confirmed");
            assert_eq!(range.check_in(), picker.window().dates()[i.min(j)]);
            assert_eq!(range.check_out(), picker.window().dates()[i.max(j)]);
        }
    }
}

#[test]
fn hover_without_anchor_changes_nothing() {
    let (mut picker, _) = january_2024();
    for i in 0..picker.window().len() {
        assert!(picker.on_day_hover(i).is_empty());
        assert_eq!(picker.selector(), RangeSelector::Idle);
    }
}

#[test]
fn listener_lives_exactly_while_open() {
    let (mut picker, source) = january_2024();
    assert_eq!(source.live.get(), 0);

    picker.toggle();
    assert_eq!(source.live.get(), 1);
    picker.on_document_click(ClickTarget::Calendar);
    assert_eq!(source.live.get(), 1);
    picker.on_document_click(ClickTarget::Outside);
    assert_eq!(source.live.get(), 0);

    picker.open();
    picker.next_month().expect("navigate");
    assert_eq!(source.live.get(), 1);
    drop(picker);
    assert_eq!(source.live.get(), 0);
}

#[test]
fn confirmed_range_serializes_like_the_input_mirror() {
    let (mut picker, _) = january_2024();
    picker.on_day_click(4);
    picker.on_day_click(9);
    let range = picker.confirmed().expect("range confirmed");
    let json = serde_json::to_string(&range).expect("serialize");
    assert_eq!(json, r#"{"checkIn":"2024-01-05","checkOut":"2024-01-10"}"#);
}
