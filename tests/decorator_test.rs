//! Integration tests for logging, filter and counting decorators and their composition.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use rstest::{fixture, rstest};

use cursorkit::util::testing;
use cursorkit::{
    drive, ArrayContainer, BoxedCursor, Container, CountingCursor, Cursor, CursorExt, Element,
    FilterCursor, Journal, ListContainer, LoggingCursor, Priced,
};

#[fixture]
fn mixed() -> ArrayContainer<Priced> {
    testing::init_test_setup();
    let mut container = ArrayContainer::with_capacity(8).unwrap();
    for (label, price) in [
        ("a", 50.0),
        ("b", 250.0),
        ("c", 120.0),
        ("d", 300.0),
        ("e", 200.0),
        ("f", 10.0),
    ] {
        container.add(Priced::new(label, price)).unwrap();
    }
    container
}

fn labels<'a, C: Cursor<'a, Item = Priced>>(cursor: C) -> Vec<String> {
    cursor.iter().map(|p| p.label.clone()).collect()
}

// ============================================================
// Filter
// ============================================================

#[rstest]
#[case(0.0, vec!["a", "b", "c", "d", "e", "f"])]
#[case(200.0, vec!["b", "d", "e"])]
#[case(250.0, vec!["b", "d"])]
#[case(1000.0, vec![])]
fn given_threshold_when_filtering_then_only_survivors_in_source_order(
    mixed: ArrayContainer<Priced>,
    #[case] min: f64,
    #[case] expected: Vec<&str>,
) {
    let survivors: Vec<&Priced> = mixed.array_cursor().filtered(min).iter().collect();

    assert!(survivors.iter().all(|p| p.price() >= min));
    assert_eq!(
        survivors.iter().map(|p| p.label.as_str()).collect::<Vec<_>>(),
        expected
    );
}

#[rstest]
fn given_filter_when_restarted_after_exhaustion_then_skips_again(mixed: ArrayContainer<Priced>) {
    let mut cursor = FilterCursor::new(mixed.array_cursor(), 200.0);
    while !cursor.is_done() {
        cursor.next();
    }

    cursor.first();

    assert_eq!(cursor.current().label, "b");
}

// ============================================================
// Logging
// ============================================================

#[rstest]
fn given_logging_decorator_when_driven_then_sequence_unchanged(mixed: ArrayContainer<Priced>) {
    let plain = labels(mixed.array_cursor());
    let logged = labels(mixed.array_cursor().logged());

    assert_eq!(plain, logged);
}

#[rstest]
fn given_logging_decorator_when_driven_then_one_entry_per_read(mixed: ArrayContainer<Priced>) {
    let cursor = LoggingCursor::with_prefix(mixed.array_cursor(), "[LOG]");
    let journal = cursor.journal();

    let tally = drive(cursor);

    assert_eq!(tally.count, 6);
    assert_eq!(journal.len(), 6);
    assert_eq!(journal.entries()[1], "[LOG] b: $250");
}

#[rstest]
fn given_bounded_journal_when_log_inside_filter_then_retains_only_latest(
    mixed: ArrayContainer<Priced>,
) {
    let journal = Journal::bounded(2);
    let mut chain =
        LoggingCursor::with_journal(mixed.array_cursor(), "[LOG]", journal.clone()).filtered(200.0);

    for _ in 0..50 {
        drive(&mut chain);
    }

    assert_eq!(journal.len(), 2);
    assert_eq!(journal.entries(), vec!["[LOG] e: $200", "[LOG] f: $10"]);
}

// ============================================================
// Counting
// ============================================================

#[rstest]
fn given_counting_decorator_when_driven_then_count_equals_length(mixed: ArrayContainer<Priced>) {
    let mut cursor = CountingCursor::new(mixed.array_cursor());

    let tally = drive(&mut cursor);

    assert_eq!(cursor.count(), tally.count);
    assert_eq!(cursor.count(), mixed.len());
}

#[rstest]
fn given_step_handle_when_chain_dropped_then_still_reports(mixed: ArrayContainer<Priced>) {
    let counted = mixed.array_cursor().counted();
    let steps = counted.steps();

    drive(counted.boxed());

    assert_eq!(steps.get(), 6);
}

// ============================================================
// Composition
// ============================================================

#[test]
fn given_filter_inside_counter_when_driven_then_counts_survivors() {
    testing::init_test_setup();
    let mut list = ListContainer::new();
    for price in [50.0, 250.0, 300.0] {
        list.add(Priced::new("part", price)).unwrap();
    }

    let survivors: Vec<f64> = list
        .list_cursor()
        .filtered(200.0)
        .iter()
        .map(|p| p.price)
        .collect();
    assert_eq!(survivors, vec![250.0, 300.0]);

    let mut counted = list.list_cursor().filtered(200.0).counted();
    let tally = drive(&mut counted);

    assert_eq!(tally.total, 550.0);
    assert_eq!(counted.count(), 2);
}

#[rstest]
fn given_counter_inside_filter_when_driven_then_counts_every_source_step(
    mixed: ArrayContainer<Priced>,
) {
    let counted = mixed.array_cursor().counted();
    let steps = counted.steps();

    let tally = drive(counted.filtered(200.0));

    assert_eq!(tally.count, 3);
    assert_eq!(steps.get(), 6, "filter advances the inner counter past rejects");
}

#[rstest]
fn given_opposite_nesting_when_logging_and_filtering_then_journals_differ(
    mixed: ArrayContainer<Priced>,
) {
    let outer_log = mixed.array_cursor().filtered(200.0).logged();
    let outer_journal = outer_log.journal();
    drive(outer_log);

    let inner_log = mixed.array_cursor().logged();
    let inner_journal = inner_log.journal();
    drive(inner_log.filtered(200.0));

    assert_eq!(
        outer_journal.entries(),
        vec![
            "[LOG] access: b: $250",
            "[LOG] access: d: $300",
            "[LOG] access: e: $200"
        ]
    );
    assert!(
        inner_journal.entries().iter().any(|line| line.ends_with("a: $50")),
        "a log inside the filter sees rejected elements"
    );
    assert!(inner_journal.len() > outer_journal.len());
}

// ============================================================
// Ownership
// ============================================================

struct Tracked {
    price: f64,
    drops: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl fmt::Display for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tracked ${}", self.price)
    }
}

impl Element for Tracked {
    fn price(&self) -> f64 {
        self.price
    }
}

#[test]
fn given_decorator_chain_when_dropped_then_elements_survive_until_container_drops() {
    let drops = Rc::new(Cell::new(0));
    let mut container = ListContainer::new();
    for price in [1.0, 2.0, 3.0] {
        container
            .add(Tracked {
                price,
                drops: Rc::clone(&drops),
            })
            .unwrap();
    }

    let chain = container.cursor().logged().filtered(2.0).counted().boxed();
    let tally = drive(chain);

    assert_eq!(tally.total, 5.0);
    assert_eq!(drops.get(), 0, "dropping a chain must not drop elements");

    drop(container);
    assert_eq!(drops.get(), 3, "each element dropped exactly once");
}

#[test]
fn given_heterogeneous_boxed_elements_when_driven_then_dispatches_per_element() {
    let drops = Rc::new(Cell::new(0));
    let mut container: ArrayContainer<Box<dyn Element>> = ArrayContainer::with_capacity(2).unwrap();
    container.add(Box::new(Priced::new("plain", 7.0))).unwrap();
    container
        .add(Box::new(Tracked {
            price: 3.0,
            drops: Rc::clone(&drops),
        }))
        .unwrap();

    let logged = container.array_cursor().logged();
    let journal = logged.journal();
    let tally = drive(logged);

    assert_eq!(tally.total, 10.0);
    assert_eq!(
        journal.entries(),
        vec!["[LOG] access: plain: $7", "[LOG] access: tracked $3"]
    );
}

/// Cursor over boxed elements that yields them as trait objects.
struct Shelf<'a> {
    items: &'a [Box<dyn Element>],
    position: usize,
}

impl<'a> Cursor<'a> for Shelf<'a> {
    type Item = dyn Element;

    fn first(&mut self) {
        self.position = 0;
    }

    fn next(&mut self) {
        if self.position < self.items.len() {
            self.position += 1;
        }
    }

    fn is_done(&self) -> bool {
        self.position >= self.items.len()
    }

    fn current(&self) -> &'a (dyn Element + 'static) {
        match self.items.get(self.position) {
            Some(item) => item.as_ref(),
            None => panic!("shelf exhausted"),
        }
    }
}

#[test]
fn given_unsized_item_cursor_when_boxed_then_decorators_apply() {
    let items: Vec<Box<dyn Element>> = vec![
        Box::new(Priced::new("big", 7.0)),
        Box::new(Priced::new("small", 3.0)),
    ];
    let shelf: BoxedCursor<'_, dyn Element> = Box::new(Shelf {
        items: &items,
        position: 0,
    });

    let logged = shelf.filtered(5.0).logged();
    let journal = logged.journal();
    let tally = drive(logged);

    assert_eq!(tally.total, 7.0);
    assert_eq!(journal.entries(), vec!["[LOG] access: big: $7"]);
}
