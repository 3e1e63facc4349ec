use chrono::DateTime;
use creditview::clock::ManualClock;
use creditview::model::{Record, Status};
use creditview::pipeline::{ViewOptions, ViewPipeline};
use creditview::query::{SortDirection, SortKey, TypeFilter};
use proptest::prelude::*;

fn clock() -> ManualClock {
    ManualClock::new(DateTime::parse_from_rfc3339("2024-03-14T09:05:07+00:00").unwrap())
}

fn pipeline(records: Vec<Record>) -> ViewPipeline<ManualClock> {
    ViewPipeline::new(records, ViewOptions::default(), clock()).unwrap()
}

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::Active), Just(Status::Retired)]
}

fn arb_records(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(("[a-zA-Z ]{0,12}", 1990i32..2030, arb_status()), 0..max).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, year, status))| {
                    Record::new(format!("UC-{:03}", i), name, year, status)
                })
                .collect()
        },
    )
}

fn arb_filter() -> impl Strategy<Value = TypeFilter> {
    prop_oneof![
        Just(TypeFilter::All),
        Just(TypeFilter::Active),
        Just(TypeFilter::Retired)
    ]
}

fn filtered_ids(view: &ViewPipeline<ManualClock>) -> Vec<String> {
    view.filtered().map(|r| r.id.clone()).collect()
}

proptest! {
    #[test]
    fn type_filter_keeps_exact_status(records in arb_records(40), filter in arb_filter()) {
        let mut view = pipeline(records.clone());
        view.set_type_filter(filter);

        let expected = records.iter().filter(|r| filter.matches(r.status)).count();
        prop_assert_eq!(view.filtered_count(), expected);
        prop_assert!(view.filtered().all(|r| filter.matches(r.status)));
    }

    #[test]
    fn search_results_contain_needle(records in arb_records(40), needle in "[a-z0-9]{1,3}") {
        let mut view = pipeline(records);
        view.set_search_text(needle.to_uppercase());
        view.flush_search();

        for record in view.filtered() {
            prop_assert!(
                record.name.to_lowercase().contains(&needle)
                    || record.year.to_string().contains(&needle)
            );
        }
    }

    #[test]
    fn longer_search_never_widens(
        records in arb_records(40),
        needle in "[a-z]{1,2}",
        extra in "[a-z]{1,2}",
    ) {
        let mut view = pipeline(records);
        view.set_search_text(needle.clone());
        view.flush_search();
        let broad = view.filtered_count();

        view.set_search_text(format!("{needle}{extra}"));
        view.flush_search();
        prop_assert!(view.filtered_count() <= broad);
    }

    #[test]
    fn sorting_by_year_is_ordered_and_stable(records in arb_records(40)) {
        let mut view = pipeline(records.clone());
        view.set_sort(SortKey::Year);

        let sorted: Vec<&Record> = view.filtered().collect();
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].year <= pair[1].year);
            if pair[0].year == pair[1].year {
                // Ties keep source order; ids are assigned in source order.
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn sorting_by_name_ignores_case(records in arb_records(40)) {
        let mut view = pipeline(records);
        view.set_sort(SortKey::Name);
        view.set_sort_direction(SortDirection::Descending);

        let names: Vec<String> = view.filtered().map(|r| r.name.to_lowercase()).collect();
        for pair in names.windows(2) {
            prop_assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn toggling_twice_restores_order(records in arb_records(40)) {
        let mut view = pipeline(records);
        view.set_sort(SortKey::Name);
        let ascending = filtered_ids(&view);

        view.set_sort(SortKey::Name);
        view.set_sort(SortKey::Name);
        prop_assert_eq!(view.query().sort_direction(), SortDirection::Ascending);
        prop_assert_eq!(filtered_ids(&view), ascending);
    }

    #[test]
    fn pages_partition_the_filtered_set(records in arb_records(60), filter in arb_filter()) {
        let mut view = pipeline(records);
        view.set_type_filter(filter);
        view.set_sort(SortKey::Year);

        let mut collected = Vec::new();
        for page in 1..=view.last_page() {
            view.set_page(page);
            let visible = view.visible_page();
            prop_assert!(visible.len() <= 9);
            collected.extend(visible.into_iter().map(|r| r.id.clone()));
        }
        prop_assert_eq!(collected, filtered_ids(&view));
    }

    #[test]
    fn page_is_clamped(records in arb_records(60), overshoot in 1usize..20) {
        let mut view = pipeline(records);
        let last = view.last_page();
        prop_assert_eq!(last, view.filtered_count().div_ceil(9).max(1));

        view.set_page(0);
        prop_assert_eq!(view.page_number(), 1);

        view.set_page(last + overshoot);
        prop_assert_eq!(view.page_number(), last);
    }

    #[test]
    fn burst_of_keystrokes_recomputes_once(
        records in arb_records(20),
        gaps in prop::collection::vec(0i64..500, 1..8),
    ) {
        let clock = clock();
        let mut view = ViewPipeline::new(records, ViewOptions::default(), clock.clone()).unwrap();
        let before = view.revision();

        for (i, gap) in gaps.iter().enumerate() {
            view.set_search_text(format!("p{i}"));
            clock.advance_millis(*gap);
            prop_assert!(!view.poll());
        }
        clock.advance_millis(500);
        prop_assert!(view.poll());
        prop_assert!(!view.poll());

        let last = format!("p{}", gaps.len() - 1);
        prop_assert_eq!(view.revision(), before + 1);
        prop_assert_eq!(view.query().search_text(), last.as_str());
    }
}

#[test]
fn name_sort_toggle_scenario() {
    let mut view = pipeline(vec![
        Record::new("A", "Zeta", 2020, Status::Active),
        Record::new("B", "Alpha", 2019, Status::Retired),
    ]);

    view.set_sort(SortKey::Name);
    assert_eq!(filtered_ids(&view), vec!["B", "A"]);

    view.set_sort(SortKey::Name);
    assert_eq!(view.query().sort_direction(), SortDirection::Descending);
    assert_eq!(filtered_ids(&view), vec!["A", "B"]);
}

#[test]
fn search_waits_for_quiet_period() {
    let clock = clock();
    let records = vec![
        Record::new("A", "Kasigau", 2019, Status::Active),
        Record::new("B", "Katingan", 2020, Status::Active),
        Record::new("C", "Rimba", 2021, Status::Retired),
    ];
    let mut view = ViewPipeline::new(records, ViewOptions::default(), clock.clone()).unwrap();

    view.set_search_text("k");
    clock.advance_millis(300);
    view.set_search_text("ka");
    clock.advance_millis(300);
    view.set_search_text("kas");
    clock.advance_millis(499);
    assert!(!view.poll());
    assert_eq!(view.filtered_count(), 3);

    clock.advance_millis(1);
    assert!(view.poll());
    assert_eq!(filtered_ids(&view), vec!["A"]);
}

#[test]
fn eleven_records_make_two_pages() {
    let records = (0..11)
        .map(|i| Record::new(format!("R{i}"), format!("Project {i}"), 2010, Status::Active))
        .collect();
    let mut view = pipeline(records);

    assert_eq!(view.last_page(), 2);
    view.set_page(2);
    assert_eq!(view.visible_page().len(), 2);
    view.set_page(99);
    assert_eq!(view.page_number(), 2);
}
