use chrono::{Local, SubsecRound};

use checkin::{
    core::store::{DEMO_ENROLLMENTS, EnrollmentStore},
    enrollment::{Enrollment, EnrollmentDraft},
    persist::memory::MemorySink,
};

fn draft(name: &str, document: &str, course: &str) -> EnrollmentDraft {
    EnrollmentDraft::new(name, document, course)
}

fn names(records: &[&Enrollment]) -> Vec<String> {
    records.iter().map(|r| r.name().to_string()).collect()
}

#[test]
fn blank_registration_is_defaulted_and_stamped_now() {
    let mut store = EnrollmentStore::new();
    let before = Local::now().naive_local().trunc_subsecs(0);
    let rec = store
        .register(EnrollmentDraft {
            name: Some(String::new()),
            document: None,
            course: Some("   ".to_string()),
        })
        .clone();
    let after = Local::now().naive_local();

    assert_eq!(rec.name(), "(no name)");
    assert_eq!(rec.document(), "");
    assert_eq!(rec.course(), "Prog 1");
    assert!(rec.timestamp() >= before && rec.timestamp() <= after);
}

#[test]
fn fields_are_trimmed() {
    let mut store = EnrollmentStore::new();
    let rec = store.register(draft("  Ana Pérez  ", " 51234567 ", " Prog 2\t"));
    assert_eq!(rec.name(), "Ana Pérez");
    assert_eq!(rec.document(), "51234567");
    assert_eq!(rec.course(), "Prog 2");
}

#[test]
fn list_preserves_registration_order_and_duplicates() {
    let mut store = EnrollmentStore::new();
    for name in ["C", "A", "B", "A"] {
        store.register(draft(name, "", "Prog 1"));
    }
    let listed: Vec<&str> = store.list().iter().map(Enrollment::name).collect();
    assert_eq!(listed, ["C", "A", "B", "A"]);
    assert_eq!(store.len(), 4);
    assert_eq!(store.latest().map(Enrollment::name), Some("A"));

    let recent: Vec<&str> = store.recent(2).iter().map(Enrollment::name).collect();
    assert_eq!(recent, ["B", "A"]);
    assert_eq!(store.recent(10).len(), 4);
}

#[test]
fn search_matches_name_or_document_case_insensitively() {
    let mut store = EnrollmentStore::new();
    store.load_demo_data();
    store.register(draft("Pedro Ruiz", "11112222", "Prog 2"));

    assert_eq!(names(&store.search("ANA")), ["Ana Pérez"]);
    assert_eq!(names(&store.search("pérez")), ["Ana Pérez"]);
    assert_eq!(names(&store.search("PÉREZ")), ["Ana Pérez"]);
    assert_eq!(names(&store.search("8877")), ["Luis Gómez"]);
    // "Camila Díaz" and "Pedro Ruiz" both contain "i", in registration order.
    assert_eq!(
        names(&store.search("i")),
        ["Luis Gómez", "Camila Díaz", "Pedro Ruiz"]
    );
    assert!(store.search("prog").is_empty());
}

#[test]
fn search_keeps_surrounding_whitespace_of_non_blank_query() {
    let mut store = EnrollmentStore::new();
    store.register(draft("Ana", "", "Prog 1"));
    store.register(draft("Ana Pérez", "", "Prog 2"));

    assert!(store.search("ana  ").is_empty());
    assert_eq!(names(&store.search("ana ")), ["Ana Pérez"]);
    assert_eq!(names(&store.search(" pérez")), ["Ana Pérez"]);
}

#[test]
fn blank_search_returns_everything() {
    let mut store = EnrollmentStore::new();
    store.load_demo_data();

    let all: Vec<&Enrollment> = store.list().iter().collect();
    assert_eq!(store.search(""), all);
    assert_eq!(store.search("   "), all);
}

#[test]
fn summary_orders_courses_by_first_occurrence() {
    let mut store = EnrollmentStore::new();
    store.register(draft("Ana Pérez", "", "Prog 2"));
    store.register(draft("Luis Gómez", "", "Prog 1"));

    let summary = store.summarize();
    assert_eq!(summary.total, 2);
    let courses: Vec<(&str, usize)> = summary
        .by_course
        .iter()
        .map(|c| (c.course.as_str(), c.count))
        .collect();
    assert_eq!(courses, [("Prog 2", 1), ("Prog 1", 1)]);
}

#[test]
fn demo_data_goes_through_registration_and_saves_each() {
    let sink = MemorySink::new();
    let mut store = EnrollmentStore::with_sink(Box::new(sink.clone())).expect("open");
    store.load_demo_data();

    assert_eq!(sink.save_count(), DEMO_ENROLLMENTS.len());
    assert_eq!(sink.records(), store.list());

    let got: Vec<(&str, &str, &str)> = store
        .list()
        .iter()
        .map(|r| (r.name(), r.document(), r.course()))
        .collect();
    assert_eq!(got, DEMO_ENROLLMENTS);
}

#[test]
fn sink_records_are_loaded_before_new_registrations() {
    let mut seed = EnrollmentStore::new();
    seed.register(draft("Ana", "1", "Prog 2"));
    let sink = MemorySink::with_records(seed.list().to_vec());

    let mut store = EnrollmentStore::with_sink(Box::new(sink.clone())).expect("open");
    assert_eq!(store.len(), 1);
    assert_eq!(sink.save_count(), 0);

    store.register(draft("Luis", "2", "Prog 1"));
    assert_eq!(sink.save_count(), 1);
    let persisted: Vec<String> = sink.records().iter().map(|r| r.name().to_string()).collect();
    assert_eq!(persisted, ["Ana", "Luis"]);
}

#[test]
fn in_memory_store_never_persists() {
    let mut store = EnrollmentStore::new();
    assert!(!store.is_persistent());
    store.load_demo_data();
    assert_eq!(store.len(), 3);
}
