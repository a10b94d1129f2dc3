use captive_dns_domain::{DomainName, RecordTable, DEFAULT_RECORD_CAPACITY, MAX_NAME_LEN};
use std::net::Ipv4Addr;

fn name(s: &str) -> DomainName {
    DomainName::new(s).unwrap()
}

fn table_with(entries: &[(&str, [u8; 4])]) -> RecordTable {
    let mut table: RecordTable = RecordTable::new();
    for (n, ip) in entries {
        table.add(name(n), Ipv4Addr::from(*ip));
    }
    table
}

// ── add ────────────────────────────────────────────────────────────────────

#[test]
fn test_add_uses_first_free_slot() {
    let mut table: RecordTable = RecordTable::new();
    assert_eq!(table.add(name("a.lan"), Ipv4Addr::new(10, 0, 0, 1)), Some(0));
    assert_eq!(table.add(name("b.lan"), Ipv4Addr::new(10, 0, 0, 2)), Some(1));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_add_when_full_is_silent_noop() {
    let mut table: RecordTable<2> = RecordTable::new();
    table.add(name("a.lan"), Ipv4Addr::new(10, 0, 0, 1));
    table.add(name("b.lan"), Ipv4Addr::new(10, 0, 0, 2));

    assert!(table.is_full());
    assert_eq!(table.add(name("c.lan"), Ipv4Addr::new(10, 0, 0, 3)), None);
    assert_eq!(table.len(), 2);
    assert!(table.find(&name("c.lan")).is_none());
}

#[test]
fn test_add_empty_name_never_occupies_a_slot() {
    let mut table: RecordTable = RecordTable::new();
    assert_eq!(table.add(DomainName::empty(), Ipv4Addr::new(1, 2, 3, 4)), None);
    assert!(table.is_empty());
}

#[test]
fn test_default_capacity() {
    let table: RecordTable = RecordTable::default();
    assert_eq!(table.capacity(), DEFAULT_RECORD_CAPACITY);
    assert_eq!(RecordTable::<8>::CAPACITY, 8);
}

#[test]
fn test_duplicates_allowed_first_wins() {
    let table = table_with(&[("dup.lan", [10, 0, 0, 1]), ("dup.lan", [10, 0, 0, 2])]);

    assert_eq!(table.len(), 2);
    let record = table.lookup(&name("dup.lan")).unwrap();
    assert_eq!(record.address, Ipv4Addr::new(10, 0, 0, 1));
}

// ── find ───────────────────────────────────────────────────────────────────

#[test]
fn test_find_stored_prefix_matches_longer_query() {
    let table = table_with(&[("abc", [1, 1, 1, 1])]);
    assert_eq!(table.find(&name("abcdef")), Some(0));
}

#[test]
fn test_find_longer_stored_name_does_not_match_shorter_query() {
    let table = table_with(&[("abcdef", [1, 1, 1, 1])]);
    assert_eq!(table.find(&name("abc")), None);
}

#[test]
fn test_find_lax_prefix_example() {
    let table = table_with(&[("exa", [1, 1, 1, 1])]);
    assert_eq!(table.find(&name("example.com")), Some(0));
}

#[test]
fn test_find_is_case_insensitive() {
    let table = table_with(&[("Example.COM", [1, 1, 1, 1])]);
    assert_eq!(table.find(&name("eXAMPLE.com")), Some(0));
}

#[test]
fn test_find_strips_www_prefix_from_query() {
    let table = table_with(&[("example.com", [192, 168, 4, 1])]);

    let direct = table.lookup(&name("example.com"));
    let with_www = table.lookup(&name("www.example.com"));
    let upper_www = table.lookup(&name("WWW.Example.COM"));

    assert!(direct.is_some());
    assert_eq!(direct, with_www);
    assert_eq!(direct, upper_www);
}

#[test]
fn test_find_does_not_strip_www_from_stored_names() {
    let table = table_with(&[("www.example.com", [1, 1, 1, 1])]);
    assert_eq!(table.find(&name("www.example.com")), None);
    assert_eq!(table.find(&name("www.www.example.com")), Some(0));
}

#[test]
fn test_find_strips_only_one_www() {
    let table = table_with(&[("example.com", [1, 1, 1, 1])]);
    assert_eq!(table.find(&name("www.www.example.com")), None);
}

#[test]
fn test_wildcard_matches_any_name() {
    let table = table_with(&[("*", [10, 0, 0, 1])]);

    for query in ["a", "example.com", "www.example.com", "x.y.z.lan", "*"] {
        let record = table.lookup(&name(query)).unwrap();
        assert_eq!(record.address, Ipv4Addr::new(10, 0, 0, 1), "query {query}");
    }
}

#[test]
fn test_wildcard_respects_slot_order() {
    let table = table_with(&[("portal.lan", [10, 0, 0, 1]), ("*", [10, 0, 0, 2])]);

    assert_eq!(table.find(&name("portal.lan")), Some(0));
    assert_eq!(table.find(&name("other.lan")), Some(1));
}

#[test]
fn test_miss_returns_none() {
    let table = table_with(&[("portal.lan", [10, 0, 0, 1])]);
    assert_eq!(table.find(&name("google.com")), None);
}

#[test]
fn test_free_slots_never_match() {
    let table = table_with(&[("portal.lan", [10, 0, 0, 1])]);
    assert_eq!(table.find(&name("x")), None);
    assert_eq!(table.find(&DomainName::empty()), None);
}

#[test]
fn test_find_accepts_name_at_capacity() {
    let long = "a".repeat(MAX_NAME_LEN);
    let table = table_with(&[(long.as_str(), [1, 2, 3, 4])]);
    assert_eq!(table.find(&name(&long)), Some(0));
}

// ── clear ──────────────────────────────────────────────────────────────────

#[test]
fn test_clear_makes_every_lookup_miss() {
    let mut table = table_with(&[
        ("*", [10, 0, 0, 1]),
        ("portal.lan", [10, 0, 0, 2]),
        ("abc", [10, 0, 0, 3]),
    ]);
    table.clear();

    assert!(table.is_empty());
    for query in ["", "a", "portal.lan", "abcdef", "www.portal.lan"] {
        assert_eq!(table.find(&name(query)), None, "query {query:?}");
    }
}

#[test]
fn test_clear_frees_slots_for_reuse() {
    let mut table: RecordTable<1> = RecordTable::new();
    table.add(name("a.lan"), Ipv4Addr::new(10, 0, 0, 1));
    table.clear();

    assert_eq!(table.add(name("b.lan"), Ipv4Addr::new(10, 0, 0, 2)), Some(0));
    assert_eq!(table.get(0).unwrap().name, name("b.lan"));
}

// ── enumeration ────────────────────────────────────────────────────────────

#[test]
fn test_cursor_walks_records_in_slot_order() {
    let table = table_with(&[("a.lan", [10, 0, 0, 1]), ("b.lan", [10, 0, 0, 2])]);
    let mut cursor = table.cursor();

    assert!(cursor.current_name().is_none());

    assert!(cursor.next_entry());
    assert_eq!(cursor.current_name().unwrap().as_str(), "a.lan");
    assert_eq!(cursor.current_address(), Some(Ipv4Addr::new(10, 0, 0, 1)));

    assert!(cursor.next_entry());
    assert_eq!(cursor.current_name().unwrap().as_str(), "b.lan");
    assert_eq!(cursor.current_address(), Some(Ipv4Addr::new(10, 0, 0, 2)));

    assert!(!cursor.next_entry());
    assert!(cursor.current_name().is_none());
    assert!(!cursor.next_entry());
}

#[test]
fn test_cursor_reset_restarts_walk() {
    let table = table_with(&[("a.lan", [10, 0, 0, 1])]);
    let mut cursor = table.cursor();

    while cursor.next_entry() {}
    cursor.reset();

    assert!(cursor.next_entry());
    assert_eq!(cursor.current_name().unwrap().as_str(), "a.lan");
}

#[test]
fn test_cursor_on_empty_table() {
    let table: RecordTable = RecordTable::default();
    let mut cursor = table.cursor();
    assert!(!cursor.next_entry());
    assert!(cursor.current_address().is_none());
}

#[test]
fn test_iter_matches_cursor() {
    let table = table_with(&[("a.lan", [10, 0, 0, 1]), ("b.lan", [10, 0, 0, 2])]);
    let names: Vec<_> = table.iter().map(|r| r.name.to_string()).collect();
    assert_eq!(names, vec!["a.lan", "b.lan"]);
}

#[test]
fn test_collect_keeps_order_and_drops_overflow() {
    let source = table_with(&[
        ("a.lan", [10, 0, 0, 1]),
        ("b.lan", [10, 0, 0, 2]),
        ("c.lan", [10, 0, 0, 3]),
    ]);
    let copy: RecordTable<2> = source.iter().collect();

    assert!(copy.is_full());
    let names: Vec<_> = copy.iter().map(|r| r.name.to_string()).collect();
    assert_eq!(names, vec!["a.lan", "b.lan"]);
}
