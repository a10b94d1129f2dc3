#![allow(dead_code)]

use captive_dns_application::ports::{QueryObserver, RecordRepository};
use captive_dns_domain::{DomainName, LocalRecord};
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

/// Vec-backed store with an exact-match lookup, enough to drive the use cases.
#[derive(Clone)]
pub struct MockRecordRepository {
    records: Arc<Mutex<Vec<LocalRecord>>>,
    capacity: usize,
    find_calls: Arc<Mutex<Vec<String>>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self::with_capacity(32)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            capacity,
            find_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_records(entries: &[(&str, [u8; 4])]) -> Self {
        let repo = Self::new();
        for (name, ip) in entries {
            repo.add(LocalRecord::new(
                DomainName::new(name).unwrap(),
                Ipv4Addr::from(*ip),
            ));
        }
        repo
    }

    pub fn find_calls(&self) -> Vec<String> {
        self.find_calls.lock().unwrap().clone()
    }
}

impl RecordRepository for MockRecordRepository {
    fn add(&self, record: LocalRecord) -> bool {
        let mut records = self.records.lock().unwrap();
        if records.len() >= self.capacity {
            return false;
        }
        records.push(record);
        true
    }

    fn find(&self, name: &DomainName) -> Option<LocalRecord> {
        self.find_calls.lock().unwrap().push(name.to_string());
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.name == *name)
            .copied()
    }

    fn clear(&self) {
        self.records.lock().unwrap().clear();
    }

    fn records(&self) -> Vec<LocalRecord> {
        self.records.lock().unwrap().clone()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

#[derive(Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<(String, Option<Ipv4Addr>)>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, Option<Ipv4Addr>)> {
        self.events.lock().unwrap().clone()
    }
}

impl QueryObserver for RecordingObserver {
    fn on_query(&self, name: &DomainName, address: Option<Ipv4Addr>) {
        self.events.lock().unwrap().push((name.to_string(), address));
    }
}
