use crate::DomainName;
use std::net::Ipv4Addr;

pub const DEFAULT_RECORD_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalRecord {
    pub name: DomainName,
    pub address: Ipv4Addr,
}

impl LocalRecord {
    pub fn new(name: DomainName, address: Ipv4Addr) -> Self {
        Self { name, address }
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    occupied: bool,
    name: DomainName,
    address: [u8; 4],
}

impl Slot {
    const FREE: Slot = Slot {
        occupied: false,
        name: DomainName::empty(),
        address: [0u8; 4],
    };

    fn record(&self) -> Option<LocalRecord> {
        self.occupied
            .then(|| LocalRecord::new(self.name, Ipv4Addr::from(self.address)))
    }

    /// A slot matches when its name is the `*` wildcard or when the query
    /// starts with the stored name, compared case-insensitively.
    ///
    /// Only the stored name's length is compared, so `"exa"` matches
    /// `"example.com"`. Existing deployments rely on this.
    fn matches(&self, query: &[u8]) -> bool {
        if !self.occupied {
            return false;
        }
        if self.name.is_wildcard() {
            return true;
        }
        let stored = self.name.as_bytes();
        query
            .get(..stored.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(stored))
    }
}

/// Fixed-capacity domain → IPv4 table searched by linear scan.
///
/// Duplicates are allowed; lookups return the lowest-index match.
#[derive(Debug, Clone)]
pub struct RecordTable<const N: usize = DEFAULT_RECORD_CAPACITY> {
    slots: [Slot; N],
}

impl<const N: usize> RecordTable<N> {
    pub const CAPACITY: usize = N;

    pub fn new() -> Self {
        Self {
            slots: [Slot::FREE; N],
        }
    }

    /// Stores the record in the first free slot.
    ///
    /// Returns the slot index, or `None` when nothing was stored: the table is
    /// full or the name is empty (an empty name can never be looked up).
    pub fn add(&mut self, name: DomainName, address: Ipv4Addr) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        let index = self.slots.iter().position(|slot| !slot.occupied)?;
        self.slots[index] = Slot {
            occupied: true,
            name,
            address: address.octets(),
        };
        Some(index)
    }

    /// Index of the first slot matching `query` after stripping a leading `www.`.
    pub fn find(&self, query: &DomainName) -> Option<usize> {
        let query = query.without_www_prefix();
        self.slots.iter().position(|slot| slot.matches(query))
    }

    pub fn lookup(&self, query: &DomainName) -> Option<LocalRecord> {
        self.find(query).and_then(|index| self.get(index))
    }

    pub fn get(&self, index: usize) -> Option<LocalRecord> {
        self.slots.get(index).and_then(Slot::record)
    }

    pub fn clear(&mut self) {
        self.slots = [Slot::FREE; N];
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.occupied).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| !slot.occupied)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.occupied)
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn iter(&self) -> impl Iterator<Item = LocalRecord> + '_ {
        self.slots.iter().filter_map(Slot::record)
    }

    pub fn cursor(&self) -> RecordCursor<'_, N> {
        RecordCursor::new(self)
    }
}

impl<const N: usize> Default for RecordTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fills slots in iteration order; records past capacity are dropped as with
/// [`RecordTable::add`].
impl<const N: usize> FromIterator<LocalRecord> for RecordTable<N> {
    fn from_iter<I: IntoIterator<Item = LocalRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.add(record.name, record.address);
        }
        table
    }
}

/// Sequential walk over the occupied slots of a [`RecordTable`].
///
/// The cursor starts before the first entry; call [`RecordCursor::next_entry`]
/// to move onto it.
#[derive(Debug)]
pub struct RecordCursor<'a, const N: usize = DEFAULT_RECORD_CAPACITY> {
    table: &'a RecordTable<N>,
    current: Option<usize>,
    next: usize,
}

impl<'a, const N: usize> RecordCursor<'a, N> {
    fn new(table: &'a RecordTable<N>) -> Self {
        Self {
            table,
            current: None,
            next: 0,
        }
    }

    pub fn reset(&mut self) {
        self.current = None;
        self.next = 0;
    }

    /// Advances to the next occupied slot. Returns `false` once the table is
    /// exhausted, after which the current entry is cleared.
    pub fn next_entry(&mut self) -> bool {
        let found = self.table.slots[self.next.min(N)..]
            .iter()
            .position(|slot| slot.occupied)
            .map(|offset| self.next + offset);

        match found {
            Some(index) => {
                self.current = Some(index);
                self.next = index + 1;
                true
            }
            None => {
                self.current = None;
                self.next = N;
                false
            }
        }
    }

    pub fn current_name(&self) -> Option<&'a DomainName> {
        let table = self.table;
        self.current.map(|index| &table.slots[index].name)
    }

    pub fn current_address(&self) -> Option<Ipv4Addr> {
        self.current
            .map(|index| Ipv4Addr::from(self.table.slots[index].address))
    }
}
