//! Record grouping
//!
//! MPD replies are flat `key: value` streams with no explicit item
//! delimiters. Items are recovered by watching for a key that is already
//! present in the item being built: that key starts the next item.
//!
//! This heuristic misgroups any reply whose single logical item repeats a
//! key (multi-valued tags, for instance). It is kept because every client of
//! this protocol depends on it.

/// One logical item (a song, a playlist, an output...)
///
/// Keys keep their arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the first field named `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// Keys in arrival order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn into_values(self) -> Vec<String> {
        self.fields.into_iter().map(|(_, v)| v).collect()
    }
}

/// One grouped item: a full record, or a bare value for single-key groups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Record(Record),
    Value(String),
}

impl Item {
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Item::Record(record) => Some(record),
            Item::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Item::Record(_) => None,
            Item::Value(value) => Some(value),
        }
    }
}

/// Group data lines into items
///
/// A group with fewer than two distinct keys is unwrapped into its bare
/// value, so `volume: 50` yields `Value("50")` and a list of `Artist:` lines
/// yields one value per line. This applies at every position, not only to
/// the final group: `Artist: A, Artist: B, file: x` gives `Value("A")`
/// followed by a record.
pub fn group_records(lines: &[(String, String)]) -> Vec<Item> {
    let mut groups: Vec<Record> = Vec::new();
    let mut current = Record::new();

    for (key, value) in lines {
        if current.contains_key(key) {
            groups.push(std::mem::take(&mut current));
        }
        current.insert(key.as_str(), value.as_str());
    }
    if !current.is_empty() {
        groups.push(current);
    }

    let mut items = Vec::with_capacity(groups.len());
    for group in groups {
        if group.len() < 2 {
            items.extend(group.into_values().into_iter().map(Item::Value));
        } else {
            items.push(Item::Record(group));
        }
    }
    items
}

/// Shape of a successful reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// No data lines (`clear`, `stop`, ...) or a reported ACK
    Empty,

    /// Exactly one item
    Single(Item),

    /// More than one item, in arrival order
    Many(Vec<Item>),
}

impl Reply {
    /// Group `lines` and pick the reply shape from the item count
    pub fn from_lines(lines: &[(String, String)]) -> Self {
        let mut items = group_records(lines);
        match items.len() {
            0 => Reply::Empty,
            1 => Reply::Single(items.remove(0)),
            _ => Reply::Many(items),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Reply::Empty)
    }

    /// All items, whatever the shape
    pub fn into_items(self) -> Vec<Item> {
        match self {
            Reply::Empty => Vec::new(),
            Reply::Single(item) => vec![item],
            Reply::Many(items) => items,
        }
    }

    /// The single record, if the reply is exactly one record
    pub fn into_record(self) -> Option<Record> {
        match self {
            Reply::Single(Item::Record(record)) => Some(record),
            _ => None,
        }
    }

    /// Every record item; bare values are skipped
    pub fn into_records(self) -> Vec<Record> {
        self.into_items()
            .into_iter()
            .filter_map(|item| match item {
                Item::Record(record) => Some(record),
                Item::Value(_) => None,
            })
            .collect()
    }

    /// The single bare value, if the reply is exactly one value
    pub fn into_value(self) -> Option<String> {
        match self {
            Reply::Single(Item::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Every bare value item; records are skipped
    pub fn into_values(self) -> Vec<String> {
        self.into_items()
            .into_iter()
            .filter_map(|item| match item {
                Item::Value(value) => Some(value),
                Item::Record(_) => None,
            })
            .collect()
    }
}
