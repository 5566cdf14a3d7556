use crate::range_table::RangeError;
use crate::util::is_digits;
use ahash::AHashMap;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct TableId;
}

/// Key of the table every decomposition starts from. Tables below it are keyed by the prefixes
/// leading to them, joined with `-` (e.g. `978` then `978-0`).
pub const ROOT_KEY: &str = "";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeEntry {
    pub(crate) lower: String,
    pub(crate) upper: String,
    pub(crate) prefix_len: usize,
    pub(crate) child: Option<TableId>,
    pub(crate) properties: Vec<(String, String)>,
}

impl RangeEntry {
    /// Inclusive lower bound, as wide as the table.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Inclusive upper bound, as wide as the table.
    pub fn upper(&self) -> &str {
        &self.upper
    }

    /// Number of digits consumed when this range matches.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn child(&self) -> Option<TableId> {
        self.child
    }

    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Compares the first `prefix_len` digits with the same-width prefixes of the bounds. The
    /// bounds are zero and nine padded, so this is the same as comparing the full table width.
    fn contains(&self, digits: &str) -> bool {
        let len = self.prefix_len;
        if digits.len() < len {
            return false;
        }
        let candidate = &digits[..len];
        &self.lower[..len] <= candidate && candidate <= &self.upper[..len]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTable {
    pub(crate) key: String,
    pub(crate) width: usize,
    pub(crate) entries: Vec<RangeEntry>,
}

impl RangeTable {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The digit length shared by all the bounds of the table.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Entries ordered by their lower bound.
    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    pub fn lookup<'a, 'd>(&'a self, digits: &'d str) -> Result<Lookup<'a, 'd>, RangeError> {
        if !is_digits(digits) {
            return Err(RangeError::InvalidInput);
        }
        // Ranges never overlap, so the first match is the only one.
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.contains(digits))
            .ok_or_else(|| RangeError::NoMatchingRange {
                table: self.key.clone(),
                digits: digits.to_string(),
            })?;
        let (prefix, remainder) = digits.split_at(entry.prefix_len);
        Ok(Lookup {
            prefix,
            remainder,
            entry,
        })
    }
}

/// The outcome of a successful lookup: the consumed prefix, what follows it, and the entry that
/// matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a, 'd> {
    pub prefix: &'d str,
    pub remainder: &'d str,
    pub entry: &'a RangeEntry,
}

/// One part of a decomposed number with the properties of the range it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a, 'd> {
    pub value: &'d str,
    pub properties: &'a [(String, String)],
}

impl Segment<'_, '_> {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// An arena of range tables with one root. Built by
/// [`RangeDbBuilder`](crate::range_table::RangeDbBuilder), immutable afterwards.
#[derive(Debug, Clone)]
pub struct RangeDb {
    pub(crate) tables: SlotMap<TableId, RangeTable>,
    pub(crate) keys: AHashMap<String, TableId>,
    pub(crate) root: TableId,
}

impl RangeDb {
    pub fn root(&self) -> &RangeTable {
        &self.tables[self.root]
    }

    pub fn table(&self, key: &str) -> Option<&RangeTable> {
        self.keys.get(key).and_then(|id| self.tables.get(*id))
    }

    pub fn table_by_id(&self, id: TableId) -> Option<&RangeTable> {
        self.tables.get(id)
    }

    pub fn num_tables(&self) -> usize {
        self.tables.len()
    }

    /// Key of the table that decomposes what follows `entry`, if any.
    pub fn child_key(&self, entry: &RangeEntry) -> Option<&str> {
        entry
            .child
            .and_then(|id| self.tables.get(id))
            .map(|table| table.key.as_str())
    }

    /// Matches the leading digits of `digits` against the table named `key`.
    pub fn lookup<'a, 'd>(&'a self, key: &str, digits: &'d str) -> Result<Lookup<'a, 'd>, RangeError> {
        if digits.is_empty() {
            return Err(RangeError::InvalidInput);
        }
        self.table(key)
            .ok_or_else(|| RangeError::UnknownTable(key.to_string()))?
            .lookup(digits)
    }

    /// Decomposes `digits` starting from the root table, following the child table of every
    /// matched range. The walk ends at a range without a child table (or when the digits run
    /// out); what is left becomes the last segment.
    pub fn info<'a, 'd>(&'a self, digits: &'d str) -> Result<Vec<Segment<'a, 'd>>, RangeError> {
        if digits.is_empty() {
            return Err(RangeError::InvalidInput);
        }
        let mut segments = vec![];
        let mut table = self.root();
        let mut rest = digits;
        loop {
            let found = table.lookup(rest)?;
            segments.push(Segment {
                value: found.prefix,
                properties: &found.entry.properties,
            });
            rest = found.remainder;
            match found.entry.child {
                Some(child) if !rest.is_empty() => {
                    table = self
                        .tables
                        .get(child)
                        .ok_or_else(|| RangeError::UnknownTable(format!("{child:?}")))?;
                }
                _ => break,
            }
        }
        if !rest.is_empty() {
            segments.push(Segment {
                value: rest,
                properties: &[],
            });
        }
        Ok(segments)
    }

    /// Same as [`RangeDb::info`] without the properties. The parts concatenate to `digits`.
    pub fn split<'d>(&self, digits: &'d str) -> Result<Vec<&'d str>, RangeError> {
        Ok(self
            .info(digits)?
            .into_iter()
            .map(|segment| segment.value)
            .collect())
    }
}

#[cfg(test)]
mod test {
    use crate::range_table::*;

    fn two_tier_db() -> RangeDb {
        RangeDbBuilder::new()
            .range(ROOT_KEY, RangeSpec::new("978", "978", 3).child("A"))
            .range(ROOT_KEY, RangeSpec::new("979", "979", 3))
            .range("A", RangeSpec::new("000", "499", 2))
            .range("A", RangeSpec::new("500", "899", 3))
            .range("A", RangeSpec::new("900", "999", 1).property("note", "short"))
            .build()
            .unwrap()
    }

    #[test]
    fn chained_lookup() {
        let db = two_tier_db();

        let root = db.lookup(ROOT_KEY, "9780241234567").unwrap();
        assert_eq!(root.prefix, "978");
        assert_eq!(root.remainder, "0241234567");
        let next = db.child_key(root.entry).unwrap();
        assert_eq!(next, "A");

        let group = db.lookup(next, root.remainder).unwrap();
        assert_eq!(group.prefix, "02");
        assert_eq!(group.remainder, "41234567");
        assert_eq!(group.entry.lower(), "000");
        assert_eq!(group.entry.upper(), "499");
        assert_eq!(group.entry.child(), None);
    }

    #[test]
    fn lookup_uses_declared_prefix_length() {
        let db = two_tier_db();
        let cases = vec![
            ("0241234567", "02", "41234567"),
            ("4999", "49", "99"),
            ("5001", "500", "1"),
            ("899", "899", ""),
            ("912", "9", "12"),
            // shorter than the table width but long enough for the matching prefix
            ("9", "9", ""),
            ("12", "12", ""),
        ];
        for (digits, prefix, remainder) in cases {
            println!("testing for input {digits}");
            let found = db.lookup("A", digits).unwrap();
            assert_eq!(found.prefix, prefix);
            assert_eq!(found.remainder, remainder);
        }
        assert_eq!(
            db.lookup("A", "912").unwrap().entry.property("note"),
            Some("short")
        );
    }

    #[test]
    fn lookup_is_pure() {
        let db = two_tier_db();
        let first = db.lookup("A", "5551234").unwrap();
        for _ in 0..5 {
            assert_eq!(db.lookup("A", "5551234").unwrap(), first);
        }
    }

    #[test]
    fn lookup_errors() {
        let db = two_tier_db();
        assert_eq!(
            db.lookup(ROOT_KEY, "9770000"),
            Err(RangeError::NoMatchingRange {
                table: ROOT_KEY.to_string(),
                digits: "9770000".to_string()
            })
        );
        // too short to hold the 3 digit prefix of the 500-899 range
        assert!(matches!(
            db.lookup("A", "55"),
            Err(RangeError::NoMatchingRange { .. })
        ));
        assert_eq!(
            db.lookup("B", "123"),
            Err(RangeError::UnknownTable("B".to_string()))
        );
        assert_eq!(db.lookup("A", ""), Err(RangeError::InvalidInput));
        assert_eq!(db.lookup("A", "1A3"), Err(RangeError::InvalidInput));
        assert_eq!(db.lookup("A", "１２３"), Err(RangeError::InvalidInput));
    }

    #[test]
    fn split_walks_down_the_tree() {
        let db = two_tier_db();
        assert_eq!(
            db.split("9780241234567").unwrap(),
            vec!["978", "02", "41234567"]
        );
        // no child table below 979
        assert_eq!(db.split("9791234").unwrap(), vec!["979", "1234"]);
        assert_eq!(db.split("978").unwrap(), vec!["978"]);
        assert!(matches!(
            db.split("1234"),
            Err(RangeError::NoMatchingRange { .. })
        ));
        assert_eq!(db.split(""), Err(RangeError::InvalidInput));

        let info = db.info("978912").unwrap();
        assert_eq!(info.len(), 3);
        assert_eq!(info[1].value, "9");
        assert_eq!(info[1].property("note"), Some("short"));
        assert_eq!(info[2].properties, &[]);
    }
}
