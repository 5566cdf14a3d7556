use crate::range_table::table::{RangeDb, RangeEntry, RangeTable, TableId, ROOT_KEY};
use crate::range_table::TableError;
use crate::util::is_digits;
use ahash::AHashMap;
use metrics::{counter, histogram};
use slotmap::SlotMap;

/// A range as declared by the user, before padding and validation.
///
/// Bounds whose length equals `prefix_len` are prefix ranges and get padded to the width of
/// their table. Longer bounds must already have the table width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSpec {
    lower: String,
    upper: String,
    prefix_len: usize,
    child: Option<String>,
    properties: Vec<(String, String)>,
}

impl RangeSpec {
    pub fn new(lower: impl Into<String>, upper: impl Into<String>, prefix_len: usize) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
            prefix_len,
            child: None,
            properties: vec![],
        }
    }

    /// Name the table decomposing the digits that follow this range.
    pub fn child(mut self, key: impl Into<String>) -> Self {
        self.child = Some(key.into());
        self
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// Ranges without child and properties only tell how long a prefix is. More specific
    /// declarations of the same prefix length take precedence over them.
    fn is_bare(&self) -> bool {
        self.child.is_none() && self.properties.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RangeDbBuilder {
    // Insertion ordered, the root first.
    tables: Vec<(String, Vec<RangeSpec>)>,
}

impl RangeDbBuilder {
    pub fn new() -> Self {
        Self {
            tables: vec![(ROOT_KEY.to_string(), vec![])],
        }
    }

    /// Declare a table, possibly empty.
    pub fn table(mut self, key: &str) -> Self {
        self.table_mut(key);
        self
    }

    pub fn range(mut self, key: &str, spec: RangeSpec) -> Self {
        self.add_range(key, spec);
        self
    }

    pub fn add_range(&mut self, key: &str, spec: RangeSpec) {
        self.table_mut(key).push(spec);
    }

    fn table_mut(&mut self, key: &str) -> &mut Vec<RangeSpec> {
        let idx = match self.tables.iter().position(|(name, _)| name == key) {
            Some(idx) => idx,
            None => {
                self.tables.push((key.to_string(), vec![]));
                self.tables.len() - 1
            }
        };
        &mut self.tables[idx].1
    }

    /// Validates every table, carves specific declarations out of the bare ranges containing them
    /// and resolves the child references.
    pub fn build(self) -> Result<RangeDb, TableError> {
        let mut tables = SlotMap::with_key();
        let mut keys = AHashMap::with_capacity(self.tables.len());
        for (key, _) in &self.tables {
            let id = tables.insert(RangeTable {
                key: key.clone(),
                width: 0,
                entries: vec![],
            });
            keys.insert(key.clone(), id);
        }

        for (key, specs) in self.tables {
            let (width, entries) = build_table(&key, specs, &keys)?;
            if let Some(table) = keys.get(&key).and_then(|id| tables.get_mut(*id)) {
                table.width = width;
                table.entries = entries;
            }
        }

        let root = keys
            .get(ROOT_KEY)
            .copied()
            .ok_or_else(|| TableError::UnknownTable(ROOT_KEY.to_string()))?;

        counter!("range_db.loaded").increment(1);
        histogram!("range_db.num_tables").record(tables.len() as f64);

        Ok(RangeDb { tables, keys, root })
    }
}

impl Default for RangeDbBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_table(
    key: &str,
    specs: Vec<RangeSpec>,
    keys: &AHashMap<String, TableId>,
) -> Result<(usize, Vec<RangeEntry>), TableError> {
    for spec in &specs {
        check_bounds(key, spec)?;
    }
    let width = specs
        .iter()
        .map(|spec| spec.lower.len())
        .max()
        .unwrap_or(0);

    let mut padded = Vec::with_capacity(specs.len());
    for spec in specs {
        padded.push(pad(key, spec, width)?);
    }

    let (bare, specific): (Vec<RangeSpec>, Vec<RangeSpec>) =
        padded.into_iter().partition(RangeSpec::is_bare);
    let mut ranges = carve(bare, &specific);
    ranges.extend(specific);
    ranges.sort_by(|a, b| a.lower.cmp(&b.lower));

    for pair in ranges.windows(2) {
        if pair[0].upper >= pair[1].lower {
            return Err(TableError::OverlappingRanges {
                table: key.to_string(),
                first: format!("{}-{}", pair[0].lower, pair[0].upper),
                second: format!("{}-{}", pair[1].lower, pair[1].upper),
            });
        }
    }

    let entries = ranges
        .into_iter()
        .map(|spec| {
            let child = match spec.child {
                Some(child) => Some(
                    keys.get(&child)
                        .copied()
                        .ok_or(TableError::UnknownTable(child))?,
                ),
                None => None,
            };
            Ok(RangeEntry {
                lower: spec.lower,
                upper: spec.upper,
                prefix_len: spec.prefix_len,
                child,
                properties: spec.properties,
            })
        })
        .collect::<Result<Vec<_>, TableError>>()?;
    Ok((width, entries))
}

fn check_bounds(table: &str, spec: &RangeSpec) -> Result<(), TableError> {
    for bound in [&spec.lower, &spec.upper] {
        if !is_digits(bound) {
            return Err(TableError::InvalidBound {
                table: table.to_string(),
                bound: bound.clone(),
            });
        }
    }
    if spec.lower.len() != spec.upper.len() {
        return Err(TableError::InconsistentWidth {
            table: table.to_string(),
            bound: spec.upper.clone(),
            width: spec.lower.len(),
        });
    }
    if spec.prefix_len == 0 || spec.prefix_len > spec.lower.len() {
        return Err(TableError::InvalidPrefixLength {
            table: table.to_string(),
            bound: spec.lower.clone(),
            prefix_len: spec.prefix_len,
        });
    }
    Ok(())
}

fn pad(table: &str, mut spec: RangeSpec, width: usize) -> Result<RangeSpec, TableError> {
    let len = spec.lower.len();
    if len == spec.prefix_len {
        spec.lower.extend(std::iter::repeat('0').take(width - len));
        spec.upper.extend(std::iter::repeat('9').take(width - len));
    } else if len != width {
        return Err(TableError::InconsistentWidth {
            table: table.to_string(),
            bound: spec.lower,
            width,
        });
    }

    let p = spec.prefix_len;
    if spec.lower[p..].bytes().any(|b| b != b'0') {
        return Err(TableError::UnpaddedBound {
            table: table.to_string(),
            bound: spec.lower,
        });
    }
    if spec.upper[p..].bytes().any(|b| b != b'9') {
        return Err(TableError::UnpaddedBound {
            table: table.to_string(),
            bound: spec.upper,
        });
    }
    if spec.lower > spec.upper {
        return Err(TableError::InvertedRange {
            table: table.to_string(),
            lower: spec.lower,
            upper: spec.upper,
        });
    }
    Ok(spec)
}

/// Removes from the bare ranges the prefixes declared by a specific range of the same prefix
/// length. Specific ranges with another prefix length are left to the overlap check.
fn carve(bare: Vec<RangeSpec>, specific: &[RangeSpec]) -> Vec<RangeSpec> {
    let mut pieces = bare;
    for hole in specific {
        let p = hole.prefix_len;
        let mut next = Vec::with_capacity(pieces.len() + 1);
        for piece in pieces {
            if piece.prefix_len != p || piece.upper < hole.lower || hole.upper < piece.lower {
                next.push(piece);
                continue;
            }
            if piece.lower < hole.lower {
                if let Some(before) = decrement(&hole.lower[..p]) {
                    next.push(RangeSpec {
                        upper: padded_with(before, '9', piece.upper.len()),
                        ..piece.clone()
                    });
                }
            }
            if hole.upper < piece.upper {
                if let Some(after) = increment(&hole.upper[..p]) {
                    next.push(RangeSpec {
                        lower: padded_with(after, '0', piece.lower.len()),
                        ..piece
                    });
                }
            }
        }
        pieces = next;
    }
    pieces
}

fn padded_with(mut digits: String, fill: char, width: usize) -> String {
    let missing = width.saturating_sub(digits.len());
    digits.extend(std::iter::repeat(fill).take(missing));
    digits
}

/// The fixed width decimal predecessor, `None` for all zeros.
fn decrement(digits: &str) -> Option<String> {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'0' {
            *byte = b'9';
        } else {
            *byte -= 1;
            return String::from_utf8(bytes).ok();
        }
    }
    None
}

/// The fixed width decimal successor, `None` for all nines.
fn increment(digits: &str) -> Option<String> {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8(bytes).ok();
        }
    }
    None
}
