// src/domain/grouping.rs

use crate::domain::record::Record;
use std::collections::HashMap;

/// Records sharing one calendar-day key, in the order they were fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGroup<'a> {
    pub date_key: &'a str,
    pub records: Vec<&'a Record>,
}

impl DateGroup<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Stable partition of `records` by [`Record::date_key`].
///
/// Groups come out in the order their key first appears; nothing is sorted
/// chronologically. Callers that want newest-first must sort upstream.
pub fn group_by_date(records: &[Record]) -> Vec<DateGroup<'_>> {
    let mut groups: Vec<DateGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let key = record.date_key();

        match index.get(key) {
            Some(&pos) => groups[pos].records.push(record),
            None => {
                index.insert(key, groups.len());
                groups.push(DateGroup {
                    date_key: key,
                    records: vec![record],
                });
            }
        }
    }

    groups
}

/// Looks up a single group by key without building the full partition.
pub fn find_group<'a>(records: &'a [Record], date_key: &str) -> Option<DateGroup<'a>> {
    let members: Vec<&Record> = records
        .iter()
        .filter(|r| r.date_key() == date_key)
        .collect();

    let first: &'a Record = *members.first()?;
    Some(DateGroup {
        date_key: first.date_key(),
        records: members,
    })
}
