/// One line of the report: a base item and whether the compare set has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    pub item: String,
    pub matched: bool,
}

/// Marks each base item as matched when it occurs as a substring of at
/// least one fragment in `other`. Deliberately containment, not equality.
pub fn compare(base: &[String], other: &[String]) -> Vec<ComparisonRow> {
    base.iter()
        .map(|item| ComparisonRow {
            item: item.clone(),
            matched: other.iter().any(|fragment| fragment.contains(item.as_str())),
        })
        .collect()
}
