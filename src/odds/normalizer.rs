//! Candidate identity normalization across independently titled markets.

/// Label used when a market carries no candidate title at all
pub const UNKNOWN_CANDIDATE: &str = "Unknown";

/// Known spelling variants, keyed by lower-case alias
pub const NAME_ALIASES: &[(&str, &str)] = &[
    ("jd vance", "J.D. Vance"),
    ("j.d. vance", "J.D. Vance"),
    ("stephen smith", "Stephen A. Smith"),
    ("stephen a. smith", "Stephen A. Smith"),
    ("jb pritzker", "J.B. Pritzker"),
    ("j.b. pritzker", "J.B. Pritzker"),
];

/// Resolve a raw market label to its canonical candidate name.
///
/// Matching is case-insensitive; unmapped labels are returned with their
/// original casing.
pub fn canonical_name(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN_CANDIDATE.to_string();
    };

    let lowered = raw.to_lowercase();
    NAME_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowered)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_is_case_insensitive() {
        assert_eq!(canonical_name(Some("jd vance")), "J.D. Vance");
        assert_eq!(canonical_name(Some("JD Vance")), "J.D. Vance");
        assert_eq!(canonical_name(Some("J.D. VANCE")), "J.D. Vance");
        assert_eq!(canonical_name(Some("JB Pritzker")), "J.B. Pritzker");
        assert_eq!(canonical_name(Some("Stephen Smith")), "Stephen A. Smith");
    }

    #[test]
    fn test_canonical_names_are_fixed_points() {
        for (_, canonical) in NAME_ALIASES {
            assert_eq!(canonical_name(Some(canonical)), *canonical);
        }
    }

    #[test]
    fn test_unmapped_keeps_casing() {
        assert_eq!(canonical_name(Some("Gavin Newsom")), "Gavin Newsom");
        assert_eq!(canonical_name(Some("aoc")), "aoc");
        // No trimming either
        assert_eq!(canonical_name(Some(" jd vance")), " jd vance");
    }

    #[test]
    fn test_missing_label() {
        assert_eq!(canonical_name(None), UNKNOWN_CANDIDATE);
        assert_eq!(canonical_name(Some("")), "");
    }
}
