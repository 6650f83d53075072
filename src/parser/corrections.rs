/// Campus and township names the geocoder cannot place, mapped to a
/// resolvable "City, ST". Order matters: the first matching key wins.
pub const NCAA_LOCATION_FIXES: &[(&str, &str)] = &[
    ("Mississippi State", "Starkville, MS"),
    ("Notre Dame", "Notre Dame, IN"),
    ("University", "Oxford, MS"), // Ole Miss
    ("College Township", "State College, PA"), // Penn State
    ("USAF Academy", "Colorado Springs, CO"),
    ("College Park", "College Park, MD"),
    ("College Station", "College Station, TX"),
    ("Paradise", "Las Vegas, NV"), // Allegiant Stadium
];

/// Replace the whole location with the first rule whose key occurs in it.
pub fn correct_location(location: &str, fixes: &[(&str, &str)]) -> String {
    fixes
        .iter()
        .find(|(key, _)| location.contains(key))
        .map(|(_, fixed)| fixed.to_string())
        .unwrap_or_else(|| location.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix(location: &str) -> String {
        correct_location(location, NCAA_LOCATION_FIXES)
    }

    #[test]
    fn replaces_entire_string() {
        assert_eq!(fix("Mississippi State MS"), "Starkville, MS");
        assert_eq!(fix("Paradise Nevada"), "Las Vegas, NV");
        assert_eq!(fix("USAF Academy Colorado"), "Colorado Springs, CO");
    }

    #[test]
    fn first_rule_wins() {
        // Also contains "University", which comes later in the table.
        assert_eq!(fix("Notre Dame University Indiana"), "Notre Dame, IN");
        // "College Park" precedes "College Station" but only the latter matches.
        assert_eq!(fix("College Station Texas"), "College Station, TX");
    }

    #[test]
    fn substring_match_is_case_sensitive() {
        assert_eq!(fix("mississippi state MS"), "mississippi state MS");
    }

    #[test]
    fn unmatched_passes_through() {
        assert_eq!(fix("Ann Arbor Michigan"), "Ann Arbor Michigan");
        assert_eq!(fix(""), "");
    }

    #[test]
    fn empty_table_is_identity() {
        assert_eq!(correct_location("University Mississippi", &[]), "University Mississippi");
    }
}
