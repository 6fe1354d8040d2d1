/// Returns the short display name of a team.
///
/// Maps the verbose official names used by the results provider to the
/// shorter names shown on the schedule. Names without a mapping are
/// returned unchanged.
///
/// # Examples
/// ```
/// use match_calendar::normalize_team_name;
///
/// assert_eq!(normalize_team_name("New York Liberty"), "NY Liberty");
/// assert_eq!(normalize_team_name("Los Angeles Sparks"), "L.A. Sparks");
/// assert_eq!(normalize_team_name("Unknown Team FC"), "Unknown Team FC");
/// ```
pub fn normalize_team_name(raw_name: &str) -> String {
    match raw_name {
        "Los Angeles Sparks" => "L.A. Sparks".to_string(),
        "Washington Mystics" => "Washington".to_string(),
        "Phoenix Mercury" => "Phoenix".to_string(),
        "New York Liberty" => "NY Liberty".to_string(),
        "Golden State Valkyries" => "Golden State".to_string(),
        _ => raw_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_names() {
        assert_eq!(normalize_team_name("Los Angeles Sparks"), "L.A. Sparks");
        assert_eq!(normalize_team_name("Washington Mystics"), "Washington");
        assert_eq!(normalize_team_name("Phoenix Mercury"), "Phoenix");
        assert_eq!(normalize_team_name("New York Liberty"), "NY Liberty");
        assert_eq!(normalize_team_name("Golden State Valkyries"), "Golden State");
    }

    #[test]
    fn test_unmapped_names_pass_through() {
        assert_eq!(normalize_team_name("Unknown Team FC"), "Unknown Team FC");
        assert_eq!(normalize_team_name("Seattle Storm"), "Seattle Storm");
        assert_eq!(normalize_team_name(""), "");
    }

    #[test]
    fn test_lookup_is_exact() {
        // No case folding or trimming
        assert_eq!(normalize_team_name("new york liberty"), "new york liberty");
        assert_eq!(normalize_team_name(" Phoenix Mercury"), " Phoenix Mercury");
    }
}
