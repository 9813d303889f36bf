pub const APPLICATIONS_TABLE: &str = "applications";

#[cfg(debug_assertions)]
pub fn get_supabase_url() -> &'static str {
    match option_env!("SUPABASE_URL") {
        Some(url) => url,
        None => "http://localhost:54321", // `supabase start` default
    }
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_url() -> &'static str {
    option_env!("SUPABASE_URL").unwrap_or("")
}

pub fn get_supabase_anon_key() -> &'static str {
    option_env!("SUPABASE_ANON_KEY").unwrap_or("")
}

/// Whether the nomination form and the apply buttons are rendered.
/// Set `APPLICATIONS_OPEN=false` at build time to go back to "Coming Soon" only.
pub fn applications_open() -> bool {
    parse_flag(option_env!("APPLICATIONS_OPEN"), true)
}

fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()) {
        Some(v) if v == "true" || v == "1" || v == "yes" => true,
        Some(v) if v == "false" || v == "0" || v == "no" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parsing_accepts_common_spellings() {
        assert!(parse_flag(Some("TRUE"), false));
        assert!(parse_flag(Some(" 1 "), false));
        assert!(!parse_flag(Some("no"), true));
        assert!(!parse_flag(Some("0"), true));
    }

    #[test]
    fn unknown_or_missing_flag_uses_default() {
        assert!(parse_flag(None, true));
        assert!(!parse_flag(Some("maybe"), false));
    }
}
