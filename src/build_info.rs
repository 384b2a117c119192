use chrono::{DateTime, Datelike};

/// RFC 3339 timestamp captured by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_year() -> Option<i32> {
    year_of(BUILD_TIME)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2025-03-14T09:26:53+00:00"), Some(2025));
        assert_eq!(year_of("not a date"), None);
        assert!(build_year().is_some());
    }
}
