//! RFC 1123 date formatting for the `Date` header

use chrono::{DateTime, Utc};

/// Formats `time` as an RFC 1123 fixdate, e.g. `Sun, 02 Oct 2016 14:44:11 GMT`.
///
/// Always UTC; the fixdate is exactly 29 ASCII characters.
pub fn httpdate(time: DateTime<Utc>) -> String {
    time.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// RFC 1123 fixdate for the current time.
pub fn httpdate_now() -> String {
    httpdate(Utc::now())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_httpdate() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(httpdate(epoch), "Thu, 01 Jan 1970 00:00:00 GMT");

        let t = Utc.timestamp_opt(1475419451, 0).unwrap();
        assert_eq!(httpdate(t), "Sun, 02 Oct 2016 14:44:11 GMT");
    }

    #[test]
    fn test_fixdate_shape() {
        let now = httpdate_now();
        assert_eq!(now.len(), 29);
        assert!(now.is_ascii());
        assert!(now.ends_with(" GMT"));
    }
}
