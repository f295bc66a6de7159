use chrono::DateTime;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    epoch_sec_to_utc(epoch_ms / TimeUtils::MS_IN_S)
}

pub fn epoch_sec_to_utc(epoch_sec: i64) -> String {
    // Used for display purposes
    match DateTime::from_timestamp(epoch_sec, 0) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_ms_as_utc_date() {
        // 2021-01-01T00:00:00Z
        assert_eq!(epoch_ms_to_utc(1_609_459_200_000), "2021-01-01");
    }

    #[test]
    fn out_of_range_timestamps_format_as_empty() {
        assert_eq!(epoch_sec_to_utc(i64::MAX), "");
    }
}
