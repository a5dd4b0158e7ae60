//! Exchange clock helpers
//!
//! Feed timestamps are wall-clock integers in `HHMMSSmmm` form
//! (e.g. `93000000` is 09:30:00.000). They compare correctly as integers;
//! these helpers only decode them for display.

use chrono::NaiveTime;

use crate::ids::Timestamp;

/// Decode an `HHMMSSmmm` timestamp into a time of day
///
/// Returns `None` when the fields are out of range or the value is negative.
pub fn exchange_time(ts: Timestamp) -> Option<NaiveTime> {
    if ts < 0 {
        return None;
    }
    let millis = (ts % 1_000) as u32;
    let secs = ((ts / 1_000) % 100) as u32;
    let mins = ((ts / 100_000) % 100) as u32;
    let hours = ts / 10_000_000;
    if hours > 23 {
        return None;
    }

    NaiveTime::from_hms_milli_opt(hours as u32, mins, secs, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_time_decodes() {
        let t = exchange_time(93_000_000).unwrap();
        assert_eq!(t, NaiveTime::from_hms_milli_opt(9, 30, 0, 0).unwrap());

        let t = exchange_time(145_959_999).unwrap();
        assert_eq!(t.to_string(), "14:59:59.999");
    }

    #[test]
    fn test_exchange_time_rejects_out_of_range() {
        assert!(exchange_time(-1).is_none());
        assert!(exchange_time(96_100_000).is_none()); // 61 minutes
        assert!(exchange_time(250_000_000).is_none());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn decodes_every_valid_time(h in 0u32..24, m in 0u32..60, s in 0u32..60, ms in 0u32..1000) {
                let ts = h as i64 * 10_000_000 + m as i64 * 100_000 + s as i64 * 1_000 + ms as i64;
                prop_assert_eq!(exchange_time(ts), NaiveTime::from_hms_milli_opt(h, m, s, ms));
            }
        }
    }
}
