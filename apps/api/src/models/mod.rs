pub mod job;
pub mod resume;
pub mod shortlist;

use chrono::{DateTime, SubsecRound, Utc};

/// Current time truncated to microseconds, the precision `TIMESTAMPTZ` keeps,
/// so a record returned from a write matches what a later read yields.
pub fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_now_micros_has_no_sub_microsecond_part() {
        for _ in 0..32 {
            assert_eq!(now_micros().nanosecond() % 1_000, 0);
        }
    }
}
