use bigdecimal::{BigDecimal, Signed, ToPrimitive};
use chrono::NaiveDate;
use serde_json::Value;
use std::str::FromStr;

use crate::{
    config::LeaderboardSettings,
    leaderboard::TierThresholds,
    models::{LeaderboardEntry, LeaderboardSnapshot, Period, RawPointsPair, RawPointsPayload},
    ranges::default_all_time_start,
    utils::truncate_address,
};

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";
const EXPLORER_BASE_URL: &str = "https://etherscan.io/address/";
const JOIN_YEAR: i32 = 2024;
const JOIN_YEAR_DAYS: u32 = 366;
/// Decimal digits in `u64::MAX`.
const U64_MAX_DIGITS: i128 = 20;

/// Converts a raw fixed-point amount to whole points, truncating toward zero.
///
/// Accepts numeric strings (including exponent forms) and JSON numbers.
/// Anything unparsable or negative is worth zero points; amounts beyond
/// `u64` saturate.
pub fn scale_points(raw: &Value, decimals: u32) -> u64 {
    let parsed = match raw {
        Value::String(s) => BigDecimal::from_str(s.trim()).ok(),
        Value::Number(n) => BigDecimal::from_str(&n.to_string()).ok(),
        _ => None,
    };

    let Some(amount) = parsed else {
        return 0;
    };

    let (digits, scale) = amount.into_bigint_and_exponent();
    if digits.is_negative() {
        return 0;
    }

    // Bound the magnitude before rescaling; extreme exponents would otherwise
    // materialize huge powers of ten.
    let shift = scale as i128 + decimals as i128;
    let integer_digits = digits.to_string().len() as i128 - shift;
    if integer_digits <= 0 {
        return 0;
    }
    if integer_digits > U64_MAX_DIGITS {
        return u64::MAX;
    }
    let Ok(shift) = i64::try_from(shift) else {
        return 0;
    };

    BigDecimal::new(digits, shift)
        .with_scale(0)
        .to_u64()
        .unwrap_or(u64::MAX)
}

/// Stable pseudo join date within 2024, keyed on the address.
pub fn join_date_for(address: &str) -> NaiveDate {
    let digest = md5::compute(address.as_bytes());
    let ordinal = u16::from_be_bytes([digest.0[0], digest.0[1]]) as u32 % JOIN_YEAR_DAYS + 1;

    NaiveDate::from_yo_opt(JOIN_YEAR, ordinal).unwrap_or_else(default_all_time_start)
}

/// Turns a raw points payload into a [`LeaderboardSnapshot`].
///
/// Never fails: a missing payload yields an empty snapshot and malformed
/// rows degrade individually.
#[derive(Debug, Clone)]
pub struct LeaderboardTransformer {
    points_decimals: u32,
    tiers: TierThresholds,
    max_entries: Option<usize>,
}

impl Default for LeaderboardTransformer {
    fn default() -> Self {
        Self::new(&LeaderboardSettings::default())
    }
}

impl LeaderboardTransformer {
    pub fn new(settings: &LeaderboardSettings) -> Self {
        Self {
            points_decimals: settings.points_decimals,
            tiers: settings.tiers.clone(),
            max_entries: settings.max_entries,
        }
    }

    pub fn with_max_entries(mut self, max_entries: Option<usize>) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn transform(
        &self,
        payload: &RawPointsPayload,
        period: Period,
        start_date: NaiveDate,
        end_date: NaiveDate,
        today: NaiveDate,
    ) -> LeaderboardSnapshot {
        let next_distribution = today.succ_opt().unwrap_or(today);

        let Some(pairs) = payload.pairs.as_ref() else {
            return LeaderboardSnapshot::empty(period, start_date, end_date, next_distribution);
        };

        let mut entries: Vec<LeaderboardEntry> = pairs
            .iter()
            .enumerate()
            .map(|(index, pair)| self.build_entry(index + 1, pair))
            .collect();

        let points_distributed = entries
            .iter()
            .fold(0u64, |sum, entry| sum.saturating_add(entry.points));

        if let Some(limit) = self.max_entries {
            entries.truncate(limit);
        }

        LeaderboardSnapshot {
            period,
            start_date,
            end_date,
            points_distributed,
            next_distribution,
            entries,
        }
    }

    pub fn build_entry(&self, rank: usize, pair: &RawPointsPair) -> LeaderboardEntry {
        let points = scale_points(&pair.raw_points, self.points_decimals);
        let full_address = pair.address.clone();

        LeaderboardEntry {
            rank,
            address: truncate_address(&full_address),
            ens: None,
            avatar_url: format!("{}{}", AVATAR_BASE_URL, full_address),
            explorer_url: format!("{}{}", EXPLORER_BASE_URL, full_address),
            badge_tier: self.tiers.tier_for_rank(rank),
            points,
            lifetime_points: points,
            join_date: join_date_for(&full_address),
            full_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BadgeTier;
    use chrono::Datelike;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn transform(value: Value) -> LeaderboardSnapshot {
        LeaderboardTransformer::default().transform(
            &RawPointsPayload::from_value(&value),
            Period::Weekly,
            date(2026, 10, 19),
            date(2026, 10, 25),
            date(2026, 10, 19),
        )
    }

    #[test]
    fn test_single_entry_example() {
        let snapshot = transform(json!({
            "addressToPointsSorted": [["0xABCDEF1234567890", "3000000000000000000000000"]]
        }));

        assert_eq!(snapshot.entries.len(), 1);
        let entry = &snapshot.entries[0];
        assert_eq!(entry.rank, 1);
        assert_eq!(entry.points, 3);
        assert_eq!(entry.lifetime_points, 3);
        assert_eq!(entry.address, "0xABCD...7890");
        assert_eq!(entry.full_address, "0xABCDEF1234567890");
        assert_eq!(entry.explorer_url, "https://etherscan.io/address/0xABCDEF1234567890");
        assert_eq!(snapshot.points_distributed, 3);
        assert_eq!(snapshot.period, Period::Weekly);
        assert_eq!(snapshot.next_distribution, date(2026, 10, 20));
    }

    #[test]
    fn test_ranks_follow_input_order() {
        let snapshot = transform(json!({
            "addressToPointsSorted": [
                ["0x1111111111", "1000000000000000000000000"],
                ["0x2222222222", "9000000000000000000000000"],
                ["0x1111111111", "5000000000000000000000000"]
            ]
        }));

        let ranks: Vec<usize> = snapshot.entries.iter().map(|e| e.rank).collect();
        let points: Vec<u64> = snapshot.entries.iter().map(|e| e.points).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(points, vec![1, 9, 5]);
        assert_eq!(snapshot.points_distributed, 15);
    }

    #[test]
    fn test_sum_of_floors() {
        // 1.9 + 1.9 floors to 1 + 1, not floor(3.8)
        let snapshot = transform(json!({
            "addressToPointsSorted": [
                ["0xaaaaaaaaaa", "1900000000000000000000000"],
                ["0xbbbbbbbbbb", "1900000000000000000000000"]
            ]
        }));
        assert_eq!(snapshot.points_distributed, 2);
    }

    #[test]
    fn test_many_entries_properties() {
        let pairs: Vec<Value> = (0..250u64)
            .map(|i| json!([format!("0x{:040x}", i), format!("{}000000000000000000000", 1000 - i)]))
            .collect();
        let snapshot = transform(json!({ "addressToPointsSorted": pairs }));

        assert_eq!(snapshot.entries.len(), 250);
        let mut sum = 0;
        for (i, entry) in snapshot.entries.iter().enumerate() {
            assert_eq!(entry.rank, i + 1);
            assert_eq!(entry.points, (1000 - i as u64) / 1000);
            sum += entry.points;
        }
        assert_eq!(snapshot.points_distributed, sum);
    }

    #[test]
    fn test_missing_payload_is_empty_snapshot() {
        for value in [json!(null), json!({}), json!({"other": []}), json!("oops")] {
            let snapshot = transform(value);
            assert_eq!(snapshot.points_distributed, 0);
            assert!(snapshot.entries.is_empty());
            assert_eq!(snapshot.start_date, date(2026, 10, 19));
            assert_eq!(snapshot.end_date, date(2026, 10, 25));
            assert_eq!(snapshot.next_distribution, date(2026, 10, 20));
        }
    }

    #[test]
    fn test_dates_pass_through_unfiltered() {
        let snapshot = LeaderboardTransformer::default().transform(
            &RawPointsPayload::from_value(&json!({
                "addressToPointsSorted": [["0xABCDEF1234567890", "1000000000000000000000000"]]
            })),
            Period::AllTime,
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2026, 10, 19),
        );

        assert_eq!(snapshot.period, Period::AllTime);
        assert_eq!(snapshot.start_date, date(2024, 1, 1));
        assert_eq!(snapshot.end_date, date(2024, 1, 2));
        assert_eq!(snapshot.entries.len(), 1);
    }

    #[test]
    fn test_malformed_rows_degrade() {
        let snapshot = transform(json!({
            "addressToPointsSorted": [
                ["0xABCDEF1234567890", "not a number"],
                ["0x12", "2000000000000000000000000"],
                "garbage",
                ["0xABCDEF1234567890", null]
            ]
        }));

        assert_eq!(snapshot.entries.len(), 4);
        assert_eq!(snapshot.entries[0].points, 0);
        assert_eq!(snapshot.entries[1].address, "0x12");
        assert_eq!(snapshot.entries[1].points, 2);
        assert_eq!(snapshot.entries[2].address, "");
        assert_eq!(snapshot.entries[2].points, 0);
        assert_eq!(snapshot.entries[3].points, 0);
        assert_eq!(snapshot.points_distributed, 2);
    }

    #[test]
    fn test_scale_points_forms() {
        assert_eq!(scale_points(&json!("3000000000000000000000000"), 24), 3);
        assert_eq!(scale_points(&json!(" 3000000000000000000000000 "), 24), 3);
        assert_eq!(scale_points(&json!("999999999999999999999999"), 24), 0);
        assert_eq!(scale_points(&json!("1.5e24"), 24), 1);
        assert_eq!(scale_points(&json!(3e24), 24), 3);
        assert_eq!(scale_points(&json!(12345), 0), 12345);
        assert_eq!(scale_points(&json!("42.9"), 0), 42);
        assert_eq!(scale_points(&json!("-5000000000000000000000000"), 24), 0);
        assert_eq!(scale_points(&json!(""), 24), 0);
        assert_eq!(scale_points(&json!("abc"), 24), 0);
        assert_eq!(scale_points(&json!(true), 24), 0);
        assert_eq!(scale_points(&json!("1e60"), 24), u64::MAX);
        assert_eq!(scale_points(&json!("0"), 24), 0);
        assert_eq!(scale_points(&json!("-0.5"), 0), 0);
    }

    #[test]
    fn test_scale_points_extreme_exponents() {
        assert_eq!(scale_points(&json!("1e-9223372036854775800"), 24), 0);
        assert_eq!(scale_points(&json!("-1e-9223372036854775800"), 24), 0);
        assert_eq!(scale_points(&json!("1e10000000"), 24), u64::MAX);
        assert_eq!(scale_points(&json!("1e-30"), 24), 0);
    }

    #[test]
    fn test_scale_points_u64_boundary() {
        assert_eq!(scale_points(&json!("18446744073709551615e24"), 24), u64::MAX);
        assert_eq!(scale_points(&json!("18446744073709551614e24"), 24), u64::MAX - 1);
        assert_eq!(scale_points(&json!("18446744073709551616e24"), 24), u64::MAX);
        assert_eq!(scale_points(&json!("99999999999999999999e24"), 24), u64::MAX);
        assert_eq!(scale_points(&json!("1000000000000000000000e24"), 24), u64::MAX);
    }

    #[test]
    fn test_extreme_row_does_not_abort_transform() {
        let snapshot = transform(json!({
            "addressToPointsSorted": [
                ["0xaaaaaaaaaa", "1e-9223372036854775800"],
                ["0xbbbbbbbbbb", "1e10000000"],
                ["0xcccccccccc", "2000000000000000000000000"]
            ]
        }));

        assert_eq!(snapshot.entries.len(), 3);
        assert_eq!(snapshot.entries[0].points, 0);
        assert_eq!(snapshot.entries[1].points, u64::MAX);
        assert_eq!(snapshot.entries[2].points, 2);
        assert_eq!(snapshot.points_distributed, u64::MAX);
    }

    #[test]
    fn test_large_integer_json_number() {
        let value: Value =
            serde_json::from_str(r#"{"addressToPointsSorted": [["0xABCDEF1234567890", 7000000000000000000000000]]}"#)
                .unwrap();
        let snapshot = transform(value);
        assert_eq!(snapshot.entries[0].points, 7);
    }

    #[test]
    fn test_deterministic_badges_and_join_dates() {
        let pairs: Vec<Value> = (0..20u64)
            .map(|i| json!([format!("0x{:040x}", i), "1000000000000000000000000"]))
            .collect();
        let value = json!({ "addressToPointsSorted": pairs });

        let first = transform(value.clone());
        let second = transform(value);
        assert_eq!(first, second);

        assert_eq!(first.entries[0].badge_tier, BadgeTier::Diamond);
        assert_eq!(first.entries[9].badge_tier, BadgeTier::Diamond);
        assert_eq!(first.entries[10].badge_tier, BadgeTier::Platinum);
        for entry in &first.entries {
            assert_eq!(entry.join_date.year(), 2024);
        }
    }

    #[test]
    fn test_join_date_in_2024() {
        for address in ["", "0x0", "0xABCDEF1234567890", "vitalik.eth"] {
            let joined = join_date_for(address);
            assert_eq!(joined.year(), 2024);
            assert_eq!(joined, join_date_for(address));
        }
    }

    #[test]
    fn test_max_entries_keeps_full_total() {
        let transformer = LeaderboardTransformer::default().with_max_entries(Some(2));
        let snapshot = transformer.transform(
            &RawPointsPayload::from_value(&json!({
                "addressToPointsSorted": [
                    ["0xaaaaaaaaaa", "3000000000000000000000000"],
                    ["0xbbbbbbbbbb", "2000000000000000000000000"],
                    ["0xcccccccccc", "1000000000000000000000000"]
                ]
            })),
            Period::Monthly,
            date(2026, 10, 1),
            date(2026, 10, 31),
            date(2026, 10, 19),
        );

        assert_eq!(snapshot.entries.len(), 2);
        assert_eq!(snapshot.points_distributed, 6);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = transform(json!({
            "addressToPointsSorted": [["0xABCDEF1234567890", "3000000000000000000000000"]]
        }));
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["period"], "weekly");
        assert_eq!(json["startDate"], "2026-10-19");
        assert_eq!(json["nextDistribution"], "2026-10-20");
        assert_eq!(json["pointsDistributed"], 3);
        assert_eq!(json["entries"][0]["fullAddress"], "0xABCDEF1234567890");
        assert_eq!(json["entries"][0]["badgeTier"], "Diamond");
    }
}
