//! Property tests for warranty expiration queries.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use assetkeep::domain::services::{find_expired, has_any_expired, is_expired};
use assetkeep::AssetRecord;

fn date() -> impl Strategy<Value = NaiveDate> {
    (0u64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn records() -> impl Strategy<Value = Vec<AssetRecord>> {
    proptest::collection::vec(proptest::option::of(date()), 0..16).prop_map(|warranties| {
        warranties
            .into_iter()
            .enumerate()
            .map(|(i, warranty)| {
                AssetRecord::new(format!("asset-{}", i), "Tools", "Garage")
                    .unwrap()
                    .with_warranty_expiration(warranty)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A warranty counts as expired only strictly after its date.
    #[test]
    fn property_expired_iff_strictly_after(warranty in date(), as_of in date()) {
        let record = AssetRecord::new("Drill", "Tools", "Garage")
            .unwrap()
            .with_warranty_expiration(Some(warranty));

        prop_assert_eq!(is_expired(&record, as_of), as_of > warranty);
    }

    /// PROPERTY: The expired list keeps file order and only holds expired records.
    #[test]
    fn property_find_expired_is_ordered_filter(records in records(), as_of in date()) {
        let expected: Vec<&AssetRecord> =
            records.iter().filter(|r| is_expired(r, as_of)).collect();
        let found = find_expired(&records, as_of);

        prop_assert_eq!(&found, &expected);
        prop_assert_eq!(has_any_expired(&records, as_of), !expected.is_empty());
    }
}
