//! Property tests for the asset line codec.

use chrono::NaiveDate;
use proptest::prelude::*;

use assetkeep::asset_codec::{parse, serialize};
use assetkeep::{AssetRecord, FieldError};

/// Comma-free text with no surrounding whitespace
fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9]([A-Za-z0-9 ._/-]{0,18}[A-Za-z0-9])?").unwrap()
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn record() -> impl Strategy<Value = AssetRecord> {
    (
        word(),
        word(),
        word(),
        proptest::option::of(date()),
        proptest::option::of(word()),
        proptest::option::of(word()),
        proptest::option::of(date()),
    )
        .prop_map(
            |(name, category, location, purchased, description, value, warranty)| {
                AssetRecord::new(name, category, location)
                    .unwrap()
                    .with_purchase_date(purchased)
                    .with_description(description.as_deref())
                    .unwrap()
                    .with_purchased_value(value.as_deref())
                    .unwrap()
                    .with_warranty_expiration(warranty)
            },
        )
}

/// Text with at least one line break somewhere inside
fn multi_line() -> impl Strategy<Value = String> {
    (word(), prop_oneof![Just("\n"), Just("\r"), Just("\r\n")], word())
        .prop_map(|(head, brk, tail)| format!("{}{}{}", head, brk, tail))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Comma-free records survive serialize then parse unchanged.
    #[test]
    fn property_comma_free_record_round_trips(record in record()) {
        let line = serialize(&record);
        let parsed = parse(&line).expect("serialized line should parse");

        prop_assert!(parsed.warnings.is_empty(), "warnings: {:?}", parsed.warnings);
        prop_assert_eq!(parsed.record, record);
    }

    /// PROPERTY: A serialized line always has exactly six delimiters.
    #[test]
    fn property_serialized_line_has_seven_fields(record in record()) {
        let line = serialize(&record);
        prop_assert_eq!(line.split(',').count(), 7);
        prop_assert!(!line.contains('\n'));
    }

    /// PROPERTY: The reader never panics, whatever the line.
    #[test]
    fn property_parse_never_panics(line in "\\PC{0,200}") {
        let _ = parse(&line);
    }

    /// PROPERTY: Lines with fewer than seven fields are always rejected.
    #[test]
    fn property_short_lines_rejected(fields in proptest::collection::vec(word(), 0..7)) {
        let line = fields.join(", ");
        prop_assert!(parse(&line).is_err());
    }

    /// PROPERTY: Any accepted record serializes to exactly one line.
    #[test]
    fn property_accepted_text_never_breaks_the_line(
        name in word(),
        description in "\\PC{0,40}|[a-z \\n\\r\\t]{0,20}",
    ) {
        let record = AssetRecord::new(name, "Tools", "Garage").unwrap();
        if let Ok(record) = record.with_description(Some(description.as_str())) {
            prop_assert_eq!(serialize(&record).lines().count(), 1);
        }
    }

    /// PROPERTY: A line break inside any text field is refused up front.
    #[test]
    fn property_line_breaks_are_rejected(text in multi_line(), field in 0usize..5) {
        let result = match field {
            0 => AssetRecord::new(&text, "Tools", "Garage").map(|_| ()),
            1 => AssetRecord::new("Drill", &text, "Garage").map(|_| ()),
            2 => AssetRecord::new("Drill", "Tools", &text).map(|_| ()),
            3 => AssetRecord::new("Drill", "Tools", "Garage")
                .unwrap()
                .with_description(Some(text.as_str()))
                .map(|_| ()),
            _ => AssetRecord::new("Drill", "Tools", "Garage")
                .unwrap()
                .with_purchased_value(Some(text.as_str()))
                .map(|_| ()),
        };
        prop_assert!(matches!(result, Err(FieldError::LineBreak { .. })), "{:?}", result);
    }
}
