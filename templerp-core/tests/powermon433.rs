//! Whole-domain checks of the shipped Powermon433 table

mod common;

use templerp_core::{
    fudge_convert, interpolate, interpolate_or_sentinel, LookupError, TemperatureReading,
    POWERMON433, UNBRACKETED_SENTINEL,
};

use common::{
    headless_powermon433, reference_fudge, reference_lookup, truncated_powermon433,
    POWERMON433_ORACLE,
};

#[test]
fn every_raw_value_is_bracketed_and_in_band() {
    let (min, max) = POWERMON433.output_range().unwrap();
    for raw in u8::MIN..=u8::MAX {
        let value = POWERMON433.lookup(raw).unwrap();
        assert!(
            (i16::from(min)..=i16::from(max)).contains(&value),
            "raw {raw} gave {value}"
        );
        assert_ne!(POWERMON433.lookup_or_sentinel(raw), UNBRACKETED_SENTINEL);
    }
}

#[test]
fn exact_at_every_node() {
    for point in POWERMON433.iter() {
        assert_eq!(POWERMON433.lookup(point.x), Ok(i16::from(point.y)));
    }
}

#[test]
fn monotonic_across_domain() {
    let mut previous = POWERMON433.lookup(0).unwrap();
    for raw in 1..=u8::MAX {
        let value = POWERMON433.lookup(raw).unwrap();
        assert!(value >= previous, "raw {raw}: {value} < {previous}");
        previous = value;
    }
}

#[test]
fn shared_nodes_agree_with_both_brackets() {
    let points = POWERMON433.points();
    for i in 1..points.len() - 1 {
        let node = points[i];
        // Evaluate each bracket alone to show they agree at the shared node
        let below = interpolate(&points[i - 1..=i], node.x).unwrap();
        let above = interpolate(&points[i..=i + 1], node.x).unwrap();
        assert_eq!(below, above);
        assert_eq!(POWERMON433.lookup(node.x), Ok(below));
    }
}

#[test]
fn matches_reference_lookup() {
    for raw in u8::MIN..=u8::MAX {
        let expected = reference_lookup(POWERMON433.points(), raw);
        assert_eq!(i32::from(POWERMON433.lookup(raw).unwrap()), expected, "raw {raw}");
    }
}

#[test]
fn regression_oracle() {
    for (raw, fahrenheit, celsius) in POWERMON433_ORACLE {
        let reading = TemperatureReading::convert(&POWERMON433, raw).unwrap();
        assert_eq!(reading.fahrenheit, fahrenheit, "raw {raw}");
        assert_eq!(reading.celsius, celsius, "raw {raw}");
        assert_eq!(fudge_convert(POWERMON433.lookup(raw).unwrap()), celsius);
    }
}

#[test]
fn fudge_matches_reference_over_table_band() {
    for value in -49i16..=127 {
        assert_eq!(i32::from(fudge_convert(value)), reference_fudge(i32::from(value)));
    }
}

#[test]
fn truncated_table_falls_back_to_sentinel() {
    let table = truncated_powermon433();
    assert!(!table.spans_domain());

    assert_eq!(table.lookup(185), Ok(127));
    assert_eq!(table.lookup(186), Err(LookupError::Unbracketed { raw: 186 }));
    assert_eq!(table.lookup_or_sentinel(186), -125);
    assert_eq!(table.lookup_or_sentinel(255), UNBRACKETED_SENTINEL);
    assert_eq!(reference_lookup(table.points(), 255), -125);
}

#[test]
fn headless_table_falls_back_to_sentinel() {
    let table = headless_powermon433();
    for raw in 0..5 {
        assert_eq!(interpolate_or_sentinel(table.points(), raw), UNBRACKETED_SENTINEL);
    }
    assert_eq!(table.lookup(5), Ok(-45));
}
