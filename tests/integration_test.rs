use findbits::generator::{render_json, render_text};
use findbits::models::{Base, Orientation, Report};
use findbits::utils::bits::invert;
use findbits::find_bits;

fn offset(report: &Report, base: Base, orientation: Orientation) -> Option<usize> {
    report
        .base(base)
        .and_then(|b| b.result(orientation))
        .and_then(|r| r.offset())
}

#[test]
fn test_find_bits_example() {
    let report = find_bits("73", "0110010101110011");

    // Binary is skipped, the other three bases are tried in order
    let tried: Vec<&str> = report.bases.iter().map(|b| b.base.label()).collect();
    assert_eq!(tried, vec!["OCTAL", "DECIMAL", "HEX"]);

    assert_eq!(offset(&report, Base::Decimal, Orientation::Forward), None);
    assert_eq!(offset(&report, Base::Hex, Orientation::Forward), Some(9));
}

#[test]
fn test_find_bits_every_search_is_reported() {
    let report = find_bits("73", "0110010101110011");

    for base_report in &report.bases {
        assert_eq!(base_report.results.len(), 4);
    }

    let text = render_text(&report);
    assert_eq!(text.matches("Trying ").count(), 3);
    assert_eq!(text.matches("Inverse: (").count(), 3);
    assert_eq!(text.matches("Forward: (").count(), 6);
    assert_eq!(text.matches("Reverse: (").count(), 6);
}

#[test]
fn test_find_bits_zero() {
    let report = find_bits("0", "0101");

    for base in [Base::Octal, Base::Decimal, Base::Hex] {
        for orientation in Orientation::ALL {
            assert_eq!(offset(&report, base, orientation), None);
        }
    }

    let text = render_text(&report);
    assert!(text.contains("Trying DECIMAL\n  Forward: () Not found\n  Reverse: () Not found\n"));
}

#[test]
fn test_find_bits_inverted_bitstream() {
    let bitstream = "0110010101110011";
    let plain = find_bits("73", bitstream);
    let flipped = find_bits("73", &invert(bitstream));

    for base in [Base::Octal, Base::Decimal, Base::Hex] {
        assert_eq!(
            offset(&flipped, base, Orientation::Forward),
            offset(&plain, base, Orientation::InverseForward)
        );
        assert_eq!(
            offset(&flipped, base, Orientation::InverseReverse),
            offset(&plain, base, Orientation::Reverse)
        );
    }

    // The hex pattern is found against the flipped copy instead
    assert_eq!(offset(&flipped, Base::Hex, Orientation::InverseForward), Some(9));
}

#[test]
fn test_find_bits_json() {
    let report = find_bits("101", "0010100");
    let json = render_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["bitstream"], "0010100");
    assert_eq!(value["bases"][0]["base"], "BINARY");
    assert_eq!(value["bases"][0]["pattern"], "101");
    assert_eq!(value["bases"][0]["results"][0]["location"]["offset"], 2);
    assert_eq!(value["bases"][0]["results"][0]["location"]["prefix"], "00");
    assert_eq!(value["bases"][0]["results"][0]["location"]["suffix"], "00");
}
