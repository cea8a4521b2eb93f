use fasti::roman::numeral;
use fasti::{Calendar, DayDesignator, HistoricalDate, Marker, RomanDate, to_roman_date};

use Calendar::*;

#[test]
fn every_day_round_trips() {
    for cal in [Julian, Gregorian] {
        let mut date = HistoricalDate::new(1400, 1, 1, cal).unwrap();
        let end = HistoricalDate::new(2030, 12, 31, cal).unwrap();
        while date != end {
            let roman = to_roman_date(&date).unwrap();
            assert_eq!(date, roman.to_date().unwrap(), "{roman}");

            let text = roman.to_string();
            let parsed = RomanDate::from_string(&text, cal).unwrap();
            assert_eq!(roman, parsed, "{text}");
            assert_eq!(text, parsed.to_string());

            assert_ne!(DayDesignator::Postridie, roman.designator());
            assert_eq!(date.year(), Some(roman.year()));
            date = date.add_days(1).unwrap();
        }
    }
}

#[test]
fn literals() {
    for (std, text) in [
        ("a.d.XV. Kal. Apr. MDCXXXIV", "a.d.XV. Kal. Apr. MDCXXXIV"),
        ("a.d.XV. Kal. Apr. MDCXXXIV", "ad.xv.cal. apr  MDCXXXIV"),
        ("pr. Kal. Mart. MDC", "prid Kal. mar MDC"),
        ("a.d.IV. Id. Dec. MDCCCXV", "a.d. IV. eid. dec md cccxv "),
        ("postr. Non. Oct. MCCCXV", "postr nonis. okt m cccxv "),
        ("pr. Kal. Nov. MDCCCXV", "pridie kalendas nov mdccc xv "),
    ] {
        for cal in [Julian, Gregorian] {
            let date = RomanDate::from_string(text, cal).unwrap();
            assert_eq!(std, date.to_string(), "{text:?} {cal}");
            assert_eq!(cal, date.calendar());
        }
    }
}

#[test]
fn civil_dates() {
    for (std, text, cal) in [
        ((1634, 3, 18), "a.d.XV. Kal. Apr. MDCXXXIV", Gregorian),
        ((1600, 2, 29), "pr. Kal. Mart. MDC", Julian),
        ((1600, 2, 29), "pr. Kal. Mart. MDC", Gregorian),
        ((1700, 2, 28), "pr. Kal. Mart. MDCC", Gregorian),
        ((1700, 2, 29), "pr. Kal. Mart. MDCC", Julian),
        ((1315, 10, 8), "postr. Non. Oct. MCCCXV", Julian),
        ((1401, 12, 21), "a.d.XII. Kal. Ian. MCDI", Julian),
        ((1987, 2, 27), "a.d.III. Kal. Mart. MCMLXXXVII", Gregorian),
    ] {
        let date = RomanDate::from_string(text, cal).unwrap().to_date().unwrap();
        assert_eq!(HistoricalDate::new(std.0, std.1, std.2, cal).unwrap(), date, "{text}");
    }
}

#[test]
fn constructed() {
    let date = RomanDate::new(
        DayDesignator::AnteDiem(3),
        Marker::Kalends,
        3,
        1987,
        Gregorian,
    )
    .unwrap();
    assert_eq!("a.d.III. Kal. Mart. MCMLXXXVII", date.to_string());
}

#[test]
fn unreadable() {
    for text in ["", "Kalends", "Kal. Thermidor MM", "a.d.II. Kal. Mart. MM", "Non. Ian."] {
        assert!(RomanDate::from_string(text, Gregorian).is_err(), "{text:?}");
    }
    assert!(RomanDate::from_string("a.d.VI. Non. Ian. MM", Gregorian).is_err());
}

#[test]
fn numeral_sweep() {
    for n in 1..=9999 {
        let text = numeral::encode(n).unwrap();
        assert_eq!(Ok(n), numeral::decode(&text), "{text}");
        assert_eq!(Ok(n), numeral::parse_number(&text.to_lowercase()), "{text}");
    }
}
