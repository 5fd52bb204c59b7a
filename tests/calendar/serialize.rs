use jiff_calendar::{Duration, ToDuration};

#[test]
fn to_json() {
    let d = 1.year().months(2).weeks(3).days(4);
    let got = serde_json::to_string(&d).unwrap();
    assert_eq!(got, r#"{"year":1,"month":2,"week":3,"day":4}"#);

    let got = serde_json::to_string(&Duration::ZERO).unwrap();
    assert_eq!(got, r#"{"year":0,"month":0,"week":0,"day":0}"#);
}

#[test]
fn from_json() {
    let got: Duration =
        serde_json::from_str(r#"{"year":1,"month":2,"week":3,"day":4}"#)
            .unwrap();
    assert_eq!(got, 1.year().months(2).weeks(3).days(4));

    let got: Duration =
        serde_json::from_str(r#"{"week":-2,"day":9}"#).unwrap();
    assert_eq!(got, (-2).weeks().days(9));
    // Nothing is normalized on the way in.
    assert_eq!(got.get_days(), 9);

    assert!(serde_json::from_str::<Duration>(r#"{"day":"2"}"#).is_err());
}
