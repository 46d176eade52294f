mod common;

use common::{REQUIRED_PATHS, google_dns, remove_path, set_path};
use ipgeo_core::ViolationKind;
use ipgeo_tool::GeoRecord;
use proptest::prelude::*;
use serde_json::{Value, json};

/// A value whose JSON type differs from the type declared for `path`.
fn mistyped_for(path: &str, pick: usize) -> Value {
    let candidates = match path {
        "success" | "is_eu" | "timezone.is_dst" => vec![json!("true"), json!(1), json!(null)],
        "latitude" | "longitude" => vec![json!("37.4"), json!(true), json!([])],
        "connection.asn" => vec![json!("15169"), json!(0.5), json!({})],
        "timezone.offset" => vec![json!("-25200"), json!(true), json!({})],
        "connection.domain" => vec![json!(42), json!(false), json!(["x"])],
        _ => vec![json!(42), json!(false), json!(null), json!(["x"])],
    };
    candidates[pick % candidates.len()].clone()
}

proptest! {
    #[test]
    fn removing_any_required_field_fails(index in 0..REQUIRED_PATHS.len()) {
        let path = REQUIRED_PATHS[index];
        let mut body = google_dns();
        remove_path(&mut body, path);

        let err = GeoRecord::from_value(&body).unwrap_err();
        prop_assert_eq!(err.paths(), vec![path]);
        prop_assert_eq!(&err.violations()[0].kind, &ViolationKind::Missing);
    }

    #[test]
    fn mistyping_any_required_field_fails(index in 0..REQUIRED_PATHS.len(), pick in 0usize..8) {
        let path = REQUIRED_PATHS[index];
        let mut body = google_dns();
        set_path(&mut body, path, mistyped_for(path, pick));

        let err = GeoRecord::from_value(&body).unwrap_err();
        prop_assert_eq!(err.paths(), vec![path]);
    }

    #[test]
    fn removing_several_fields_reports_each(mask in 1u32..(1 << 10)) {
        let chosen: Vec<&str> = REQUIRED_PATHS
            .iter()
            .take(10)
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, p)| *p)
            .collect();

        let mut body = google_dns();
        for path in &chosen {
            remove_path(&mut body, path);
        }

        let err = GeoRecord::from_value(&body).unwrap_err();
        prop_assert_eq!(err.paths(), chosen);
    }

    #[test]
    fn coordinates_round_trip(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
        let mut body = google_dns();
        body["latitude"] = json!(lat);
        body["longitude"] = json!(lon);

        let record = GeoRecord::from_value(&body).unwrap();
        prop_assert_eq!(record.latitude, lat);
        prop_assert_eq!(record.longitude, lon);
    }
}
