//! Unit tests for roam-core primitives.

#[cfg(test)]
mod geo {
    use crate::{Coordinate, CoreError};

    #[test]
    fn zero_distance() {
        let p = Coordinate::new(37.7749, -122.4194);
        assert!(p.great_circle_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.19 km on a 6371 km sphere
        let a = Coordinate::new(30.0, -88.0);
        let b = Coordinate::new(31.0, -88.0);
        let d = a.great_circle_km(b);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn antipodes_do_not_nan() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = a.great_circle_km(b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * 6_371.0).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn validate_accepts_bounds() {
        assert!(Coordinate::try_new(90.0, 180.0).is_ok());
        assert!(Coordinate::try_new(-90.0, -180.0).is_ok());
        assert!(Coordinate::try_new(0.0, 0.0).is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_and_nan() {
        for (lat, lng) in [(90.5, 0.0), (0.0, -180.01), (f64::NAN, 0.0), (0.0, f64::INFINITY)] {
            match Coordinate::try_new(lat, lng) {
                Err(CoreError::InvalidCoordinate { .. }) => {}
                other => panic!("({lat}, {lng}) should be invalid, got {other:?}"),
            }
        }
    }

    #[test]
    fn unchecked_constructor_keeps_wrapped_longitude() {
        let p = Coordinate::new(10.0, 180.2);
        assert_eq!(p.lng, 180.2);
        assert!(p.validate().is_err());
    }

    #[test]
    fn midpoint_is_componentwise_mean() {
        let m = Coordinate::new(10.0, 20.0).midpoint(Coordinate::new(12.0, 24.0));
        assert_eq!(m, Coordinate::new(11.0, 22.0));
    }

    #[test]
    fn display_uses_six_decimals() {
        assert_eq!(
            Coordinate::new(37.7749, -122.4194).to_string(),
            "37.774900, -122.419400"
        );
    }

    #[test]
    fn link_segment_uses_shortest_form() {
        assert_eq!(Coordinate::new(37.7749, -122.4194).to_link_segment(), "37.7749,-122.4194");
        assert_eq!(Coordinate::new(0.0, 1.0).to_link_segment(), "0,1");
    }

    #[test]
    fn parse_from_str() {
        let p: Coordinate = " 37.7749 , -122.4194 ".parse().unwrap();
        assert_eq!(p, Coordinate::new(37.7749, -122.4194));

        assert!(matches!("37.7".parse::<Coordinate>(), Err(CoreError::Parse(_))));
        assert!(matches!("north,west".parse::<Coordinate>(), Err(CoreError::Parse(_))));
        assert!(matches!(
            "91,0".parse::<Coordinate>(),
            Err(CoreError::InvalidCoordinate { .. })
        ));
    }
}

#[cfg(test)]
mod rng {
    use crate::SessionRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SessionRng::new(12345);
        let mut r2 = SessionRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit().to_bits(), r2.unit().to_bits());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a: u64 = SessionRng::new(1).random();
        let b: u64 = SessionRng::new(2).random();
        assert_ne!(a, b);
    }

    #[test]
    fn unit_in_half_open_interval() {
        let mut rng = SessionRng::new(0);
        for _ in 0..10_000 {
            let v = rng.unit();
            assert!((0.0..1.0).contains(&v), "got {v}");
        }
    }

    #[test]
    fn children_diverge_from_each_other() {
        let mut root = SessionRng::new(7);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        assert_ne!(c0.random::<u64>(), c1.random::<u64>());
    }

    #[test]
    fn seed_opt_is_deterministic_when_set() {
        let mut a = SessionRng::from_seed_opt(Some(9));
        let mut b = SessionRng::new(9);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SessionRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[3]), Some(&3));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, ExplorerConfig, LabelStyle, ThemeKind};

    #[test]
    fn defaults() {
        let cfg = ExplorerConfig::default();
        assert_eq!(cfg.max_distance_km, 20.0);
        assert_eq!(cfg.theme, ThemeKind::Explorer);
        assert_eq!(cfg.label, LabelStyle::Coordinates);
        assert_eq!(cfg.locate.timeout_ms, 10_000);
        assert_eq!(cfg.locate.maximum_age_ms, 60_000);
        assert!(cfg.locate.high_accuracy);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_radius_is_valid() {
        let cfg = ExplorerConfig { max_distance_km: 0.0, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_fields() {
        let bad = [
            ExplorerConfig { max_distance_km: -1.0, ..Default::default() },
            ExplorerConfig { max_distance_km: f64::NAN, ..Default::default() },
            ExplorerConfig { map_base_url: "  ".into(), ..Default::default() },
            ExplorerConfig { embed_zoom: 0, ..Default::default() },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(CoreError::Config(_))), "{cfg:?}");
        }
    }

    #[test]
    fn map_base_strips_trailing_slash() {
        let cfg = ExplorerConfig { map_base_url: "https://maps.example/".into(), ..Default::default() };
        assert_eq!(cfg.map_base(), "https://maps.example");
    }

    #[test]
    fn theme_display() {
        assert_eq!(ThemeKind::Matrix.to_string(), "matrix");
        assert_eq!(ThemeKind::Explorer.to_string(), "explorer");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: ExplorerConfig =
            serde_json::from_str(r#"{ "max_distance_km": 5.0, "theme": "matrix", "locate": { "timeout_ms": 500 } }"#)
                .unwrap();
        assert_eq!(cfg.max_distance_km, 5.0);
        assert_eq!(cfg.theme, ThemeKind::Matrix);
        assert_eq!(cfg.locate.timeout_ms, 500);
        assert_eq!(cfg.locate.maximum_age_ms, 60_000);
        assert_eq!(cfg.map_base_url, "https://www.google.com/maps");
    }
}
