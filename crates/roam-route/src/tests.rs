//! Unit and property tests for roam-route.

#[cfg(test)]
mod sampler {
    use std::f64::consts::{FRAC_PI_2, PI};

    use proptest::prelude::*;
    use roam_core::{Coordinate, SessionRng};

    use crate::{DestinationSampler, PolarSampler, destination_point};

    const SAN_FRANCISCO: Coordinate = Coordinate { lat: 37.7749, lng: -122.4194 };

    #[test]
    fn due_north_moves_latitude_only() {
        // 111.195 km ≈ 1° of arc on a 6371 km sphere
        let d = 6_371.0 * 1f64.to_radians();
        let p = destination_point(Coordinate::new(0.0, 0.0), d, 0.0);
        assert!((p.lat - 1.0).abs() < 1e-9, "got {p:?}");
        assert!(p.lng.abs() < 1e-9, "got {p:?}");
    }

    #[test]
    fn due_east_on_equator_moves_longitude_only() {
        let d = 6_371.0 * 2f64.to_radians();
        let p = destination_point(Coordinate::new(0.0, 10.0), d, FRAC_PI_2);
        assert!(p.lat.abs() < 1e-9, "got {p:?}");
        assert!((p.lng - 12.0).abs() < 1e-9, "got {p:?}");
    }

    #[test]
    fn longitude_is_not_wrapped_at_antimeridian() {
        let d = 6_371.0 * 1f64.to_radians();
        let p = destination_point(Coordinate::new(0.0, 179.5), d, FRAC_PI_2);
        assert!((p.lng - 180.5).abs() < 1e-9, "got {p:?}");
    }

    #[test]
    fn crossing_the_pole_stays_on_the_sphere() {
        let origin = Coordinate::new(89.9, 0.0);
        let p = destination_point(origin, 50.0, 0.0);
        assert!(p.lat <= 90.0);
        assert!((origin.great_circle_km(p) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn landing_on_the_pole_is_not_nan() {
        // Rounds sin(lat2) just above 1.0 without the clamp.
        let p = destination_point(Coordinate::new(89.9930053, 10.0), 0.777775153401475, 0.0);
        assert!(!p.lat.is_nan() && !p.lng.is_nan(), "got {p:?}");
        assert_eq!(p.lat, 90.0);

        let south = destination_point(Coordinate::new(-89.9930053, 10.0), 0.777775153401475, PI);
        assert!(!south.lat.is_nan() && !south.lng.is_nan(), "got {south:?}");
        assert_eq!(south.lat, -90.0);
    }

    #[test]
    fn walking_onto_the_pole_never_yields_nan() {
        for i in 1..20_000u32 {
            let lat = 90.0 - f64::from(i) * 1e-7;
            let d = 6_371.0 * (90.0 - lat).to_radians();
            let p = destination_point(Coordinate::new(lat, 10.0), d, 0.0);
            assert!(!p.lat.is_nan() && !p.lng.is_nan(), "lat {lat} -> {p:?}");
        }
    }

    #[test]
    fn zero_radius_returns_origin() {
        let mut rng = SessionRng::new(3);
        for _ in 0..100 {
            let p = PolarSampler.sample(SAN_FRANCISCO, 0.0, &mut rng);
            assert!((p.lat - SAN_FRANCISCO.lat).abs() < 1e-9);
            assert!((p.lng - SAN_FRANCISCO.lng).abs() < 1e-9);
        }
    }

    #[test]
    fn san_francisco_twenty_km_ten_thousand_trials() {
        let mut rng = SessionRng::new(20);
        for _ in 0..10_000 {
            let p = PolarSampler.sample(SAN_FRANCISCO, 20.0, &mut rng);
            let d = SAN_FRANCISCO.great_circle_km(p);
            assert!(d <= 20.0 + 1e-6, "sampled {p:?} at {d} km");
        }
    }

    #[test]
    fn distances_cluster_toward_origin() {
        // Uniform distance draws put half the samples inside r/2, whereas an
        // area-uniform draw would put only a quarter there.
        let mut rng = SessionRng::new(11);
        let inner = (0..4_000)
            .map(|_| PolarSampler.sample(SAN_FRANCISCO, 20.0, &mut rng))
            .filter(|p| SAN_FRANCISCO.great_circle_km(*p) < 10.0)
            .count();
        assert!((1_800..2_200).contains(&inner), "inner = {inner}");
    }

    #[test]
    fn same_seed_same_destination() {
        let a = PolarSampler.sample(SAN_FRANCISCO, 20.0, &mut SessionRng::new(5));
        let b = PolarSampler.sample(SAN_FRANCISCO, 20.0, &mut SessionRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn shared_sampler_across_threads() {
        let sampler = PolarSampler;
        let mut root = SessionRng::new(99);
        let rngs: Vec<SessionRng> = (0..4).map(|i| root.child(i)).collect();

        std::thread::scope(|s| {
            for mut rng in rngs {
                let sampler = &sampler;
                s.spawn(move || {
                    for _ in 0..1_000 {
                        let p = sampler.sample(SAN_FRANCISCO, 20.0, &mut rng);
                        assert!(SAN_FRANCISCO.great_circle_km(p) <= 20.0 + 1e-6);
                    }
                });
            }
        });
    }

    proptest! {
        #[test]
        fn projected_point_is_at_requested_distance(
            lat in -90.0f64..=90.0,
            lng in -180.0f64..=180.0,
            distance in 0.0f64..5_000.0,
            bearing in 0.0f64..(2.0 * PI),
        ) {
            let origin = Coordinate::new(lat, lng);
            let p = destination_point(origin, distance, bearing);
            prop_assert!((origin.great_circle_km(p) - distance).abs() < 1e-3);
            prop_assert!((-90.0..=90.0).contains(&p.lat));
        }

        #[test]
        fn samples_stay_within_radius(
            lat in -90.0f64..=90.0,
            lng in -180.0f64..=180.0,
            max in 0.0f64..1_000.0,
            seed in any::<u64>(),
        ) {
            let origin = Coordinate::new(lat, lng);
            let mut rng = SessionRng::new(seed);
            for _ in 0..32 {
                let p = PolarSampler.sample(origin, max, &mut rng);
                prop_assert!(origin.great_circle_km(p) <= max + 1e-3);
            }
        }
    }
}

#[cfg(test)]
mod summary {
    use proptest::prelude::*;
    use roam_core::Coordinate;

    use crate::summarize;

    #[test]
    fn identical_points_are_zero() {
        let p = Coordinate::new(37.7749, -122.4194);
        let s = summarize(p, p, "here");
        assert_eq!(s.distance_km, 0.0);
        assert_eq!(s.duration_minutes, 0);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let s = summarize(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0), "east");
        assert!((s.distance_km - 111.0).abs() < 1e-9);
        assert_eq!(s.duration_minutes, 278);
        assert_eq!(s.distance_text(), "111.0 km");
        assert_eq!(s.duration_text(), "278 minutes");
    }

    #[test]
    fn sub_minute_trip_rounds_to_zero() {
        let s = summarize(Coordinate::new(10.0, 10.0), Coordinate::new(10.001, 10.001), "near");
        assert!((s.distance_km - 0.157).abs() < 1e-3, "got {}", s.distance_km);
        assert_eq!(s.duration_minutes, 0);
    }

    #[test]
    fn flat_estimate_ignores_latitude() {
        // One degree of longitude is ~55.6 km of arc at 60°N, but the flat
        // estimate still reports 111 km.
        let a = Coordinate::new(60.0, 0.0);
        let b = Coordinate::new(60.0, 1.0);
        let s = summarize(a, b, "north");
        assert!((s.distance_km - 111.0).abs() < 1e-9);
        assert!((s.great_circle_km() - 55.6).abs() < 0.1);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let a = Coordinate::new(48.8566, 2.3522);
        let b = Coordinate::new(48.9, 2.41);
        let s1 = summarize(a, b, "Paris");
        let s2 = summarize(a, b, "Paris");
        assert_eq!(s1.distance_km.to_bits(), s2.distance_km.to_bits());
        assert_eq!(s1, s2);
    }

    #[test]
    fn label_is_passed_through() {
        let p = Coordinate::new(1.0, 2.0);
        assert_eq!(summarize(p, p, String::from("opaque")).destination_label, "opaque");
    }

    proptest! {
        #[test]
        fn duration_tracks_distance(
            lat1 in -90.0f64..=90.0, lng1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lng2 in -180.0f64..=180.0,
        ) {
            let s = summarize(Coordinate::new(lat1, lng1), Coordinate::new(lat2, lng2), "");
            prop_assert!(s.distance_km >= 0.0);
            prop_assert_eq!(s.duration_minutes, (s.distance_km * 2.5).round() as u32);
        }
    }
}

#[cfg(test)]
mod label {
    use roam_core::{Coordinate, LabelStyle, SessionRng};

    use crate::destination_label;

    #[test]
    fn coordinates_use_four_decimals() {
        let mut rng = SessionRng::new(0);
        let label = destination_label(
            LabelStyle::Coordinates,
            Coordinate::new(37.77491234, -122.41941234),
            &mut rng,
        );
        assert_eq!(label, "Random Destination (37.7749, -122.4194)");
    }

    #[test]
    fn codename_is_hex_token() {
        let mut rng = SessionRng::new(0);
        let label = destination_label(LabelStyle::Codename, Coordinate::new(0.0, 0.0), &mut rng);
        let token = label.strip_prefix("Target ").expect("prefix");
        assert_eq!(token.len(), 8);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn codename_is_seed_deterministic() {
        let p = Coordinate::new(0.0, 0.0);
        let a = destination_label(LabelStyle::Codename, p, &mut SessionRng::new(8));
        let b = destination_label(LabelStyle::Codename, p, &mut SessionRng::new(8));
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod link {
    use roam_core::{Coordinate, ExplorerConfig};

    use crate::{MapLink, RouteError, summarize};

    fn route() -> crate::RouteSummary {
        summarize(Coordinate::new(37.7749, -122.4194), Coordinate::new(37.8, -122.4), "x")
    }

    #[test]
    fn directions_url_shape() {
        let link = MapLink::new("https://www.google.com/maps/");
        assert_eq!(
            link.directions_url(&route()),
            "https://www.google.com/maps/dir/37.7749,-122.4194/37.8,-122.4"
        );
    }

    #[test]
    fn embed_requires_key() {
        let link = MapLink::new("https://maps.example");
        assert!(matches!(link.embed_url(&route()), Err(RouteError::MissingEmbedKey)));
    }

    #[test]
    fn embed_url_shape() {
        let route = summarize(Coordinate::new(0.0, 0.0), Coordinate::new(2.0, 4.0), "x");
        let url = MapLink::new("https://maps.example")
            .with_embed_key("KEY")
            .with_zoom(9)
            .embed_url(&route)
            .unwrap();
        assert_eq!(
            url,
            "https://maps.example/embed/v1/directions?key=KEY&origin=0,0&destination=2,4&center=1,2&zoom=9"
        );
    }

    #[test]
    fn embed_key_is_percent_encoded() {
        let url = MapLink::new("https://maps.example")
            .with_embed_key("a b&zoom=1#x")
            .embed_url(&route())
            .unwrap();
        assert!(url.contains("?key=a%20b%26zoom%3D1%23x&origin="), "{url}");
        assert_eq!(url.matches("&zoom=").count(), 1, "{url}");
        assert!(!url.contains('#'), "{url}");
    }

    #[test]
    fn from_config_picks_up_fields() {
        let cfg = ExplorerConfig {
            map_base_url:  "https://maps.example/".into(),
            embed_api_key: Some("k".into()),
            embed_zoom:    5,
            ..Default::default()
        };
        let link = MapLink::from_config(&cfg);
        assert_eq!(link.base(), "https://maps.example");
        assert!(link.embed_url(&route()).unwrap().ends_with("&zoom=5"));
    }
}

#[cfg(test)]
mod plan {
    use roam_core::{Coordinate, CoreError, LabelStyle, SessionRng};

    use crate::{DestinationSampler, PolarSampler, RouteError, plan_route};

    /// Always returns a fixed point, whatever the radius.
    struct Fixed(Coordinate);

    impl DestinationSampler for Fixed {
        fn sample(&self, _origin: Coordinate, _max: f64, _rng: &mut SessionRng) -> Coordinate {
            self.0
        }
    }

    #[test]
    fn uses_the_given_sampler() {
        let mut rng = SessionRng::new(0);
        let origin = Coordinate::new(0.0, 0.0);
        let s = plan_route(&Fixed(Coordinate::new(0.0, 1.0)), origin, 20.0, LabelStyle::Coordinates, &mut rng)
            .unwrap();
        assert_eq!(s.origin, origin);
        assert_eq!(s.duration_minutes, 278);
        assert_eq!(s.destination_label, "Random Destination (0.0000, 1.0000)");
    }

    #[test]
    fn works_through_a_trait_object() {
        let sampler: Box<dyn DestinationSampler> = Box::new(PolarSampler);
        let mut rng = SessionRng::new(1);
        let s = plan_route(sampler.as_ref(), Coordinate::new(51.5, -0.12), 20.0, LabelStyle::Codename, &mut rng)
            .unwrap();
        assert!(s.great_circle_km() <= 20.0 + 1e-6);
        assert!(s.destination_label.starts_with("Target "));
    }

    #[test]
    fn rejects_invalid_origin() {
        let mut rng = SessionRng::new(0);
        let err = plan_route(&PolarSampler, Coordinate::new(f64::NAN, 0.0), 20.0, LabelStyle::Coordinates, &mut rng)
            .unwrap_err();
        assert!(matches!(err, RouteError::Core(CoreError::InvalidCoordinate { .. })));
    }

    #[test]
    fn rejects_invalid_radius() {
        let mut rng = SessionRng::new(0);
        let origin = Coordinate::new(0.0, 0.0);
        for max in [-1.0, f64::NAN, f64::INFINITY] {
            let err = plan_route(&PolarSampler, origin, max, LabelStyle::Coordinates, &mut rng).unwrap_err();
            assert!(matches!(err, RouteError::Core(CoreError::InvalidRadius(_))), "{max}");
        }
    }

    #[test]
    fn same_seed_same_route() {
        let origin = Coordinate::new(35.68, 139.69);
        let a = plan_route(&PolarSampler, origin, 20.0, LabelStyle::Codename, &mut SessionRng::new(4)).unwrap();
        let b = plan_route(&PolarSampler, origin, 20.0, LabelStyle::Codename, &mut SessionRng::new(4)).unwrap();
        assert_eq!(a, b);
    }
}
