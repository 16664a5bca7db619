// src/comps/aggregator.rs

use crate::config::CompConfig;
use crate::domain::money::round_to;
use crate::domain::Comp;
use crate::geo::Coordinates;
use tracing::{debug, warn};

/// Attaches distances to `comps`, sorts them nearest first and keeps those
/// inside the configured radius.
///
/// When nothing falls inside the radius the nearest `fallback_count` comps are
/// returned instead, so a non-empty input always yields a non-empty output.
/// Without subject coordinates the comps pass through untouched.
pub fn aggregate_comps(mut comps: Vec<Comp>, subject: Option<Coordinates>, cfg: &CompConfig) -> Vec<Comp> {
    let Some(origin) = subject else {
        debug!(count = comps.len(), "subject has no coordinates, skipping distance filter");
        return comps;
    };

    if comps.is_empty() {
        return comps;
    }

    for comp in comps.iter_mut() {
        let miles = match comp.coordinates {
            Some(at) => round_to(origin.distance_miles(&at), 2),
            None => cfg.missing_distance_miles,
        };
        comp.distance_miles = Some(miles);
    }

    // Stable, so equidistant comps keep lookup order.
    comps.sort_by(|a, b| distance_of(a).total_cmp(&distance_of(b)));

    let in_radius = comps
        .iter()
        .filter(|c| distance_of(c) <= cfg.radius_miles)
        .count();

    if in_radius > 0 {
        // Sorted ascending, so the in-radius comps are a prefix.
        comps.truncate(in_radius);
        debug!(
            count = in_radius,
            closest = distance_of(&comps[0]),
            radius = cfg.radius_miles,
            "comps within radius"
        );
        comps
    } else {
        warn!(
            radius = cfg.radius_miles,
            fallback = cfg.fallback_count,
            "no comps within radius, using nearest"
        );
        comps.truncate(cfg.fallback_count);
        comps
    }
}

fn distance_of(comp: &Comp) -> f64 {
    comp.distance_miles.unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SUBJECT: Coordinates = Coordinates {
        latitude: 33.5218,
        longitude: -84.3538,
    };

    /// A comp roughly `miles` due north of the subject.
    fn comp_north(name: &str, miles: f64) -> Comp {
        let lat = SUBJECT.latitude + miles / 69.097;
        Comp::new(name, 250_000.0, 3, 2.0, 1_600.0).with_coordinates(Coordinates::new(lat, SUBJECT.longitude))
    }

    #[test]
    fn empty_input_is_empty_output() {
        let out = aggregate_comps(Vec::new(), Some(SUBJECT), &CompConfig::default());
        assert!(out.is_empty());
    }

    #[test]
    fn no_subject_coordinates_passes_through() {
        let comps = vec![comp_north("far", 10.0), comp_north("near", 0.5)];
        let out = aggregate_comps(comps.clone(), None, &CompConfig::default());
        assert_eq!(out, comps);
        assert!(out.iter().all(|c| c.distance_miles.is_none()));
    }

    #[test]
    fn keeps_only_comps_within_radius_nearest_first() {
        let comps = vec![
            comp_north("c", 1.8),
            comp_north("far", 6.0),
            comp_north("a", 0.4),
            Comp::new("no coords", 200_000.0, 3, 2.0, 1_500.0),
            comp_north("b", 1.1),
        ];

        let out = aggregate_comps(comps, Some(SUBJECT), &CompConfig::default());
        let names: Vec<_> = out.iter().map(|c| c.address.as_str()).collect();

        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(out.iter().all(|c| c.distance_miles.unwrap() <= 2.0));
    }

    #[test]
    fn falls_back_to_nearest_five_when_none_in_radius() {
        let comps: Vec<_> = (0..8)
            .map(|i| comp_north(&format!("c{i}"), 10.0 - i as f64))
            .collect();

        let out = aggregate_comps(comps, Some(SUBJECT), &CompConfig::default());

        assert_eq!(out.len(), 5);
        assert_eq!(out[0].address, "c7");
        assert!(out.windows(2).all(|w| w[0].distance_miles <= w[1].distance_miles));
    }

    #[test]
    fn comps_without_coordinates_get_sentinel_distance() {
        let comps = vec![Comp::new("blind", 200_000.0, 3, 2.0, 1_500.0)];
        let out = aggregate_comps(comps, Some(SUBJECT), &CompConfig::default());

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].distance_miles, Some(999.0));
    }

    #[test]
    fn distances_are_rounded_to_hundredths() {
        let out = aggregate_comps(vec![comp_north("a", 0.333_333)], Some(SUBJECT), &CompConfig::default());
        let d = out[0].distance_miles.unwrap();
        assert_eq!(d, round_to(d, 2));
    }

    fn arb_comp() -> impl Strategy<Value = Comp> {
        (
            prop::option::of((-0.5f64..0.5, -0.5f64..0.5)),
            50_000.0f64..900_000.0,
            500.0f64..5_000.0,
        )
            .prop_map(|(offset, price, area)| {
                let comp = Comp::new("comp", price, 3, 2.0, area);
                match offset {
                    Some((dlat, dlon)) => comp.with_coordinates(Coordinates::new(
                        SUBJECT.latitude + dlat,
                        SUBJECT.longitude + dlon,
                    )),
                    None => comp,
                }
            })
    }

    proptest! {
        #[test]
        fn never_empties_a_non_empty_list(comps in prop::collection::vec(arb_comp(), 1..20)) {
            let cfg = CompConfig::default();
            let out = aggregate_comps(comps, Some(SUBJECT), &cfg);

            prop_assert!(!out.is_empty());
            prop_assert!(out.windows(2).all(|w| w[0].distance_miles <= w[1].distance_miles));

            let all_in_radius = out.iter().all(|c| c.distance_miles.unwrap() <= cfg.radius_miles);
            if !all_in_radius {
                // Only the nearest-N fallback may return far comps.
                prop_assert!(out.len() <= cfg.fallback_count);
                prop_assert!(out.iter().all(|c| c.distance_miles.unwrap() > cfg.radius_miles));
            }
        }
    }
}
