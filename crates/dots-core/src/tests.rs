//! Unit tests for dots-core primitives.

#[cfg(test)]
mod ids {
    use crate::DotId;

    #[test]
    fn ordering_and_next() {
        assert!(DotId(0) < DotId(1));
        assert_eq!(DotId(41).next(), DotId(42));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(DotId::INVALID.0, u32::MAX);
        assert_eq!(DotId::default(), DotId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(DotId(7).to_string(), "#7");
    }
}

#[cfg(test)]
mod tick {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn interval_boundaries() {
        assert!(Tick(0).is_on_interval(5));
        assert!(Tick(10).is_on_interval(5));
        assert!(!Tick(11).is_on_interval(5));
        assert!(!Tick(10).is_on_interval(0));
    }
}

#[cfg(test)]
mod grid {
    use crate::{Grid, GridPos};

    #[test]
    fn rejects_degenerate_dimensions() {
        assert!(Grid::new(0, 10).is_err());
        assert!(Grid::new(10, 0).is_err());
        assert!(Grid::new(u32::MAX, 10).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn wrap_folds_both_edges() {
        let g = Grid::new(10, 8).unwrap();
        assert_eq!(g.wrap(GridPos::new(-1, 8)), GridPos::new(9, 0));
        assert_eq!(g.wrap(GridPos::new(10, -1)), GridPos::new(0, 7));
        assert_eq!(g.wrap(GridPos::new(3, 4)), GridPos::new(3, 4));
    }

    #[test]
    fn contains() {
        let g = Grid::new(10, 8).unwrap();
        assert!(g.contains(GridPos::new(0, 0)));
        assert!(g.contains(GridPos::new(9, 7)));
        assert!(!g.contains(GridPos::new(10, 0)));
        assert!(!g.contains(GridPos::new(0, -1)));
    }

    #[test]
    fn distance_wraps_around_edges() {
        let g = Grid::new(10, 10).unwrap();
        assert_eq!(g.dist_sqr(GridPos::new(0, 0), GridPos::new(9, 0)), 1);
        assert_eq!(g.dist_sqr(GridPos::new(0, 0), GridPos::new(9, 9)), 2);
        assert_eq!(g.dist_sqr(GridPos::new(0, 0), GridPos::new(5, 0)), 25);
        assert_eq!(g.dist_sqr(GridPos::new(2, 3), GridPos::new(2, 3)), 0);
    }

    #[test]
    fn offset_takes_the_short_way() {
        let g = Grid::new(10, 10).unwrap();
        assert_eq!(g.offset(GridPos::new(0, 0), GridPos::new(9, 9)), (-1, -1));
        assert_eq!(g.offset(GridPos::new(8, 1), GridPos::new(1, 3)), (3, 2));
        assert_eq!(g.offset(GridPos::new(1, 1), GridPos::new(4, 1)), (3, 0));
    }

    #[test]
    fn distance_is_symmetric() {
        let g = Grid::new(7, 5).unwrap();
        for ax in 0..7 {
            for by in 0..5 {
                let a = GridPos::new(ax, by);
                let b = GridPos::new(6 - ax, 4 - by);
                assert_eq!(g.dist_sqr(a, b), g.dist_sqr(b, a));
            }
        }
    }
}

#[cfg(test)]
mod sampler {
    use crate::{pdf_to_cdf, sample_index};

    #[test]
    fn prefix_sum() {
        let cdf = pdf_to_cdf(&[0.25, 0.25, 0.25, 0.25]);
        assert_eq!(cdf, [0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn picks_smallest_index_reaching_u() {
        let cdf = [0.25, 0.5, 0.75, 1.0];
        assert_eq!(sample_index(&cdf, 0.1), 0);
        assert_eq!(sample_index(&cdf, 0.25), 0);
        assert_eq!(sample_index(&cdf, 0.26), 1);
        assert_eq!(sample_index(&cdf, 0.75), 2);
        assert_eq!(sample_index(&cdf, 1.0), 3);
    }

    #[test]
    fn zero_mass_slots_are_skipped() {
        let cdf = [0.0, 0.0, 0.4, 0.4, 1.0];
        assert_eq!(sample_index(&cdf, 0.01), 2);
        assert_eq!(sample_index(&cdf, 0.5), 4);
    }

    #[test]
    fn short_mass_falls_back_to_last_state_with_mass() {
        let cdf = [0.2, 0.5, 0.5, 0.5];
        assert_eq!(sample_index(&cdf, 0.9), 1);
    }

    #[test]
    fn all_zero_mass_falls_back_to_last_index() {
        assert_eq!(sample_index(&[0.0, 0.0, 0.0], 0.5), 2);
    }

    #[test]
    fn nan_entries_do_not_escape_bounds() {
        let cdf = [0.3, f64::NAN, f64::NAN];
        assert_eq!(sample_index(&cdf, 0.9), 0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: Vec<f64> = (0..8).map(|_| r1.unit()).collect();
        let b: Vec<f64> = (0..8).map(|_| r2.unit()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn unit_is_in_half_open_interval() {
        let mut rng = SimRng::new(0);
        for _ in 0..10_000 {
            let u = rng.unit();
            assert!(u > 0.0 && u <= 1.0, "got {u}");
        }
    }

    #[test]
    fn sample_never_picks_zero_mass() {
        let mut rng = SimRng::new(9);
        for _ in 0..1_000 {
            assert_eq!(rng.sample(&[0.0, 0.0, 1.0]), 2);
        }
    }

    #[test]
    fn sample_is_roughly_uniform() {
        let mut rng = SimRng::new(3);
        let cdf = [0.25, 0.5, 0.75, 1.0];
        let mut counts = [0usize; 4];
        for _ in 0..40_000 {
            counts[rng.sample(&cdf)] += 1;
        }
        for c in counts {
            assert!((9_000..11_000).contains(&c), "counts {counts:?}");
        }
    }
}

#[cfg(test)]
mod gauss {
    use crate::GaussTable;

    #[test]
    fn peak_at_mean() {
        let t = GaussTable::new(11, 5.0, 1.0, 1.0);
        let peak = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
        assert!((t.get(5) - peak).abs() < 1e-12);
        assert!(t.get(4) < t.get(5));
        assert_eq!(t.get(4), t.get(6));
    }

    #[test]
    fn out_of_range_is_zero() {
        let t = GaussTable::new(11, 5.0, 1.0, 1.0);
        assert_eq!(t.len(), 11);
        assert_eq!(t.get(11), 0.0);
        assert_eq!(t.get(u64::MAX), 0.0);
        assert!(GaussTable::default().is_empty());
        assert_eq!(GaussTable::default().get(0), 0.0);
    }

    #[test]
    fn mass_sums_to_coefficient() {
        let t = GaussTable::new(101, 50.0, 16.0, 0.5);
        let total: f64 = (0..101).map(|i| t.get(i)).sum();
        assert!((total - 0.5).abs() < 1e-6, "got {total}");
    }
}

#[cfg(test)]
mod config {
    use crate::{DotConf, DotParams, DotsError, MAX_DEATH_SCALE};

    #[test]
    fn defaults_are_valid() {
        assert!(DotParams::default().validate().is_ok());
        let conf = DotConf::new(DotParams::default()).unwrap();
        assert_eq!(conf.look_table().len(), 1001);
        assert_eq!(conf.eat_time(), 3);
        assert_eq!(conf.generation_time(), 4);
    }

    #[test]
    fn default_conf_matches_validated_defaults() {
        let a = DotConf::default();
        let b = DotConf::new(DotParams::default()).unwrap();
        assert_eq!(a.params(), b.params());
        assert_eq!(a.look_table(), b.look_table());
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let bad = [
            DotParams { hunger_rate: 1.5, ..DotParams::default() },
            DotParams { hunger_rate: -0.1, ..DotParams::default() },
            DotParams { density_coeff: -1.0, ..DotParams::default() },
            DotParams { death_scale: 0.0, ..DotParams::default() },
            DotParams { death_scale: f64::INFINITY, ..DotParams::default() },
            DotParams { look_variance: 0.0, ..DotParams::default() },
            DotParams { look_coeff: -1.0, ..DotParams::default() },
            DotParams { eat_time: 0, ..DotParams::default() },
            DotParams { generation_time: 0, ..DotParams::default() },
        ];
        for p in bad {
            assert!(DotConf::new(p.clone()).is_err(), "accepted {p:?}");
        }
    }

    #[test]
    fn huge_death_scale_rejected_not_panicking() {
        for death_scale in [1e30, 1e10, f64::MAX, MAX_DEATH_SCALE * 2.0] {
            let params = DotParams { death_scale, ..DotParams::default() };
            match DotConf::new(params) {
                Err(DotsError::Config(msg)) => assert!(msg.contains("death_scale"), "{msg}"),
                other => panic!("death_scale {death_scale} gave {other:?}"),
            }
        }
    }

    #[test]
    fn death_scale_bound_is_inclusive() {
        let params = DotParams { death_scale: MAX_DEATH_SCALE, ..DotParams::default() };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn look_chance_peaks_at_mean() {
        let conf = DotConf::default();
        let expected = 1.0 / (2.0 * std::f64::consts::PI * 16.0).sqrt();
        assert!((conf.look_chance(150) - expected).abs() < 1e-12);
        assert!(conf.look_chance(0) < 1e-100);
        assert_eq!(conf.look_chance(5_000), 0.0);
    }

    #[test]
    fn changing_look_params_rebuilds_table() {
        let conf = DotConf::default().with_look_params(10.0, 4.0, 0.0).unwrap();
        assert_eq!(conf.look_chance(10), 0.0);

        let conf = conf.with_look_params(10.0, 4.0, 1.0).unwrap();
        assert!(conf.look_chance(10) > conf.look_chance(150));
        assert_eq!(conf.params().look_mean, 10.0);
    }
}
