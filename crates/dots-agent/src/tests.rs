//! Unit tests for dots-agent.

use dots_core::{DotConf, DotParams};

fn quiet_conf() -> DotConf {
    DotConf::new(DotParams {
        hunger_rate: 0.0,
        look_coeff:  0.0,
        death_scale: 1e6,
        ..DotParams::default()
    })
    .unwrap()
}

#[cfg(test)]
mod status {
    use crate::{Direction, DotKind, DotStatus};

    #[test]
    fn slots_round_trip() {
        for (i, s) in DotStatus::SLOTS.iter().enumerate() {
            assert_eq!(s.slot(), Some(i));
            assert_eq!(DotStatus::from_slot(i), Some(*s));
        }
        assert_eq!(DotStatus::Invalid.slot(), None);
        assert_eq!(DotStatus::from_slot(6), None);
    }

    #[test]
    fn availability() {
        assert!(DotStatus::Normal.is_available());
        assert!(DotStatus::Looking.is_available());
        assert!(!DotStatus::Hungry.is_available());
        assert!(!DotStatus::Generating.is_available());
        assert!(!DotStatus::Dead.is_alive());
        assert!(!DotStatus::Invalid.is_alive());
        assert!(DotStatus::Eating.is_alive());
    }

    #[test]
    fn kinds() {
        assert_eq!(DotKind::Alpha.opposite(), DotKind::Beta);
        assert_eq!(DotKind::Beta.opposite(), DotKind::Alpha);
        assert_eq!(DotKind::Beta.to_string(), "beta");
        assert_eq!(DotStatus::Generating.to_string(), "generating");
    }

    #[test]
    fn directions() {
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::from_index(3), Some(Direction::Down));
        assert_eq!(Direction::along_x(-2), Direction::Left);
        assert_eq!(Direction::along_y(4), Direction::Down);
    }
}

#[cfg(test)]
mod cdf {
    use dots_core::{DotConf, SimRng};

    use super::quiet_conf;
    use crate::{DotStatus, StatusCdf, death_hazard, transition_pdf};

    #[test]
    fn hazard_is_quadratic_and_clamped() {
        assert_eq!(death_hazard(0, 1000.0), 0.0);
        assert_eq!(death_hazard(500, 1000.0), 0.25);
        assert_eq!(death_hazard(1000, 1000.0), 1.0);
        assert_eq!(death_hazard(5000, 1000.0), 1.0);
    }

    #[test]
    fn quiet_normal_stays_normal() {
        let pdf = transition_pdf(DotStatus::Normal, 0, 0.0, &quiet_conf());
        assert_eq!(pdf, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn hungry_eating_odds_follow_density() {
        let conf = quiet_conf();
        let pdf = transition_pdf(DotStatus::Hungry, 0, 0.0, &conf);
        assert_eq!(pdf[4], 1.0);
        assert_eq!(pdf[2], 0.0);

        let pdf = transition_pdf(DotStatus::Hungry, 0, 1.0, &conf);
        assert_eq!(pdf[4], 0.5);
        assert_eq!(pdf[2], 0.5);

        let pdf = transition_pdf(DotStatus::Hungry, 0, f64::INFINITY, &conf);
        assert_eq!(pdf[4], 0.0);
        assert_eq!(pdf[2], 1.0);
    }

    #[test]
    fn busy_statuses_only_hold_or_die() {
        let conf = DotConf::default();
        let age = 500;
        for (status, slot) in [
            (DotStatus::Looking, 3),
            (DotStatus::Eating, 4),
            (DotStatus::Generating, 5),
        ] {
            let pdf = transition_pdf(status, age, 0.0, &conf);
            assert_eq!(pdf[1], 0.25);
            assert_eq!(pdf[slot], 0.75);
            assert_eq!(pdf.iter().filter(|&&p| p > 0.0).count(), 2);
        }
    }

    #[test]
    fn past_death_scale_all_mass_is_death() {
        let conf = DotConf::default();
        for status in [DotStatus::Normal, DotStatus::Hungry, DotStatus::Looking] {
            let cdf = StatusCdf::for_state(status, 2_000, 3.0, &conf);
            assert_eq!(cdf.as_slice(), &[0.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        }
    }

    #[test]
    fn cdf_is_monotone_and_ends_at_one() {
        let conf = DotConf::default();
        for status in DotStatus::SLOTS {
            for age in (0..3_000).step_by(37) {
                for density in [0.0, 0.5, 10.0, f64::INFINITY] {
                    let cdf = StatusCdf::for_state(status, age, density, &conf);
                    let s = cdf.as_slice();
                    assert!(s.windows(2).all(|w| w[0] <= w[1]), "{status} {age} {density}: {s:?}");
                    assert_eq!(s[5], 1.0, "{status} {age} {density}: {s:?}");
                    assert!(s[0] >= 0.0);
                }
            }
        }
    }

    #[test]
    fn tail_after_last_state_is_pinned() {
        let cdf = StatusCdf::for_state(DotStatus::Looking, 0, 0.0, &DotConf::default());
        assert_eq!(cdf.as_slice(), &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        assert_eq!(cdf.cumulative(DotStatus::Looking), 1.0);
        assert_eq!(cdf.cumulative(DotStatus::Invalid), 0.0);
    }

    #[test]
    fn sampling_respects_certain_outcomes() {
        let conf = DotConf::default();
        let mut rng = SimRng::new(5);
        let generating = StatusCdf::for_state(DotStatus::Generating, 0, 0.0, &conf);
        let doomed = StatusCdf::for_state(DotStatus::Normal, 1_000, 0.0, &conf);
        for _ in 0..1_000 {
            assert_eq!(generating.sample(&mut rng), DotStatus::Generating);
            assert_eq!(doomed.sample(&mut rng), DotStatus::Dead);
        }
    }
}

#[cfg(test)]
mod dot {
    use dots_core::{DotConf, DotId, GridPos, SimRng};

    use super::quiet_conf;
    use crate::{Direction, Dot, DotKind, DotStatus};

    #[test]
    fn new_dot_is_normal_and_unpartnered() {
        let d = Dot::new(DotId(3), GridPos::new(1, 2), DotKind::Beta);
        assert_eq!(d.status(), DotStatus::Normal);
        assert_eq!(d.partner(), None);
        assert_eq!(d.counter(), 0);
        assert_eq!(d.age(), 0);
        assert_eq!(d.view().pos, GridPos::new(1, 2));
    }

    #[test]
    fn default_dot_is_invalid_and_inert() {
        let mut d = Dot::default();
        assert_eq!(d.status(), DotStatus::Invalid);
        assert_eq!(d.id(), DotId::INVALID);

        let before = *d.cdf();
        d.update_cdf(0.0, &DotConf::default());
        assert_eq!(*d.cdf(), before);

        d.step(Direction::Right);
        assert_eq!(d.pos(), GridPos::new(0, 0));

        d.set_status(DotStatus::Normal);
        assert_eq!(d.roll_status(&mut SimRng::new(0)), DotStatus::Invalid);
    }

    #[test]
    fn step_nudges_without_wrapping() {
        let mut d = Dot::new(DotId(0), GridPos::new(0, 0), DotKind::Alpha);
        d.step(Direction::Left);
        d.step(Direction::Up);
        assert_eq!(d.pos(), GridPos::new(-1, -1));
    }

    #[test]
    fn counters_and_partner() {
        let mut d = Dot::new(DotId(0), GridPos::new(0, 0), DotKind::Alpha);
        d.inc_counter();
        d.inc_counter();
        assert_eq!(d.counter(), 2);
        d.restart_counter();
        assert_eq!(d.counter(), 1);
        d.reset_counter();
        assert_eq!(d.counter(), 0);

        d.set_partner(DotId(9));
        assert_eq!(d.partner(), Some(DotId(9)));
        d.clear_partner();
        assert_eq!(d.partner(), None);
        assert_eq!(d.inc_age(), 1);
    }

    #[test]
    fn quiet_dot_rolls_normal() {
        let conf = quiet_conf();
        let mut rng = SimRng::new(11);
        let mut d = Dot::new(DotId(0), GridPos::new(0, 0), DotKind::Alpha);
        for _ in 0..200 {
            d.update_cdf(0.0, &conf);
            assert_eq!(d.roll_status(&mut rng), DotStatus::Normal);
            d.inc_age();
        }
    }

    #[test]
    fn report_lists_fields() {
        let mut d = Dot::new(DotId(3), GridPos::new(0, 0), DotKind::Alpha);
        d.set_partner(DotId(4));
        let text = d.to_string();
        assert!(text.starts_with("Report of dot #3:"));
        assert!(text.contains("Type: alpha"));
        assert!(text.contains("Current status: normal"));
        assert!(text.contains("Partner: #4"));
    }
}
