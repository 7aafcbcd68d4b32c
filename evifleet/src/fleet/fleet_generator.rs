use super::{
    binding_ops, fleet_generator_config::validate_size_tolerance, materialize_ops, session_ops,
    FleetError, FleetGeneratorConfig, FleetParameters, FleetResult, FleetStats, FleetSummary,
    JointDistribution,
};
use crate::{source::SourcePopulation, vmt::VmtDistribution};
use evifleet_core::model::{weights::FleetWeights, FleetConfigurationError};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// generates fleets from a configured mileage distribution and random source.
/// holds no mutable state, so one generator may serve concurrent requests.
pub struct FleetGenerator {
    seed: Option<u64>,
    size_tolerance: f64,
    vmt_distribution: Box<dyn VmtDistribution>,
}

impl FleetGenerator {
    pub fn new(config: &FleetGeneratorConfig) -> Result<FleetGenerator, FleetConfigurationError> {
        validate_size_tolerance(config.size_tolerance)?;
        let vmt_distribution = config.vmt.build()?;
        Ok(FleetGenerator {
            seed: config.seed,
            size_tolerance: config.size_tolerance,
            vmt_distribution,
        })
    }

    /// generates a fleet with a fresh random source, seeded from the configured
    /// seed when present
    pub fn generate(
        &self,
        source: &SourcePopulation,
        parameters: &FleetParameters,
        weights: &FleetWeights,
    ) -> Result<FleetResult, FleetError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        generate(
            source,
            parameters,
            weights,
            self.vmt_distribution.as_ref(),
            self.size_tolerance,
            &mut rng,
        )
    }
}

/// generates a synthetic fleet and its charging activity from a source pool.
///
/// all configuration is validated before the random source is touched. the fleet
/// is materialized per day of week, bound to source vehicles of the same stratum,
/// then expanded into the sessions of those vehicles.
pub fn generate<R: Rng + ?Sized>(
    source: &SourcePopulation,
    parameters: &FleetParameters,
    weights: &FleetWeights,
    vmt_distribution: &dyn VmtDistribution,
    size_tolerance: f64,
    rng: &mut R,
) -> Result<FleetResult, FleetError> {
    parameters.validate()?;
    validate_size_tolerance(size_tolerance)?;
    let vmt_weights = vmt_distribution.vmt_weights(
        parameters.mean_vmt,
        parameters.bin_width,
        parameters.loc_class,
    )?;

    let distribution = JointDistribution::build(weights, &vmt_weights);
    log::info!(
        "built joint distribution with {} strata for {} fleet of size {}",
        distribution.len(),
        parameters.loc_class,
        parameters.fleet_size
    );

    let materialized =
        materialize_ops::materialize(&distribution, parameters.fleet_size, size_tolerance, rng)?;
    let bound = binding_ops::bind(&materialized.rows, source, rng);
    let fleet_activity = session_ops::join_sessions(&bound.members, source);
    let fleet_stats = FleetStats::from_activity(&fleet_activity, weights, &vmt_weights);

    let mut warnings = materialized.warnings;
    warnings.extend(bound.warning);
    let summary = FleetSummary {
        fleet_size: parameters.fleet_size,
        n_strata: distribution.len(),
        materialized_members: materialized.rows.len(),
        bound_members: bound.members.len(),
        dropped_members: bound.dropped,
        activity_rows: fleet_activity.len(),
        n_warnings: warnings.len(),
    };
    log::info!(
        "generated {} fleet members with {} activity rows",
        summary.bound_members,
        summary.activity_rows
    );

    Ok(FleetResult {
        fleet_members: bound.members,
        fleet_activity,
        fleet_stats,
        summary,
        warnings,
        vmt_weights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::{
        fleet_fixtures::{mock_key, mock_source, mock_vmt, mock_weights},
        FleetId, FleetWarning,
    };
    use crate::source::SourceVehicleId;
    use evifleet_core::model::{
        category::{DayOfWeek, LocClass, PevType, PreferredLoc},
        stratum::StratumKey,
        weights::VmtWeights,
    };
    use itertools::Itertools;
    use std::collections::{HashMap, HashSet};

    fn mock_parameters(fleet_size: usize) -> FleetParameters {
        FleetParameters {
            fleet_size,
            mean_vmt: 30.0,
            bin_width: 10,
            loc_class: LocClass::Urban,
        }
    }

    fn single_bin_vmt() -> VmtWeights {
        mock_vmt(&[("20", 1.0)], &[("20", 1.0)])
    }

    /// two pev types and two preferences on each day, several vehicles per stratum
    fn mixed_source() -> SourcePopulation {
        let mut vehicles = vec![];
        let mut id = 0;
        for day in DayOfWeek::ALL {
            for pev in [PevType::Bev250, PevType::Phev20] {
                for pref in [PreferredLoc::PrefHome, PreferredLoc::PrefWork] {
                    for n_sessions in 1..=3 {
                        id += 1;
                        vehicles.push((mock_key(day, pev, pref, 20), id, n_sessions));
                    }
                }
            }
        }
        mock_source(&vehicles)
    }

    fn mixed_weights() -> FleetWeights {
        mock_weights(
            &[("BEV250", 0.4), ("PHEV20", 0.6)],
            &[("PrefHome", 0.7), ("PrefWork", 0.3)],
        )
    }

    fn bev_home(day_of_week: DayOfWeek) -> StratumKey {
        mock_key(day_of_week, PevType::Bev250, PreferredLoc::PrefHome, 20)
    }

    fn members_by_day(result: &FleetResult) -> HashMap<DayOfWeek, usize> {
        result.fleet_members.iter().map(|m| m.stratum.day_of_week).counts()
    }

    /// one single-session PrefHome vehicle for every day, pev type and bin in
    /// 0, 10, 20 and 30 miles
    fn binned_source() -> SourcePopulation {
        let mut vehicles = vec![];
        let mut id = 0;
        for day in DayOfWeek::ALL {
            for pev in PevType::ALL {
                for bin in [0, 10, 20, 30] {
                    id += 1;
                    vehicles.push((mock_key(day, pev, PreferredLoc::PrefHome, bin), id, 1));
                }
            }
        }
        mock_source(&vehicles)
    }

    fn four_bin_vmt() -> VmtWeights {
        let bins = [("0", 0.25), ("10", 0.25), ("20", 0.25), ("30", 0.25)];
        mock_vmt(&bins, &bins)
    }

    #[test]
    fn test_single_category_fleet() {
        let key_weekday = bev_home(DayOfWeek::Weekday);
        let key_weekend = bev_home(DayOfWeek::Weekend);
        let other = mock_key(DayOfWeek::Weekday, PevType::Phev20, PreferredLoc::PrefHome, 20);
        let source = mock_source(&[
            (key_weekday, 1, 2),
            (key_weekday, 2, 1),
            (key_weekend, 3, 1),
            (other, 4, 1),
        ]);
        let weights = mock_weights(&[("BEV250", 1.0)], &[("PrefHome", 1.0)]);
        let vmt = single_bin_vmt();
        let mut rng = StdRng::seed_from_u64(1);

        let result =
            generate(&source, &mock_parameters(100), &weights, &vmt, 0.001, &mut rng).unwrap();
        assert!(result.warnings.is_empty());
        let members_by_day = members_by_day(&result);
        assert_eq!(members_by_day[&DayOfWeek::Weekday], 100);
        assert_eq!(members_by_day[&DayOfWeek::Weekend], 100);
        for member in result.fleet_members.iter() {
            match member.stratum.day_of_week {
                DayOfWeek::Weekday => {
                    assert_eq!(member.stratum, key_weekday);
                    let ids = [SourceVehicleId(1), SourceVehicleId(2)];
                    assert!(ids.contains(&member.source_vehicle_id));
                }
                DayOfWeek::Weekend => {
                    assert_eq!(member.stratum, key_weekend);
                    assert_eq!(member.source_vehicle_id, SourceVehicleId(3));
                }
            }
        }
        assert_eq!(result.summary.materialized_members, 200);
        assert_eq!(result.summary.bound_members, 200);
    }

    #[test]
    fn test_activity_matches_source_strata() {
        let source = mixed_source();
        let weights = mixed_weights();
        let mut rng = StdRng::seed_from_u64(99);
        let vmt = single_bin_vmt();
        let result =
            generate(&source, &mock_parameters(50), &weights, &vmt, 0.001, &mut rng).unwrap();

        let source_vehicles: HashSet<(StratumKey, SourceVehicleId)> = source
            .records()
            .iter()
            .map(|r| (r.stratum(), r.source_vehicle_id))
            .collect();
        assert!(!result.fleet_activity.is_empty());
        for row in result.fleet_activity.iter() {
            assert!(source_vehicles.contains(&(row.stratum(), row.source_vehicle_id)));
        }

        let ids = result.fleet_members.iter().map(|m| m.fleet_id).collect_vec();
        let expected = (1..=ids.len()).map(FleetId).collect_vec();
        assert_eq!(ids, expected);
        let activity_ids =
            result.fleet_activity.iter().map(|a| a.fleet_id).unique().collect_vec();
        assert_eq!(activity_ids, expected);
    }

    #[test]
    fn test_same_seed_same_fleet() {
        let source = mixed_source();
        let weights = mixed_weights();
        let config = FleetGeneratorConfig {
            seed: Some(1234),
            ..Default::default()
        };
        let generator = FleetGenerator::new(&config).unwrap();
        let params = mock_parameters(7);
        let first = generator.generate(&source, &params, &weights).unwrap();
        let second = generator.generate(&source, &params, &weights).unwrap();
        assert_eq!(first.fleet_activity, second.fleet_activity);
        assert_eq!(first.fleet_stats, second.fleet_stats);
        assert_eq!(first.warnings, second.warnings);
    }

    #[test]
    fn test_unmatched_stratum_dropped() {
        // the source pool has no PHEV20 vehicles on weekends
        let source = mock_source(&[
            (bev_home(DayOfWeek::Weekday), 1, 1),
            (mock_key(DayOfWeek::Weekday, PevType::Phev20, PreferredLoc::PrefHome, 20), 2, 1),
            (bev_home(DayOfWeek::Weekend), 3, 1),
        ]);
        let weights = mock_weights(&[("BEV250", 0.5), ("PHEV20", 0.5)], &[("PrefHome", 1.0)]);
        let mut rng = StdRng::seed_from_u64(8);
        let vmt = single_bin_vmt();
        let result =
            generate(&source, &mock_parameters(20), &weights, &vmt, 0.001, &mut rng).unwrap();

        let expected = FleetWarning::SparseMatch {
            dropped: 10,
            strata: 1,
        };
        assert_eq!(result.warnings, vec![expected]);
        assert_eq!(result.summary.dropped_members, 10);
        let weekend = result
            .fleet_members
            .iter()
            .filter(|m| m.stratum.day_of_week == DayOfWeek::Weekend)
            .count();
        assert_eq!(weekend, 10);
        assert_eq!(result.fleet_members.len(), 30);
    }

    #[test]
    fn test_small_fleet_reconciled() {
        let source = mixed_source();
        let weights = mock_weights(
            &[("BEV250", 0.5), ("PHEV20", 0.5)],
            &[("PrefHome", 0.5), ("PrefWork", 0.5)],
        );
        let vmt = single_bin_vmt();
        let mut rng = StdRng::seed_from_u64(3);
        // four strata of 0.25 * 3 members each round to 1
        let result =
            generate(&source, &mock_parameters(3), &weights, &vmt, 0.001, &mut rng).unwrap();
        assert_eq!(result.warnings.len(), 2);
        let members_by_day = members_by_day(&result);
        assert_eq!(members_by_day[&DayOfWeek::Weekday], 3);
        assert_eq!(members_by_day[&DayOfWeek::Weekend], 3);
    }

    #[test]
    fn test_all_strata_round_to_zero() {
        let source = binned_source();
        let weights = mock_weights(
            &[("PHEV20", 0.25), ("PHEV50", 0.25), ("BEV100", 0.25), ("BEV250", 0.25)],
            &[("PrefHome", 1.0)],
        );
        let vmt = four_bin_vmt();
        let mut rng = StdRng::seed_from_u64(11);
        // sixteen strata of 1/16 * 3 members each round to 0
        let result =
            generate(&source, &mock_parameters(3), &weights, &vmt, 0.001, &mut rng).unwrap();

        assert_eq!(result.warnings.len(), 2);
        for (warning, day) in result.warnings.iter().zip(DayOfWeek::ALL) {
            let expected = FleetWarning::SizeReconciliation {
                day_of_week: day,
                target: 3,
                realized: 0,
                relative_error: 1.0,
            };
            assert_eq!(warning, &expected);
        }
        let members_by_day = members_by_day(&result);
        assert_eq!(members_by_day[&DayOfWeek::Weekday], 3);
        assert_eq!(members_by_day[&DayOfWeek::Weekend], 3);
        assert_eq!(result.summary.materialized_members, 6);
        assert_eq!(result.summary.dropped_members, 0);
    }

    #[test]
    fn test_few_strata_round_to_one() {
        let source = binned_source();
        let weights = mock_weights(
            &[("PHEV20", 0.1), ("PHEV50", 0.1), ("BEV100", 0.1), ("BEV250", 0.7)],
            &[("PrefHome", 1.0)],
        );
        let vmt = four_bin_vmt();
        let mut rng = StdRng::seed_from_u64(12);
        // the four BEV250 strata of 0.175 * 3 members round to 1, all others to 0
        let result =
            generate(&source, &mock_parameters(3), &weights, &vmt, 0.001, &mut rng).unwrap();

        assert_eq!(result.warnings.len(), 2);
        for warning in result.warnings.iter() {
            match warning {
                FleetWarning::SizeReconciliation {
                    target, realized, ..
                } => {
                    assert_eq!(*target, 3);
                    assert_eq!(*realized, 4);
                }
                other => panic!("unexpected warning {other}"),
            }
        }
        let members_by_day = members_by_day(&result);
        assert_eq!(members_by_day[&DayOfWeek::Weekday], 3);
        assert_eq!(members_by_day[&DayOfWeek::Weekend], 3);
        for member in result.fleet_members.iter() {
            assert_eq!(member.stratum.pev_type, PevType::Bev250);
        }
    }

    #[test]
    fn test_configuration_checked_before_sampling() {
        let source = mixed_source();
        let weights = mock_weights(&[("BEV250", 1.0)], &[("PrefHome", 1.0)]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut untouched = StdRng::seed_from_u64(3);
        // bin 20 is not aligned to a width of 15 miles
        let params = FleetParameters {
            bin_width: 15,
            ..mock_parameters(10)
        };
        let vmt = single_bin_vmt();
        let result = generate(&source, &params, &weights, &vmt, 0.001, &mut rng);
        assert!(matches!(result, Err(FleetError::ConfigurationError(_))));
        let result = generate(&source, &mock_parameters(10), &weights, &vmt, 1.5, &mut rng);
        assert!(matches!(result, Err(FleetError::ConfigurationError(_))));
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn test_concurrent_generators() {
        let source = mixed_source();
        let weights = mixed_weights();
        let config = FleetGeneratorConfig {
            seed: Some(77),
            ..Default::default()
        };
        let generator = FleetGenerator::new(&config).unwrap();
        let params = mock_parameters(25);
        let expected = generator.generate(&source, &params, &weights).unwrap();
        std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|| generator.generate(&source, &params, &weights).unwrap()))
                .collect_vec();
            for handle in handles {
                let result = handle.join().unwrap();
                assert_eq!(result.fleet_activity, expected.fleet_activity);
            }
        });
    }
}
