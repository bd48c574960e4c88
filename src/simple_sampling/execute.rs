use std::io::Write;

use {
    super::parser::*,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    std::num::*,
    crate::*,
    crate::misc_types::*,
    crate::sir_model::*,
    crate::stats_methods::MyVariance,
    rayon::prelude::*,
    rand_pcg::Pcg64,
    rand::SeedableRng,
};

/// Outcome of one epidemic, run until no node is infected anymore
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RealizationSummary{
    pub immune: u32,
    pub long_condition: u32,
    pub ever_infected: u32,
    pub peak_infected: u32,
    pub peak_day: u32,
    pub duration: u32,
}

impl RealizationSummary{
    pub fn from_controller<R: rand::Rng>(controller: &SimulationController<R>) -> Self
    {
        let counts = controller.counts();
        let (peak_infected, peak_day) = controller.peak();
        Self{
            immune: counts.immune,
            long_condition: counts.long_condition,
            ever_infected: counts.ever_infected(),
            peak_infected,
            peak_day: peak_day as u32,
            duration: controller.day() as u32,
        }
    }

    pub fn measure(&self, measure: MeasureType) -> u32
    {
        match measure{
            MeasureType::Immune => self.immune,
            MeasureType::LongCondition => self.long_condition,
            MeasureType::C => self.ever_infected,
            MeasureType::M => self.peak_infected,
            MeasureType::PeakDay => self.peak_day,
            MeasureType::Duration => self.duration,
        }
    }
}

pub fn execute_sir(
    param: SimpleSampleParam,
    json: Value,
    num_threads: Option<NonZeroUsize>
) -> Result<(), SimError>
{
    let j = num_threads.unwrap_or(NonZeroUsize::MIN);
    let bar = indication_bar(param.samples.get() as u64);
    let realizations = sample_realizations(&param, j, Some(&bar))?;
    bar.finish_with_message("Done");

    let name = param.quick_name(num_threads, "dat");
    let mut buf = create_dat_file(&name, &[json])?;
    writeln!(buf, "#measure mean variance")?;
    for measure in MeasureType::ALL{
        let values: Vec<_> = realizations.iter()
            .map(|r| r.measure(measure))
            .collect();
        let var = MyVariance::from_slice(&values, None);
        writeln!(buf, "{} {} {}", measure.name(), var.mean(), var.variance())?;
        log::info!("{}: mean {} variance {}", measure.name(), var.mean(), var.variance());
    }
    buf.flush()?;

    let name = param.quick_name(num_threads, "csv");
    let mut csv_writer = csv::Writer::from_path(&name)?;
    for r in realizations.iter(){
        csv_writer.serialize(r)?;
    }
    csv_writer.flush()?;
    log::info!("created {name}");
    Ok(())
}

/// Runs `param.samples` epidemics on `num_threads` threads.
///
/// Every thread gets its own random stream, split off one master
/// generator seeded with `sir_seed`. Same seed and same number of
/// threads give the same results, in the same order.
pub fn sample_realizations(
    param: &SimpleSampleParam,
    num_threads: NonZeroUsize,
    bar: Option<&indicatif::ProgressBar>
) -> Result<Vec<RealizationSummary>, SimError>
{
    param.config.validate()?;
    let j = num_threads.get();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(j)
        .build()?;

    let mut sir_rng = Pcg64::seed_from_u64(param.sir_seed);
    let samples = param.samples.get();
    let samples_per_thread = samples / j;
    let rest = samples % j;

    let jobs = (0..j)
        .map(
            |t|
            {
                let count = samples_per_thread + usize::from(t < rest);
                Pcg64::from_rng(&mut sir_rng).map(|rng| (rng, count))
            }
        ).collect::<Result<Vec<_>, _>>()?;

    let per_thread: Vec<Vec<RealizationSummary>> = pool.install(
        || jobs.into_par_iter()
            .map(
                |(rng, count)| -> Result<Vec<RealizationSummary>, SimError>
                {
                    let mut model = SimulationController::new(param.config.clone(), rng)?;
                    let mut results = Vec::with_capacity(count);
                    for i in 0..count{
                        if i > 0 {
                            model.reset();
                        }
                        model.run_until_fixed_point(param.max_days);
                        results.push(RealizationSummary::from_controller(&model));
                        if let Some(bar) = bar {
                            bar.inc(1);
                        }
                    }
                    Ok(results)
                }
            ).collect::<Result<Vec<_>, SimError>>()
    )?;

    Ok(per_thread.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn param(samples: usize) -> SimpleSampleParam
    {
        SimpleSampleParam{
            config: SimulationConfig{
                system_size: 60,
                average_degree: 4,
                initial_infected: 3,
                spread_chance_percent: 20.0,
                ..SimulationConfig::default()
            },
            sir_seed: 42,
            samples: NonZeroUsize::new(samples).unwrap(),
            max_days: 500,
        }
    }

    #[test]
    fn every_sample_is_run_once()
    {
        let three = NonZeroUsize::new(3).unwrap();
        let res = sample_realizations(&param(10), three, None).unwrap();
        assert_eq!(res.len(), 10);
        for r in res{
            assert_eq!(r.immune + r.long_condition, r.ever_infected);
            assert!(r.ever_infected >= 3);
            assert!(r.peak_infected >= 3);
            assert!(r.peak_day <= r.duration);
        }
    }

    #[test]
    fn fixed_seed_and_threads_is_reproducible()
    {
        let two = NonZeroUsize::new(2).unwrap();
        let a = sample_realizations(&param(6), two, None).unwrap();
        let b = sample_realizations(&param(6), two, None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn more_threads_than_samples()
    {
        let many = NonZeroUsize::new(4).unwrap();
        let res = sample_realizations(&param(2), many, None).unwrap();
        assert_eq!(res.len(), 2);
    }

    #[test]
    fn no_spread_only_initial_cases()
    {
        let mut p = param(4);
        p.config.spread_chance_percent = 0.0;
        let res = sample_realizations(&p, NonZeroUsize::MIN, None).unwrap();
        assert!(res.iter().all(|r| r.ever_infected == 3 && r.peak_infected == 3 && r.peak_day == 0));
    }

    #[test]
    fn measures_map_to_fields()
    {
        let r = RealizationSummary{
            immune: 1,
            long_condition: 2,
            ever_infected: 3,
            peak_infected: 4,
            peak_day: 5,
            duration: 6,
        };
        let values: Vec<_> = MeasureType::ALL.iter().map(|m| r.measure(*m)).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }
}
