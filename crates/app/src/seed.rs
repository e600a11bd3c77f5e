//! Launch arguments for the viewer: run seed plus optional parameter overrides.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use cavegen::{iterations_from_signed, mix_seed};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchArgs {
    pub seed: SeedChoice,
    pub density: Option<f64>,
    pub iterations: Option<u32>,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Accepts `--seed`, `--density` and `--iterations`, each as `--flag value` or
/// `--flag=value`. Unknown arguments are ignored so platform launchers can pass
/// their own flags.
pub fn parse_launch_args(args: &[String], generated_seed: u64) -> Result<LaunchArgs, String> {
    let mut seed = None;
    let mut density = None;
    let mut iterations = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let (flag, inline_value) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (argument, None),
        };
        if !matches!(flag, "--seed" | "--density" | "--iterations") {
            index += 1;
            continue;
        }

        let value = match inline_value {
            Some(value) => value,
            None => {
                index += 1;
                args.get(index)
                    .map(String::as_str)
                    .ok_or_else(|| format!("missing value for {flag}"))?
            }
        };

        match flag {
            "--seed" => set_once(&mut seed, flag, parse_seed_value(value)?)?,
            "--density" => set_once(&mut density, flag, parse_density_value(value)?)?,
            _ => set_once(&mut iterations, flag, parse_iterations_value(value)?)?,
        }
        index += 1;
    }

    Ok(LaunchArgs {
        seed: match seed {
            Some(seed) => SeedChoice::Cli(seed),
            None => SeedChoice::Generated(generated_seed),
        },
        density,
        iterations,
    })
}

fn set_once<T>(slot: &mut Option<T>, flag: &str, value: T) -> Result<(), String> {
    if slot.is_some() {
        return Err(format!("{flag} provided more than once"));
    }
    *slot = Some(value);
    Ok(())
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn parse_density_value(raw_value: &str) -> Result<f64, String> {
    match raw_value.parse::<f64>() {
        Ok(density) if density.is_finite() => Ok(density),
        _ => Err(format!("density value '{raw_value}' must be a finite number")),
    }
}

fn parse_iterations_value(raw_value: &str) -> Result<u32, String> {
    let signed = raw_value
        .parse::<i64>()
        .map_err(|_| format!("iterations value '{raw_value}' must be a whole number"))?;
    iterations_from_signed(signed).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn uses_generated_seed_when_seed_flag_is_absent() {
        let args = as_args(&["cave_viewer"]);
        let launch = parse_launch_args(&args, 9_876_543).expect("no flags should parse");
        assert_eq!(launch.seed, SeedChoice::Generated(9_876_543));
        assert_eq!(launch.density, None);
        assert_eq!(launch.iterations, None);
    }

    #[test]
    fn parses_separate_and_inline_values() {
        let args = as_args(&["cave_viewer", "--seed", "4242", "--density=47.5", "--iterations", "6"]);
        let launch = parse_launch_args(&args, 1).expect("valid flags should parse");
        assert_eq!(launch.seed, SeedChoice::Cli(4_242));
        assert_eq!(launch.density, Some(47.5));
        assert_eq!(launch.iterations, Some(6));
    }

    #[test]
    fn errors_when_flag_has_no_value() {
        let args = as_args(&["cave_viewer", "--seed"]);
        let err = parse_launch_args(&args, 1).expect_err("missing seed value should error");
        assert!(err.contains("missing"), "error should explain missing value: {err}");
    }

    #[test]
    fn errors_when_seed_value_is_not_a_number() {
        let args = as_args(&["cave_viewer", "--seed=abc"]);
        let err = parse_launch_args(&args, 1).expect_err("non-numeric seed should error");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");
    }

    #[test]
    fn negative_iterations_are_rejected() {
        let args = as_args(&["cave_viewer", "--iterations=-2"]);
        let err = parse_launch_args(&args, 1).expect_err("negative passes should error");
        assert!(err.contains("-2"), "error should echo the count: {err}");
    }

    #[test]
    fn non_finite_density_is_rejected() {
        let args = as_args(&["cave_viewer", "--density", "NaN"]);
        let err = parse_launch_args(&args, 1).expect_err("NaN density should error");
        assert!(err.contains("finite"), "error should explain finiteness: {err}");
    }

    #[test]
    fn errors_when_flag_is_provided_more_than_once() {
        let args = as_args(&["cave_viewer", "--seed=1", "--seed", "2"]);
        let err = parse_launch_args(&args, 1).expect_err("duplicate seed flags should be rejected");
        assert!(err.contains("more than once"), "error should explain duplicate flag: {err}");
    }

    #[test]
    fn unknown_arguments_are_skipped() {
        let args = as_args(&["cave_viewer", "-psn_0_1234", "--seed=8"]);
        let launch = parse_launch_args(&args, 1).expect("unknown flags are ignored");
        assert_eq!(launch.seed, SeedChoice::Cli(8));
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }
}
