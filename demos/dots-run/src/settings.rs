//! Twelve-value settings file.
//!
//! Values are whitespace separated and read in a fixed order; `#` starts a
//! comment running to the end of its line.  Anything after the twelfth
//! value is ignored.
//!
//! ```text
//! rand_seed grid_w grid_h init_dots
//! hunger_chance dot_density death_chance_maj
//! looking_chance_mean looking_chance_var looking_chance_p
//! eat_time generation_time
//! ```

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use dots_core::{DotParams, DotsError, DotsResult};
use tracing::debug;

const FIELDS: [&str; 12] = [
    "rand_seed",
    "grid_w",
    "grid_h",
    "init_dots",
    "hunger_chance",
    "dot_density",
    "death_chance_maj",
    "looking_chance_mean",
    "looking_chance_var",
    "looking_chance_p",
    "eat_time",
    "generation_time",
];

/// Everything needed to start a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub seed:         u64,
    pub width:        u32,
    pub height:       u32,
    pub initial_dots: usize,
    pub params:       DotParams,
}

impl Settings {
    pub fn load(path: &Path) -> DotsResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse settings text.  Parameter ranges are not checked here; that is
    /// `DotConf::new`'s job.
    pub fn parse(text: &str) -> DotsResult<Self> {
        let mut tokens = Vec::with_capacity(FIELDS.len());
        let mut last_line = 0;
        for (i, raw) in text.lines().enumerate() {
            last_line = i + 1;
            let content = raw.split('#').next().unwrap_or("");
            tokens.extend(content.split_whitespace().map(|t| (i + 1, t)));
            if tokens.len() >= FIELDS.len() {
                break;
            }
        }
        if tokens.len() < FIELDS.len() {
            return Err(DotsError::Parse {
                line:    last_line,
                message: format!(
                    "expected {} values, found {} (missing {})",
                    FIELDS.len(),
                    tokens.len(),
                    FIELDS[tokens.len()]
                ),
            });
        }

        let at = |i: usize| (tokens[i], FIELDS[i]);
        let settings = Settings {
            seed:         value(at(0))?,
            width:        value(at(1))?,
            height:       value(at(2))?,
            initial_dots: value(at(3))?,
            params: DotParams {
                hunger_rate:     value(at(4))?,
                density_coeff:   value(at(5))?,
                death_scale:     value(at(6))?,
                look_mean:       value(at(7))?,
                look_variance:   value(at(8))?,
                look_coeff:      value(at(9))?,
                eat_time:        value(at(10))?,
                generation_time: value(at(11))?,
            },
        };
        debug!(?settings, "settings parsed");
        Ok(settings)
    }
}

fn value<T>(((line, token), name): ((usize, &str), &str)) -> DotsResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse().map_err(|e| DotsError::Parse {
        line,
        message: format!("{name}: cannot read {token:?}: {e}"),
    })
}
