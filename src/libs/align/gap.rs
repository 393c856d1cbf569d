use super::error::AlignError;
use std::fmt;

/// Linear rate used when no gap parameter is given.
pub const DEFAULT_GAP_RATE: f64 = 3.0;

/// Cost of a gap as a function of its length.
///
/// * `Linear` - cost(k) = k * rate
/// * `Affine` - cost(k) = open + k * extend
///
/// The affine `open` term is charged for every gap, a gap of length 1 included.
/// `Invalid` marks a malformed configuration; both fillers refuse it before
/// touching the table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GapPenalty {
    Linear { rate: f64 },
    Affine { open: f64, extend: f64 },
    Invalid,
}

impl Default for GapPenalty {
    fn default() -> Self {
        GapPenalty::Linear {
            rate: DEFAULT_GAP_RATE,
        }
    }
}

impl GapPenalty {
    /// Parses 0, 1 or 2 textual parameters.
    ///
    /// * 0 - the default linear rate
    /// * 1 - linear rate
    /// * 2 - affine, the first value is the extend rate, the second the open cost
    ///
    /// ```
    /// use nwsw::libs::align::GapPenalty;
    ///
    /// assert_eq!(GapPenalty::from_params::<&str>(&[]).unwrap(), GapPenalty::Linear { rate: 3.0 });
    /// assert_eq!(
    ///     GapPenalty::from_params(&["1", "5"]).unwrap(),
    ///     GapPenalty::Affine { open: 5.0, extend: 1.0 }
    /// );
    /// assert!(GapPenalty::from_params(&["two"]).is_err());
    /// ```
    pub fn from_params<S: AsRef<str>>(params: &[S]) -> Result<Self, AlignError> {
        if params.len() > 2 {
            return Err(AlignError::Configuration(format!(
                "expected at most 2 gap penalty values, got {}",
                params.len()
            )));
        }

        let mut values = Vec::with_capacity(params.len());
        for param in params {
            let param = param.as_ref().trim();
            let value = param
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    AlignError::Configuration(format!(
                        "wrong gap penalty number format: {:?}",
                        param
                    ))
                })?;
            values.push(value);
        }

        Self::from_values(&values).validate()
    }

    /// Builds a model from already parsed values.
    ///
    /// Unusable input (too many values, NaN or infinite values) gives
    /// [`GapPenalty::Invalid`] rather than an error.
    pub fn from_values(values: &[f64]) -> Self {
        if values.iter().any(|v| !v.is_finite()) {
            return GapPenalty::Invalid;
        }

        match *values {
            [] => GapPenalty::default(),
            [rate] => GapPenalty::Linear { rate },
            [extend, open] => GapPenalty::Affine { open, extend },
            _ => GapPenalty::Invalid,
        }
    }

    /// Fails for the invalid state.
    pub fn validate(self) -> Result<Self, AlignError> {
        match self {
            GapPenalty::Invalid => Err(AlignError::Configuration(
                "gap penalty not properly initialized".to_string(),
            )),
            _ => Ok(self),
        }
    }

    /// Penalty for a gap of length `k`.
    ///
    /// ```
    /// use nwsw::libs::align::GapPenalty;
    ///
    /// assert_eq!(GapPenalty::Linear { rate: 2.0 }.cost(3), 6.0);
    /// assert_eq!(GapPenalty::Affine { open: 5.0, extend: 1.0 }.cost(1), 6.0);
    /// ```
    pub fn cost(&self, k: usize) -> f64 {
        match *self {
            GapPenalty::Linear { rate } => k as f64 * rate,
            GapPenalty::Affine { open, extend } => open + k as f64 * extend,
            GapPenalty::Invalid => f64::NAN,
        }
    }

    /// Longest single jump a horizontal or vertical scan looks at, given
    /// `available` cells between the current one and the boundary.
    ///
    /// A linear cost never gains from jumping more than one cell at a time.
    pub fn max_run(&self, available: usize) -> usize {
        match self {
            GapPenalty::Linear { .. } => available.min(1),
            GapPenalty::Affine { .. } => available,
            GapPenalty::Invalid => 0,
        }
    }
}

impl fmt::Display for GapPenalty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapPenalty::Linear { rate } => write!(f, "linear({})", rate),
            GapPenalty::Affine { open, extend } => {
                write!(f, "affine(open={}, extend={})", open, extend)
            }
            GapPenalty::Invalid => write!(f, "invalid"),
        }
    }
}
