//! Functions available to the `OPERATE` keyword.

use std::fmt;

/// A per-cell function of the target value `t`, the source value `s` and
/// the record parameters `alpha` and `beta`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperateFn {
    /// `alpha * s + beta`
    Multa,
    /// `t + alpha * s^beta`
    Poly,
    /// `10^(alpha + beta * s)`
    Slog,
    /// `alpha * log10(s)`
    Log10,
    /// `alpha * ln(s)`
    Loge,
    /// `alpha / s`
    Inv,
    /// `alpha * s`
    Multx,
    /// `s + alpha`
    Addx,
    /// `t * s`
    Multiply,
    /// `s`
    Copy,
    /// `min(alpha, s)`
    MaxLim,
    /// `max(alpha, s)`
    MinLim,
    /// `alpha * s^beta`
    Multp,
    /// `|s|`
    Abs,
}

const TABLE: &[(&str, OperateFn)] = &[
    ("MULTA", OperateFn::Multa),
    ("POLY", OperateFn::Poly),
    ("SLOG", OperateFn::Slog),
    ("LOG10", OperateFn::Log10),
    ("LOGE", OperateFn::Loge),
    ("INV", OperateFn::Inv),
    ("MULTX", OperateFn::Multx),
    ("ADDX", OperateFn::Addx),
    ("MULTIPLY", OperateFn::Multiply),
    ("COPY", OperateFn::Copy),
    ("MAXLIM", OperateFn::MaxLim),
    ("MINLIM", OperateFn::MinLim),
    ("MULTP", OperateFn::Multp),
    ("ABS", OperateFn::Abs),
];

impl OperateFn {
    /// Look up a function by its deck name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        TABLE
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, f)| f)
    }

    /// The deck name.
    pub fn name(self) -> &'static str {
        TABLE
            .iter()
            .find(|&&(_, f)| f == self)
            .map_or("?", |&(n, _)| n)
    }

    /// Evaluate for one cell.
    pub fn eval(self, t: f64, s: f64, alpha: f64, beta: f64) -> f64 {
        match self {
            Self::Multa => alpha * s + beta,
            Self::Poly => t + alpha * s.powf(beta),
            Self::Slog => 10f64.powf(alpha + beta * s),
            Self::Log10 => alpha * s.log10(),
            Self::Loge => alpha * s.ln(),
            Self::Inv => alpha / s,
            Self::Multx => alpha * s,
            Self::Addx => s + alpha,
            Self::Multiply => t * s,
            Self::Copy => s,
            Self::MaxLim => {
                if s > alpha {
                    alpha
                } else {
                    s
                }
            }
            Self::MinLim => {
                if s < alpha {
                    alpha
                } else {
                    s
                }
            }
            Self::Multp => alpha * s.powf(beta),
            Self::Abs => s.abs(),
        }
    }
}

impl fmt::Display for OperateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
