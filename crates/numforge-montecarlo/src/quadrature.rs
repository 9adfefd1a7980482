//! Adaptive Gauss–Kronrod quadrature.
//!
//! Each panel is evaluated with the 15-point Kronrod rule and its embedded
//! 7-point Gauss rule; the difference between the two is the panel error
//! estimate. Panels whose estimate exceeds the tolerance are bisected,
//! worst first, until the total error is acceptable or the subdivision
//! limit is reached.

use thiserror::Error;

use crate::interval::Interval;

/// Kronrod abscissae on `[-1, 1]`, descending, last is the center.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

/// Kronrod weights matching [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

/// Gauss weights for the odd-indexed abscissae of [`XGK`]; last is the center.
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Quadrature failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("integration bounds must be finite, got {0}")]
    NonFiniteBound(Interval),

    #[error("integrand is not finite at x = {0}")]
    NonFiniteValue(f64),

    #[error("quadrature sum is not finite (value {value}, error estimate {error})")]
    NonFiniteSum { value: f64, error: f64 },

    #[error("tolerance not reached after {subdivisions} subdivisions (error estimate {error:e})")]
    SubdivisionLimit { subdivisions: usize, error: f64 },
}

/// Tolerances and limits for [`integrate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureOptions {
    pub abs_tolerance: f64,
    pub rel_tolerance: f64,
    pub max_subdivisions: usize,
}

impl Default for QuadratureOptions {
    fn default() -> Self {
        Self {
            abs_tolerance: 1.49e-8,
            rel_tolerance: 1.49e-8,
            max_subdivisions: 50,
        }
    }
}

/// Integral value with its error estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrature {
    pub value: f64,
    pub error: f64,
    /// Number of panels in the final partition.
    pub panels: usize,
}

#[derive(Debug, Clone, Copy)]
struct Panel {
    low: f64,
    high: f64,
    value: f64,
    error: f64,
}

fn kronrod_panel<F>(f: &F, low: f64, high: f64) -> Result<Panel, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let eval = |x: f64| {
        let y = f(x);
        if y.is_finite() {
            Ok(y)
        } else {
            Err(QuadratureError::NonFiniteValue(x))
        }
    };

    let center = 0.5 * (low + high);
    let half = 0.5 * (high - low);

    let fc = eval(center)?;
    let mut kronrod = fc * WGK[7];
    let mut gauss = fc * WG[3];

    for (j, (&x, &w)) in XGK.iter().zip(&WGK).take(7).enumerate() {
        let dx = half * x;
        let pair = eval(center - dx)? + eval(center + dx)?;
        kronrod += w * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    Ok(Panel {
        low,
        high,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    })
}

/// Integrates `f` from `a` to `b`.
///
/// Reversed bounds return the negated integral over `[b, a]`.
///
/// # Example
///
/// ```
/// use numforge_montecarlo::quadrature::{integrate, QuadratureOptions};
///
/// let q = integrate(|x| x * x, 0.0, 2.0, &QuadratureOptions::default()).unwrap();
/// assert!((q.value - 8.0 / 3.0).abs() < 1e-14);
/// ```
pub fn integrate<F>(
    f: F,
    a: f64,
    b: f64,
    options: &QuadratureOptions,
) -> Result<Quadrature, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let interval = Interval::new(a, b);
    if !interval.is_finite() {
        return Err(QuadratureError::NonFiniteBound(interval));
    }
    if interval.is_degenerate() {
        return Ok(Quadrature {
            value: 0.0,
            error: 0.0,
            panels: 0,
        });
    }

    let (low, high) = interval.sampling_bounds();
    let sign = if interval.is_reversed() { -1.0 } else { 1.0 };

    let mut panels = vec![kronrod_panel(&f, low, high)?];
    let mut subdivisions = 0;

    loop {
        let value: f64 = panels.iter().map(|p| p.value).sum();
        let error: f64 = panels.iter().map(|p| p.error).sum();
        if !value.is_finite() || !error.is_finite() {
            return Err(QuadratureError::NonFiniteSum { value, error });
        }
        let tolerance = options.abs_tolerance.max(options.rel_tolerance * value.abs());

        if error <= tolerance {
            return Ok(Quadrature {
                value: sign * value,
                error,
                panels: panels.len(),
            });
        }
        if subdivisions >= options.max_subdivisions {
            return Err(QuadratureError::SubdivisionLimit {
                subdivisions,
                error,
            });
        }

        let worst = panels
            .iter()
            .enumerate()
            .max_by(|(_, x), (_, y)| x.error.total_cmp(&y.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let panel = panels.swap_remove(worst);
        let mid = 0.5 * (panel.low + panel.high);
        panels.push(kronrod_panel(&f, panel.low, mid)?);
        panels.push(kronrod_panel(&f, mid, panel.high)?);
        subdivisions += 1;
    }
}
