/// ## Arithmetic and text primitives
///
/// Results follow IEEE-754: dividing by zero gives an infinity and the
/// log of a negative number gives NaN. Such a value can sit in `ACC`
/// but any later numeric read of it fails.

pub struct Operation {}

impl Operation {
    pub fn add(lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }

    pub fn subtract(lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }

    pub fn multiply(lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }

    pub fn divide(lhs: f64, rhs: f64) -> f64 {
        lhs / rhs
    }

    /// Remainder with the sign of the dividend.
    pub fn modulus(lhs: f64, rhs: f64) -> f64 {
        lhs % rhs
    }

    pub fn power(lhs: f64, rhs: f64) -> f64 {
        lhs.powf(rhs)
    }

    pub fn min(lhs: f64, rhs: f64) -> f64 {
        lhs.min(rhs)
    }

    pub fn max(lhs: f64, rhs: f64) -> f64 {
        lhs.max(rhs)
    }

    pub fn log(val: f64) -> f64 {
        val.ln()
    }

    pub fn floor(val: f64) -> f64 {
        val.floor()
    }

    pub fn ceil(val: f64) -> f64 {
        val.ceil()
    }

    pub fn length(s: &str) -> f64 {
        s.chars().count() as f64
    }

    /// Characters from `start` up to but excluding `end`. Indexes are
    /// truncated toward zero, negative ones count back from the end,
    /// and both are clamped to the text.
    pub fn slice(s: &str, start: f64, end: f64) -> String {
        let len = s.chars().count();
        let clamp = |index: f64| -> usize {
            let index = index.trunc();
            if index < 0.0 {
                (len as f64 + index).max(0.0) as usize
            } else {
                index.min(len as f64) as usize
            }
        };
        let (from, to) = (clamp(start), clamp(end));
        if from >= to {
            return String::new();
        }
        s.chars().skip(from).take(to - from).collect()
    }
}
