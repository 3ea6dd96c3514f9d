use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Cell value
///
/// Registers, memory cells and the value stack hold either a number or
/// text. Numeric instructions coerce text with the same prefix rules as
/// a decimal float parser: leading whitespace is ignored and trailing
/// garbage after a valid number is dropped. A coercion that does not
/// produce a finite number fails with `NOT A NUMBER`.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    Text(String),
}

impl Default for Val {
    fn default() -> Self {
        Val::Number(0.0)
    }
}

impl Val {
    pub fn to_number(&self) -> Result<f64> {
        match self.as_number() {
            Some(n) => Ok(n),
            None => Err(error!(NotANumber; &format!("{:?}", self.to_string()))),
        }
    }

    /// The `TNUM` predicate.
    pub fn is_number(&self) -> bool {
        self.as_number().is_some()
    }

    fn as_number(&self) -> Option<f64> {
        let n = match self {
            Val::Number(n) => *n,
            Val::Text(s) => parse_float(s)?,
        };
        if n.is_finite() {
            Some(n)
        } else {
            None
        }
    }

    /// Memory addresses are non-negative integers, either as a number
    /// without a fraction or as text holding exactly an integer.
    pub fn to_address(&self) -> Result<usize> {
        let address = match self {
            Val::Number(n) if n.is_finite() && n.fract() == 0.0 && *n >= 0.0 => {
                Some(*n as usize)
            }
            Val::Number(_) => None,
            Val::Text(s) => s.trim().parse::<usize>().ok(),
        };
        match address {
            Some(address) => Ok(address),
            None => Err(error!(IntegerExpected; &format!("{} IS NOT AN INTEGER", self))),
        }
    }
}

/// Longest decimal prefix of `s` after leading whitespace.
fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut len = 0;
    if let Some(b'+') | Some(b'-') = bytes.first() {
        len += 1;
    }
    if s[len..].starts_with("Infinity") {
        return s[..len + 8].parse::<f64>().ok();
    }
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();
    let mut mantissa = digits(len);
    len += mantissa;
    if bytes.get(len) == Some(&b'.') {
        let fraction = digits(len + 1);
        if mantissa > 0 || fraction > 0 {
            len += 1 + fraction;
        }
        mantissa += fraction;
    }
    if mantissa == 0 {
        return None;
    }
    if let Some(b'e') | Some(b'E') = bytes.get(len) {
        let mut exp = len + 1;
        if let Some(b'+') | Some(b'-') = bytes.get(exp) {
            exp += 1;
        }
        let exp_digits = digits(exp);
        if exp_digits > 0 {
            len = exp + exp_digits;
        }
    }
    s[..len].parse::<f64>().ok()
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Text(s) => write!(f, "{}", s),
            Val::Number(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
                } else if *n == 0.0 {
                    write!(f, "0")
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

impl From<f64> for Val {
    fn from(n: f64) -> Self {
        Val::Number(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::Text(s.to_string())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Self {
        Val::Text(s)
    }
}
