use std::{borrow::Cow, fmt};

/// A scalar that can be substituted for a template parameter.
///
/// Values are rendered to text before they are percent-encoded into the path. Building and
/// matching are not strict inverses: a matched value always comes back as a string.
///
/// # Examples
/// ```
/// # use path_template::ParamValue;
/// assert_eq!(ParamValue::from("abc").to_string(), "abc");
/// assert_eq!(ParamValue::from(42).to_string(), "42");
/// assert_eq!(ParamValue::from(1.5).to_string(), "1.5");
/// assert_eq!(ParamValue::from(2.0).to_string(), "2");
/// assert_eq!(ParamValue::from(false).to_string(), "false");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue<'a> {
    Str(Cow<'a, str>),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl ParamValue<'_> {
    /// Returns the textual form of the value, borrowing when it is already a string.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Str(val) => Cow::Borrowed(val.as_ref()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Detaches the value from any borrowed data.
    pub fn into_owned(self) -> ParamValue<'static> {
        match self {
            ParamValue::Str(val) => ParamValue::Str(Cow::Owned(val.into_owned())),
            ParamValue::Int(val) => ParamValue::Int(val),
            ParamValue::UInt(val) => ParamValue::UInt(val),
            ParamValue::Float(val) => ParamValue::Float(val),
            ParamValue::Bool(val) => ParamValue::Bool(val),
        }
    }
}

impl fmt::Display for ParamValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(val) => f.write_str(val),
            ParamValue::Int(val) => write!(f, "{}", val),
            ParamValue::UInt(val) => write!(f, "{}", val),
            ParamValue::Float(val) => fmt_float(*val, f),
            ParamValue::Bool(val) => write!(f, "{}", val),
        }
    }
}

/// Writes floats the way a JavaScript number prints.
///
/// Magnitudes in `[1e-6, 1e21)` use plain decimal notation and everything else uses exponent
/// notation with an explicit sign (`1e+21`, `1.5e-7`). Both forms use the shortest digits that
/// round-trip.
fn fmt_float(val: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if val.is_nan() {
        return f.write_str("NaN");
    }

    if val.is_infinite() {
        return f.write_str(if val > 0.0 { "Infinity" } else { "-Infinity" });
    }

    // covers -0.0
    if val == 0.0 {
        return f.write_str("0");
    }

    let abs = val.abs();

    if (1e-6..1e21).contains(&abs) {
        return write!(f, "{}", val);
    }

    let exp = format!("{:e}", val);

    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => write!(f, "{}e+{}", mantissa, power),
        _ => f.write_str(&exp),
    }
}

impl<'a> From<&'a str> for ParamValue<'a> {
    fn from(val: &'a str) -> Self {
        ParamValue::Str(Cow::Borrowed(val))
    }
}

impl<'a> From<&'a String> for ParamValue<'a> {
    fn from(val: &'a String) -> Self {
        ParamValue::Str(Cow::Borrowed(val.as_str()))
    }
}

impl From<String> for ParamValue<'_> {
    fn from(val: String) -> Self {
        ParamValue::Str(Cow::Owned(val))
    }
}

impl<'a> From<Cow<'a, str>> for ParamValue<'a> {
    fn from(val: Cow<'a, str>) -> Self {
        ParamValue::Str(val)
    }
}

impl From<char> for ParamValue<'_> {
    fn from(val: char) -> Self {
        ParamValue::Str(Cow::Owned(val.to_string()))
    }
}

impl From<bool> for ParamValue<'_> {
    fn from(val: bool) -> Self {
        ParamValue::Bool(val)
    }
}

impl From<f32> for ParamValue<'_> {
    fn from(val: f32) -> Self {
        ParamValue::Float(f64::from(val))
    }
}

impl From<f64> for ParamValue<'_> {
    fn from(val: f64) -> Self {
        ParamValue::Float(val)
    }
}

macro_rules! param_value_from_int {
    ($variant:ident, $wide:ty, $($tp:ty)+) => {
        $(
            impl From<$tp> for ParamValue<'_> {
                fn from(val: $tp) -> Self {
                    ParamValue::$variant(val as $wide)
                }
            }

            impl ToParamValue for $tp {
                fn to_param_value(&self) -> Option<ParamValue<'_>> {
                    Some(ParamValue::from(*self))
                }
            }
        )+
    };
}

param_value_from_int!(Int, i64, i8 i16 i32 i64 isize);
param_value_from_int!(UInt, u64, u8 u16 u32 u64 usize);

/// Types that can supply a template parameter value.
///
/// Returning `None` means "no value": the parameter is reported missing, exactly as if its key were
/// absent. Present but falsy values (`""`, `0`, `false`) are never missing.
pub trait ToParamValue {
    fn to_param_value(&self) -> Option<ParamValue<'_>>;
}

impl ToParamValue for str {
    fn to_param_value(&self) -> Option<ParamValue<'_>> {
        Some(ParamValue::from(self))
    }
}

impl ToParamValue for String {
    fn to_param_value(&self) -> Option<ParamValue<'_>> {
        Some(ParamValue::from(self.as_str()))
    }
}

impl ToParamValue for Cow<'_, str> {
    fn to_param_value(&self) -> Option<ParamValue<'_>> {
        Some(ParamValue::from(self.as_ref()))
    }
}

impl ToParamValue for char {
    fn to_param_value(&self) -> Option<ParamValue<'_>> {
        Some(ParamValue::from(*self))
    }
}

impl ToParamValue for bool {
    fn to_param_value(&self) -> Option<ParamValue<'_>> {
        Some(ParamValue::Bool(*self))
    }
}

impl ToParamValue for f32 {
    fn to_param_value(&self) -> Option<ParamValue<'_>> {
        Some(ParamValue::from(*self))
    }
}

impl ToParamValue for f64 {
    fn to_param_value(&self) -> Option<ParamValue<'_>> {
        Some(ParamValue::Float(*self))
    }
}

impl ToParamValue for ParamValue<'_> {
    fn to_param_value(&self) -> Option<ParamValue<'_>> {
        Some(match self {
            ParamValue::Str(val) => ParamValue::Str(Cow::Borrowed(val.as_ref())),
            ParamValue::Int(val) => ParamValue::Int(*val),
            ParamValue::UInt(val) => ParamValue::UInt(*val),
            ParamValue::Float(val) => ParamValue::Float(*val),
            ParamValue::Bool(val) => ParamValue::Bool(*val),
        })
    }
}

impl<T: ToParamValue> ToParamValue for Option<T> {
    fn to_param_value(&self) -> Option<ParamValue<'_>> {
        self.as_ref().and_then(ToParamValue::to_param_value)
    }
}

impl<T: ToParamValue + ?Sized> ToParamValue for &T {
    fn to_param_value(&self) -> Option<ParamValue<'_>> {
        (**self).to_param_value()
    }
}
