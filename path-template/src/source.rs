use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::{ParamValue, Params, ToParamValue};

/// A named collection of values that a template can be built from.
///
/// Implemented for maps keyed by strings, for lists of `(name, value)` pairs, for match results,
/// and for `()` which supplies nothing and is used to build templates without parameters.
///
/// Lookups that return `None` are reported as missing parameters. Keys the template does not ask
/// for are never looked at.
pub trait ParamSource {
    fn param(&self, name: &str) -> Option<ParamValue<'_>>;
}

impl ParamSource for () {
    fn param(&self, _: &str) -> Option<ParamValue<'_>> {
        None
    }
}

impl<T: ParamSource + ?Sized> ParamSource for &T {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        (**self).param(name)
    }
}

impl<K, V, S> ParamSource for HashMap<K, V, S>
where
    K: Borrow<str> + Eq + Hash,
    V: ToParamValue,
    S: BuildHasher,
{
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        self.get(name)?.to_param_value()
    }
}

impl<K, V> ParamSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: ToParamValue,
{
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        self.get(name)?.to_param_value()
    }
}

/// The first pair with a matching name wins.
impl<K, V> ParamSource for [(K, V)]
where
    K: AsRef<str>,
    V: ToParamValue,
{
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)?
            .1
            .to_param_value()
    }
}

impl<K, V, const N: usize> ParamSource for [(K, V); N]
where
    K: AsRef<str>,
    V: ToParamValue,
{
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        self.as_slice().param(name)
    }
}

impl<K, V> ParamSource for Vec<(K, V)>
where
    K: AsRef<str>,
    V: ToParamValue,
{
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        self.as_slice().param(name)
    }
}

impl ParamSource for Params {
    fn param(&self, name: &str) -> Option<ParamValue<'_>> {
        self.get(name).map(ParamValue::from)
    }
}

/// Creates an array of `(name, ParamValue)` pairs that can be passed to
/// [`PathTemplate::build`](crate::PathTemplate::build).
///
/// Values of different types can be mixed since each one is converted with `ParamValue::from`.
///
/// # Examples
/// ```
/// use path_template::{params, PathTemplate};
///
/// let template = PathTemplate::new("/users/:id/posts/:slug");
/// let path = template.build(params! { "id" => 42, "slug" => "hello world" }).unwrap();
/// assert_eq!(path, "/users/42/posts/hello%20world");
/// ```
#[macro_export]
macro_rules! params {
    () => {
        [] as [(&str, $crate::ParamValue<'static>); 0]
    };

    ($($name:expr => $value:expr),+ $(,)?) => {
        [$(($name, $crate::ParamValue::from($value))),+]
    };
}
