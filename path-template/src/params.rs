use std::{collections::HashMap, ops::Index, sync::Arc};

use serde::{de, Deserialize};

use crate::de::ParamsDeserializer;

/// Parameters extracted from a path that matched a template.
///
/// Values are percent-decoded strings, stored in the order their placeholders appear in the
/// template. A successful match against a template without parameters yields an empty `Params`,
/// which is distinct from the `None` returned for a non-matching path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    /// Name->value pairs, in placeholder order.
    items: Vec<(Arc<str>, String)>,
}

impl Params {
    /// Constructs an empty set of parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Params {
            items: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: Arc<str>, value: String) {
        self.items.push((name, value));
    }

    /// Returns `true` if no parameters were extracted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns number of extracted parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Get matched parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(item_name, _)| item_name.as_ref() == name)
            .map(|(_, val)| val.as_str())
    }

    /// Returns `true` if a parameter with this name was extracted.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns iterator over name/value pairs, in placeholder order.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter {
            inner: self.items.iter(),
        }
    }

    /// Returns iterator over parameter names, in placeholder order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.items.iter().map(|(name, _)| name.as_ref())
    }

    /// Deserializes the parameters into a type `T`.
    ///
    /// Structs and maps are filled by parameter name, tuples and sequences by position. A scalar can
    /// be loaded directly when exactly one parameter was extracted.
    ///
    /// # Errors
    /// Returns error when parameter values cannot be deserialized into a `T` type.
    ///
    /// # Examples
    /// ```
    /// # use path_template::PathTemplate;
    /// #[derive(serde::Deserialize)]
    /// struct Post {
    ///     id: u32,
    ///     slug: String,
    /// }
    ///
    /// let template = PathTemplate::new("/posts/:id/:slug");
    /// let params = template.matches("/posts/17/hello%20there").unwrap();
    ///
    /// let post: Post = params.load().unwrap();
    /// assert_eq!(post.id, 17);
    /// assert_eq!(post.slug, "hello there");
    /// ```
    pub fn load<'de, T: Deserialize<'de>>(&'de self) -> Result<T, de::value::Error> {
        T::deserialize(ParamsDeserializer::new(self))
    }
}

#[derive(Debug, Clone)]
pub struct ParamsIter<'a> {
    inner: std::slice::Iter<'a, (Arc<str>, String)>,
}

impl<'a> Iterator for ParamsIter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, val)| (name.as_ref(), val.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_> {}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = ParamsIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::iter::Map<
        std::vec::IntoIter<(Arc<str>, String)>,
        fn((Arc<str>, String)) -> (String, String),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn detach((name, val): (Arc<str>, String)) -> (String, String) {
            (name.as_ref().to_owned(), val)
        }

        self.items.into_iter().map(detach as fn(_) -> _)
    }
}

impl<'a> Index<&'a str> for Params {
    type Output = str;

    fn index(&self, name: &'a str) -> &str {
        self.get(name)
            .expect("Value for parameter is not available")
    }
}

impl Index<usize> for Params {
    type Output = str;

    fn index(&self, idx: usize) -> &str {
        &self.items[idx].1
    }
}

impl From<Params> for HashMap<String, String> {
    fn from(params: Params) -> Self {
        params.into_iter().collect()
    }
}

impl<K, V, const N: usize> PartialEq<[(K, V); N]> for Params
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn eq(&self, other: &[(K, V); N]) -> bool {
        self.len() == N
            && self
                .iter()
                .zip(other)
                .all(|((name, val), (k, v))| name == k.as_ref() && val == v.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Params {
        let mut params = Params::with_capacity(2);
        params.push(Arc::from("id"), "1".to_owned());
        params.push(Arc::from("postId"), "two words".to_owned());
        params
    }

    #[test]
    fn lookup() {
        let params = sample();
        assert_eq!(params.len(), 2);
        assert!(!params.is_empty());
        assert_eq!(params.get("id"), Some("1"));
        assert_eq!(params.get("postId"), Some("two words"));
        assert_eq!(params.get("missing"), None);
        assert!(params.contains("id"));
        assert_eq!(&params["postId"], "two words");
        assert_eq!(&params[0], "1");
    }

    #[test]
    #[should_panic = "Value for parameter is not available"]
    fn index_missing() {
        let _ = &sample()["nope"];
    }

    #[test]
    fn ordered_iteration() {
        let params = sample();
        let pairs = params.iter().collect::<Vec<_>>();
        assert_eq!(pairs, [("id", "1"), ("postId", "two words")]);
        assert_eq!(params.names().collect::<Vec<_>>(), ["id", "postId"]);
        assert_eq!(params.iter().len(), 2);
    }

    #[test]
    fn conversions() {
        let map: HashMap<String, String> = sample().into();
        assert_eq!(map["postId"], "two words");

        let owned = sample().into_iter().collect::<Vec<_>>();
        assert_eq!(owned[0], ("id".to_owned(), "1".to_owned()));
    }

    #[test]
    fn compare_with_pairs() {
        assert_eq!(sample(), [("id", "1"), ("postId", "two words")]);
        assert_ne!(sample(), [("postId", "two words"), ("id", "1")]);
        assert_ne!(sample(), [("id", "1")]);
        assert_eq!(Params::new(), [] as [(&str, &str); 0]);
    }
}
