use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
    sync::Arc,
};

use tracing::{debug, trace};

use crate::{
    quoter,
    regex::{self, escape, Regex},
    BuildError, MatchError, ParamSource, Params, ResourcePath, TemplateError, ToParamValue,
};

/// Pattern used to capture a parametric segment.
const DEFAULT_PATTERN: &str = "([^/]+)";

/// A compiled path template.
///
/// `PathTemplate`s turn a template such as `/users/:id/posts/:postId` into a reusable value that
/// can build concrete paths from parameter values and match concrete paths back into parameter
/// values. The template is parsed once, on construction; every later call reuses that work.
///
///
/// # Template Format
/// A template is a string of _segments_ separated by `/`. A segment that begins with `:` is a
/// _parameter_ and the rest of the segment is its name. Any other segment is _static_ and is
/// matched and emitted literally, including characters that would be special in a regular
/// expression.
///
/// Parameters always span a whole segment. `/files/:name.json` has a single parameter called
/// `name.json`, and `/v:version` has no parameters at all.
///
/// ## Examples
/// ```
/// # use path_template::PathTemplate;
/// let template = PathTemplate::new("/users/:id/posts/:postId");
///
/// assert_eq!(template.template(), "/users/:id/posts/:postId");
/// assert_eq!(template.param_names().collect::<Vec<_>>(), ["id", "postId"]);
/// assert_eq!(
///     template.segments().collect::<Vec<_>>(),
///     ["", "users", ":id", "posts", ":postId"],
/// );
/// ```
///
///
/// # Matching Behavior
/// A path matches when it has exactly as many segments as the template, every static segment is
/// equal to the corresponding path segment, and every parameter segment is non-empty. Matching is
/// always performed against the whole path; a template is never a prefix of a longer path.
///
/// Captured values are percent-decoded. Decoding always produces strings, whatever type was used
/// to build the path.
///
/// ## Examples
/// ```
/// # use path_template::PathTemplate;
/// let template = PathTemplate::new("/users/:id/posts/:postId");
///
/// let params = template.matches("/users/1/posts/2").unwrap();
/// assert_eq!(params, [("id", "1"), ("postId", "2")]);
///
/// assert!(template.matches("/users/1").is_none());
/// assert!(template.matches("/users/1/posts/2/comments").is_none());
/// assert!(template.matches("/people/1/posts/2").is_none());
/// assert!(template.matches("/users//posts/2").is_none());
/// ```
///
///
/// # Building Behavior
/// Static segments are emitted verbatim. Parameter values are rendered to text and
/// percent-encoded so that they always stay within their segment.
///
/// ## Examples
/// ```
/// # use path_template::{params, PathTemplate};
/// let template = PathTemplate::new("/users/:name/:page");
///
/// let path = template.build(params! { "name" => "a/b c", "page" => 3 }).unwrap();
/// assert_eq!(path, "/users/a%2Fb%20c/3");
///
/// let err = template.build(params! { "name" => "x" }).unwrap_err();
/// assert_eq!(err.to_string(), "Missing path param: page");
/// ```
///
///
/// # Trailing Slashes
/// No normalization is done on either side. A trailing slash in a template defines an empty last
/// segment, which a path must also have in order to match.
///
/// ## Examples
/// ```
/// # use path_template::PathTemplate;
/// assert!(PathTemplate::new("/root").matches("/root/").is_none());
/// assert!(PathTemplate::new("/root/").matches("/root").is_none());
/// assert!(PathTemplate::new("/root/").matches("/root/").is_some());
/// ```
#[derive(Clone, Debug)]
pub struct PathTemplate {
    /// Template string that generated the definition.
    template: String,

    /// Ordered list of segments that compose the template.
    segments: Vec<PatternSegment>,

    /// Parameter names, in placeholder order.
    names: Vec<Arc<str>>,

    /// Pattern type.
    pat_type: PatternType,
}

#[derive(Debug, Clone, PartialEq)]
enum PatternSegment {
    /// Literal segment.
    Const(String),

    /// Name of parametric segment.
    Var(Arc<str>),
}

#[derive(Debug, Clone)]
enum PatternType {
    /// Template without parameters; matched by string comparison.
    Static,

    /// Anchored regular expression with one capture group per parameter.
    Dynamic(Regex),
}

impl PathTemplate {
    /// Compiles a template.
    ///
    /// # Panics
    /// Panics if the template is malformed. See [`try_new`][Self::try_new] for the cases that are
    /// rejected.
    ///
    /// # Examples
    /// ```
    /// use path_template::PathTemplate;
    ///
    /// let template = PathTemplate::new("/user/:id");
    /// assert!(template.is_match("/user/123"));
    /// assert!(!template.is_match("/user/123/stars"));
    /// assert!(!template.is_match("user/123"));
    /// assert!(!template.is_match("/foo"));
    /// ```
    pub fn new(template: impl Into<String>) -> Self {
        match Self::try_new(template) {
            Ok(template) => template,
            Err(err) => panic!("{}", err),
        }
    }

    /// Compiles a template, reporting malformed templates as errors.
    ///
    /// A template is rejected if:
    /// - a segment is a lone `:` (the parameter has no name);
    /// - a parameter name starts with `:` (e.g. `/::id`);
    /// - the same parameter name is used by more than one segment.
    ///
    /// # Examples
    /// ```
    /// use path_template::{PathTemplate, TemplateError};
    ///
    /// assert!(PathTemplate::try_new("/users/:id").is_ok());
    ///
    /// assert!(matches!(
    ///     PathTemplate::try_new("/users/:"),
    ///     Err(TemplateError::EmptyParamName { .. })
    /// ));
    /// assert!(matches!(
    ///     PathTemplate::try_new("/users/:id/:id"),
    ///     Err(TemplateError::DuplicateParamName { .. })
    /// ));
    /// ```
    pub fn try_new(template: impl Into<String>) -> Result<Self, TemplateError> {
        let template = template.into();
        let (segments, names, pat_type) = Self::parse(&template)?;

        Ok(PathTemplate {
            template,
            segments,
            names,
            pat_type,
        })
    }

    /// Returns the template string this definition was compiled from, unchanged.
    #[inline]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns iterator over the raw `/`-separated segments of the template, in order.
    ///
    /// Parameter segments keep their leading `:`.
    pub fn segments(&self) -> std::str::Split<'_, char> {
        self.template.split('/')
    }

    /// Returns iterator over parameter names, in the order their placeholders appear.
    pub fn param_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(|name| &**name)
    }

    /// Returns the number of parameters in the template.
    #[inline]
    pub fn param_count(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the template has no parameters.
    ///
    /// # Examples
    /// ```
    /// # use path_template::PathTemplate;
    /// assert!(PathTemplate::new("/health").is_static());
    /// assert!(!PathTemplate::new("/users/:id").is_static());
    /// ```
    #[inline]
    pub fn is_static(&self) -> bool {
        matches!(self.pat_type, PatternType::Static)
    }

    /// Builds a concrete path from named parameter values.
    ///
    /// Any [`ParamSource`] can supply the values: maps, slices or arrays of `(name, value)` pairs
    /// (see [`params!`](crate::params!)), a previous match result, or `()` when the template has no
    /// parameters. Keys that the template does not use are ignored.
    ///
    /// # Errors
    /// Returns [`BuildError::MissingParameter`] naming the first parameter without a value. A
    /// present but "empty" value, such as `""`, `0`, or `false`, is not missing.
    ///
    /// # Examples
    /// ```
    /// # use std::collections::HashMap;
    /// # use path_template::PathTemplate;
    /// let template = PathTemplate::new("/users/:id");
    ///
    /// let mut map = HashMap::new();
    /// map.insert("id", 42);
    /// assert_eq!(template.build(&map).unwrap(), "/users/42");
    ///
    /// assert_eq!(template.build([("id", "")]).unwrap(), "/users/");
    ///
    /// let err = template.build(HashMap::<&str, u32>::new()).unwrap_err();
    /// assert_eq!(err.param_name(), "id");
    ///
    /// let health = PathTemplate::new("/health");
    /// assert_eq!(health.build(()).unwrap(), "/health");
    /// ```
    pub fn build<P: ParamSource>(&self, params: P) -> Result<String, BuildError> {
        self.render(|name| params.param(name))
    }

    /// Builds a concrete path from parameter values given in placeholder order.
    ///
    /// Extra values are ignored.
    ///
    /// # Errors
    /// Returns [`BuildError::MissingParameter`] naming the first parameter left without a value.
    ///
    /// # Examples
    /// ```
    /// # use path_template::PathTemplate;
    /// let template = PathTemplate::new("/user/:id/post/:title");
    ///
    /// let path = template.build_from_iter(["123", "my-post"]).unwrap();
    /// assert_eq!(path, "/user/123/post/my-post");
    ///
    /// let err = template.build_from_iter(["123"]).unwrap_err();
    /// assert_eq!(err.param_name(), "title");
    /// ```
    pub fn build_from_iter<I>(&self, values: I) -> Result<String, BuildError>
    where
        I: IntoIterator,
        I::Item: ToParamValue,
    {
        let mut values = values.into_iter();
        self.render(|_| values.next())
    }

    /// Returns `true` if `path` matches this template.
    ///
    /// This method agrees with [`matches`](Self::matches) except for paths whose parameter values
    /// fail to percent-decode, which `is_match` accepts since it does not decode anything.
    ///
    /// # Examples
    /// ```
    /// use path_template::PathTemplate;
    ///
    /// let template = PathTemplate::new("/user");
    /// assert!(template.is_match("/user"));
    /// assert!(!template.is_match("/users"));
    /// assert!(!template.is_match("/user/123"));
    ///
    /// let template = PathTemplate::new("/user/:user_id");
    /// assert!(template.is_match("/user/123"));
    /// assert!(!template.is_match("/user/"));
    /// assert!(!template.is_match("/user/123/stars"));
    /// ```
    #[inline]
    pub fn is_match<R: ResourcePath + ?Sized>(&self, path: &R) -> bool {
        let path = path.path();

        match &self.pat_type {
            PatternType::Static => path == self.template,
            PatternType::Dynamic(re) => re.is_match(path),
        }
    }

    /// Matches `path` against this template, returning the decoded parameter values.
    ///
    /// Returns `None` if the path does not match. A template without parameters returns empty
    /// [`Params`] on a successful match, never `None`.
    ///
    /// Percent-encoded sequences that are incomplete or not hexadecimal (`%`, `%2`, `%zz`) are kept
    /// as they are. A value that decodes to invalid UTF-8 makes the whole match fail; use
    /// [`try_match`](Self::try_match) to get that failure as an error instead.
    ///
    /// # Examples
    /// ```
    /// use path_template::PathTemplate;
    ///
    /// let template = PathTemplate::new("/users/:name");
    ///
    /// let params = template.matches("/users/hello%20world").unwrap();
    /// assert_eq!(params.get("name"), Some("hello world"));
    ///
    /// assert!(template.matches("/posts/1").is_none());
    /// assert!(template.matches("/users/%FF").is_none());
    ///
    /// let health = PathTemplate::new("/health");
    /// assert!(health.matches("/health").unwrap().is_empty());
    /// assert!(health.matches("/ready").is_none());
    /// ```
    pub fn matches<R: ResourcePath + ?Sized>(&self, path: &R) -> Option<Params> {
        match self.try_match(path) {
            Ok(params) => params,
            Err(err) => {
                debug!("treating undecodable path as a non-match: {}", err);
                None
            }
        }
    }

    /// Matches `path` against this template, surfacing percent-decoding failures.
    ///
    /// `Ok(None)` means the path does not match.
    ///
    /// # Errors
    /// Returns [`MatchError::Decode`] if the path matches but a captured value does not
    /// percent-decode to valid UTF-8.
    ///
    /// # Examples
    /// ```
    /// use path_template::{MatchError, PathTemplate};
    ///
    /// let template = PathTemplate::new("/files/:name");
    ///
    /// assert!(template.try_match("/other").unwrap().is_none());
    /// assert!(template.try_match("/files/a%20b").unwrap().is_some());
    ///
    /// let err = template.try_match("/files/%C3%28").unwrap_err();
    /// assert!(matches!(err, MatchError::Decode { ref name, .. } if name == "name"));
    /// ```
    pub fn try_match<R: ResourcePath + ?Sized>(
        &self,
        path: &R,
    ) -> Result<Option<Params>, MatchError> {
        let path = path.path();

        let re = match &self.pat_type {
            PatternType::Static if path == self.template => return Ok(Some(Params::new())),
            PatternType::Static => return Ok(None),
            PatternType::Dynamic(re) => re,
        };

        let values = match regex::capture_spans(re, path) {
            Some(values) => values,
            None => return Ok(None),
        };

        let mut params = Params::with_capacity(self.names.len());

        for (name, raw) in self.names.iter().zip(values) {
            let value = quoter::unquote(raw).map_err(|source| MatchError::Decode {
                name: name.to_string(),
                value: raw.to_owned(),
                source,
            })?;

            params.push(Arc::clone(name), value.into_owned());
        }

        Ok(Some(params))
    }

    /// Assembles a path using a closure that maps parameter names to values.
    fn render<F, I>(&self, mut vars: F) -> Result<String, BuildError>
    where
        F: FnMut(&str) -> Option<I>,
        I: ToParamValue,
    {
        let mut path = String::with_capacity(self.template.len());

        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                path.push('/');
            }

            match segment {
                PatternSegment::Const(lit) => path.push_str(lit),
                PatternSegment::Var(name) => {
                    let val = vars(name);

                    match val.as_ref().and_then(|val| val.to_param_value()) {
                        Some(val) => quoter::quote_into(&mut path, &val.as_text()),
                        None => {
                            return Err(BuildError::MissingParameter {
                                name: name.to_string(),
                            })
                        }
                    }
                }
            }
        }

        Ok(path)
    }

    /// Splits `template` into segments, collects parameter names, and compiles the match pattern.
    fn parse(
        template: &str,
    ) -> Result<(Vec<PatternSegment>, Vec<Arc<str>>, PatternType), TemplateError> {
        let mut segments = Vec::new();
        let mut names = Vec::<Arc<str>>::new();
        let mut re = String::from("^");

        for (idx, segment) in template.split('/').enumerate() {
            if idx > 0 {
                re.push('/');
            }

            let name = match segment.strip_prefix(':') {
                Some(name) => name,
                None => {
                    segments.push(PatternSegment::Const(segment.to_owned()));
                    re.push_str(&escape(segment));
                    continue;
                }
            };

            if name.is_empty() {
                return Err(TemplateError::EmptyParamName {
                    template: template.to_owned(),
                });
            }

            if name.starts_with(':') {
                return Err(TemplateError::MalformedParamName {
                    template: template.to_owned(),
                    name: name.to_owned(),
                });
            }

            if names.iter().any(|seen| seen.as_ref() == name) {
                return Err(TemplateError::DuplicateParamName {
                    template: template.to_owned(),
                    name: name.to_owned(),
                });
            }

            let name = Arc::<str>::from(name);
            names.push(Arc::clone(&name));
            segments.push(PatternSegment::Var(name));
            re.push_str(DEFAULT_PATTERN);
        }

        if names.is_empty() {
            trace!("path template {:?} is static", template);
            return Ok((segments, names, PatternType::Static));
        }

        re.push('$');

        let re = regex::compile(&re).map_err(|message| TemplateError::Pattern {
            template: template.to_owned(),
            message,
        })?;

        trace!(
            "path template {:?} compiled to pattern {:?}",
            template,
            re.as_str()
        );

        Ok((segments, names, PatternType::Dynamic(re)))
    }
}

impl Eq for PathTemplate {}

impl PartialEq for PathTemplate {
    fn eq(&self, other: &PathTemplate) -> bool {
        self.template == other.template
    }
}

impl Hash for PathTemplate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.template.hash(state);
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl FromStr for PathTemplate {
    type Err = TemplateError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        PathTemplate::try_new(template)
    }
}

impl TryFrom<&str> for PathTemplate {
    type Error = TemplateError;

    fn try_from(template: &str) -> Result<Self, Self::Error> {
        PathTemplate::try_new(template)
    }
}

impl TryFrom<String> for PathTemplate {
    type Error = TemplateError;

    fn try_from(template: String) -> Result<Self, Self::Error> {
        PathTemplate::try_new(template)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use static_assertions::assert_impl_all;

    use super::*;
    use crate::params;

    assert_impl_all!(PathTemplate: Send, Sync, Clone);
    assert_impl_all!(Params: Send, Sync);

    #[test]
    fn equivalence() {
        assert_eq!(PathTemplate::new("/users/:id"), PathTemplate::new("/users/:id"));
        assert_ne!(PathTemplate::new("/users/:id"), PathTemplate::new("/users/:uid"));
        assert_eq!(
            "/users/:id".parse::<PathTemplate>().unwrap(),
            PathTemplate::try_from("/users/:id".to_owned()).unwrap()
        );
        assert_eq!(PathTemplate::new("/a/:b").to_string(), "/a/:b");
    }

    #[test]
    fn parse_static() {
        let re = PathTemplate::new("");
        assert!(re.is_static());
        assert!(re.is_match(""));
        assert!(!re.is_match("/"));

        let re = PathTemplate::new("/");
        assert!(re.is_match("/"));
        assert!(!re.is_match(""));
        assert!(!re.is_match("/foo"));

        let re = PathTemplate::new("/name");
        assert!(re.is_match("/name"));
        assert!(!re.is_match("/name1"));
        assert!(!re.is_match("/name/"));
        assert!(!re.is_match("/name~"));
        assert!(!re.is_match("/na"));
        assert!(!re.is_match("name"));

        let params = re.matches("/name").unwrap();
        assert!(params.is_empty());
        assert_eq!(re.matches("/other"), None);

        let re = PathTemplate::new("/user/profile");
        assert!(re.is_match("/user/profile"));
        assert!(!re.is_match("/user/profile/profile"));
        assert_eq!(re.build(()).unwrap(), "/user/profile");
    }

    #[test]
    fn parse_param() {
        let re = PathTemplate::new("/user/:id");
        assert!(!re.is_static());
        assert_eq!(re.param_count(), 1);
        assert!(re.is_match("/user/profile"));
        assert!(re.is_match("/user/2345"));
        assert!(!re.is_match("/user/2345/"));
        assert!(!re.is_match("/user/2345/sdg"));
        assert!(!re.is_match("/user/"));

        let params = re.matches("/user/profile").unwrap();
        assert_eq!(params.get("id"), Some("profile"));

        let params = re.matches("/user/1245125").unwrap();
        assert_eq!(params.get("id"), Some("1245125"));

        let re = PathTemplate::new("/v:version/resource/:id");
        assert_eq!(re.param_names().collect::<Vec<_>>(), ["id"]);
        assert!(re.is_match("/v:version/resource/320120"));
        assert!(!re.is_match("/v1/resource/320120"));
    }

    #[test]
    fn multi_param() {
        let re = PathTemplate::new("/users/:id/posts/:postId");
        assert_eq!(re.param_names().len(), 2);

        let params = re.matches("/users/1/posts/2").unwrap();
        assert_eq!(params, [("id", "1"), ("postId", "2")]);

        assert_eq!(re.matches("/users/1"), None);
        assert_eq!(re.matches("/users/1/posts"), None);
        assert_eq!(re.matches("/users/1/posts/2/3"), None);
        assert_eq!(re.matches("/users/1/comments/2"), None);
        assert_eq!(re.matches("/prefix/users/1/posts/2"), None);
    }

    #[test]
    fn regex_chars_are_literal() {
        let re = PathTemplate::new("/a.b/(c)/:id/[d]+*?");
        assert!(re.is_match("/a.b/(c)/1/[d]+*?"));
        assert!(!re.is_match("/aXb/(c)/1/[d]+*?"));
        assert!(!re.is_match("/a.b/c/1/[d]+*?"));

        let re = PathTemplate::new("/^$|{}\\/:id");
        assert!(re.is_match("/^$|{}\\/9"));
        assert_eq!(re.build([("id", 9)]).unwrap(), "/^$|{}\\/9");
    }

    #[test]
    fn param_spans_whole_segment() {
        let re = PathTemplate::new("/files/:name.json");
        assert_eq!(re.param_names().collect::<Vec<_>>(), ["name.json"]);

        let params = re.matches("/files/report").unwrap();
        assert_eq!(params.get("name.json"), Some("report"));
    }

    #[test]
    fn malformed_templates() {
        assert_eq!(
            PathTemplate::try_new("/users/:"),
            Err(TemplateError::EmptyParamName {
                template: "/users/:".to_owned()
            })
        );
        assert_eq!(
            PathTemplate::try_new("/users/::id"),
            Err(TemplateError::MalformedParamName {
                template: "/users/::id".to_owned(),
                name: ":id".to_owned(),
            })
        );
        assert_eq!(
            PathTemplate::try_new("/:id/x/:id"),
            Err(TemplateError::DuplicateParamName {
                template: "/:id/x/:id".to_owned(),
                name: "id".to_owned(),
            })
        );
        assert!("/a/:".parse::<PathTemplate>().is_err());
    }

    #[test]
    #[should_panic = "has a parameter segment without a name"]
    fn new_panics_on_malformed() {
        PathTemplate::new("/:");
    }

    #[test]
    fn build_values() {
        let re = PathTemplate::new("/users/:id");
        assert_eq!(re.build([("id", "42")]).unwrap(), "/users/42");
        assert_eq!(re.build([("id", 42)]).unwrap(), "/users/42");
        assert_eq!(re.build([("id", -1.5)]).unwrap(), "/users/-1.5");
        assert_eq!(re.build([("id", 0)]).unwrap(), "/users/0");
        assert_eq!(re.build([("id", 1e21)]).unwrap(), "/users/1e%2B21");
        assert_eq!(re.build([("id", 1e-7)]).unwrap(), "/users/1e-7");

        let re = PathTemplate::new("/x/:flag");
        assert_eq!(re.build([("flag", true)]).unwrap(), "/x/true");
        assert_eq!(re.build([("flag", false)]).unwrap(), "/x/false");

        let re = PathTemplate::new("/users/:name");
        assert_eq!(
            re.build([("name", "hello world")]).unwrap(),
            "/users/hello%20world"
        );
        assert_eq!(re.build([("name", "")]).unwrap(), "/users/");
    }

    #[test]
    fn build_sources() {
        let re = PathTemplate::new("/users/:id/posts/:postId");

        let mut map = HashMap::new();
        map.insert("postId", "2");
        map.insert("id", "1");
        map.insert("unused", "x");
        assert_eq!(re.build(&map).unwrap(), "/users/1/posts/2");

        let mut map = BTreeMap::new();
        map.insert("id".to_owned(), 1u32);
        map.insert("postId".to_owned(), 2u32);
        assert_eq!(re.build(map).unwrap(), "/users/1/posts/2");

        let pairs = vec![("postId", "b"), ("id", "a")];
        assert_eq!(re.build(&pairs).unwrap(), "/users/a/posts/b");

        let path = re
            .build(params! { "id" => 7, "postId" => "seven" })
            .unwrap();
        assert_eq!(path, "/users/7/posts/seven");
    }

    #[test]
    fn build_missing() {
        let re = PathTemplate::new("/users/:id");

        let err = re.build(HashMap::<String, String>::new()).unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingParameter {
                name: "id".to_owned()
            }
        );
        assert_eq!(err.to_string(), "Missing path param: id");

        let err = re.build(()).unwrap_err();
        assert_eq!(err.param_name(), "id");

        let err = re.build([("id", None::<&str>)]).unwrap_err();
        assert_eq!(err.param_name(), "id");

        let re = PathTemplate::new("/users/:id/posts/:postId");
        let err = re.build([("postId", 1)]).unwrap_err();
        assert_eq!(err.param_name(), "id");
        let err = re.build([("id", 1)]).unwrap_err();
        assert_eq!(err.param_name(), "postId");
    }

    #[test]
    fn build_positional() {
        let re = PathTemplate::new("/users/:id/posts/:postId");
        assert_eq!(re.build_from_iter([1, 2]).unwrap(), "/users/1/posts/2");
        assert_eq!(re.build_from_iter([1, 2, 3]).unwrap(), "/users/1/posts/2");
        assert_eq!(
            re.build_from_iter(Vec::<u8>::new()).unwrap_err().param_name(),
            "id"
        );

        let re = PathTemplate::new("/health");
        assert_eq!(re.build_from_iter(["ignored"]).unwrap(), "/health");
    }

    #[test]
    fn decoding() {
        let re = PathTemplate::new("/users/:name");
        let params = re.matches("/users/hello%20world").unwrap();
        assert_eq!(params, [("name", "hello world")]);

        let params = re.matches("/users/a%2Fb").unwrap();
        assert_eq!(params, [("name", "a/b")]);

        let params = re.matches("/users/100%").unwrap();
        assert_eq!(params, [("name", "100%")]);

        let params = re.matches("/users/%zz").unwrap();
        assert_eq!(params, [("name", "%zz")]);

        let params = re.matches("/users/caf%C3%A9").unwrap();
        assert_eq!(params, [("name", "café")]);

        let params = re.matches("/users/café").unwrap();
        assert_eq!(params, [("name", "café")]);
    }

    #[test]
    fn decoding_failure() {
        let re = PathTemplate::new("/users/:name");

        assert!(re.is_match("/users/%FF"));
        assert_eq!(re.matches("/users/%FF"), None);

        match re.try_match("/users/%FF") {
            Err(MatchError::Decode { name, value, .. }) => {
                assert_eq!(name, "name");
                assert_eq!(value, "%FF");
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert_eq!(re.try_match("/posts/%FF"), Ok(None));
    }

    #[test]
    fn round_trip() {
        let re = PathTemplate::new("/a/:x/b/:y/:z");
        let values = params! {
            "x" => "with space",
            "y" => "slash/and?query#frag",
            "z" => 12.5,
        };

        let path = re.build(values).unwrap();
        let params = re.matches(&path).unwrap();
        assert_eq!(
            params,
            [("x", "with space"), ("y", "slash/and?query#frag"), ("z", "12.5")]
        );

        // a match result can be used to rebuild the same path
        assert_eq!(re.build(&params).unwrap(), path);
    }

    #[test]
    fn resource_paths() {
        let re = PathTemplate::new("/users/:id");

        let owned = String::from("/users/1");
        assert!(re.matches(&owned).is_some());

        let bytes = bytestring::ByteString::from_static("/users/2");
        assert_eq!(re.matches(&bytes).unwrap(), [("id", "2")]);
    }

    #[cfg(feature = "http")]
    #[test]
    fn uri_paths() {
        let re = PathTemplate::new("/users/:id");

        let uri: http::Uri = "http://localhost/users/3?x=y".parse().unwrap();
        assert_eq!(re.matches(&uri).unwrap(), [("id", "3")]);
    }

    #[test]
    fn accessors() {
        let re = PathTemplate::new("/users/:id/posts/:postId");
        assert_eq!(re.template(), "/users/:id/posts/:postId");
        assert_eq!(
            re.segments().collect::<Vec<_>>(),
            ["", "users", ":id", "posts", ":postId"]
        );
        assert_eq!(re.param_names().collect::<Vec<_>>(), ["id", "postId"]);
    }

    #[test]
    fn shared_across_threads() {
        let re = Arc::new(PathTemplate::new("/jobs/:id"));

        let handles = (0..4)
            .map(|i| {
                let re = Arc::clone(&re);
                std::thread::spawn(move || {
                    let path = re.build([("id", i)]).unwrap();
                    re.matches(&path).unwrap()
                })
            })
            .collect::<Vec<_>>();

        for (i, handle) in handles.into_iter().enumerate() {
            let params = handle.join().unwrap();
            assert_eq!(params.get("id"), Some(i.to_string().as_str()));
        }
    }
}
