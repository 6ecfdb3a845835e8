/// Abstraction over types that carry a path that can be matched against a template.
///
/// This lets [`PathTemplate::matches`](crate::PathTemplate::matches) accept string types and, with
/// the `http` crate feature, an [`http::Uri`] whose path component is used.
pub trait ResourcePath {
    fn path(&self) -> &str;
}

impl ResourcePath for str {
    fn path(&self) -> &str {
        self
    }
}

impl ResourcePath for String {
    fn path(&self) -> &str {
        self.as_str()
    }
}

impl<T: ResourcePath + ?Sized> ResourcePath for &T {
    fn path(&self) -> &str {
        (**self).path()
    }
}

impl ResourcePath for bytestring::ByteString {
    fn path(&self) -> &str {
        self
    }
}

#[cfg(feature = "http")]
impl ResourcePath for http::Uri {
    fn path(&self) -> &str {
        self.path()
    }
}
