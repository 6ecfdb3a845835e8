//! Path templates: compile `/users/:id/posts/:postId` once, then build and match concrete paths.
//!
//! # Building
//! ```
//! use path_template::{params, PathTemplate};
//!
//! let template = PathTemplate::new("/users/:id/posts/:postId");
//!
//! let path = template.build(params! { "id" => 1, "postId" => "hello world" }).unwrap();
//! assert_eq!(path, "/users/1/posts/hello%20world");
//! ```
//!
//! # Matching
//! ```
//! use path_template::PathTemplate;
//!
//! let template = PathTemplate::new("/users/:id/posts/:postId");
//!
//! let params = template.matches("/users/1/posts/hello%20world").unwrap();
//! assert_eq!(params.get("id"), Some("1"));
//! assert_eq!(params.get("postId"), Some("hello world"));
//!
//! assert!(template.matches("/users/1").is_none());
//! ```
//!
//! # Typed Templates
//! With the `macros` crate feature (enabled by default), [`typed_path!`] checks a template at
//! compile time and generates a wrapper whose `build` method takes one argument per parameter.
//!
//! ```
//! # #[cfg(feature = "macros")] {
//! path_template::typed_path!(pub UserPost = "/users/:id/posts/:postId");
//!
//! let route = UserPost::new();
//! assert_eq!(route.build(1, "intro"), "/users/1/posts/intro");
//!
//! let params = route.matches("/users/1/posts/intro").unwrap();
//! assert_eq!(params.post_id, "intro");
//! # }
//! ```
//!
//! # Crate Features
//! - `unicode` (default): match with the `regex` crate; `regex-lite` is used when disabled.
//! - `http` (default): accept [`http::Uri`] wherever a path is matched.
//! - `macros` (default): the [`typed_path!`] macro.

#![deny(rust_2018_idioms, nonstandard_style)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod de;
mod error;
mod params;
mod quoter;
mod regex;
mod resource_path;
mod source;
mod template;
mod value;

pub use self::error::{BuildError, MatchError, TemplateError};
pub use self::params::{Params, ParamsIter};
pub use self::resource_path::ResourcePath;
pub use self::source::ParamSource;
pub use self::template::PathTemplate;
pub use self::value::{ParamValue, ToParamValue};

#[cfg(feature = "macros")]
pub use path_template_macros::typed_path;

