//! Macros for the `path-template` crate.
//!
//! Use them through the re-export in `path-template` rather than depending on this crate directly.

#![deny(rust_2018_idioms, nonstandard_style)]

mod typed_path;

use proc_macro::TokenStream;

/// Declares a typed wrapper around a path template that is checked at compile time.
///
/// Syntax: `typed_path!([attributes] [visibility] Name = "template");`
///
/// The template follows the same rules as `PathTemplate::try_new`; malformed templates are compile
/// errors. Each parameter name must also turn into a valid Rust identifier once converted to
/// snake_case (`postId` becomes `post_id`).
///
/// # Generated Items
/// - `struct Name` holding the compiled template, with:
///   - `Name::TEMPLATE`: the template string;
///   - `Name::PARAM_NAMES`: parameter names in placeholder order;
///   - `new()`, a `Default` impl, and `template()` returning the inner `PathTemplate`;
///   - `build(&self, ..)` with one argument per parameter, in placeholder order, returning the
///     path as a `String`;
///   - `matches(&self, path)` returning `Option<NameParams>`.
/// - `struct NameParams` with one public `String` field per parameter.
///
/// # Examples
/// ```
/// # use path_template::typed_path;
/// typed_path!(pub UserPost = "/users/:id/posts/:postId");
///
/// let route = UserPost::new();
/// assert_eq!(UserPost::PARAM_NAMES, ["id", "postId"]);
/// assert_eq!(route.build(7, "hello world"), "/users/7/posts/hello%20world");
///
/// let params = route.matches("/users/7/posts/hello%20world").unwrap();
/// assert_eq!(params.id, "7");
/// assert_eq!(params.post_id, "hello world");
///
/// typed_path!(Health = "/health");
/// assert_eq!(Health::new().build(), "/health");
/// ```
#[proc_macro]
pub fn typed_path(input: TokenStream) -> TokenStream {
    typed_path::expand(input)
}
