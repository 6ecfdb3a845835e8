use std::collections::HashSet;

use convert_case::{Case, Casing as _};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute, Ident, LitStr, Token, Visibility,
};

pub(crate) fn expand(input: TokenStream) -> TokenStream {
    match syn::parse::<TypedPath>(input) {
        Ok(typed) => typed.into_token_stream().into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Parsed `typed_path!` invocation.
#[derive(Debug)]
struct TypedPath {
    attrs: Vec<Attribute>,
    vis: Visibility,
    name: Ident,
    template: LitStr,
    params: Vec<Param>,
}

/// A template parameter and the identifier it is exposed as.
#[derive(Debug)]
struct Param {
    name: String,
    ident: Ident,
}

impl Parse for TypedPath {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse::<Visibility>()?;
        let name = input.parse::<Ident>()?;
        input.parse::<Token![=]>()?;

        let template = input.parse::<LitStr>().map_err(|err| {
            syn::Error::new(
                err.span(),
                "expected a string literal, e.g. `typed_path!(UserPath = \"/users/:id\")`",
            )
        })?;

        if !input.is_empty() {
            input.parse::<Token![;]>()?;
        }

        let value = template.value();
        let names =
            param_names(&value).map_err(|message| syn::Error::new(template.span(), message))?;

        let mut seen = HashSet::new();
        let mut params = Vec::with_capacity(names.len());

        for name in names {
            let ident = param_ident(name, &template)?;

            if !seen.insert(ident.to_string()) {
                return Err(syn::Error::new(
                    template.span(),
                    format!(
                        "parameter {:?} clashes with another parameter once converted to `{}`",
                        name, ident
                    ),
                ));
            }

            params.push(Param {
                name: name.to_owned(),
                ident,
            });
        }

        Ok(TypedPath {
            attrs,
            vis,
            name,
            template,
            params,
        })
    }
}

/// Collects parameter names in placeholder order.
///
/// Applies the same rules the runtime compiler does so that every template accepted here also
/// compiles at runtime.
fn param_names(template: &str) -> Result<Vec<&str>, String> {
    let mut names = Vec::<&str>::new();

    for segment in template.split('/') {
        let Some(name) = segment.strip_prefix(':') else {
            continue;
        };

        if name.is_empty() {
            return Err(format!(
                "template {:?} has a parameter segment without a name",
                template
            ));
        }

        if name.starts_with(':') {
            return Err(format!(
                "template {:?} has malformed parameter name {:?}",
                template, name
            ));
        }

        if names.contains(&name) {
            return Err(format!(
                "template {:?} uses parameter name {:?} more than once",
                template, name
            ));
        }

        names.push(name);
    }

    Ok(names)
}

/// Converts a parameter name into the snake_case identifier used for arguments and fields.
fn param_ident(name: &str, template: &LitStr) -> syn::Result<Ident> {
    let snake = name.to_case(Case::Snake);

    // keywords and anything that is not an identifier are rejected here
    syn::parse_str::<Ident>(&snake).map_err(|_| {
        syn::Error::new(
            template.span(),
            format!(
                "parameter {:?} does not form a valid Rust identifier (tried `{}`)",
                name, snake
            ),
        )
    })?;

    Ok(Ident::new(&snake, template.span()))
}

impl ToTokens for TypedPath {
    fn to_tokens(&self, output: &mut TokenStream2) {
        let Self {
            attrs,
            vis,
            name,
            template,
            params,
        } = self;

        let params_name = format_ident!("{}Params", name);
        let params_doc = format!("Parameters extracted by [`{}::matches`].", name);

        let names = params.iter().map(|param| param.name.as_str());
        let idents = params.iter().map(|param| &param.ident).collect::<Vec<_>>();
        let params_len = params.len();

        let build = if params.is_empty() {
            quote! {
                /// Returns the path, which is the template itself.
                pub fn build(&self) -> ::std::string::String {
                    ::std::string::String::from(Self::TEMPLATE)
                }
            }
        } else {
            quote! {
                /// Builds a path from one value per parameter, in placeholder order.
                pub fn build<'__v>(
                    &self,
                    #(#idents: impl ::core::convert::Into<::path_template::ParamValue<'__v>>),*
                ) -> ::std::string::String {
                    let __values: [::path_template::ParamValue<'__v>; #params_len] =
                        [#(::core::convert::Into::into(#idents)),*];

                    self.inner
                        .build_from_iter(__values)
                        .unwrap_or_else(|__err| ::core::unreachable!("{}", __err))
                }
            }
        };

        let matches = if params.is_empty() {
            quote! {
                /// Returns `Some` if `path` is exactly the template.
                pub fn matches<__R>(&self, path: &__R) -> ::core::option::Option<#params_name>
                where
                    __R: ::path_template::ResourcePath + ?::core::marker::Sized,
                {
                    self.inner.matches(path).map(|_| #params_name {})
                }
            }
        } else {
            quote! {
                /// Matches `path`, returning the decoded parameter values.
                pub fn matches<__R>(&self, path: &__R) -> ::core::option::Option<#params_name>
                where
                    __R: ::path_template::ResourcePath + ?::core::marker::Sized,
                {
                    let mut __values = self
                        .inner
                        .matches(path)?
                        .into_iter()
                        .map(|(_, __value)| __value);

                    ::core::option::Option::Some(#params_name {
                        #(#idents: __values.next()?,)*
                    })
                }
            }
        };

        let stream = quote! {
            #(#attrs)*
            #[derive(Debug, Clone, PartialEq, Eq, Hash)]
            #vis struct #name {
                inner: ::path_template::PathTemplate,
            }

            #[doc = #params_doc]
            #[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
            #vis struct #params_name {
                #(pub #idents: ::std::string::String,)*
            }

            impl #name {
                /// Template string, as written.
                pub const TEMPLATE: &'static str = #template;

                /// Parameter names, in placeholder order.
                pub const PARAM_NAMES: &'static [&'static str] = &[#(#names),*];

                /// Compiles the template.
                pub fn new() -> Self {
                    Self {
                        inner: ::path_template::PathTemplate::new(Self::TEMPLATE),
                    }
                }

                /// Returns the compiled template.
                pub fn template(&self) -> &::path_template::PathTemplate {
                    &self.inner
                }

                #build

                #matches
            }

            impl ::core::default::Default for #name {
                fn default() -> Self {
                    Self::new()
                }
            }

            impl ::core::convert::AsRef<::path_template::PathTemplate> for #name {
                fn as_ref(&self) -> &::path_template::PathTemplate {
                    &self.inner
                }
            }
        };

        output.extend(stream);
    }
}
