mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
///
/// ```
/// use zdiff_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown function `{}`", self.name),
///     labels = ["this function"],
///     help = "the supported functions are `sin`, `cos`, `tan`, `cot`, and `log`",
/// )]
/// pub struct UnknownFunction {
///     name: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                    |
/// | --------- | ------------------------------------------------------------------------------ |
/// | `message` | The message displayed at the top of the error when it is displayed.            |
/// | `labels`  | An array of label texts, one for each span of the error, in the same order.    |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it.   |
///
/// Each tag accepts an expression. `message` and `help` should evaluate to something that
/// implements [`ToString`], and each element of `labels` likewise. An empty label is drawn
/// without text. For structs with named fields, the fields are in scope by name, and `self` can
/// be used as well. Tuple structs are not supported.
///
/// The deriving crate must depend on `ariadne` and `zdiff-error`.
///
/// [`ErrorKind`]: https://docs.rs/zdiff-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ::zdiff_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            #target
        }
    }.into()
}
