mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `mathsolver_error` for the given struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use mathsolver_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add something here"])]
/// pub struct Foo;
///
/// use mathsolver_error::ErrorKind as _;
/// assert_eq!(Foo.message(), "unexpected end of input");
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                    |
/// | --------- | ------------------------------------------------------------------------------ |
/// | `message` | The message displayed at the top of the error, and the one-line form of it.    |
/// | `labels`  | An array of label texts; the `n`th label points at the `n`th span of the error. |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it.   |
///
/// Each tag accepts an expression. For structs with named fields, the expression is evaluated with
/// the members of the struct in scope, so they can be used in the expression (tuple structs are
/// not supported).
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl mathsolver_error::ErrorKind for #name {
            #target
        }
    }.into()
}
