mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// The information of the error is given through the `error` attribute:
/// ```ignore
/// use balance_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "unexpected end of input",
///     labels = ["add something here"],
///     help = "an equation looks like `2x + 3 = 7`",
/// )]
/// pub struct UnexpectedEof;
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                      |
/// | --------- | -------------------------------------------------------------------------------- |
/// | `message` | The message displayed at the top of the error, also returned by `message()`.     |
/// | `labels`  | An array of label texts, one for each span of the error, in order.               |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it.     |
/// | `note`    | Optional note with extra context.                                                |
///
/// Each tag accepts an expression that evaluates to something implementing [`ToString`]. The
/// expressions are evaluated inside the trait methods, so fields are available through `self`.
///
/// The generated code refers to the `ariadne` and `balance_error` crates by name, so both must be
/// dependencies of the crate using the derive.
///
/// [`ErrorKind`]: https://docs.rs/balance-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    target.into_token_stream().into()
}
