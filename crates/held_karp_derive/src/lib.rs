//! Derive macros backing the `held-karp` command-line options.
//!
//! Generated code refers to `crate::Error` and `crate::Result`, so the
//! derives are meant for types defined inside `held_karp_core`.

mod attrs;
mod cli_options;
mod cli_value;
mod kv_display;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Generates `split_arg`, `apply_cli_option` and `cli_option_names` for a
/// struct whose fields carry `#[cli(long = "...")]`.
#[proc_macro_derive(CliOptions, attributes(cli))]
pub fn derive_cli_options(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    cli_options::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Generates `parse`, `as_str` and `Display` for a unit-only enum.
#[proc_macro_derive(CliValue, attributes(cli_value, cli))]
pub fn derive_cli_value(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    cli_value::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Generates an aligned `key = value` multi-line `Display`.
#[proc_macro_derive(KvDisplay, attributes(kv))]
pub fn derive_kv_display(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    kv_display::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
