use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::attrs;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let struct_ident = &input.ident;
    let fields = attrs::named_fields(input, "CliOptions")?;

    let mut names = Vec::new();
    let mut arms = Vec::new();

    for field in &fields.named {
        let Some(field_ident) = &field.ident else {
            continue;
        };

        let mut long_name = None;
        let mut parse_with: Option<syn::Path> = None;
        for (key, value) in attrs::string_args(&field.attrs, "cli", &["long", "parse_with"])? {
            if key == "long" {
                long_name = Some(value);
            } else {
                parse_with = Some(syn::parse_str(&value)?);
            }
        }

        // Fields without a long name are handled by the caller.
        let Some(long_name) = long_name else {
            continue;
        };

        let ty = &field.ty;
        let parsed = match parse_with {
            Some(parser) => quote! { #parser(&raw)? },
            None => quote! {
                raw.parse::<#ty>().map_err(|e| {
                    crate::Error::invalid_input(format!("Invalid value for --{name}: {raw} ({e})"))
                })?
            },
        };

        arms.push(quote! {
            #long_name => {
                let raw = value.ok_or_else(|| {
                    crate::Error::invalid_input(format!("Missing value for --{name}"))
                })?;
                self.#field_ident = #parsed;
                Ok(true)
            }
        });
        names.push(long_name);
    }

    Ok(quote! {
        impl #struct_ident {
            /// Long option names handled by `apply_cli_option`.
            pub fn cli_option_names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn split_arg(
                raw_name: &str,
                args: &mut std::iter::Peekable<impl Iterator<Item = String>>,
            ) -> (String, Option<String>) {
                if let Some((name, value)) = raw_name.split_once('=') {
                    return (name.to_string(), Some(value.to_string()));
                }

                let value = args.next_if(|next| !next.starts_with("--"));
                (raw_name.to_string(), value)
            }

            fn apply_cli_option(
                &mut self,
                name: &str,
                value: Option<String>,
            ) -> crate::Result<bool> {
                match name {
                    #(#arms)*
                    _ => Ok(false),
                }
            }
        }
    })
}
