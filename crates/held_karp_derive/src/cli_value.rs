use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attrs;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let enum_ident = &input.ident;
    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            enum_ident,
            "CliValue can only be derived for enums",
        ));
    };

    let mut option_name = attrs::to_kebab_case(&enum_ident.to_string());
    for (_, value) in attrs::string_args(&input.attrs, "cli_value", &["option"])? {
        option_name = value;
    }

    let mut parse_arms = Vec::new();
    let mut str_arms = Vec::new();
    let mut expected = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "CliValue only supports unit variants",
            ));
        }

        let variant_ident = &variant.ident;
        let mut canonical = attrs::to_kebab_case(&variant_ident.to_string());
        let mut accepted = Vec::new();
        for (key, value) in attrs::string_args(&variant.attrs, "cli", &["name", "alias"])? {
            if key == "name" {
                canonical = value;
            } else {
                accepted.push(value);
            }
        }
        accepted.insert(0, canonical.clone());

        parse_arms.push(quote! { #(#accepted)|* => Ok(Self::#variant_ident), });
        str_arms.push(quote! { Self::#variant_ident => #canonical, });
        expected.push(canonical);
    }

    let expected = expected.join("|");

    Ok(quote! {
        impl #enum_ident {
            pub fn parse(raw: &str) -> crate::Result<Self> {
                match raw.trim().to_ascii_lowercase().as_str() {
                    #(#parse_arms)*
                    _ => Err(crate::Error::invalid_input(format!(
                        "Invalid value for --{}: {} (expected {})",
                        #option_name,
                        raw,
                        #expected
                    ))),
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    #(#str_arms)*
                }
            }
        }

        impl std::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    })
}
