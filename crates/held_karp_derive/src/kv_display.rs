use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::attrs;

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let struct_ident = &input.ident;
    let fields = attrs::named_fields(input, "KvDisplay")?;

    let mut rows = Vec::new();
    for field in &fields.named {
        let Some(field_ident) = &field.ident else {
            continue;
        };

        let mut key = field_ident.to_string();
        let mut mode = String::from("display");
        let mut skip = false;
        for (attr_key, value) in attrs::string_args(&field.attrs, "kv", &["name", "fmt"])? {
            match attr_key.as_str() {
                "name" => key = value,
                _ if value == "skip" => skip = true,
                _ => mode = value,
            }
        }
        if skip {
            continue;
        }

        let value = match mode.as_str() {
            "display" => quote! { &self.#field_ident },
            "debug" => quote! { format_args!("{:?}", self.#field_ident) },
            "len" => quote! { self.#field_ident.len() },
            other => {
                return Err(syn::Error::new_spanned(
                    field_ident,
                    format!("unsupported kv fmt mode: {other}; expected display/debug/len/skip"),
                ));
            }
        };
        rows.push((key, value));
    }

    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let template: String = rows
        .iter()
        .map(|(key, _)| format!("\n\t{key:<width$} = {{}}"))
        .collect();
    let values = rows.iter().map(|(_, value)| value);

    Ok(quote! {
        impl std::fmt::Display for #struct_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, #template, #(#values),*)
            }
        }
    })
}
