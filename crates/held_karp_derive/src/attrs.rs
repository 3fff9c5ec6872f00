use syn::{Attribute, Data, DataStruct, DeriveInput, Fields, FieldsNamed, LitStr};

/// Collects `key = "value"` pairs from every `#[name(...)]` attribute,
/// in source order. Keys outside `allowed` are a compile error.
pub(crate) fn string_args(
    attrs: &[Attribute],
    name: &str,
    allowed: &[&str],
) -> syn::Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident(name)) {
        attr.parse_nested_meta(|meta| {
            let Some(key) = allowed.iter().find(|key| meta.path.is_ident(**key)) else {
                return Err(meta.error(format!(
                    "unsupported {name} attribute; expected {}",
                    allowed.join("/")
                )));
            };
            let lit: LitStr = meta.value()?.parse()?;
            pairs.push(((*key).to_string(), lit.value()));
            Ok(())
        })?;
    }

    Ok(pairs)
}

pub(crate) fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> syn::Result<&'a FieldsNamed> {
    match &input.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(fields),
            ..
        }) => Ok(fields),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{derive} can only be derived for structs with named fields"),
        )),
    }
}

pub(crate) fn to_kebab_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for ch in ident.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}
