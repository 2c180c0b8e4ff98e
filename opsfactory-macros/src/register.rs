//! Expansion of `#[register_ops]`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Ident, ItemFn, LitStr, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[register_ops]` macro.
pub(crate) struct RegisterArgs {
    /// Key the constructor is registered under.
    pub key: LitStr,
    /// Optional description stored in the entry.
    pub description: Option<LitStr>,
}

impl Parse for RegisterArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: LitStr = input.parse()?;
        if key.value().is_empty() {
            return Err(syn::Error::new(key.span(), "ops type key must not be empty"));
        }

        let mut description = None;
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }

            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "description" => {
                    description = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }
        }

        Ok(RegisterArgs { key, description })
    }
}

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as RegisterArgs);
    let input = parse_macro_input!(item as ItemFn);

    match generate_registration(&args, &input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Validates the constructor and generates it alongside its `inventory` submission.
pub(crate) fn generate_registration(
    args: &RegisterArgs,
    input: &ItemFn,
) -> syn::Result<proc_macro2::TokenStream> {
    if let Some(asyncness) = &input.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "Ops constructor must not be async",
        ));
    }

    if !input.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.sig.generics,
            "Ops constructor cannot be generic",
        ));
    }

    if input.sig.inputs.len() != 1 {
        return Err(syn::Error::new_spanned(
            &input.sig.inputs,
            "Ops constructor must take a single argument: fn(bundle: &ConfigBundle)",
        ));
    }

    let fn_name = &input.sig.ident;
    let key = &args.key;
    let description = match &args.description {
        Some(lit) => quote! { #lit },
        None => quote! { "" },
    };

    Ok(quote! {
        #input

        ::opsfactory::inventory::submit! {
            ::opsfactory::OpsEntry::new(
                ::opsfactory::TypeKey::from_static(#key),
                #description,
                #fn_name,
            )
        }
    })
}
