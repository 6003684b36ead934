use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, parse_macro_input, spanned::Spanned};

use crate::utils;

/// Command-line spellings of one unit variant.
struct VariantNames {
    ident: Ident,
    canonical: String,
    aliases: Vec<String>,
}

pub fn derive_cli_value_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let enum_ident = input.ident.clone();

    let Data::Enum(data_enum) = input.data else {
        return syn::Error::new(input.span(), "CliValue can only be derived for enums")
            .to_compile_error()
            .into();
    };

    let option_name = match option_name(&input.attrs, &enum_ident) {
        Ok(name) => name,
        Err(err) => return err.to_compile_error().into(),
    };

    let mut variants = Vec::with_capacity(data_enum.variants.len());
    for variant in data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(variant.span(), "CliValue only supports unit variants")
                .to_compile_error()
                .into();
        }
        match variant_names(variant.ident, &variant.attrs) {
            Ok(names) => variants.push(names),
            Err(err) => return err.to_compile_error().into(),
        }
    }

    let lit = |value: &str| LitStr::new(value, Span::call_site());
    let idents: Vec<&Ident> = variants.iter().map(|v| &v.ident).collect();
    let canonical: Vec<LitStr> = variants.iter().map(|v| lit(&v.canonical)).collect();
    let parse_arms = variants.iter().map(|v| {
        let ident = &v.ident;
        let spellings = std::iter::once(&v.canonical)
            .chain(&v.aliases)
            .map(|s| lit(s));
        quote! { #(#spellings)|* => Ok(Self::#ident), }
    });
    let option_lit = lit(&option_name);
    let usage_lit = lit(&format!(
        "--{option_name} <{}>",
        variants
            .iter()
            .map(|v| v.canonical.as_str())
            .collect::<Vec<_>>()
            .join("|")
    ));

    let expanded = quote! {
        impl #enum_ident {
            /// Long option this value is passed to, without the leading `--`.
            pub const OPTION: &'static str = #option_lit;
            /// Canonical spellings, in declaration order.
            pub const VARIANTS: &'static [&'static str] = &[#(#canonical),*];
            /// `--option <a|b|c>` line for usage text.
            pub const USAGE: &'static str = #usage_lit;

            pub fn parse(raw: &str) -> crate::Result<Self> {
                match raw.trim().to_ascii_lowercase().as_str() {
                    #(#parse_arms)*
                    _ => Err(crate::Error::invalid_input(format!(
                        "Invalid value for --{}: {} (expected {})",
                        Self::OPTION,
                        raw,
                        Self::VARIANTS.join("|")
                    ))),
                }
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    #(Self::#idents => #canonical,)*
                }
            }
        }

        impl std::str::FromStr for #enum_ident {
            type Err = crate::Error;

            fn from_str(raw: &str) -> crate::Result<Self> {
                Self::parse(raw)
            }
        }

        impl std::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };

    TokenStream::from(expanded)
}

/// `#[cli_value(option = "...")]`, defaulting to the kebab-cased enum name.
fn option_name(attrs: &[Attribute], enum_ident: &Ident) -> syn::Result<String> {
    let mut name = utils::to_kebab_case(&enum_ident.to_string());
    for attr in attrs.iter().filter(|a| a.path().is_ident("cli_value")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("option") {
                name = meta.value()?.parse::<LitStr>()?.value();
                Ok(())
            } else {
                Err(meta.error("unsupported cli_value attribute; expected option = \"...\""))
            }
        })?;
    }
    Ok(name)
}

/// `#[cli(name = "...", alias = "...")]` on a variant.
fn variant_names(ident: Ident, attrs: &[Attribute]) -> syn::Result<VariantNames> {
    let mut names = VariantNames {
        canonical: utils::to_kebab_case(&ident.to_string()),
        aliases: Vec::new(),
        ident,
    };
    for attr in attrs.iter().filter(|a| a.path().is_ident("cli")) {
        attr.parse_nested_meta(|meta| {
            let value = meta.value()?.parse::<LitStr>()?.value();
            if meta.path.is_ident("name") {
                names.canonical = value;
            } else if meta.path.is_ident("alias") {
                names.aliases.push(value);
            } else {
                return Err(meta.error("unsupported cli attribute; expected name/alias"));
            }
            Ok(())
        })?;
    }
    Ok(names)
}
