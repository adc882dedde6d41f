//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{format_default_for_type, type_to_string};

/// Generate template code (TokenStream) for fields.
///
/// Own fields come first, nested sections after them: a `[section]` header
/// ends the parent table, so any key written after it would land in the child.
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let own = fields
        .iter()
        .filter(|f| !f.sub)
        .map(|f| generate_field_template_code(f));
    let subs = fields
        .iter()
        .filter(|f| f.sub)
        .map(|f| generate_sub_template_code(f));

    quote! {
        #(#own)*
        #(#subs)*
    }
}

fn doc_code(info: &FieldInfo) -> TokenStream {
    match info.doc {
        Some(ref doc) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        None => quote! {},
    }
}

/// Nested section: blank line, then the child's own header and body.
fn generate_sub_template_code(info: &FieldInfo) -> TokenStream {
    let field_ty = &info.ty;
    quote! {
        out.push('\n');
        out.push_str(&<#field_ty>::template_with_header());
    }
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;
    let doc_code = doc_code(info);

    let suffix = match info.inline_doc {
        Some(ref comment) => format!("  # {}\n", comment),
        None => "\n".to_string(),
    };

    let ty_str = type_to_string(&info.ty);

    // Optional fields without explicit default are commented out
    if ty_str.starts_with("Option<") && info.default.is_none() {
        let line = format!("# {} = \"\"{}", toml_name, suffix);
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Explicit default value (compile-time known)
    if let Some(ref default_val) = info.default {
        let formatted = format_default_for_type(default_val, &ty_str);
        let line = format!("{} = {}{}", toml_name, formatted, suffix);
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Runtime value taken from Default::default()
    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_else(|_| "\"\"".to_string()));
        out.push_str(#suffix);
    }
}
