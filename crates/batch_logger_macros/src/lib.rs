use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, Pat};

#[derive(Eq, PartialEq)]
enum AttrLevel {
    Verbose,
    Debug,
}

// #[log(verbose)] or #[log(debug)]
//
// #[log(verbose)] logs the function arguments and return value, so it is
// only applicable to functions whose parameters and return type implement
// Debug.
//
// #[log(debug)] logs the function arguments and their types.
//
// Note: unless the configured default level is Verbose, #[log(verbose)]
// falls back to the #[log(debug)] output.

#[proc_macro_attribute]
pub fn log(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attr_level = attr.to_string().trim_matches('"').to_lowercase();
    assert!(
        attr_level == "verbose" || attr_level == "debug",
        "Invalid log level"
    );

    let attr_level = match attr_level.as_str() {
        "verbose" => AttrLevel::Verbose,
        "debug" => AttrLevel::Debug,
        _ => panic!("Invalid log level"),
    };

    let input_fn: ItemFn = parse_macro_input!(item as ItemFn);
    let fn_name = &input_fn.sig.ident;
    let args = &input_fn.sig.inputs;
    let is_async = input_fn.sig.asyncness.is_some();
    let fn_block = &input_fn.block;

    let log_args_type = args.iter().filter_map(|arg| {
        if let FnArg::Typed(pat_type) = arg {
            if let Pat::Ident(ref pat_ident) = *pat_type.pat {
                let pat_ident = &pat_ident.ident;
                let pat_type = &pat_type.ty;
                Some(quote! { format!("{}: {}", stringify!(#pat_ident), stringify!(#pat_type)) })
            } else {
                None
            }
        } else {
            None
        }
    });

    let log_args_value = args.iter().filter_map(|arg| {
        if let FnArg::Typed(pat_type) = arg {
            if let Pat::Ident(ref pat_ident) = *pat_type.pat {
                let pat_ident = &pat_ident.ident;
                Some(quote! { format!("{}: {:?}", stringify!(#pat_ident), #pat_ident) })
            } else {
                None
            }
        } else {
            None
        }
    });

    // string with the function arguments and their types
    let log_args_type = quote! { format!("({})", vec![#(#log_args_type),*].join(", ")) };
    // string with the function arguments and their values
    let log_args_value = quote! { format!("({})", vec![#(#log_args_value),*].join(", ")) };

    let call_original_fn = if is_async {
        quote! { let result = (async move { #fn_block }).await; }
    } else {
        quote! { let result = (move || { #fn_block })(); }
    };

    let module_path = quote! { module_path!() };

    let (log_enter, log_exit) = match attr_level {
        AttrLevel::Verbose => (
            quote! {
                if ::batch_logger::level() == ::batch_logger::LogLevel::Verbose {
                    ::batch_logger::verbose!("Function call {}::{}{}", #module_path, stringify!(#fn_name), #log_args_value);
                } else {
                    ::batch_logger::debug!("Function call {}::{}{}", #module_path, stringify!(#fn_name), #log_args_type);
                }
            },
            quote! {
                if ::batch_logger::level() == ::batch_logger::LogLevel::Verbose {
                    ::batch_logger::verbose!("Function {}::{} returned: {:?}", #module_path, stringify!(#fn_name), result);
                } else {
                    ::batch_logger::debug!("Function {}::{} returned.", #module_path, stringify!(#fn_name));
                }
            },
        ),
        AttrLevel::Debug => (
            quote! { ::batch_logger::debug!("Function call {}::{}{}", #module_path, stringify!(#fn_name), #log_args_type); },
            quote! { ::batch_logger::debug!("Function {}::{} returned.", #module_path, stringify!(#fn_name)); },
        ),
    };

    let attributes = &input_fn.attrs;
    let visibility = &input_fn.vis;
    let signature = &input_fn.sig;

    let expanded = quote! {
        #(#attributes)* #visibility #signature {
            #log_enter
            #call_original_fn
            #log_exit
            return result;
        }
    };

    TokenStream::from(expanded)
}
