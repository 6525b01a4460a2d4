use std::collections::HashMap;

use crate::error::PagerError;

/// Build the query-string prefix that precedes the page parameter in every
/// pagination link, e.g. `cat_id=5&q=rust%20book&`.
pub fn query_prefix<K, V>(pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut qs = String::new();
    for (key, value) in pairs {
        qs.push_str(&urlencoding::encode(key.as_ref()));
        qs.push('=');
        qs.push_str(&urlencoding::encode(value.as_ref()));
        qs.push('&');
    }
    qs
}

/// Split a raw `k=v&k2=v2` query string into decoded pairs.
pub fn parse_query(raw: &str) -> Result<Vec<(String, String)>, PagerError> {
    let raw = raw.trim_start_matches('?');
    let mut pairs = Vec::new();
    for part in raw.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = part.split_once('=').unwrap_or((part, ""));
        let decode = |s: &str| {
            urlencoding::decode(&s.replace('+', " "))
                .map(|v| v.into_owned())
                .map_err(|e| PagerError::InvalidArgument(format!("bad query component '{s}': {e}")))
        };
        pairs.push((decode(key)?, decode(value)?));
    }
    Ok(pairs)
}

/// Register custom Tera filters.
pub fn register_filters(tera: &mut tera::Tera) {
    tera.register_filter("page_href", page_href);
}

/// Tera filter building every pagination link.
///
/// `{{ n | page_href(qs=qs, param="page") }}` → `?{qs}page={n}`.
/// With `size_param`, the value is a page size and the page resets to 1:
/// `{{ 20 | page_href(qs=qs, param="page", size_param="page_size") }}` →
/// `?{qs}page_size=20&page=1`.
fn page_href(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let n = value
        .as_i64()
        .ok_or_else(|| tera::Error::msg("page_href expects an integer"))?;
    let qs = args.get("qs").and_then(|v| v.as_str()).unwrap_or("");
    let param = args.get("param").and_then(|v| v.as_str()).unwrap_or("page");
    let href = match args.get("size_param").and_then(|v| v.as_str()) {
        Some(size_param) => format!("?{qs}{size_param}={n}&{param}=1"),
        None => format!("?{qs}{param}={n}"),
    };
    Ok(tera::Value::String(href))
}
