// src/presentation/http/openapi/openapi_meta.rs
//! Validator helpers for conditional requests against the documentation
//! document (`ETag` / `Last-Modified`).
use axum::http::{HeaderMap, header};
use std::borrow::Cow;

/// Strong ETag for `bytes`: a quoted 64-bit FNV-1a digest.
pub fn compute_etag(bytes: &[u8]) -> String {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let digest = bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    });
    format!("\"{digest:016x}\"")
}

fn strip_weak_prefix(token: &str) -> &str {
    token
        .strip_prefix("W/")
        .or_else(|| token.strip_prefix("w/"))
        .unwrap_or(token)
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

/// Opaque part of an entity tag, with any weak prefix, surrounding quotes and
/// backslash escapes removed so `W/"abc"`, `"abc"` and `\"abc\"` compare equal.
pub fn opaque_tag(token: &str) -> Cow<'_, str> {
    let inner = strip_quotes(strip_weak_prefix(token.trim()));
    if !inner.contains('\\') {
        return Cow::Borrowed(strip_quotes(inner));
    }

    let mut unescaped = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => unescaped.extend(chars.next()),
            other => unescaped.push(other),
        }
    }
    Cow::Owned(strip_quotes(&unescaped).to_string())
}

/// Weak comparison as used by `If-None-Match`.
pub fn weak_match(a: &str, b: &str) -> bool {
    opaque_tag(a) == opaque_tag(b)
}

/// `true` when `If-None-Match` is `*` or lists a tag weakly matching `current`.
pub fn inm_matches(headers: &HeaderMap, current: &str) -> bool {
    let Some(value) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let value = value.trim();
    value == "*" || value.split(',').any(|candidate| weak_match(candidate, current))
}

/// `true` when `If-Modified-Since` is a valid HTTP-date not older than
/// `last_modified`. Unparseable dates never match.
pub fn ims_matches(headers: &HeaderMap, last_modified: &str) -> bool {
    let Some(since) = headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| httpdate::parse_http_date(v.trim()).ok())
    else {
        return false;
    };

    httpdate::parse_http_date(last_modified)
        .map(|modified| modified <= since)
        .unwrap_or(false)
}

/// `If-None-Match` takes precedence; `If-Modified-Since` is only consulted
/// when no `If-None-Match` header was sent.
pub fn is_not_modified(headers: &HeaderMap, etag: &str, last_modified: &str) -> bool {
    if headers.contains_key(header::IF_NONE_MATCH) {
        inm_matches(headers, etag)
    } else {
        ims_matches(headers, last_modified)
    }
}
