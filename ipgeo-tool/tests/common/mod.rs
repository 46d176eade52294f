#![allow(dead_code)]

use ipgeo_core::{ToolContext, ToolInvocation};
use ipgeo_tool::{IpGeoClient, IpGeoConfig};
use serde_json::{Value, json};
use std::sync::Arc;

/// A complete provider response for Google's public resolver.
pub fn google_dns() -> Value {
    json!({
        "ip": "8.8.8.8",
        "success": true,
        "type": "IPv4",
        "continent": "North America",
        "continent_code": "NA",
        "country": "United States",
        "country_code": "US",
        "region": "California",
        "region_code": "CA",
        "city": "Mountain View",
        "latitude": 37.3860517,
        "longitude": -122.0838511,
        "is_eu": false,
        "postal": "94039",
        "calling_code": "1",
        "capital": "Washington D.C.",
        "borders": "CA,MX",
        "flag": {
            "img": "https://cdn.ipwhois.io/flags/us.svg",
            "emoji": "🇺🇸",
            "emoji_unicode": "U+1F1FA U+1F1F8"
        },
        "connection": {
            "asn": 15169,
            "org": "Google LLC",
            "isp": "Google LLC",
            "domain": "google.com"
        },
        "timezone": {
            "id": "America/Los_Angeles",
            "abbr": "PDT",
            "is_dst": true,
            "offset": -25200,
            "utc": "-07:00",
            "current_time": "2024-06-01T10:00:00-07:00"
        }
    })
}

/// Dotted paths of every leaf field the record requires.
pub const REQUIRED_PATHS: &[&str] = &[
    "ip",
    "success",
    "type",
    "continent",
    "continent_code",
    "country",
    "country_code",
    "region",
    "region_code",
    "city",
    "latitude",
    "longitude",
    "is_eu",
    "postal",
    "calling_code",
    "capital",
    "borders",
    "flag.img",
    "flag.emoji",
    "flag.emoji_unicode",
    "connection.asn",
    "connection.org",
    "connection.isp",
    "connection.domain",
    "timezone.id",
    "timezone.abbr",
    "timezone.is_dst",
    "timezone.offset",
    "timezone.utc",
    "timezone.current_time",
];

/// Remove the field at a dotted path.
pub fn remove_path(value: &mut Value, path: &str) {
    match path.split_once('.') {
        Some((group, key)) => {
            value[group].as_object_mut().unwrap().remove(key);
        }
        None => {
            value.as_object_mut().unwrap().remove(path);
        }
    }
}

/// Replace the field at a dotted path.
pub fn set_path(value: &mut Value, path: &str, replacement: Value) {
    match path.split_once('.') {
        Some((group, key)) => value[group][key] = replacement,
        None => value[path] = replacement,
    }
}

pub fn stub_client(base_url: &str) -> IpGeoClient {
    IpGeoClient::new(IpGeoConfig::new().with_base_url(base_url)).unwrap()
}

pub fn tool_ctx() -> Arc<dyn ToolContext> {
    Arc::new(ToolInvocation::new("IPGeoAgent").with_function_call_id("call-1"))
}
