//! The validated geolocation record and its field-by-field reader.

use ipgeo_core::{IpGeoError, JsonKind, Result, SchemaError, ViolationKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;

/// Geolocation of one IP address, exactly as the provider reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoRecord {
    pub ip: String,
    /// Whether the provider resolved the address.
    pub success: bool,
    /// Address family reported by the provider (`IPv4` / `IPv6`).
    #[serde(rename = "type")]
    pub kind: String,
    pub continent: String,
    pub continent_code: String,
    pub country: String,
    pub country_code: String,
    pub region: String,
    pub region_code: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_eu: bool,
    pub postal: String,
    pub calling_code: String,
    pub capital: String,
    pub borders: String,
    pub flag: Flag,
    pub connection: Connection,
    pub timezone: Timezone,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Flag {
    /// Absolute URL of the flag image.
    pub img: String,
    pub emoji: String,
    pub emoji_unicode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Connection {
    pub asn: i64,
    pub org: String,
    pub isp: String,
    /// Present in every response; `null` when the network has no domain.
    pub domain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Timezone {
    pub id: String,
    pub abbr: String,
    pub is_dst: bool,
    /// Offset from UTC in seconds, kept as the provider wrote it.
    pub offset: Number,
    pub utc: String,
    pub current_time: String,
}

/// Parse a response body and validate it as a [`GeoRecord`].
///
/// Fails with [`IpGeoError::Parse`] when the body is not JSON and with
/// [`IpGeoError::SchemaValidation`] when it is JSON of the wrong shape.
pub fn parse_body(body: &str) -> Result<GeoRecord> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| IpGeoError::Parse(format!("response body is not JSON: {}", e)))?;
    Ok(GeoRecord::from_value(&value)?)
}

impl GeoRecord {
    /// Validate an untyped JSON document field by field.
    ///
    /// Every violation in the document is reported, not only the first one.
    /// Fields the record does not declare are ignored.
    pub fn from_value(value: &Value) -> std::result::Result<Self, SchemaError> {
        let mut errors = SchemaError::default();

        let Some(root) = value.as_object() else {
            errors.push(
                "$",
                ViolationKind::WrongType { expected: JsonKind::Object, found: JsonKind::of(value) },
            );
            return Err(errors);
        };

        let mut r = FieldReader::new(root, "", &mut errors);
        let ip = r.string("ip");
        let success = r.boolean("success");
        let kind = r.string("type");
        let continent = r.string("continent");
        let continent_code = r.string("continent_code");
        let country = r.string("country");
        let country_code = r.string("country_code");
        let region = r.string("region");
        let region_code = r.string("region_code");
        let city = r.string("city");
        let latitude = r.number("latitude");
        let longitude = r.number("longitude");
        let is_eu = r.boolean("is_eu");
        let postal = r.string("postal");
        let calling_code = r.string("calling_code");
        let capital = r.string("capital");
        let borders = r.string("borders");
        let flag = r.group("flag", |g| {
            let img = g.url("img");
            let emoji = g.string("emoji");
            let emoji_unicode = g.string("emoji_unicode");
            Some(Flag { img: img?, emoji: emoji?, emoji_unicode: emoji_unicode? })
        });
        let connection = r.group("connection", |g| {
            let asn = g.integer("asn");
            let org = g.string("org");
            let isp = g.string("isp");
            let domain = g.nullable_string("domain");
            Some(Connection { asn: asn?, org: org?, isp: isp?, domain: domain? })
        });
        let timezone = r.group("timezone", |g| {
            let id = g.string("id");
            let abbr = g.string("abbr");
            let is_dst = g.boolean("is_dst");
            let offset = g.raw_number("offset");
            let utc = g.string("utc");
            let current_time = g.string("current_time");
            Some(Timezone {
                id: id?,
                abbr: abbr?,
                is_dst: is_dst?,
                offset: offset?,
                utc: utc?,
                current_time: current_time?,
            })
        });

        // Every field has been read (and every violation recorded) above;
        // assembly only has to short-circuit on the first gap.
        let assemble = move || -> Option<GeoRecord> {
            Some(GeoRecord {
                ip: ip?,
                success: success?,
                kind: kind?,
                continent: continent?,
                continent_code: continent_code?,
                country: country?,
                country_code: country_code?,
                region: region?,
                region_code: region_code?,
                city: city?,
                latitude: latitude?,
                longitude: longitude?,
                is_eu: is_eu?,
                postal: postal?,
                calling_code: calling_code?,
                capital: capital?,
                borders: borders?,
                flag: flag?,
                connection: connection?,
                timezone: timezone?,
            })
        };

        match assemble() {
            Some(record) if errors.is_empty() => Ok(record),
            _ => Err(errors),
        }
    }
}

impl fmt::Display for GeoRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IP:   {} ({})", self.ip, self.kind)?;
        writeln!(f, "Loc:  {}, {}, {} ({})", self.city, self.region, self.country, self.continent)?;
        writeln!(f, "Geo:  {}, {}", self.latitude, self.longitude)?;
        writeln!(
            f,
            "Net:  AS{} {} / {}{}",
            self.connection.asn,
            self.connection.org,
            self.connection.isp,
            self.connection.domain.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
        )?;
        write!(f, "Time: {} {} (UTC{})", self.timezone.id, self.timezone.abbr, self.timezone.utc)
    }
}

/// Reads typed fields out of one JSON object, recording a violation for
/// each field that is absent or of the wrong type.
struct FieldReader<'v, 'e> {
    object: &'v Map<String, Value>,
    prefix: &'static str,
    errors: &'e mut SchemaError,
}

impl<'v, 'e> FieldReader<'v, 'e> {
    fn new(object: &'v Map<String, Value>, prefix: &'static str, errors: &'e mut SchemaError) -> Self {
        Self { object, prefix, errors }
    }

    fn path(&self, key: &str) -> String {
        if self.prefix.is_empty() { key.to_string() } else { format!("{}.{}", self.prefix, key) }
    }

    fn violation(&mut self, key: &str, kind: ViolationKind) {
        let path = self.path(key);
        self.errors.push(path, kind);
    }

    fn wrong_type(&mut self, key: &str, expected: JsonKind, found: &Value) {
        self.violation(key, ViolationKind::WrongType { expected, found: JsonKind::of(found) });
    }

    fn required(&mut self, key: &str) -> Option<&'v Value> {
        let value = self.object.get(key);
        if value.is_none() {
            self.violation(key, ViolationKind::Missing);
        }
        value
    }

    fn string(&mut self, key: &str) -> Option<String> {
        match self.required(key)? {
            Value::String(s) => Some(s.clone()),
            other => {
                self.wrong_type(key, JsonKind::String, other);
                None
            }
        }
    }

    /// `Some(None)` for a `null` field. The key itself is still required.
    fn nullable_string(&mut self, key: &str) -> Option<Option<String>> {
        match self.required(key)? {
            Value::Null => Some(None),
            Value::String(s) => Some(Some(s.clone())),
            other => {
                self.wrong_type(key, JsonKind::String, other);
                None
            }
        }
    }

    fn boolean(&mut self, key: &str) -> Option<bool> {
        match self.required(key)? {
            Value::Bool(b) => Some(*b),
            other => {
                self.wrong_type(key, JsonKind::Bool, other);
                None
            }
        }
    }

    fn number(&mut self, key: &str) -> Option<f64> {
        self.raw_number(key)?.as_f64()
    }

    /// Any JSON number, integer or not, without converting it.
    fn raw_number(&mut self, key: &str) -> Option<Number> {
        match self.required(key)? {
            Value::Number(n) => Some(n.clone()),
            other => {
                self.wrong_type(key, JsonKind::Number, other);
                None
            }
        }
    }

    fn integer(&mut self, key: &str) -> Option<i64> {
        let value = self.required(key)?;
        match JsonKind::of(value) {
            JsonKind::Integer => {
                let n = value.as_i64();
                if n.is_none() {
                    self.violation(key, ViolationKind::OutOfRange);
                }
                n
            }
            _ => {
                self.wrong_type(key, JsonKind::Integer, value);
                None
            }
        }
    }

    fn url(&mut self, key: &str) -> Option<String> {
        let raw = self.string(key)?;
        match url::Url::parse(&raw) {
            Ok(_) => Some(raw),
            Err(e) => {
                self.violation(key, ViolationKind::InvalidUrl(e.to_string()));
                None
            }
        }
    }

    /// Read a nested object and hand it to `read` with a reader scoped to it.
    fn group<T>(
        &mut self,
        key: &'static str,
        read: impl FnOnce(&mut FieldReader<'v, '_>) -> Option<T>,
    ) -> Option<T> {
        let object = match self.required(key)? {
            Value::Object(map) => map,
            other => {
                self.wrong_type(key, JsonKind::Object, other);
                return None;
            }
        };
        let mut nested = FieldReader::new(object, key, &mut *self.errors);
        read(&mut nested)
    }
}
