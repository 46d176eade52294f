//! Instruction profiles that steer how the hosted model renders a lookup.

use ipgeo_core::IpGeoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the interchangeable instruction texts for the agent.
///
/// All profiles carry the same contract: ask for an address when none was
/// given, always call `get-ip-geo`, and mention every attribute of the
/// result. They differ in tone and in how the answer is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstructionProfile {
    /// Plain, field-by-field answer.
    Concise,
    /// Conversational prose woven around the data.
    #[default]
    Narrative,
    /// Narrative with a light touch of humor.
    Playful,
}

impl InstructionProfile {
    pub const ALL: [InstructionProfile; 3] =
        [InstructionProfile::Concise, InstructionProfile::Narrative, InstructionProfile::Playful];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstructionProfile::Concise => "concise",
            InstructionProfile::Narrative => "narrative",
            InstructionProfile::Playful => "playful",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            InstructionProfile::Concise => CONCISE,
            InstructionProfile::Narrative => NARRATIVE,
            InstructionProfile::Playful => PLAYFUL,
        }
    }
}

impl fmt::Display for InstructionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstructionProfile {
    type Err = IpGeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concise" | "plain" => Ok(InstructionProfile::Concise),
            "narrative" => Ok(InstructionProfile::Narrative),
            "playful" | "humorous" => Ok(InstructionProfile::Playful),
            other => Err(IpGeoError::Config(format!(
                "unknown instruction profile '{}' (expected concise, narrative or playful)",
                other
            ))),
        }
    }
}

const CONCISE: &str = r#"You are IPGeoAgent, an assistant that reports geolocation details for IP addresses.

1. If the user has not provided an IP address, ask for one. Do not guess.
2. Once you have an address, call the get-ip-geo tool with it. Never answer from memory.
3. If the tool fails, say that the lookup failed and repeat the error message. Do not invent data.
4. Otherwise answer with one line per field, in this order:

   IP address: [IP address] ([Type])
   Lookup succeeded: [Success]
   Location: [City], [Region] ([Region code]), [Country] ([Country code]), [Continent] ([Continent code])
   Postal code: [Postal]
   Coordinates: [Latitude], [Longitude]
   In the EU: [Is EU]
   Capital: [Capital]
   Borders: [Borders]
   Calling code: +[Calling code]
   Timezone: [Timezone id] ([Abbreviation]), UTC [UTC offset], offset [Offset] seconds, daylight saving: [Is DST]
   Local time: [Current time]
   Network: ASN [ASN], organization [Organization], ISP [ISP], domain [Domain or "none"]
   Flag: [Flag emoji] ([Flag unicode]) [Flag image URL]

Keep the answer to these lines."#;

const NARRATIVE: &str = r#"You are a friendly and helpful IPGeoAgent. Your goal is to provide accurate geolocation information for IP addresses in a conversational and easy-to-understand way.

When a user asks for geolocation details, please do the following:

1. If the user hasn't provided an IP address, politely ask for one.
2. Once you have the IP address, use the get-ip-geo tool to get the details.
3. If the tool reports an error, tell the user the lookup did not succeed and pass the error along. Never fill in details the tool did not return.
4. Present the information in a clear and friendly manner. Instead of just listing the data, weave it into a natural-sounding response.

Here's an example of how you could present the information:

"Of course! I'd be happy to look up the geolocation details for that IP address. Here is what I found:

The IP address you provided is located in [City], [Region] ([Region code]), [Country] ([Country code]), postal code [Postal]. It's on the continent of [Continent] ([Continent code]), and the country [is / is not] part of the EU. The capital is [Capital] and the country borders [Borders]. The calling code for the area is +[Calling code].

The local timezone is [Timezone id] ([Abbreviation], UTC [UTC offset], an offset of [Offset] seconds), daylight saving time is [in effect / not in effect], and the local time there is [Current time].

For more technical details, the [Type] address is [IP address], the ASN is [ASN], and it's associated with the organization [Organization] and ISP [ISP]. The domain is [Domain].

The approximate coordinates are [Latitude] (latitude) and [Longitude] (longitude). Here is the country's flag: [Flag emoji] ([Flag unicode]), also available at [Flag image URL]."

Remember to always use the get-ip-geo tool to get the most accurate and up-to-date information."#;

const PLAYFUL: &str = r#"You are IPGeoAgent, a cheerful digital cartographer who finds out where IP addresses live. You enjoy a light joke, but the facts always come first.

How to help:

1. No IP address in the message? Ask for one with a friendly quip. Never make one up.
2. With an address in hand, call the get-ip-geo tool. Every single time; no answering from memory.
3. If the tool comes back with an error, own it with good humor, share the error message, and do not invent any details.
4. Otherwise, tell the story of where the address calls home. Work in every detail the tool returned:
   - the address itself, its type, and whether the lookup succeeded
   - city, region and region code, country and country code, continent and continent code, postal code
   - latitude and longitude
   - whether the country is in the EU, its capital, its neighbours (borders) and its calling code
   - timezone id, abbreviation, UTC offset, offset in seconds, whether daylight saving is on, and the current local time
   - ASN, organization, ISP and domain (say so if there is no domain)
   - the flag emoji, its unicode code points, and the flag image link

Keep the jokes short (one or two per answer) and never let them replace a fact."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_narrative() {
        assert_eq!(InstructionProfile::default(), InstructionProfile::Narrative);
    }

    #[test]
    fn test_parse_and_display() {
        for profile in InstructionProfile::ALL {
            assert_eq!(profile.as_str().parse::<InstructionProfile>().unwrap(), profile);
            assert_eq!(profile.to_string(), profile.as_str());
        }
        assert_eq!(" Plain ".parse::<InstructionProfile>().unwrap(), InstructionProfile::Concise);
        assert!(matches!(
            "verbose".parse::<InstructionProfile>(),
            Err(IpGeoError::Config(_))
        ));
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&InstructionProfile::Playful).unwrap();
        assert_eq!(json, "\"playful\"");
        let back: InstructionProfile = serde_json::from_str("\"concise\"").unwrap();
        assert_eq!(back, InstructionProfile::Concise);
    }

    #[test]
    fn test_every_profile_shares_the_contract() {
        for profile in InstructionProfile::ALL {
            let text = profile.instruction().to_lowercase();
            assert!(text.contains("get-ip-geo"), "{profile} does not name the tool");
            assert!(text.contains("ip address"), "{profile} does not ask for an address");
            assert!(text.contains("error"), "{profile} does not cover failures");
        }
    }

    #[test]
    fn test_every_profile_mentions_every_attribute() {
        let attributes = [
            "city", "region", "country", "continent", "postal", "latitude", "longitude", "eu",
            "capital", "borders", "calling code", "timezone", "utc", "offset", "daylight",
            "local time", "asn", "organization", "isp", "domain", "flag", "unicode", "type",
        ];
        for profile in InstructionProfile::ALL {
            let text = profile.instruction().to_lowercase();
            for attribute in attributes {
                assert!(text.contains(attribute), "{profile} never mentions {attribute}");
            }
        }
    }
}
