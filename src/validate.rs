//! Validation rules for configuration values.
//!
//! Only `core` is used here: build.rs includes this file to reject a bad
//! cfg.toml at compile time, and the library re-runs the same rules at runtime.

use core::fmt;
use core::net::Ipv4Addr;
use core::str::FromStr;

use crate::constants::{
    MQTT_CLIENT_ID_MAX_LEN, MQTT_TOPIC_MAX_LEN, PSK_HEX_LEN, PSK_MAX_LEN, PSK_MIN_LEN,
    SSID_MAX_LEN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    Empty(&'static str),
    TooLong(&'static str),
    InvalidPsk,
    InvalidBrokerAddress,
    InvalidPort,
    WildcardInTopicName(&'static str),
    InvalidTopicFilter(&'static str),
    NulInTopic(&'static str),
    InvalidClientId,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty(field) => write!(f, "{field} must not be empty"),
            Error::TooLong(field) => write!(f, "{field} is too long"),
            Error::InvalidPsk => write!(
                f,
                "wifi_psk must be {PSK_MIN_LEN}-{PSK_MAX_LEN} printable ASCII characters or {PSK_HEX_LEN} hex digits"
            ),
            Error::InvalidBrokerAddress => write!(f, "mqtt_server must be an IPv4 address"),
            Error::InvalidPort => write!(f, "mqtt_port must not be 0"),
            Error::WildcardInTopicName(field) => {
                write!(f, "{field} is a publish topic and must not contain '+' or '#'")
            }
            Error::InvalidTopicFilter(field) => write!(
                f,
                "{field}: wildcards must fill a whole level and '#' must be the last level"
            ),
            Error::NulInTopic(field) => write!(f, "{field} must not contain a NUL character"),
            Error::InvalidClientId => write!(
                f,
                "device_id must be 1-{MQTT_CLIENT_ID_MAX_LEN} characters of [0-9a-zA-Z_-]"
            ),
        }
    }
}

pub fn non_empty(field: &'static str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::Empty(field));
    }
    Ok(())
}

pub fn ssid(value: &str) -> Result<(), Error> {
    non_empty("wifi_ssid", value)?;
    if value.len() > SSID_MAX_LEN {
        return Err(Error::TooLong("wifi_ssid"));
    }
    Ok(())
}

/// Accepts a WPA2 passphrase or a raw 256-bit PSK written as hex.
pub fn psk(value: &str) -> Result<(), Error> {
    non_empty("wifi_psk", value)?;

    let bytes = value.as_bytes();
    if bytes.len() == PSK_HEX_LEN && bytes.iter().all(u8::is_ascii_hexdigit) {
        return Ok(());
    }

    let printable = bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ');
    if !printable || !(PSK_MIN_LEN..=PSK_MAX_LEN).contains(&bytes.len()) {
        return Err(Error::InvalidPsk);
    }
    Ok(())
}

pub fn broker_address(value: &str) -> Result<Ipv4Addr, Error> {
    non_empty("mqtt_server", value)?;
    Ipv4Addr::from_str(value).map_err(|_| Error::InvalidBrokerAddress)
}

pub fn port(value: u16) -> Result<(), Error> {
    if value == 0 {
        return Err(Error::InvalidPort);
    }
    Ok(())
}

fn topic_common(field: &'static str, value: &str) -> Result<(), Error> {
    non_empty(field, value)?;
    if value.len() > MQTT_TOPIC_MAX_LEN {
        return Err(Error::TooLong(field));
    }
    if value.contains('\0') {
        return Err(Error::NulInTopic(field));
    }
    Ok(())
}

/// A topic the device publishes to. Wildcards are not allowed.
pub fn topic_name(field: &'static str, value: &str) -> Result<(), Error> {
    topic_common(field, value)?;
    if value.contains(['+', '#']) {
        return Err(Error::WildcardInTopicName(field));
    }
    Ok(())
}

/// A topic the device subscribes to. `+` and `#` are allowed as whole levels,
/// `#` only as the last one.
pub fn topic_filter(field: &'static str, value: &str) -> Result<(), Error> {
    topic_common(field, value)?;

    let mut levels = value.split('/').peekable();
    while let Some(level) = levels.next() {
        let is_last = levels.peek().is_none();
        if level.contains('#') && (level != "#" || !is_last) {
            return Err(Error::InvalidTopicFilter(field));
        }
        if level.contains('+') && level != "+" {
            return Err(Error::InvalidTopicFilter(field));
        }
    }
    Ok(())
}

pub fn client_id(value: &str) -> Result<(), Error> {
    non_empty("device_id", value)?;
    let valid = value.len() <= MQTT_CLIENT_ID_MAX_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !valid {
        return Err(Error::InvalidClientId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssid_limits() {
        assert_eq!(ssid(""), Err(Error::Empty("wifi_ssid")));
        assert_eq!(ssid(&"x".repeat(SSID_MAX_LEN)), Ok(()));
        assert_eq!(ssid(&"x".repeat(SSID_MAX_LEN + 1)), Err(Error::TooLong("wifi_ssid")));
    }

    #[test]
    fn psk_passphrase_length() {
        assert_eq!(psk("PASSWORD"), Ok(()));
        assert_eq!(psk("correct horse battery staple"), Ok(()));
        assert_eq!(psk("short12"), Err(Error::InvalidPsk));
        assert_eq!(psk(&"p".repeat(PSK_MAX_LEN)), Ok(()));
        assert_eq!(psk(""), Err(Error::Empty("wifi_psk")));
    }

    #[test]
    fn psk_rejects_control_characters() {
        assert_eq!(psk("pass\tword"), Err(Error::InvalidPsk));
        assert_eq!(psk("pässwörd"), Err(Error::InvalidPsk));
    }

    #[test]
    fn psk_raw_hex() {
        assert_eq!(psk(&"a1".repeat(32)), Ok(()));
        // 64 characters that are not all hex is neither form
        assert_eq!(psk(&"zz".repeat(32)), Err(Error::InvalidPsk));
    }

    #[test]
    fn broker_address_parses_ipv4() {
        assert_eq!(broker_address("192.168.1.100"), Ok(Ipv4Addr::new(192, 168, 1, 100)));
        assert_eq!(broker_address("192.168.xxx.xxx"), Err(Error::InvalidBrokerAddress));
        assert_eq!(broker_address("broker.local"), Err(Error::InvalidBrokerAddress));
        assert_eq!(broker_address(""), Err(Error::Empty("mqtt_server")));
    }

    #[test]
    fn port_must_be_non_zero() {
        assert_eq!(port(1883), Ok(()));
        assert_eq!(port(0), Err(Error::InvalidPort));
    }

    #[test]
    fn topic_name_rejects_wildcards() {
        assert_eq!(topic_name("mqtt_topic", "domoticz/in"), Ok(()));
        assert_eq!(
            topic_name("mqtt_topic", "domoticz/+"),
            Err(Error::WildcardInTopicName("mqtt_topic"))
        );
        assert_eq!(
            topic_name("mqtt_topic", "domoticz/#"),
            Err(Error::WildcardInTopicName("mqtt_topic"))
        );
        assert_eq!(topic_name("mqtt_topic", ""), Err(Error::Empty("mqtt_topic")));
        assert_eq!(
            topic_name("mqtt_topic", "domoticz\0in"),
            Err(Error::NulInTopic("mqtt_topic"))
        );
    }

    #[test]
    fn topic_filter_wildcard_placement() {
        let field = "mqtt_subscribe_topic";
        assert_eq!(topic_filter(field, "domoticz/out"), Ok(()));
        assert_eq!(topic_filter(field, "#"), Ok(()));
        assert_eq!(topic_filter(field, "domoticz/#"), Ok(()));
        assert_eq!(topic_filter(field, "+/out/+"), Ok(()));
        assert_eq!(topic_filter(field, "a/#/b"), Err(Error::InvalidTopicFilter(field)));
        assert_eq!(topic_filter(field, "domoticz/out#"), Err(Error::InvalidTopicFilter(field)));
        assert_eq!(topic_filter(field, "domoticz/o+t"), Err(Error::InvalidTopicFilter(field)));
    }

    #[test]
    fn topic_length_limit() {
        let long = "t".repeat(MQTT_TOPIC_MAX_LEN + 1);
        assert_eq!(topic_name("mqtt_topic", &long), Err(Error::TooLong("mqtt_topic")));
    }

    #[test]
    fn client_id_charset() {
        assert_eq!(client_id("rgb-led-control"), Ok(()));
        assert_eq!(client_id("led_1"), Ok(()));
        assert_eq!(client_id("led strip"), Err(Error::InvalidClientId));
        assert_eq!(client_id(&"a".repeat(MQTT_CLIENT_ID_MAX_LEN + 1)), Err(Error::InvalidClientId));
        assert_eq!(client_id(""), Err(Error::Empty("device_id")));
    }

    #[test]
    fn display_names_field() {
        let msg = Error::Empty("wifi_ssid").to_string();
        assert!(msg.contains("wifi_ssid"));
    }
}
