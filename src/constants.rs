/// Current firmware version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// MQTT port used when `mqtt_port` is not set in cfg.toml
pub const DEFAULT_MQTT_PORT: u16 = 1883;
/// Device ID used when `device_id` is not set in cfg.toml
pub const DEFAULT_DEVICE_ID: &str = "rgb-led-control";

/// Maximum length of an 802.11 SSID in bytes
pub const SSID_MAX_LEN: usize = 32;
/// Minimum length of a WPA2 passphrase
pub const PSK_MIN_LEN: usize = 8;
/// Maximum length of a WPA2 passphrase
pub const PSK_MAX_LEN: usize = 63;
/// Length of a raw WPA2 PSK given as hex digits
pub const PSK_HEX_LEN: usize = 64;

/// Maximum length of an MQTT topic (UTF-8 string length prefix is a u16)
pub const MQTT_TOPIC_MAX_LEN: usize = 65535;
/// Longest client identifier an MQTT 3.1.1 broker must accept
pub const MQTT_CLIENT_ID_MAX_LEN: usize = 23;
