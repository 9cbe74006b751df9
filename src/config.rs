use core::net::{Ipv4Addr, SocketAddrV4};
use core::str::FromStr;

use heapless::String;

use crate::constants::{MQTT_CLIENT_ID_MAX_LEN, VERSION};
use crate::validate::{self, Error};

pub struct Config {
    // Device ID (used as DHCP hostname and MQTT client identifier)
    pub device_id: &'static str,

    // MQTT broker IPv4 address
    pub mqtt_server: &'static str,

    // MQTT port (usually 1883)
    pub mqtt_port: u16,

    // MQTT topic the device publishes to (Domoticz listens on domoticz/in)
    pub mqtt_topic: &'static str,

    // MQTT topic the device subscribes to (Domoticz publishes on domoticz/out)
    pub mqtt_subscribe_topic: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_psk: &'static str,

    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

impl Config {
    /// Runs every validation rule against this configuration.
    ///
    /// `CONFIG` has already passed these checks in build.rs, this is for
    /// configurations assembled at runtime.
    pub fn validate(&self) -> Result<(), Error> {
        validate::ssid(self.wifi_ssid)?;
        validate::psk(self.wifi_psk)?;
        validate::broker_address(self.mqtt_server)?;
        validate::port(self.mqtt_port)?;
        validate::topic_name("mqtt_topic", self.mqtt_topic)?;
        validate::topic_filter("mqtt_subscribe_topic", self.mqtt_subscribe_topic)?;
        validate::client_id(self.device_id)?;
        Ok(())
    }

    pub fn broker_address(&self) -> Result<Ipv4Addr, Error> {
        validate::broker_address(self.mqtt_server)
    }

    pub fn broker_socket(&self) -> Result<SocketAddrV4, Error> {
        validate::port(self.mqtt_port)?;
        Ok(SocketAddrV4::new(self.broker_address()?, self.mqtt_port))
    }

    pub fn client_id(&self) -> Result<String<MQTT_CLIENT_ID_MAX_LEN>, Error> {
        validate::client_id(self.device_id)?;
        String::from_str(self.device_id).map_err(|_| Error::InvalidClientId)
    }

    /// Logs the configuration at info level. The Wi-Fi password is reduced to its length.
    pub fn log_summary(&self) {
        log::info!("RGB LED control v{}", VERSION);
        log::info!("Device ID: {}", self.device_id);
        log::info!("Wi-Fi SSID: {:?}", self.wifi_ssid);
        log::info!("Wi-Fi password: <{} characters>", self.wifi_psk.len());
        log::info!("MQTT broker: {}:{}", self.mqtt_server, self.mqtt_port);
        log::info!(
            "MQTT topics: publish to {:?}, subscribe to {:?}",
            self.mqtt_topic,
            self.mqtt_subscribe_topic
        );
    }
}
