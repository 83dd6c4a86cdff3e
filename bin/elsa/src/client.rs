use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::{FetchError, SendError};
use crate::Command;

/// The raw key/value payload last received from a printer, kept exactly
/// as the device sent it.
pub type RawStatus = Map<String, Value>;

/// Capability set the coordinator is written against. One implementation
/// per wire protocol, selected once at construction.
#[async_trait]
pub trait PrinterClient: Send + Sync {
    async fn fetch_status(&self) -> Result<RawStatus, FetchError>;

    async fn send_command(&self, command: &Command) -> Result<(), SendError>;

    /// Whether commands ride on the same authenticated session as polls.
    /// If true, the coordinator refuses commands while the printer is
    /// considered offline.
    fn commands_need_session(&self) -> bool;
}

#[async_trait]
impl PrinterClient for halot::Client {
    async fn fetch_status(&self) -> Result<RawStatus, FetchError> {
        self.print_status().await.map_err(FetchError::Halot)
    }

    async fn send_command(&self, command: &Command) -> Result<(), SendError> {
        halot::Client::send_command(self, command.halot_command())
            .await
            .map_err(SendError::Halot)
    }

    fn commands_need_session(&self) -> bool {
        true
    }
}

#[async_trait]
impl PrinterClient for wifibox::Client {
    async fn fetch_status(&self) -> Result<RawStatus, FetchError> {
        self.info().await.map_err(FetchError::WifiBox)
    }

    async fn send_command(&self, command: &Command) -> Result<(), SendError> {
        let command = match command {
            Command::Pause => wifibox::Command::Pause,
            Command::Resume => wifibox::Command::Resume,
            Command::Stop => wifibox::Command::Stop,
            Command::Custom(name) => return Err(SendError::Unsupported(name.clone())),
        };

        wifibox::Client::send_command(self, command)
            .await
            .map_err(SendError::WifiBox)
    }

    fn commands_need_session(&self) -> bool {
        false
    }
}
