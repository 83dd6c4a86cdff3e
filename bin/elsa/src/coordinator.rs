use std::time::Duration;

use chrono::{DateTime, Local};
use log::{debug, error};

use crate::client::{PrinterClient, RawStatus};
use crate::error::CommandError;
use crate::status::{self, ProjectedStatus};
use crate::{Command, PrinterConfig, PrinterKind};

pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Reachability of the printer as seen by the poll loop. A failed poll is
/// the only way in, the next successful poll is the only way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    Online,
    Offline,
}

impl Connection {
    pub fn transition(self, poll_succeeded: bool) -> Connection {
        if poll_succeeded {
            Connection::Online
        } else {
            Connection::Offline
        }
    }
}

/// Owns the printer connection state for one device: schedules nothing by
/// itself, but every poll and every command goes through here, so there is
/// a single mutation path for the raw snapshot.
pub struct Coordinator {
    kind: PrinterKind,
    client: Box<dyn PrinterClient>,
    data: RawStatus,
    connection: Connection,
    last_refreshed: Option<DateTime<Local>>,
}

impl Coordinator {
    pub fn new(config: &PrinterConfig) -> Coordinator {
        let client: Box<dyn PrinterClient> = match config.kind {
            PrinterKind::Halot => Box::new(halot::Client::new(
                config.host.clone(),
                config.port,
                config.password.clone().unwrap_or_default(),
            )),
            PrinterKind::WifiBox => {
                Box::new(wifibox::Client::new(config.host.clone(), config.port))
            }
        };

        Self::with_client(config.kind, client)
    }

    pub fn with_client(kind: PrinterKind, client: Box<dyn PrinterClient>) -> Coordinator {
        Coordinator {
            kind,
            client,
            data: RawStatus::new(),
            // optimistic until the first poll says otherwise
            connection: Connection::Online,
            last_refreshed: None,
        }
    }

    /// Polls the printer once. Never fails from the caller's point of
    /// view: errors flip the connection state and are logged, the previous
    /// snapshot stays readable.
    pub async fn refresh(&mut self) {
        match self.client.fetch_status().await {
            Ok(data) => {
                debug!("fetched data: {:?}", data);
                self.data = data;
                self.last_refreshed = Some(Local::now());
                self.connection = self.connection.transition(true);
            }
            Err(err) => {
                if err.is_auth_rejected() {
                    error!("printer rejected the token: {}", err);
                } else {
                    error!("error fetching data: {}", err);
                }
                self.connection = self.connection.transition(false);
            }
        }
    }

    pub async fn send_command(&mut self, command: Command) -> Result<(), CommandError> {
        if self.is_offline() && self.client.commands_need_session() {
            return Err(CommandError::Offline);
        }

        self.client
            .send_command(&command)
            .await
            .map_err(CommandError::Send)
    }

    pub fn is_offline(&self) -> bool {
        self.connection == Connection::Offline
    }

    pub fn connection(&self) -> Connection {
        self.connection
    }

    /// The unmodified payload of the last successful poll.
    pub fn data(&self) -> &RawStatus {
        &self.data
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Local>> {
        self.last_refreshed
    }

    pub fn projected_status(&self) -> ProjectedStatus {
        status::project(self.kind, &self.data, self.is_offline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, SendError};

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct FakeClient {
        responses: Mutex<VecDeque<Result<RawStatus, FetchError>>>,
        sent: Mutex<Vec<Command>>,
        need_session: bool,
    }

    impl FakeClient {
        fn new(need_session: bool) -> Arc<FakeClient> {
            Arc::new(FakeClient {
                responses: Mutex::new(VecDeque::new()),
                sent: Mutex::new(Vec::new()),
                need_session,
            })
        }

        fn push(&self, response: Result<RawStatus, FetchError>) {
            self.responses.lock().unwrap().push_back(response);
        }
    }

    #[async_trait]
    impl PrinterClient for Arc<FakeClient> {
        async fn fetch_status(&self) -> Result<RawStatus, FetchError> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted response")
        }

        async fn send_command(&self, command: &Command) -> Result<(), SendError> {
            self.sent.lock().unwrap().push(command.clone());
            Ok(())
        }

        fn commands_need_session(&self) -> bool {
            self.need_session
        }
    }

    fn fields(value: Value) -> RawStatus {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn fetch_failure() -> FetchError {
        FetchError::Halot(halot::Error::StreamClosed)
    }

    #[test]
    fn test_transition() {
        assert_eq!(Connection::Online.transition(true), Connection::Online);
        assert_eq!(Connection::Online.transition(false), Connection::Offline);
        assert_eq!(Connection::Offline.transition(true), Connection::Online);
        assert_eq!(Connection::Offline.transition(false), Connection::Offline);
    }

    #[tokio::test]
    async fn test_offline_round_trip() {
        let client = FakeClient::new(true);
        client.push(Ok(fields(json!({ "printStatus": "PRINT_PROCESSING" }))));
        client.push(Err(fetch_failure()));
        client.push(Ok(fields(json!({ "printStatus": "PRINT_COMPLETE" }))));

        let mut coordinator = Coordinator::with_client(PrinterKind::Halot, Box::new(client.clone()));
        assert!(!coordinator.is_offline());

        coordinator.refresh().await;
        assert!(!coordinator.is_offline());
        assert_eq!(
            coordinator.data().get("printStatus"),
            Some(&Value::from("PRINT_PROCESSING"))
        );

        coordinator.refresh().await;
        assert!(coordinator.is_offline());
        // the last good snapshot survives the failed poll
        assert_eq!(
            coordinator.data().get("printStatus"),
            Some(&Value::from("PRINT_PROCESSING"))
        );
        assert_eq!(
            coordinator.projected_status().get("printStatusFriendly"),
            Some(&Value::from("Offline"))
        );

        coordinator.refresh().await;
        assert!(!coordinator.is_offline());
        assert_eq!(
            coordinator.data().get("printStatus"),
            Some(&Value::from("PRINT_COMPLETE"))
        );
    }

    #[tokio::test]
    async fn test_command_refused_while_offline() {
        let client = FakeClient::new(true);
        client.push(Err(fetch_failure()));

        let mut coordinator = Coordinator::with_client(PrinterKind::Halot, Box::new(client.clone()));
        coordinator.refresh().await;
        assert!(coordinator.is_offline());

        let result = coordinator.send_command(Command::Pause).await;
        assert!(matches!(result, Err(CommandError::Offline)));
        // refused before any network attempt
        assert!(client.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sessionless_commands_pass_while_offline() {
        let client = FakeClient::new(false);
        client.push(Err(fetch_failure()));

        let mut coordinator = Coordinator::with_client(PrinterKind::WifiBox, Box::new(client.clone()));
        coordinator.refresh().await;
        assert!(coordinator.is_offline());

        coordinator.send_command(Command::Stop).await.unwrap();
        assert_eq!(*client.sent.lock().unwrap(), vec![Command::Stop]);
    }

    #[tokio::test]
    async fn test_refresh_stamps_time() {
        let client = FakeClient::new(true);
        client.push(Ok(RawStatus::new()));

        let mut coordinator = Coordinator::with_client(PrinterKind::Halot, Box::new(client.clone()));
        assert!(coordinator.last_refreshed().is_none());

        coordinator.refresh().await;
        assert!(coordinator.last_refreshed().is_some());
    }
}
