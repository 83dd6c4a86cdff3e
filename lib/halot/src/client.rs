use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};

use crate::{generate_token, Error, Result};

const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(10);

pub const GET_PRINT_STATUS: &str = "GET_PRINT_STATUS";

type Stream = WebSocketStream<MaybeTlsStream<TcpStream>>;

#[derive(Serialize)]
struct Envelope<'c> {
    cmd: &'c str,
    token: String,
}

/// Client for Halot resin printers. Every call opens its own connection,
/// performs a single request/response exchange and closes the socket.
#[derive(Clone)]
pub struct Client {
    host: String,
    port: u16,
    password: String,
}

impl Client {
    pub fn new(host: String, port: u16, password: String) -> Client {
        Client {
            host,
            port,
            password,
        }
    }

    pub async fn print_status(&self) -> Result<Map<String, Value>> {
        let fields = self.exchange(GET_PRINT_STATUS).await?;

        // an invalid token is signalled in-band
        if let Some("TOKEN_ERROR") = fields.get("printStatus").and_then(Value::as_str) {
            return Err(Error::TokenRejected);
        }

        Ok(fields)
    }

    pub async fn send_command(&self, command: &str) -> Result<()> {
        let response = self.exchange(command).await?;

        match response.get("status").and_then(Value::as_str) {
            Some("ok") => Ok(()),
            _ => Err(Error::CommandRejected(Value::Object(response))),
        }
    }

    async fn exchange(&self, cmd: &str) -> Result<Map<String, Value>> {
        let uri = format!("ws://{}:{}/", self.host, self.port);
        let envelope = Envelope {
            cmd,
            token: generate_token(&self.password)?,
        };

        let (mut stream, _) = timeout(EXCHANGE_TIMEOUT, connect_async(uri)).await??;

        let text = serde_json::to_string(&envelope)?;
        debug!("sent {}", text);
        stream.send(Message::Text(text.into())).await?;

        let fields = timeout(EXCHANGE_TIMEOUT, read_fields(&mut stream)).await??;

        _ = stream.close(None).await;

        Ok(fields)
    }
}

async fn read_fields(stream: &mut Stream) -> Result<Map<String, Value>> {
    loop {
        match stream.next().await.ok_or(Error::StreamClosed)?? {
            Message::Text(text) => {
                debug!("received {}", text);
                return Ok(serde_json::from_str(&text)?);
            }
            Message::Ping(payload) => stream.send(Message::Pong(payload)).await?,
            Message::Close(_) => return Err(Error::StreamClosed),
            message => return Err(Error::UnexpectedMessage(message)),
        }
    }
}
