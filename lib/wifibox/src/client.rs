use std::time::Duration;

use chipp_http::{HttpClient, NoInterceptor};
use log::trace;
use serde_json::{Map, Value};
use tokio::time::timeout;

use crate::{Command, Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Creality Wi-Fi Box. The box speaks plain HTTP GET with
/// query-string parameters against a single CSP endpoint; responses are
/// JSON bodies. Requests are stateless, there is no session to keep.
pub struct Client {
    host: String,
    port: u16,
    http: HttpClient<NoInterceptor>,
}

impl Client {
    pub fn new(host: String, port: u16) -> Client {
        // every request carries a full URL, the base is never used
        let http = HttpClient::new("http://0.0.0.0").unwrap();

        Client { host, port, http }
    }

    pub async fn info(&self) -> Result<Map<String, Value>> {
        let url = format!(
            "http://{}:{}/protocal.csp?fname=Info&opt=main&function=get",
            self.host, self.port
        );

        let body = self.get(url).await?;
        parse_fields(&body)
    }

    pub async fn send_command(&self, command: Command) -> Result<()> {
        let url = format!(
            "http://{}:{}/protocal.csp?fname=net&opt=iot_conf&function=set&{}",
            self.host,
            self.port,
            command.query()
        );

        let body = self.get(url).await?;
        parse_command_response(&body)
    }

    async fn get(&self, url: String) -> Result<Vec<u8>> {
        let request = self.http.new_request_with_url(url)?;

        let body = timeout(
            REQUEST_TIMEOUT,
            self.http.perform_request(request, |req, res| {
                if res.status_code == 200 {
                    Ok(res.body)
                } else {
                    Err((req, res).into())
                }
            }),
        )
        .await??;

        trace!("response: {}", String::from_utf8_lossy(&body));

        Ok(body)
    }
}

fn parse_fields(body: &[u8]) -> Result<Map<String, Value>> {
    if body.is_empty() {
        return Err(Error::EmptyBody);
    }

    Ok(serde_json::from_slice(body)?)
}

fn parse_command_response(body: &[u8]) -> Result<()> {
    let fields = parse_fields(body)?;

    // the box reports success as error == "0"
    match fields.get("error") {
        Some(value) if value.as_str() == Some("0") || value.as_u64() == Some(0) => Ok(()),
        _ => Err(Error::Rejected(Value::Object(fields))),
    }
}
