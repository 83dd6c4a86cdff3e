use elsa::{Command, Coordinator, PrinterConfig, PrinterKind, Result, DEFAULT_PORT, POLL_INTERVAL};

use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let kind: PrinterKind = std::env::var("PRINTER_TYPE")
        .expect("set ENV variable PRINTER_TYPE")
        .parse()
        .expect("PRINTER_TYPE is one of: halot, wifi_box");
    let host = std::env::var("PRINTER_HOST").expect("set ENV variable PRINTER_HOST");
    let port = match std::env::var("PRINTER_PORT") {
        Ok(port) => port.parse().expect("PRINTER_PORT is a port number"),
        Err(_) => DEFAULT_PORT,
    };
    let password = std::env::var("PRINTER_PASSWORD").ok();
    let model = std::env::var("PRINTER_MODEL").ok();

    let config = PrinterConfig {
        kind,
        host,
        port,
        password,
        model,
    };

    let name = config.model.clone().unwrap_or_else(|| "Creality".to_string());
    let mut coordinator = Coordinator::new(&config);

    info!("polling {} at {}:{}", name, config.host, config.port);

    let mut interval = time::interval(POLL_INTERVAL);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = interval.tick() => {
                coordinator.refresh().await;
                info!("{} status: {:?}", name, coordinator.projected_status());
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match coordinator.send_command(Command::parse(line)).await {
                    Ok(()) => info!("sent command {}", line),
                    Err(err) => error!("error sending command {}: {}", line, err),
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    info!("shutting down");

    Ok(())
}
