use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use store::model::{envelope::Envelope, headers::HeaderBag};

/// 📒 Header inspector console client. Terminal rendition of the browser
/// client: one action per invocation, rendered as three inspection panels.
#[derive(Parser, Debug)]
struct Cli {
    /// Base URL of the edge service
    #[clap(short, long, default_value = "http://localhost:3101")]
    server: String,

    #[clap(subcommand)]
    action: ClientAction,
}

#[derive(Subcommand, Debug)]
enum ClientAction {
    /// Fetch the people roster (GET /people)
    Strangers,
    /// Remove the fixed student and show the remaining rows (DELETE /student/Amy)
    Students,
}

/// Display state for one fetch, mirroring the browser client's panels
#[derive(Debug, Default)]
struct Inspection {
    data: Vec<serde_json::Value>,
    request_headers: HeaderBag,
    response_headers: BTreeMap<String, String>,
}

impl Inspection {
    fn reset(&mut self) {
        *self = Inspection::default();
    }

    fn store(
        &mut self,
        envelope: Envelope<serde_json::Value>,
        response_headers: BTreeMap<String, String>,
    ) {
        self.data = envelope.data;
        self.request_headers = envelope.request_headers;
        self.response_headers = response_headers;
    }

    fn render(&self) -> String {
        let mut output = String::new();

        output.push_str("== Request headers ==\n");

        for (name, value) in self.request_headers.iter() {
            output.push_str(&format!("{}: \"{}\"\n", name, value));
        }

        output.push_str("\n== Response headers ==\n");

        for (name, value) in &self.response_headers {
            output.push_str(&format!("{}: \"{}\"\n", name, value));
        }

        output.push_str("\n== Data ==\n");

        for row in &self.data {
            let name = row
                .get("name")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("<unnamed>");

            output.push_str(&format!("{}\n", name));
        }

        output
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let client = reqwest::Client::new();

    let mut inspection = Inspection::default();

    // Clear any previous panels before issuing the request
    inspection.reset();

    let response = match args.action {
        ClientAction::Strangers => {
            let url = format!("{}/people", args.server);

            log::info!("GET {}", url);

            client.get(&url).send().await?
        }
        ClientAction::Students => {
            let url = format!("{}/student/Amy", args.server);

            log::info!("DELETE {}", url);

            client.delete(&url).send().await?
        }
    };

    let response_headers: BTreeMap<String, String> = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    let envelope: Envelope<serde_json::Value> = response.json().await?;

    inspection.store(envelope, response_headers);

    println!("{}", inspection.render());

    Ok(())
}
