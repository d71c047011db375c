//! Console UI
//!
//! Minimal presentation collaborator: reads RawInput lines from stdin,
//! echoes the masked FormattedCode, submits, and renders the lookup
//! outcome field by field. Layout and styling stay out of the core;
//! this adapter is just enough surface to drive the service end to end.

use crate::application::CepLookupService;
use crate::domain::value_objects::{LookupState, MAX_INPUT_LEN};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Console front end for the lookup service.
pub struct ConsoleUi {
    service: Arc<CepLookupService>,
}

impl ConsoleUi {
    pub fn new(service: Arc<CepLookupService>) -> Self {
        Self { service }
    }

    /// Run the input loop until EOF or an empty line.
    pub async fn run(&self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        println!("Consulta de CEP");
        println!("type a CEP (e.g. 01001-000), empty line quits");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                break;
            }

            self.service.input_changed(&line).await;
            let formatted = self.service.formatted().await;
            debug_assert!(formatted.len() <= MAX_INPUT_LEN);
            println!("CEP: {}", formatted);

            let mut rx = self.service.subscribe();
            let submit = {
                let service = self.service.clone();
                tokio::spawn(async move { service.submit().await })
            };

            // Loading flag while the request is in flight. A fast
            // response may have replaced Pending already; then the
            // final render below covers it.
            if rx.changed().await.is_ok() && rx.borrow().is_loading() {
                println!("buscando ...");
            }

            submit.await?;
            println!("{}", render_state(&self.service.state()));
        }

        Ok(())
    }
}

/// Render a lookup state the way the original screen presents it.
fn render_state(state: &LookupState) -> String {
    match state {
        LookupState::Idle => String::new(),
        LookupState::Pending { code } => format!("buscando {} ...", code),
        LookupState::Failed(err) => format!("erro: {}", err),
        LookupState::Resolved(address) => format!(
            "CEP: {}\nLogradouro: {}\nBairro: {}\nCidade: {}\nEstado: {}",
            address.cep, address.street, address.district, address.city, address.state
        ),
    }
}
