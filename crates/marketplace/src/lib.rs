//! Marketplace actions exposed as tools.
//!
//! Each vendor action is an [`ActionDescriptor`](soar_core::ActionDescriptor)
//! in a static table. [`invoke_action`] runs any of them against bound
//! [`Bindings`]: validate the scope, pick the integration instance, package
//! the parameters and execute.
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use soar_client::SoarClient;
//! use soar_core::ActionCall;
//! use soar_marketplace::{ActionCatalog, Bindings, invoke_action};
//!
//! let client = SoarClient::builder("https://soar.example.com")
//!     .app_key("key")
//!     .build()?;
//! let bindings = Bindings::bind(client).await?;
//! let catalog = ActionCatalog::with_enabled(["Shodan"]);
//!
//! let ping = catalog.get("shodan_ping").expect("shodan is enabled");
//! let outcome = invoke_action(&bindings, ping, ActionCall::new("523", vec![])).await;
//! println!("{}", outcome.into_envelope());
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod bindings;
pub mod catalog;
pub mod integrations;
pub mod invoke;
#[cfg(test)]
pub(crate) mod testing;

pub use backend::SoarBackend;
pub use bindings::{BindError, Bindings, CREDENTIALS_ERROR_MESSAGE};
pub use catalog::{ActionCatalog, Integration, IntegrationSummary};
pub use invoke::{invoke_action, resolve_instance};
