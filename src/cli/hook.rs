//! Deployment lifecycle hooks
//!
//! A deployment host calls `swagger-ui-export hook <event>` at each lifecycle
//! step. Events without a registered hook are accepted and ignored.

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::swagger_ui;
use crate::error::Result;

/// Lifecycle events that trigger a build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Fired by the host after a successful deployment
    AfterDeploy,
    /// Fired by the explicit `swaggerUi` command
    SwaggerUi,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 2] = [LifecycleEvent::AfterDeploy, LifecycleEvent::SwaggerUi];

    /// Host-side event name
    pub fn name(self) -> &'static str {
        match self {
            LifecycleEvent::AfterDeploy => "after:deploy:deploy",
            LifecycleEvent::SwaggerUi => "swaggerUi:swaggerUi",
        }
    }

    /// Look up a registered event by its host-side name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|event| event.name() == name)
    }
}

/// Run the hook registered for `event`, if any
pub async fn run(opts: &GlobalOptions, event: &str) -> Result<()> {
    match LifecycleEvent::from_name(event) {
        Some(event) => {
            debug!("Running hook for {}", event.name());
            swagger_ui::run(opts).await
        }
        None => {
            debug!("No hook registered for {}", event);
            Ok(())
        }
    }
}
