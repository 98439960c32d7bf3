// crates/dis-samples/src/harness.rs
// ============================================================================
// Module: Scenario Harness
// Description: Injected API client, sample environment and scenario runner.
// Purpose: Run scenarios uniformly and log failures without propagating them.
// Dependencies: dis-client, dis-config, tracing
// ============================================================================

//! ## Overview
//! [`SampleRunner`] receives its API client by constructor injection together
//! with a [`SampleEnv`]. [`run_scenario`] executes one scenario body and turns
//! its result into a [`ScenarioReport`]: API failures are logged with the HTTP
//! status and raw response body, other failures with their message. Nothing
//! is rethrown.

// ============================================================================
// SECTION: Imports
// ============================================================================

use dis_client::ActuatorOperations;
use dis_client::ApiError;
use dis_client::ClientSettings;
use dis_client::CustomerOnboarding;
use dis_client::DisClient;
use dis_client::FaceOperations;
use dis_client::MetadataOperations;
use dis_client::RequestContext;
use dis_client::SessionManagement;
use dis_config::SamplesConfig;
use tracing::error;
use tracing::info;
use tracing::info_span;

use crate::error::ScenarioError;
use crate::output::ImageWriter;
use crate::resources::ResourceLoader;
use crate::scenarios::ScenarioKind;

// ============================================================================
// SECTION: API Bound
// ============================================================================

/// Every DIS API group a scenario may call.
pub trait DisApi:
    FaceOperations
    + CustomerOnboarding
    + SessionManagement
    + MetadataOperations
    + ActuatorOperations
    + Sized
{
}

impl<T> DisApi for T where
    T: FaceOperations
        + CustomerOnboarding
        + SessionManagement
        + MetadataOperations
        + ActuatorOperations
        + Sized
{
}

// ============================================================================
// SECTION: Environment
// ============================================================================

/// Everything a scenario needs besides the API client.
#[derive(Debug, Clone)]
pub struct SampleEnv {
    /// Loaded configuration.
    pub config: SamplesConfig,
    /// Bundled and remote resource loader.
    pub resources: ResourceLoader,
    /// PNG output writer.
    pub output: ImageWriter,
}

impl SampleEnv {
    /// Builds the environment from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Resource`] when the resource loader cannot be built.
    pub fn from_config(config: SamplesConfig) -> Result<Self, ScenarioError> {
        let resources = ResourceLoader::new(
            config.resources.root.clone(),
            config.http.timeout_ms,
            &config.http.user_agent,
        )?;
        let output = ImageWriter::new(config.output.root.clone());
        Ok(Self {
            config,
            resources,
            output,
        })
    }

    /// Returns transport settings derived from the configuration.
    #[must_use]
    pub fn client_settings(&self) -> ClientSettings {
        client_settings(&self.config)
    }
}

/// Returns transport settings derived from `config`.
#[must_use]
pub fn client_settings(config: &SamplesConfig) -> ClientSettings {
    ClientSettings {
        timeout_ms: config.http.timeout_ms,
        user_agent: config.http.user_agent.clone(),
        ..ClientSettings::default()
    }
}

/// Builds a DIS client for the configured service URL and `bearer_token`.
///
/// # Errors
///
/// Returns [`ApiError`] when the base URL is invalid or the client cannot be built.
pub fn connect(config: &SamplesConfig, bearer_token: &str) -> Result<DisClient, ApiError> {
    let context = RequestContext::new(&config.dot_identity_service_url, bearer_token)?;
    DisClient::new(context, client_settings(config))
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Result of one scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioReport {
    /// Every step ran.
    Completed,
    /// The scenario stopped early; the failure has been logged.
    Failed {
        /// HTTP status for API failures, `0` otherwise.
        code: u16,
        /// Failure description.
        message: String,
    },
}

impl ScenarioReport {
    /// Returns `true` when the scenario completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Runs a scenario body and logs its failure, if any.
pub fn run_scenario<F>(name: &str, body: F) -> ScenarioReport
where
    F: FnOnce() -> Result<(), ScenarioError>,
{
    let span = info_span!("scenario", scenario = name);
    let _entered = span.enter();
    info!("scenario started");
    match body() {
        Ok(()) => {
            info!("scenario completed");
            ScenarioReport::Completed
        }
        Err(ScenarioError::Api(err)) => {
            let code = err.code();
            let body = err.response_body();
            error!(code, "Request to server failed with code: {code} and response: {body}");
            ScenarioReport::Failed {
                code,
                message: body,
            }
        }
        Err(err) => {
            error!("{err}");
            ScenarioReport::Failed {
                code: 0,
                message: err.to_string(),
            }
        }
    }
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Runs scenarios against an injected API client.
#[derive(Debug, Clone)]
pub struct SampleRunner<A> {
    /// Injected API client.
    api: A,
    /// Scenario environment.
    env: SampleEnv,
}

impl<A: DisApi> SampleRunner<A> {
    /// Creates a runner.
    #[must_use]
    pub const fn new(api: A, env: SampleEnv) -> Self {
        Self {
            api,
            env,
        }
    }

    /// Returns the injected client.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Returns the environment.
    #[must_use]
    pub const fn env(&self) -> &SampleEnv {
        &self.env
    }

    /// Runs one scenario and reports its result.
    pub fn run(&self, kind: ScenarioKind) -> ScenarioReport {
        run_scenario(kind.name(), || kind.run(&self.api, &self.env))
    }
}
