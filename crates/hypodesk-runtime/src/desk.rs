use crate::Result;
use crate::client::{AuthApi, HttpClient, HypothesisApi};
use crate::config::Config;
use crate::content;
use crate::services::{DashboardOps, HypothesisWorkspace};
use crate::session::{LoginFlow, SessionContext};
use hypodesk_types::{AnalysisFinding, AnalysisTab, Competitor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Entry point: configuration, backend clients and the session, opened
/// from one data directory.
pub struct HypoDesk {
    data_dir: PathBuf,
    config: Arc<Config>,
    hypotheses: Arc<dyn HypothesisApi>,
    auth: Arc<dyn AuthApi>,
    session: SessionContext,
}

impl HypoDesk {
    /// Open with the HTTP backend. `api_override` points every service at
    /// one base URL.
    pub fn open(data_dir: PathBuf, api_override: Option<&str>) -> Result<Self> {
        let mut config = Config::load_from(&Config::path_in(&data_dir))?;
        if let Some(url) = api_override {
            config.api.override_base(url);
        }

        let client = Arc::new(HttpClient::new(&config.api)?);
        Self::with_backend(data_dir, config, client.clone(), client)
    }

    pub fn with_backend(
        data_dir: PathBuf,
        config: Config,
        hypotheses: Arc<dyn HypothesisApi>,
        auth: Arc<dyn AuthApi>,
    ) -> Result<Self> {
        let session = SessionContext::load(&data_dir)?;
        tracing::debug!(
            data_dir = %data_dir.display(),
            logged_in = session.is_logged_in(),
            "workspace opened"
        );

        Ok(Self {
            data_dir,
            config: Arc::new(config),
            hypotheses,
            auth,
            session,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionContext {
        &mut self.session
    }

    pub fn login_flow(&self) -> LoginFlow<'_> {
        LoginFlow::new(self.auth.as_ref(), self.config.api.application_code.clone())
    }

    /// Dashboard data. Requires a session.
    pub fn dashboard(&self) -> Result<DashboardOps> {
        self.session.require()?;
        Ok(DashboardOps::new(self.hypotheses.clone(), self.config.clone()))
    }

    /// Hypothesis editing. Requires a session.
    pub fn workspace(&self) -> Result<HypothesisWorkspace> {
        self.session.require()?;
        Ok(HypothesisWorkspace::new(
            self.hypotheses.clone(),
            self.config.api.user_domain_id.clone(),
        ))
    }

    pub fn analysis(
        &self,
        tab: AnalysisTab,
        competitor: Option<Competitor>,
    ) -> Result<Vec<AnalysisFinding>> {
        self.session.require()?;
        Ok(content::findings_for(tab, competitor))
    }
}
