//! The studio context.
//!
//! [`Studio`] is the single owner of everything a signed-in user works with:
//! one editor session, the three market widgets, the checkout form and the
//! auth state. Collaborators (market source, identity, payments) are
//! injected as trait objects; there is no global state.
//!
//! Route guarding of the editor and market-intelligence views belongs to
//! the host: it calls [`Studio::route`] or [`Studio::ensure_route`] before
//! showing them, and the editor and widget methods themselves run for any
//! auth state (the `folio` CLI works signed out). Checkout is different:
//! [`Studio::subscribe`] checks the subscription route itself, because it
//! hands a plan to the payment collaborator.

use std::sync::Arc;

use chrono::NaiveDate;
use folio_doc::{EditorSession, Surface, SwitchOutcome, TemplateCatalog};
use folio_market::{
    Completion, FixtureSource, KeywordWidget, MarketFixtures, MarketSource, NicheReport,
    NicheWidget, TitleWidget,
};
use folio_types::{NicheCategory, Timeframe};
use tracing::info;

use crate::config::StudioConfig;
use crate::identity::{AuthState, GuardDecision, IdentityProvider, MemoryIdentity, Route, User, guard};
use crate::payment::{Checkout, CheckoutState, PaymentProcessor, PlanCatalog, SimulatedProcessor};
use crate::preview::{PreviewPage, PreviewRenderer, PreviewRequest, TextPreview};
use crate::surface::RichTextSurface;
use crate::{Result, StudioError};

/// External collaborators the studio talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub market: Arc<dyn MarketSource>,
    pub identity: Arc<dyn IdentityProvider>,
    pub payments: Arc<dyn PaymentProcessor>,
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("market", &self.market.name())
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct Studio {
    config: StudioConfig,
    templates: TemplateCatalog,
    plans: PlanCatalog,
    session: EditorSession,
    keywords: KeywordWidget,
    titles: TitleWidget,
    niches: NicheWidget,
    checkout: Checkout,
    auth: AuthState,
    collaborators: Collaborators,
}

impl Studio {
    /// Widgets start out showing `fixtures`; refreshes go to the collaborators.
    pub fn new(
        config: StudioConfig,
        fixtures: &MarketFixtures,
        collaborators: Collaborators,
    ) -> Result<Self> {
        let plans = PlanCatalog::builtin();
        let plan = plans
            .default_plan()
            .cloned()
            .ok_or_else(|| StudioError::Config("plan catalog is empty".into()))?;
        Ok(Self {
            session: EditorSession::new(config.document_meta()),
            keywords: KeywordWidget::new(fixtures.keywords.clone()),
            titles: TitleWidget::new(),
            niches: NicheWidget::new(NicheReport {
                niches: fixtures.niches.clone(),
                trends: fixtures.trends.clone(),
            }),
            checkout: Checkout::new(plan),
            auth: AuthState::resolving(),
            templates: TemplateCatalog::builtin(),
            plans,
            config,
            collaborators,
        })
    }

    /// Embedded fixtures, in-memory identity and simulated payments, all
    /// with the latencies from `config`.
    pub fn with_defaults(config: StudioConfig) -> Result<Self> {
        let fixtures = Arc::new(MarketFixtures::builtin()?);
        let collaborators = Collaborators {
            market: Arc::new(FixtureSource::new(
                Arc::clone(&fixtures),
                config.latency.source_latency(),
            )),
            identity: Arc::new(MemoryIdentity::new()),
            payments: Arc::new(SimulatedProcessor::new(config.latency.payment())),
        };
        Self::new(config, &fixtures, collaborators)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn templates(&self) -> &TemplateCatalog {
        &self.templates
    }

    pub fn plans(&self) -> &PlanCatalog {
        &self.plans
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    pub fn keywords(&self) -> &KeywordWidget {
        &self.keywords
    }

    pub fn keywords_mut(&mut self) -> &mut KeywordWidget {
        &mut self.keywords
    }

    pub fn titles(&self) -> &TitleWidget {
        &self.titles
    }

    pub fn titles_mut(&mut self) -> &mut TitleWidget {
        &mut self.titles
    }

    pub fn niches(&self) -> &NicheWidget {
        &self.niches
    }

    pub fn checkout(&self) -> &Checkout {
        &self.checkout
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    // =========================================================================
    // Identity and routing
    // =========================================================================

    /// Ask the identity provider who is signed in.
    pub async fn refresh_auth(&mut self) -> &AuthState {
        self.auth.loading = true;
        let user = self.collaborators.identity.current_user().await;
        self.auth = match user {
            Some(user) => AuthState::signed_in(user),
            None => AuthState::signed_out(),
        };
        &self.auth
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self.collaborators.identity.login(email, password).await?;
        self.auth = AuthState::signed_in(user.clone());
        Ok(user)
    }

    pub async fn register(&mut self, email: &str, password: &str) -> Result<User> {
        let user = self.collaborators.identity.register(email, password).await?;
        self.auth = AuthState::signed_in(user.clone());
        Ok(user)
    }

    pub async fn sign_out(&mut self) {
        self.collaborators.identity.logout().await;
        self.auth = AuthState::signed_out();
    }

    pub fn route(&self, route: Route) -> GuardDecision {
        guard(route, &self.auth)
    }

    /// `Ok` only when `route` may render now.
    pub fn ensure_route(&self, route: Route) -> Result<()> {
        match self.route(route) {
            GuardDecision::Render => Ok(()),
            GuardDecision::Loading | GuardDecision::Redirect(_) => {
                Err(StudioError::SignInRequired(route))
            }
        }
    }

    // =========================================================================
    // Editor
    // =========================================================================

    pub fn choose_template(&mut self, id: &str) -> Result<()> {
        let template = self.templates.get(id)?;
        self.session.apply_template(template)?;
        Ok(())
    }

    /// Switch to the free-text surface and load it with the current markup.
    pub fn open_free_text(&mut self, surface: &mut dyn RichTextSurface) -> Result<SwitchOutcome> {
        let outcome = self.session.switch_surface(Surface::FreeText)?;
        surface.load(self.session.markup());
        Ok(outcome)
    }

    /// Change callback of the free-text surface.
    pub fn free_text_edited(&mut self, surface: &dyn RichTextSurface) -> Result<()> {
        self.session.free_text_changed(surface.content())?;
        Ok(())
    }

    pub fn open_structured(&mut self) -> Result<SwitchOutcome> {
        Ok(self.session.switch_surface(Surface::Structured)?)
    }

    pub fn preview(&self, date: NaiveDate) -> Result<PreviewPage> {
        let request = PreviewRequest::from_session(&self.session);
        TextPreview::new(&self.config.preview).render(&request, date)
    }

    // =========================================================================
    // Market widgets
    // =========================================================================

    pub async fn select_keyword_niche(&mut self, niche: NicheCategory) -> Completion {
        let market = Arc::clone(&self.collaborators.market);
        self.keywords.select_niche(niche, market.as_ref()).await
    }

    /// `None` when the topic is blank.
    pub async fn generate_titles(&mut self) -> Option<Completion> {
        let market = Arc::clone(&self.collaborators.market);
        self.titles.generate(market.as_ref()).await
    }

    pub async fn select_timeframe(&mut self, timeframe: Timeframe) -> Completion {
        let market = Arc::clone(&self.collaborators.market);
        self.niches.select_timeframe(timeframe, market.as_ref()).await
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    pub fn select_plan(&mut self, id: &str) -> Result<()> {
        let plan = self.plans.get(id)?.clone();
        self.checkout.select_plan(plan)?;
        Ok(())
    }

    /// Submit the checkout form. Only reachable for a signed-in user.
    pub async fn subscribe(&mut self) -> Result<&CheckoutState> {
        self.ensure_route(Route::Subscription)?;
        let payments = Arc::clone(&self.collaborators.payments);
        info!(plan = %self.checkout.plan().id, "submitting subscription");
        Ok(self.checkout.submit(payments.as_ref()).await?)
    }
}
