//! StepFormController — validates the page being left, submits it, and
//! moves the visible page forward once the server accepts it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::api::FormApi;
use crate::error::ValidationError;
use crate::surface::FormSurface;

use super::conditional::{ConditionalTargets, toggle_conditional_fields};
use super::message::{hide_step_msg, show_step_msg};
use super::model::{PageData, PreferenceType, StepSubmission};
use super::state::{FormPageState, FormStep};
use super::validation::validate_page;

/// Shown when the server rejects a page without saying why.
pub const SUBMIT_FAILED_MSG: &str = "提交失败，请重试";
/// Shown when the request never produced a usable reply.
pub const NETWORK_ERROR_MSG: &str = "网络错误，请重试";

/// What a submission attempt ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The server accepted the page and `0` is now visible.
    Advanced(FormStep),
    /// The server accepted the page and asked for navigation to `target`.
    Redirected { step: FormStep, target: String },
    /// The final page was accepted without a redirect.
    Completed,
    /// Local validation failed; nothing was sent.
    Invalid(ValidationError),
    /// The server answered with a failure; carries the message shown.
    Refused(String),
    /// The request did not complete or the reply was unreadable.
    TransportFailed,
    /// Another submission is still waiting for its reply.
    Busy,
    /// There is no page before the requested one.
    Ignored,
}

/// Releases the in-flight flag when dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Drives the four-page form.
pub struct StepFormController {
    api: Arc<dyn FormApi>,
    surface: Arc<dyn FormSurface>,
    targets: ConditionalTargets,
    state: RwLock<FormPageState>,
    in_flight: AtomicBool,
}

impl StepFormController {
    pub fn new(api: Arc<dyn FormApi>, surface: Arc<dyn FormSurface>) -> Self {
        Self {
            api,
            surface,
            targets: ConditionalTargets::default(),
            state: RwLock::new(FormPageState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Use a different pair of conditional groups.
    pub fn with_targets(mut self, targets: ConditionalTargets) -> Self {
        self.targets = targets;
        self
    }

    /// Snapshot of the page state.
    pub async fn state(&self) -> FormPageState {
        self.state.read().await.clone()
    }

    /// Page-load setup: show the current page only and sync the conditional
    /// groups with the selector's initial value.
    pub async fn initialize(&self) {
        let current = self.state.read().await.current;
        self.show_page(current).await;
        self.on_preference_changed();
    }

    /// Re-apply the conditional groups after the preference selector changed.
    pub fn on_preference_changed(&self) -> PreferenceType {
        toggle_conditional_fields(self.surface.as_ref(), &self.targets)
    }

    /// Validate and submit the page before `target`; on acceptance make
    /// `target` the visible page.
    pub async fn advance_to_step(&self, target: FormStep) -> AdvanceOutcome {
        let Some(leaving) = target.previous() else {
            tracing::debug!(%target, "No page before target, ignoring");
            return AdvanceOutcome::Ignored;
        };
        self.validate_and_submit(leaving, Some(target)).await
    }

    /// Submit the last page. Its fields are all optional.
    pub async fn submit_final(&self) -> AdvanceOutcome {
        self.validate_and_submit(FormStep::Extra, None).await
    }

    async fn validate_and_submit(&self, leaving: FormStep, target: Option<FormStep>) -> AdvanceOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!(page = %leaving, "Submission already in flight");
            return AdvanceOutcome::Busy;
        };

        let data = PageData::read(leaving, self.surface.as_ref());
        if let Err(e) = validate_page(&data) {
            tracing::debug!(page = %leaving, "Validation failed: {}", e);
            show_step_msg(self.surface.as_ref(), &e.to_string());
            return AdvanceOutcome::Invalid(e);
        }
        hide_step_msg(self.surface.as_ref());

        self.submit(StepSubmission::from(data), target).await
    }

    async fn submit(&self, submission: StepSubmission, target: Option<FormStep>) -> AdvanceOutcome {
        let page = submission.step;
        tracing::debug!(%page, "Submitting page");

        let reply = match self.api.submit_step(&submission).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(%page, "Page submission failed: {}", e);
                show_step_msg(self.surface.as_ref(), NETWORK_ERROR_MSG);
                return AdvanceOutcome::TransportFailed;
            }
        };

        if !reply.success {
            let msg = reply.message_or(SUBMIT_FAILED_MSG).to_string();
            tracing::info!(%page, "Server refused page: {}", msg);
            show_step_msg(self.surface.as_ref(), &msg);
            return AdvanceOutcome::Refused(msg);
        }

        match target {
            Some(target) => self.show_page(target).await,
            None => self.state.write().await.completed = true,
        }

        if let Some(redirect) = reply.redirect {
            tracing::info!(%page, %redirect, "Following redirect");
            self.surface.navigate(&redirect);
            return AdvanceOutcome::Redirected {
                step: target.unwrap_or(page),
                target: redirect,
            };
        }

        match target {
            Some(target) => AdvanceOutcome::Advanced(target),
            None => AdvanceOutcome::Completed,
        }
    }

    async fn show_page(&self, target: FormStep) {
        for step in FormStep::ALL {
            self.surface.set_visible(&step.container_id(), step == target);
        }
        self.state.write().await.show(target);
    }
}
