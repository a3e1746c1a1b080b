//! Terminal front end — stdin prompts for the form and the admin action.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::admin::AdminPrompt;
use crate::form::controller::{AdvanceOutcome, StepFormController};
use crate::form::message::STEP_MSG_ID;
use crate::form::model::field_ids;
use crate::form::state::FormStep;
use crate::surface::HeadlessPage;

/// Fields asked on each page, with their labels.
fn page_fields(step: FormStep) -> &'static [(&'static str, &'static str)] {
    match step {
        FormStep::Basic => &[
            (field_ids::NAME, "姓名"),
            (field_ids::GENDER, "性别 (男/女/其他)"),
            (field_ids::AGE, "年龄 (选填)"),
            (field_ids::CONTACT, "联系方式"),
        ],
        FormStep::Career => &[
            (field_ids::LOCATION, "所在地 (选填)"),
            (field_ids::INDUSTRY, "主要从事行业"),
            (field_ids::JOB_ROLE, "职务或角色"),
        ],
        FormStep::Preference => &[
            (field_ids::PREFERENCE_TYPE, "投资偏好类型 (RWA投资/RWA孵化)"),
            (field_ids::INVESTMENT_PREFERENCE, "投资偏好"),
            (field_ids::INCUBATION_INFO, "RWA孵化产业及参与资金"),
            (field_ids::INVESTMENT_EXPERIENCE, "投资经验 (选填)"),
            (field_ids::TECH_ADAPTABILITY, "技术适应度 (选填)"),
        ],
        FormStep::Extra => &[
            (field_ids::HIGH_NET_WORTH, "是否高净值 (选填)"),
            (field_ids::EXPECTED_INVESTMENT, "预期投资额 (选填)"),
        ],
    }
}

/// Line-based terminal: prompts on stderr, answers from stdin or any
/// other line source.
pub struct Terminal<R = BufReader<Stdin>> {
    lines: Mutex<Lines<R>>,
}

impl Terminal {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin + Send> Terminal<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }

    /// Print `label` and read one line. `None` on EOF or read error.
    pub async fn ask(&self, label: &str) -> Option<String> {
        eprint!("{label}: ");
        match self.lines.lock().await.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Error reading stdin: {}", e);
                None
            }
        }
    }

    /// Walk the form page by page until it is completed, redirected, or
    /// stdin runs out.
    pub async fn run_form(&self, controller: &StepFormController, page: &HeadlessPage) {
        controller.initialize().await;

        loop {
            let state = controller.state().await;
            if state.completed {
                eprintln!("✅ 提交完成");
                return;
            }
            let current = state.current;
            eprintln!("\n── 第{current}页 ──");

            for (id, label) in page_fields(current) {
                if !field_is_shown(page, id) {
                    continue;
                }
                let Some(value) = self.ask(label).await else {
                    eprintln!();
                    return;
                };
                page.set_field(id, &value);
                if *id == field_ids::PREFERENCE_TYPE {
                    controller.on_preference_changed();
                }
            }

            let outcome = match current.next() {
                Some(next) => controller.advance_to_step(next).await,
                None => controller.submit_final().await,
            };

            match outcome {
                AdvanceOutcome::Redirected { target, .. } => {
                    eprintln!("➡️  {target}");
                    return;
                }
                AdvanceOutcome::Advanced(_) | AdvanceOutcome::Completed => {}
                _ => {
                    if let Some(msg) = page.text(STEP_MSG_ID).filter(|m| !m.is_empty()) {
                        eprintln!("⚠️  {msg}");
                    }
                }
            }
        }
    }
}

/// Conditional text fields are only asked while their group is shown.
fn field_is_shown(page: &HeadlessPage, id: &str) -> bool {
    match id {
        field_ids::INVESTMENT_PREFERENCE | field_ids::INCUBATION_INFO => page.is_required(id),
        _ => true,
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> AdminPrompt for Terminal<R> {
    async fn confirm(&self, prompt: &str) -> bool {
        let answer = self.ask(&format!("{prompt} [y/N]")).await.unwrap_or_default();
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "是")
    }

    async fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    async fn reload(&self) {
        eprintln!("↻ 已刷新");
    }
}
