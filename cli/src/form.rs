use foodmap_core::domain::{
    common::entities::app_errors::CoreError,
    submission::{
        entities::{Category, Field, FormState, Notification, NotificationKind},
        ports::ApiClient,
        services::FormController,
    },
};
use tokio::{
    io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, Lines},
    time::sleep_until,
};

const CLEAR_VALUE: &str = ":clear";

fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "가게 이름",
        Field::Category => "카테고리",
        Field::Location => "위치",
        Field::PriceRange => "가격대",
        Field::RecommendedMenu => "추천 메뉴 (쉼표로 구분)",
        Field::Review => "한줄평",
        Field::SubmitterName => "제보자 이름",
        Field::SubmitterEmail => "제보자 이메일",
    }
}

enum SuccessAction {
    Input(std::io::Result<Option<String>>),
    Expired,
}

/// Interactive terminal rendering of the submission form.
pub struct FormSession<A: ApiClient, R, W> {
    controller: FormController<A>,
    input: Lines<R>,
    output: W,
}

impl<A, R, W> FormSession<A, R, W>
where
    A: ApiClient,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(controller: FormController<A>, input: Lines<R>, output: W) -> Self {
        Self {
            controller,
            input,
            output,
        }
    }

    /// Runs until the input closes or the user quits.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let keep_going = match self.controller.tick() {
                FormState::Submitted => self.success_view().await?,
                FormState::Editing | FormState::Submitting => self.edit_and_submit().await?,
            };
            if !keep_going {
                break;
            }
        }
        self.say("안녕히 가세요!\n").await?;
        Ok(())
    }

    pub fn controller(&self) -> &FormController<A> {
        &self.controller
    }

    async fn edit_and_submit(&mut self) -> anyhow::Result<bool> {
        self.say("\n🍽️ 새로운 맛집 제보하기\n").await?;
        self.say(&format!(
            "(빈 줄: 현재 값 유지, '{CLEAR_VALUE}': 값 지우기)\n"
        ))
        .await?;

        for field in Field::ALL {
            if !self.prompt_field(field).await? {
                return Ok(false);
            }
        }

        self.say("[맛집 제보하기] Enter로 제출, q로 종료: ").await?;
        match self.input.next_line().await? {
            None => return Ok(false),
            Some(line) if line.trim().eq_ignore_ascii_case("q") => return Ok(false),
            Some(_) => {}
        }

        if !self.controller.is_submit_enabled() {
            return Ok(true);
        }

        self.say("제출 중...\n").await?;
        match self.controller.submit().await {
            Ok(_) => {}
            Err(CoreError::Validation(errors)) => {
                self.say("입력값을 확인해 주세요:\n").await?;
                for (field, message) in errors {
                    self.say(&format!("  - {field}: {message}\n")).await?;
                }
            }
            Err(e) => tracing::debug!("Submission not accepted: {}", e),
        }

        if let Some(notification) = self.controller.take_notification() {
            self.notify(&notification).await?;
        }

        Ok(true)
    }

    async fn prompt_field(&mut self, field: Field) -> anyhow::Result<bool> {
        loop {
            if field == Field::Category {
                let options = Category::ALL
                    .iter()
                    .map(Category::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                self.say(&format!("  선택지: {options}\n")).await?;
            }
            let error_line = self
                .controller
                .errors()
                .get(field.as_str())
                .map(|message| format!("  ! {message}\n"));
            if let Some(error_line) = error_line {
                self.say(&error_line).await?;
            }

            let required = if field.is_required() { " *" } else { "" };
            let current = self.controller.draft().get(field);
            let prompt = if current.is_empty() {
                format!("{}{required}: ", label(field))
            } else {
                format!("{}{required} [{current}]: ", label(field))
            };
            self.say(&prompt).await?;

            let Some(line) = self.input.next_line().await? else {
                return Ok(false);
            };

            let value = match line.trim() {
                "" => return Ok(true),
                CLEAR_VALUE => "",
                _ => line.as_str(),
            };

            match self.controller.set_field(field, value) {
                Ok(()) => return Ok(true),
                Err(e @ CoreError::UnknownCategory(_)) => {
                    self.say(&format!("  ! {e}\n")).await?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    async fn success_view(&mut self) -> anyhow::Result<bool> {
        self.say("\n✅ 제보 감사합니다!\n").await?;
        self.say("여러분의 제보로 캠퍼스 푸드맵이 더욱 풍성해집니다.\n")
            .await?;
        self.say("[다른 맛집 제보하기] Enter (잠시 후 자동으로 돌아갑니다): ")
            .await?;

        let Some(deadline) = self.controller.reset_deadline() else {
            self.controller.submit_another();
            return Ok(true);
        };

        let action = tokio::select! {
            line = self.input.next_line() => SuccessAction::Input(line),
            _ = sleep_until(deadline) => SuccessAction::Expired,
        };

        match action {
            SuccessAction::Input(line) => {
                if line?.is_none() {
                    return Ok(false);
                }
                self.controller.submit_another();
            }
            SuccessAction::Expired => {
                self.say("\n").await?;
                self.controller.tick();
            }
        }

        Ok(true)
    }

    async fn notify(&mut self, notification: &Notification) -> anyhow::Result<()> {
        let marker = match notification.kind {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✖",
        };
        self.say(&format!("{marker} {}\n", notification.message))
            .await
    }

    async fn say(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
