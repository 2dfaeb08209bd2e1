use crate::render::dashboard_text;
use clap::Args;
use synergy_select::config::AppConfig;
use synergy_select::error::AppError;
use synergy_select::team::{
    Department, HttpGenerationClient, LifecyclePhase, ParameterCollector,
    RequestLifecycleController,
};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct GenerateArgs {
    /// Department to staff (defaults to Engineering)
    #[arg(long)]
    pub(crate) department: Option<String>,
    /// Team size, clamped to 3-30 (defaults to 12)
    #[arg(long)]
    pub(crate) team_size: Option<String>,
    /// Total monthly budget in dollars, 10000-1000000 (defaults to 100000)
    #[arg(long)]
    pub(crate) budget: Option<String>,
    /// Print the dashboard as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn collect_parameters(args: &GenerateArgs) -> Result<ParameterCollector, AppError> {
    let mut form = ParameterCollector::new();
    if let Some(label) = args.department.as_deref() {
        form.select_department_label(label)?;
    }
    if let Some(raw) = args.team_size.as_deref() {
        form.enter_team_size(raw)?;
    }
    if let Some(raw) = args.budget.as_deref() {
        form.enter_total_budget(raw)?;
    }
    Ok(form)
}

pub(crate) async fn run_generate(config: &AppConfig, args: GenerateArgs) -> Result<(), AppError> {
    let form = collect_parameters(&args)?;
    let client = HttpGenerationClient::new(config.service.base_url.clone())?;
    let mut controller = RequestLifecycleController::new(client);

    let submission = form.submit(|request| controller.begin(request))?;
    info!(
        service = %config.service.base_url,
        environment = ?config.environment,
        "requesting team recommendation"
    );
    let outcome = controller.dispatch(&submission).await;

    match controller.complete(submission, outcome) {
        LifecyclePhase::Succeeded(result) => {
            let dashboard = result.dashboard();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&dashboard)?);
            } else {
                print!("{}", dashboard_text(&dashboard));
            }
            Ok(())
        }
        LifecyclePhase::Failed(message) => Err(AppError::Generation(message.clone())),
        other => Err(AppError::Generation(format!(
            "request ended in unexpected phase {}",
            other.label()
        ))),
    }
}

pub(crate) fn run_departments() {
    for department in Department::ordered() {
        println!("{}", department.label());
    }
}

pub(crate) async fn run_health(config: &AppConfig) -> Result<(), AppError> {
    let client = HttpGenerationClient::new(config.service.base_url.clone())?;
    let health = client.health().await?;
    println!("{}: {}", client.base_url(), health.status);
    Ok(())
}
