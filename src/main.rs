use calorie_page::core::ConfigProvider;
use calorie_page::utils::error::ErrorSeverity;
use calorie_page::utils::{logger, validation::Validate};
use calorie_page::{CaloriePage, CliConfig, Command, MemoryPage, PageError, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting calorie-page CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => run(&cli.command, config).await,
            Err(e) => Err(e),
        },
        None => run(&cli.command, cli.clone()).await,
    };

    match result {
        Ok(markup) => {
            println!("{}", markup);
        }
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

/// 執行指令並回傳目標元素渲染後的內容
async fn run<C>(command: &Command, config: C) -> Result<String, PageError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;

    let ids = config.element_ids().clone();
    let page = MemoryPage::standard(&ids);
    let controller = CaloriePage::new(page.clone(), config)?;

    let target = match command {
        Command::Total { calorie1, calorie2 } => {
            page.set_value(&ids.calorie1, calorie1).await?;
            page.set_value(&ids.calorie2, calorie2).await?;
            controller.get_total_calories().await?;
            &ids.total
        }
        Command::Recipes => {
            controller.get_recipes().await?;
            &ids.recipes
        }
    };

    page.markup(target)
        .await
        .ok_or_else(|| PageError::MissingElementError { id: target.clone() })
}
