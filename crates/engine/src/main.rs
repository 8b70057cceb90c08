//! WorldCodex runner - exercises naming and search against a project snapshot.
//!
//! Usage:
//!   worldcodex search <query>
//!   worldcodex next-name <project-id> <category>
//!   worldcodex create <project-id> <category> [name]

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worldcodex_domain::{ElementCategory, ProjectId};
use worldcodex_engine::config::{load_dotenv_from_repo_root, EngineConfig};
use worldcodex_engine::App;

const USAGE: &str = "usage: worldcodex <search <query> | next-name <project-id> <category> | create <project-id> <category> [name]>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worldcodex_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = EngineConfig::from_env();
    let app = App::in_memory(config.data_path.as_deref())
        .await
        .context("Failed to load project snapshot")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        bail!(USAGE);
    };

    match command.as_str() {
        "search" => {
            app.use_cases.search.set_query(rest.join(" "));
            let results = app.use_cases.search.search_all().await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        "next-name" => {
            let [project_id, category] = rest else {
                bail!(USAGE);
            };
            let (project_id, category) = parse_target(project_id, category)?;
            let name = app
                .use_cases
                .naming
                .generate_default_name
                .execute(project_id, category)
                .await;
            println!("{}", name);
        }
        "create" => {
            let (project_id, category, name) = match rest {
                [project_id, category] => (project_id, category, None),
                [project_id, category, name @ ..] => (project_id, category, Some(name.join(" "))),
                _ => bail!(USAGE),
            };
            let (project_id, category) = parse_target(project_id, category)?;
            let element = app
                .use_cases
                .naming
                .create_element
                .execute(project_id, name, category)
                .await?;
            println!("{}", serde_json::to_string_pretty(&element)?);
        }
        other => bail!("unknown command '{}'\n{}", other, USAGE),
    }

    Ok(())
}

fn parse_target(project_id: &str, category: &str) -> anyhow::Result<(ProjectId, ElementCategory)> {
    let project_id = project_id
        .parse::<ProjectId>()
        .context("Invalid project id")?;
    let category = category
        .parse::<ElementCategory>()
        .context("Invalid category")?;
    Ok((project_id, category))
}
