use clap::{Parser, Subcommand};

use crate::commands;
use crate::context::CliContext;

#[derive(Parser)]
#[command(version, about = "kitchen timer shell")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Tap a surface, or an existing timer with --timer
    Tap {
        #[arg(short, long)]
        timer: Option<String>,
    },
    Place {
        #[arg(short, long)]
        id: Option<String>,
    },
    Remove {
        #[arg(short, long)]
        id: String,
    },
    Tick {
        #[arg(short, long)]
        id: Option<String>,
    },
    Show {
        #[arg(short, long)]
        id: String,
    },
    List,
    Watch {
        #[arg(short, long, default_value_t = 5)]
        seconds: u64,
    },
    Config,
    Exit,
}

/// Run one shell line. Returns `Ok(true)` when the shell should quit.
pub async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "kitchen-timer".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Tap { timer }) => commands::tap(ctx, timer.as_deref()).await?,
        Some(Commands::Place { id }) => {
            commands::place(ctx, id.as_deref()).await?;
        }
        Some(Commands::Remove { id }) => commands::remove(ctx, id)?,
        Some(Commands::Tick { id }) => commands::tick(ctx, id.as_deref()),
        Some(Commands::Show { id }) => commands::show(ctx, id)?,
        Some(Commands::List) => commands::list(ctx),
        Some(Commands::Watch { seconds }) => commands::watch(ctx, *seconds).await,
        Some(Commands::Config) => commands::show_config(ctx).await,
        Some(Commands::Exit) => {
            commands::exit()?;
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitchen_timer_core::RegistryConfig;

    fn ctx() -> CliContext {
        CliContext::manual_with(RegistryConfig::default())
    }

    #[tokio::test]
    async fn place_tick_show_remove() {
        let ctx = ctx();
        respond("place --id t1", &ctx).await.unwrap();
        respond("tick --id t1", &ctx).await.unwrap();
        respond("tick", &ctx).await.unwrap();

        assert_eq!(ctx.registry.formatted("t1").as_deref(), Some("00:02"));
        assert!(respond("show --id t1", &ctx).await.is_ok());

        respond("remove --id t1", &ctx).await.unwrap();
        assert!(respond("show --id t1", &ctx).await.is_err());
    }

    #[tokio::test]
    async fn remove_unknown_reports_error() {
        let ctx = ctx();
        respond("place --id t1", &ctx).await.unwrap();

        let err = respond("remove --id ghost", &ctx).await.unwrap_err();
        assert!(err.contains("no active timer 'ghost'"));
        assert_eq!(ctx.registry.ids(), vec!["t1"]);

        respond("remove --id t1", &ctx).await.unwrap();
        assert!(respond("remove --id t1", &ctx).await.is_err());
    }

    #[tokio::test]
    async fn duplicate_place_reports_error() {
        let ctx = ctx();
        respond("place --id t1", &ctx).await.unwrap();
        let err = respond("place --id t1", &ctx).await.unwrap_err();
        assert!(err.contains("already active"));
    }

    #[tokio::test]
    async fn tap_places_then_debounces() {
        let ctx = ctx();
        respond("tap", &ctx).await.unwrap();
        respond("tap", &ctx).await.unwrap();
        assert_eq!(ctx.registry.len(), 1);

        let id = ctx.registry.ids().remove(0);
        assert!(id.starts_with("timer_"));
    }

    #[tokio::test]
    async fn exit_and_bad_input() {
        let ctx = ctx();
        assert_eq!(respond("exit", &ctx).await, Ok(true));
        assert!(respond("place --id 'unterminated", &ctx).await.is_err());
        assert!(respond("frobnicate", &ctx).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn watch_drives_manual_ticks() {
        let ctx = ctx();
        respond("place --id t1", &ctx).await.unwrap();
        respond("watch --seconds 3", &ctx).await.unwrap();
        assert_eq!(ctx.registry.formatted("t1").as_deref(), Some("00:03"));
    }
}
