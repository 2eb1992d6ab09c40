use clap::Parser;
use kitchen_timer_cli::CliContext;
use kitchen_timer_cli::logging;
use kitchen_timer_cli::readline;
use kitchen_timer_cli::shell::respond;
use std::io::Write;

#[derive(Parser)]
#[command(version, about = "kitchen timer shell")]
struct Args {
    /// Deliver ticks from `tick`/`watch` instead of background tasks
    #[arg(long)]
    manual: bool,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let args = Args::parse();
    let _log_guard = logging::init();

    let ctx = if args.manual {
        CliContext::manual()
    } else {
        CliContext::new()
    };

    while let Some(line) = readline()? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                writeln!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    Ok(())
}
