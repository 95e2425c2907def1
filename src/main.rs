use clap::Parser;
use std::io::{BufRead, Write};

use termfolio::commands::{CommandResult, SideEffect};
use termfolio::content::{ContentSource, DirSource, StaticSource};
use termfolio::terminal::{Terminal, TerminalConfig};

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "A portfolio site pretending to be a shell")]
#[command(version)]
struct Cli {
    /// Execute a single command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Build the site from content files under this directory
    /// (looks for <route>/content.md or content.txt)
    #[arg(long = "content-dir")]
    content_dir: Option<String>,

    /// Directory the session starts in
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Output results as JSON
    #[arg(long = "json")]
    json: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let source: Box<dyn ContentSource> = match &cli.content_dir {
        Some(dir) => Box::new(DirSource::new(dir)),
        None => Box::new(StaticSource::sample_site()),
    };

    let config = TerminalConfig {
        default_path: cli.cwd.clone().unwrap_or_else(|| "/".to_string()),
        ..Default::default()
    };

    let mut terminal = match Terminal::with_config(source.as_ref(), config).await {
        Ok(terminal) => terminal,
        Err(e) => {
            eprintln!("termfolio: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(line) = cli.command {
        let outcome = terminal.exec(&line).await;
        render_results(&outcome.results, cli.json);
        let failed = outcome.results.iter().any(|r| !r.success);
        std::process::exit(if failed { 1 } else { 0 });
    }

    repl(&mut terminal, cli.json).await;
}

/// Interactive loop: prompt, read, execute, render.
async fn repl(terminal: &mut Terminal, json: bool) {
    println!(
        "termfolio {} (type 'help' for available commands, Ctrl-D to quit)",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("{} ", terminal.prompt());
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let outcome = terminal.exec(trimmed).await;
        render_results(&outcome.results, json);

        if !json {
            for result in &outcome.results {
                if result.side_effects.contains(&SideEffect::HistoryClear) {
                    // wipe the real screen too
                    print!("\x1B[2J\x1B[H");
                }
            }
        }
    }
}

fn render_results(results: &[CommandResult], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string(results).unwrap_or_else(|_| "[]".to_string())
        );
        return;
    }
    for result in results {
        if let Some(error) = &result.error {
            println!("{}", error.message);
        } else if !result.output.is_empty() {
            println!("{}", result.output);
        }
    }
}
