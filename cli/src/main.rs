use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rpnf::{Engine, EngineOptions, ExecutionOptions, Expression, FamilyList, render_error};
use std::io::BufRead;
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// rpnf - compile and evaluate reverse-Polish-notation formulas
#[derive(Parser, Debug)]
#[command(name = "rpnf")]
#[command(about = "Evaluate RPN formulas such as \"3 4 add sqrt\"", long_about = None)]
struct Args {
    /// Comma-separated operation families to enable (e.g. "basic,trig")
    #[arg(long, default_value = "all")]
    families: FamilyList,

    /// Run formulas on the VM without the arity checker gate
    #[arg(long)]
    no_verify: bool,

    /// Repeat each phase N times and report the mean time
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    repeat: u32,

    /// Formula to evaluate (if not provided, reads lines from stdin)
    expression: Option<String>,
}

/// Run `f` `repeat` times, returning the last result and the mean duration.
fn timed<R>(repeat: u32, mut f: impl FnMut() -> R) -> (R, Duration) {
    let start = Instant::now();
    let mut result = f();
    for _ in 1..repeat {
        result = f();
    }
    (result, start.elapsed() / repeat)
}

/// Compile, time and evaluate one formula. Returns false if it failed to compile.
fn interpret_input(engine: &Engine, input: &str, repeat: u32) -> bool {
    let (compiled, elapsed) = timed(repeat, || engine.try_compile::<f64>(input));
    println!(
        "Converting string to expression: {} seconds",
        elapsed.as_secs_f64()
    );

    let expr: Expression<f64> = match compiled {
        Ok(expr) => expr,
        Err(e) => {
            render_error(input, &e);
            return false;
        }
    };

    let (result, elapsed) = timed(repeat, || engine.run(&expr));
    println!("Evaluating expression: {} seconds", elapsed.as_secs_f64());
    println!("Evaluation status: {}", result.status);
    println!("Final value: {}", result.value);

    true
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the level, WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let engine = Engine::new(EngineOptions {
        families: args.families.0,
        execution: ExecutionOptions {
            verify: !args.no_verify,
        },
    });
    tracing::debug!(families = ?engine.catalog().families(), verify = !args.no_verify, "Engine ready");

    if let Some(expr) = args.expression {
        return Ok(if interpret_input(&engine, &expr, args.repeat) {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // Line mode: one formula per line, the exit code reflects every line.
    let mut all_compiled = true;
    for line in std::io::stdin().lock().lines() {
        let line = line.into_diagnostic()?;
        if line.trim().is_empty() {
            continue;
        }
        all_compiled &= interpret_input(&engine, &line, args.repeat);
    }

    Ok(if all_compiled {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
