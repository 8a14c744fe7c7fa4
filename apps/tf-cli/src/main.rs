use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tf_app::run_service;

/// 1D compressible PISO solver for a pipe segment carrying liquid/vapor
/// sodium.
#[derive(Parser)]
#[command(name = "tf-cli")]
#[command(about = "Pipe-flow PISO solver", long_about = None)]
struct Cli {
    /// Path to a YAML configuration file. Missing fields fall back to the
    /// scenario S1 defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    n: Option<usize>,
    #[arg(long)]
    l: Option<f64>,
    #[arg(long)]
    dt: Option<f64>,
    #[arg(long = "t-max")]
    t_max: Option<f64>,
    #[arg(long = "u-inlet")]
    u_inlet: Option<f64>,
    #[arg(long = "u-outlet")]
    u_outlet: Option<f64>,
    #[arg(long = "p-outlet")]
    p_outlet: Option<f64>,

    #[arg(long)]
    turbulence: bool,
    /// Disable the Rhie–Chow correction (enabled by default).
    #[arg(long = "rhie-chow", default_value_t = true)]
    rhie_chow: bool,

    /// Output profile path.
    #[arg(long, default_value = "profile.csv")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> tf_app::AppResult<()> {
    let mut config = run_service::load_config(cli.config.as_deref())?;

    if let Some(n) = cli.n {
        config.n = n;
    }
    if let Some(l) = cli.l {
        config.l = l;
    }
    if let Some(dt) = cli.dt {
        config.dt = dt;
    }
    if let Some(t_max) = cli.t_max {
        config.t_max = t_max;
    }
    if let Some(u_inlet) = cli.u_inlet {
        config.u_inlet = u_inlet;
    }
    if let Some(u_outlet) = cli.u_outlet {
        config.u_outlet = u_outlet;
    }
    if let Some(p_outlet) = cli.p_outlet {
        config.p_outlet = p_outlet;
    }
    config.turbulence_enabled = cli.turbulence;
    config.rhie_chow_enabled = cli.rhie_chow;

    let report = run_service::run(&config)?;
    run_service::write_output(&cli.output, &report)?;
    Ok(())
}
