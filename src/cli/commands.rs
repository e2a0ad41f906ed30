use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// `asca` - terminal dashboard for the ASCA multi-agent coaching backend.
#[derive(Parser, Debug)]
#[command(name = "asca")]
#[command(version)]
#[command(about = "Talk to the ASCA multi-agent student coaching backend.", long_about = None)]
pub struct Cli {
    /// Backend URL for this invocation (overrides config and ASCA_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print the decoded payload as JSON instead of the rendered view
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Self-reported wellness flags shared by `wellness` and `full`.
#[derive(Args, Debug, Clone, Default)]
pub struct WellnessArgs {
    /// Current mood (e.g. focused, tired, anxious)
    #[arg(long)]
    pub mood: Option<String>,

    /// Stress level, 1-10
    #[arg(long)]
    pub stress: Option<u8>,

    /// Hours slept last night
    #[arg(long)]
    pub sleep: Option<f64>,

    /// Energy level, 1-10
    #[arg(long)]
    pub energy: Option<u8>,
}

impl WellnessArgs {
    pub fn is_empty(&self) -> bool {
        self.mood.is_none() && self.stress.is_none() && self.sleep.is_none() && self.energy.is_none()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that the backend is up and list its agents
    Health,

    /// Analyze one assignment from a file
    Analyze {
        /// JSON array or TOML `[[assignments]]` file
        file: PathBuf,

        /// Assignment id to analyze (default: first in the file)
        #[arg(long)]
        id: Option<String>,
    },

    /// Estimate total workload and stress across assignments
    Workload {
        /// Assignments file (default: built-in demo assignments)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Build a week schedule (analyzer + scheduler agents)
    Schedule {
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Send no preferences and let the backend use its defaults
        #[arg(long)]
        default_preferences: bool,
    },

    /// Run a wellness check (all three agents)
    Wellness {
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        wellness: WellnessArgs,
    },

    /// Full multi-agent analysis with agent communications
    Full {
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        wellness: WellnessArgs,
    },

    /// Ask the wellness agent for a break suggestion
    Break {
        /// What you have been working on
        #[arg(short, long)]
        activity: String,

        /// Minutes worked without a break
        #[arg(short, long)]
        minutes: u32,
    },

    /// Show resolved configuration
    Status,
}
