use clap::Parser;

#[derive(Parser)]
#[command(name = "bannr")]
#[command(about = "Scan hosts for SSH pre-authentication banners.")]
pub struct CommandLine {
    /// Target IP address or CIDR range (piped stdin takes precedence)
    #[arg(short = 't', long)]
    pub target: Option<String>,

    /// Number of concurrent workers, also the queue depth
    #[arg(short = 'n', long, default_value_t = 100)]
    pub workers: usize,

    /// Also print hosts that return no banner
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Per-host handshake timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
