use clap::Parser;

/// Define the application arguments
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse() -> Self {
        <Args as Parser>::parse()
    }
}
