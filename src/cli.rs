use std::{net::IpAddr, path::PathBuf};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "actdb", version, about = "School activities signup service")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Port to listen on (overrides the configuration file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind to (overrides the configuration file)
    #[arg(long, value_name = "ADDRESS")]
    pub bind: Option<IpAddr>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
