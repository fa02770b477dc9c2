//! CLI argument parsing with clap.

use clap::Parser;

/// Procedural album-cover placeholder generator.
#[derive(Parser, Debug)]
#[command(name = "albumart", version, about)]
pub struct Cli {
    /// Output file path (defaults to `default-album.png`).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Print the summary as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_arguments() {
        let cli = Cli::parse_from(["albumart"]);
        assert!(cli.output.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "albumart",
            "-o",
            "cover.png",
            "--config",
            "/tmp/albumart.toml",
            "--json",
            "-v",
        ]);
        assert_eq!(cli.output.as_deref(), Some("cover.png"));
        assert_eq!(cli.config.as_deref(), Some("/tmp/albumart.toml"));
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["albumart", "extra"]).is_err());
    }
}
