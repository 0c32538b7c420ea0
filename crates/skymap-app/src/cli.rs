use clap::Parser;

/// Sky map: keeps layers of sky geometry in sync with a render thread.
#[derive(Parser, Debug)]
#[command(name = "skymap", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override, as a tracing filter directive (e.g. `skymap=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// How long to run before shutting down, in seconds.
    #[arg(long, default_value_t = 5)]
    pub seconds: u64,

    /// Observer latitude override, degrees north.
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Observer longitude override, degrees east.
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["skymap"]);
        assert_eq!(args.seconds, 5);
        assert!(args.config.is_none());
        assert!(args.lat.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn negative_coordinates_parse() {
        let args = Args::parse_from(["skymap", "--lat", "-33.9", "--lon", "151.2", "--seconds", "1"]);
        assert_eq!(args.lat, Some(-33.9));
        assert_eq!(args.lon, Some(151.2));
        assert_eq!(args.seconds, 1);
    }
}
