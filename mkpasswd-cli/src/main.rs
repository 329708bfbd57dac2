use clap::Parser;
use mkpasswd::{Constraints, Error, generate};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mkpasswd")]
#[command(about = "Generate one or more random passwords according to the options selected on the command line")]
struct Args {
    /// Minimum number of lower-case characters
    #[arg(short = 'c', long, default_value_t = 2, value_name = "NUM")]
    lower: usize,

    /// Minimum number of upper-case characters
    #[arg(short = 'C', long, default_value_t = 2, value_name = "NUM")]
    upper: usize,

    /// Minimum number of digits
    #[arg(short = 'd', long, default_value_t = 2, value_name = "NUM")]
    digits: usize,

    /// Minimum number of special characters
    #[arg(short = 's', long, default_value_t = 1, value_name = "NUM")]
    special: usize,

    /// Length of the password(s) to generate
    #[arg(short = 'l', long, default_value_t = 12, value_name = "LENGTH")]
    length: usize,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1, value_name = "COUNT")]
    count: usize,

    /// Alternate left and right hands
    #[arg(short = '2', long)]
    alternate: bool,

    /// Use only distinct characters (never uses anything in the set 01IOl|)
    #[arg(short = 'D', long)]
    distinct: bool,

    /// Characters to never use in passwords
    #[arg(short = 'S', long, value_name = "LIST")]
    skip_characters: Option<String>,

    /// Also generate a hash suitable for use in a password file
    #[arg(short = 'H', long)]
    hash: bool,

    /// Log level (overrides RUST_LOG)
    #[arg(long, value_name = "LEVEL", hide = true)]
    loglevel: Option<String>,
}

impl Args {
    fn constraints(&self) -> Constraints {
        Constraints {
            length: self.length,
            lower: self.lower,
            upper: self.upper,
            digits: self.digits,
            special: self.special,
            alternate: self.alternate,
            distinct: self.distinct,
            skip_characters: self
                .skip_characters
                .as_deref()
                .map(|s| s.chars().collect())
                .unwrap_or_default(),
        }
    }
}

/// Logs go to stderr so stdout carries nothing but passwords.
fn init_logging(loglevel: Option<&str>) {
    let filter = match loglevel {
        Some(level) => {
            EnvFilter::try_new(level.trim()).unwrap_or_else(|_| EnvFilter::new("warn"))
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    init_logging(args.loglevel.as_deref());

    if args.hash {
        warn!("password file hash output is not implemented; ignoring --hash");
    }

    let constraints = args.constraints();
    for _ in 0..args.count {
        println!("{}", generate(&constraints)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_documented_surface() {
        let args = Args::try_parse_from(["mkpasswd"]).unwrap();
        let constraints = args.constraints();

        assert_eq!(constraints.length, 12);
        assert_eq!(constraints.lower, 2);
        assert_eq!(constraints.upper, 2);
        assert_eq!(constraints.digits, 2);
        assert_eq!(constraints.special, 1);
        assert!(!constraints.alternate);
        assert!(!constraints.distinct);
        assert!(constraints.skip_characters.is_empty());
        assert_eq!(args.count, 1);
        assert!(!args.hash);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from([
            "mkpasswd", "-c", "3", "-C", "1", "-d", "4", "-s", "2", "-l", "20", "-n", "5",
            "-2", "-D", "-S", "abc",
        ])
        .unwrap();
        let constraints = args.constraints();

        assert_eq!(constraints.length, 20);
        assert_eq!(constraints.lower, 3);
        assert_eq!(constraints.upper, 1);
        assert_eq!(constraints.digits, 4);
        assert_eq!(constraints.special, 2);
        assert!(constraints.alternate);
        assert!(constraints.distinct);
        assert_eq!(constraints.skip_characters, vec!['a', 'b', 'c']);
        assert_eq!(args.count, 5);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "mkpasswd",
            "--length",
            "10",
            "--alternate",
            "--skip-characters",
            "!?",
            "--loglevel",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.length, 10);
        assert!(args.alternate);
        assert_eq!(args.skip_characters.as_deref(), Some("!?"));
        assert_eq!(args.loglevel.as_deref(), Some("debug"));
    }
}
