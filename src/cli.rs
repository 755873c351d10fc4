use clap::{ArgGroup, Parser};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "zonetab")]
#[command(version)]
#[command(about = "Look up timezones by country and countries by timezone", long_about = None)]
#[command(group(
    ArgGroup::new("query")
        .required(true)
        .args(["country", "timezone", "locale", "list_countries", "list_timezones"])
))]
#[command(after_help = "Examples:\n  \
  zonetab -z zone.tab -k backward -c US          timezones used in the US\n  \
  zonetab -z zone.tab -k backward -t US/Eastern  countries using US/Eastern\n  \
  zonetab -p -L fr_CA.UTF-8                      primary timezone for a locale")]
pub struct Cli {
    /// Zone table path or HTTP URL
    #[arg(short = 'z', long, value_name = "FILE", env = "ZONETAB_ZONE_TAB")]
    pub zone_tab: String,

    /// Links table path or HTTP URL
    #[arg(short = 'k', long, value_name = "FILE", env = "ZONETAB_LINKS")]
    pub links: String,

    /// List timezones used in a country
    #[arg(short = 'c', long, value_name = "CODE")]
    pub country: Option<String>,

    /// List countries using a timezone (aliases are followed)
    #[arg(short = 't', long, value_name = "TZ")]
    pub timezone: Option<String>,

    /// List timezones used in the country of a locale
    #[arg(short = 'L', long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Print only the primary entry
    #[arg(short = 'p', long)]
    pub primary: bool,

    /// List all known countries
    #[arg(long)]
    pub list_countries: bool,

    /// List all timezones from the zone table
    #[arg(long)]
    pub list_timezones: bool,

    /// Attempts per HTTP download on timeouts and connect errors
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub max_retry: u32,

    /// More log output (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode, errors only
    #[arg(short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
