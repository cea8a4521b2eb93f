use clap::{Parser, Subcommand, ValueEnum};

use fasti::Calendar;

/// Historical date conversion.
#[derive(Parser)]
#[command(
    name = "fasti",
    version,
    about = "Convert historical dates between Julian, Gregorian and Roman notation"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a date in both the Julian and the Gregorian calendar.
    Convert(DateArgs),
    /// Print Easter, the movable feasts and the computus of a year.
    Easter(EasterArgs),
    /// Print a date in Roman notation.
    Roman(DateArgs),
    /// Read a date in Roman notation.
    FromRoman(TextArgs),
    /// Read a written-out date, e.g. "August 27, 1792".
    Parse(TextArgs),
}

#[derive(Copy, Clone, ValueEnum)]
pub enum CalendarArg {
    Julian,
    Gregorian,
}

impl From<CalendarArg> for Calendar {
    fn from(arg: CalendarArg) -> Self {
        match arg {
            CalendarArg::Julian => Calendar::Julian,
            CalendarArg::Gregorian => Calendar::Gregorian,
        }
    }
}

/// Arguments for subcommands taking a date.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Year; 1 BC is 0.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Month (1-12).
    pub month: i32,

    /// Day of month.
    pub day: i32,

    /// Calendar the date is given in.
    #[arg(short, long, value_enum, default_value = "gregorian")]
    pub calendar: CalendarArg,
}

/// Arguments for the `easter` subcommand.
#[derive(clap::Args)]
pub struct EasterArgs {
    /// Year, in Arabic or Roman numerals.
    pub year: String,

    /// Calendar to compute Easter in.
    #[arg(short, long, value_enum, default_value = "gregorian")]
    pub calendar: CalendarArg,
}

/// Arguments for subcommands reading text.
#[derive(clap::Args)]
pub struct TextArgs {
    /// Text to read; quote it if it contains spaces.
    pub text: String,

    /// Calendar the date is written in.
    #[arg(short, long, value_enum, default_value = "gregorian")]
    pub calendar: CalendarArg,
}
