mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use fasti::{Calendar, Easter, HistoricalDate, RomanDate, to_roman_date};

use crate::cli::{Cli, Command, DateArgs, EasterArgs, TextArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert(args) => convert(args),
        Command::Easter(args) => easter(args),
        Command::Roman(args) => roman(args),
        Command::FromRoman(args) => from_roman(args),
        Command::Parse(args) => parse(args),
    }
}

fn date_from_args(args: &DateArgs) -> Result<HistoricalDate> {
    let calendar = Calendar::from(args.calendar);
    HistoricalDate::new(args.year, args.month, args.day, calendar)
        .with_context(|| format!("{}-{}-{} ({calendar})", args.year, args.month, args.day))
}

fn print_both_calendars(date: &HistoricalDate) {
    println!("Julian:    {}", date.to_julian());
    println!("Gregorian: {}", date.to_gregorian());
    println!("JDN:       {}", date.day_count().jdn());
}

fn convert(args: DateArgs) -> Result<()> {
    let date = date_from_args(&args)?;
    print_both_calendars(&date);
    Ok(())
}

fn easter(args: EasterArgs) -> Result<()> {
    let calendar = Calendar::from(args.calendar);
    let easter = Easter::from_text(&args.year, calendar)
        .with_context(|| format!("year {:?}", args.year))?;
    info!(year = %args.year, %calendar, "computed Easter");

    for (name, date) in [
        ("Septuagesima", easter.septuagesima),
        ("Ash Wednesday", easter.ash_wednesday),
        ("Easter Sunday", easter.sunday),
        ("Ascension", easter.ascension),
        ("Pentecost", easter.pentecost),
        ("Trinity Sunday", easter.trinity_sunday),
        ("Corpus Christi", easter.corpus_christi),
        ("Advent Sunday", easter.advent_sunday),
    ] {
        println!("{name:<17}{date}");
    }
    println!("{:<17}{}", "Epact", easter.epact);
    println!("{:<17}{}", "Golden number", easter.golden_number);
    println!("{:<17}{}", "Concurrent", easter.concurrent);
    println!("{:<17}{}", "Dominical letter", easter.dominical_letter);
    Ok(())
}

fn roman(args: DateArgs) -> Result<()> {
    let date = date_from_args(&args)?;
    let roman = to_roman_date(&date).with_context(|| format!("{date}"))?;
    println!("{roman}");
    Ok(())
}

fn from_roman(args: TextArgs) -> Result<()> {
    let roman = RomanDate::from_string(&args.text, args.calendar.into())
        .with_context(|| format!("Roman date {:?}", args.text))?;
    let date = roman.to_date()?;
    println!("{roman}");
    print_both_calendars(&date);
    Ok(())
}

fn parse(args: TextArgs) -> Result<()> {
    let date = HistoricalDate::from_text(&args.text, args.calendar.into())
        .with_context(|| format!("date {:?}", args.text))?;
    print_both_calendars(&date);
    Ok(())
}
