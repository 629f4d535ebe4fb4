/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */


//! Demo binary: pick breakfast items, or any items given on the command line.
//!
//! ```text
//! checklist
//! checklist apples bananas=Bananas "cherries=<red>Cherries</red>" -d apples
//! ```

use clap::Parser;
use r3bl_checklist::{ChooseOptions, CrosstermInputReader, Item, OutputDevice, Palette,
                     SessionOutcome, StyleSheet, choose_many,
                     logging::{self, TracingConfig}};

use crate::clap_config::CliArgs;

fn main() -> miette::Result<()> {
    let cli_args = CliArgs::parse();

    if let Some(log_file) = &cli_args.log_file {
        logging::init(TracingConfig::new_file(log_file.as_str(), cli_args.log_level))?;
    }

    let items = if cli_args.items.is_empty() {
        breakfast_items()
    } else {
        cli_args.items.iter().map(String::as_str).map(parse_item_arg).collect()
    };

    let options = ChooseOptions {
        max_height: cli_args.height,
        stylesheet: stylesheet(cli_args.round, cli_args.no_scrollbar),
        palette: Palette::from(cli_args.style),
        ..ChooseOptions::default()
    };

    tracing::info!(
        message = "main: starting session",
        item_count = items.len(),
        style = %cli_args.style
    );

    let mut output_device = OutputDevice::new_stdout();
    let mut input_reader = CrosstermInputReader;
    let outcome = choose_many(
        items,
        &cli_args.defaults,
        options,
        (&mut output_device, &mut input_reader),
    )?;

    match outcome {
        SessionOutcome::Confirmed(checked_things) => {
            println!("Got checked_things={checked_things:?}");
        }
        SessionOutcome::Cancelled => println!("Cancelled."),
    }

    Ok(())
}

fn stylesheet(round: bool, no_scrollbar: bool) -> StyleSheet {
    let stylesheet = if round {
        StyleSheet::round_style()
    } else {
        StyleSheet::default()
    };
    stylesheet.with_scrollbar(!no_scrollbar)
}

fn breakfast_items() -> Vec<Item<String>> {
    vec![
        Item::plain("eggs".to_string(), "Eggs"),
        Item::markup("bacon".to_string(), "<blue>Bacon</blue>"),
        Item::plain("croissants".to_string(), "20 Croissants"),
        Item::plain("daily".to_string(), "The breakfast of the day"),
    ]
}

/// `value` or `value=label`. A label that contains `<` is parsed as markup.
fn parse_item_arg(arg: &str) -> Item<String> {
    match arg.split_once('=') {
        Some((value, label)) if label.contains('<') => {
            Item::markup(value.to_string(), label)
        }
        Some((value, label)) => Item::plain(value.to_string(), label),
        None => Item::plain(arg.to_string(), arg),
    }
}

mod clap_config {
    use clap::Parser;
    use r3bl_checklist::{PaletteChoice, logging::LogLevel};

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "checklist")]
    #[command(about = "☑️ Check off items in the terminal")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(false))]
    pub struct CliArgs {
        /// Items as `value` or `value=label`. Labels may use markup, eg:
        /// `bacon=<blue>Bacon</blue>`. Without items, a breakfast menu is shown.
        #[arg(name = "ITEMS")]
        pub items: Vec<String>,

        /// Value to check initially. Can be repeated.
        #[arg(long = "default", short = 'd')]
        pub defaults: Vec<String>,

        /// Maximum number of rows for the list. 0 means the default of 10.
        #[arg(long, short = 't')]
        pub height: Option<usize>,

        #[arg(long, value_enum, default_value_t)]
        pub style: PaletteChoice,

        /// Use `(*)` markers instead of `[*]`.
        #[arg(long)]
        pub round: bool,

        /// Don't draw a scrollbar when the list doesn't fit.
        #[arg(long)]
        pub no_scrollbar: bool,

        /// Write logs to this file. Logging is off without it.
        #[arg(long)]
        pub log_file: Option<String>,

        #[arg(long, value_enum, default_value_t)]
        pub log_level: LogLevel,
    }
}
