// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn reference_date_arg() -> Arg {
    Arg::new("date")
        .long("date")
        .value_name("YYYY-MM-DD")
        .help("Reference date to compute for (defaults to today)")
}

pub fn build_cli() -> Command {
    Command::new("dailyroll")
        .version(crate_version!())
        .about("Daily spending allowance with rollover of unspent money")
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("tx")
                .about("Record and inspect spending")
                .subcommand(
                    Command::new("add")
                        .about("Record a spend")
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Day of the spend (defaults to now)"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("Quick Entry"),
                        ),
                )
                .subcommand(json_args(
                    Command::new("list").about("List spending, newest first").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize)),
                    ),
                ))
                .subcommand(
                    Command::new("rm").about("Remove a spend by id").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("expense")
                .about("Fixed monthly expenses deducted from income")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").required(true))
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("General"),
                        ),
                )
                .subcommand(json_args(Command::new("list")))
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("settings")
                .about("Income, name and display settings")
                .subcommand(json_args(Command::new("show")))
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("income").long("income"))
                        .arg(Arg::new("username").long("username"))
                        .arg(Arg::new("currency-symbol").long("currency-symbol")),
                ),
        )
        .subcommand(json_args(
            Command::new("week")
                .about("Weekly rollover summaries")
                .arg(reference_date_arg())
                .arg(
                    Arg::new("weeks")
                        .long("weeks")
                        .value_parser(value_parser!(u32))
                        .help("Number of weeks to compute (default 4)"),
                )
                .arg(
                    Arg::new("all")
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .help("Include weeks that are not offered yet"),
                )
                .arg(
                    Arg::new("week")
                        .long("week")
                        .value_parser(value_parser!(u32))
                        .conflicts_with("all")
                        .help("Show a single week by number, visible or not"),
                ),
        ))
        .subcommand(json_args(
            Command::new("today")
                .about("Today's adjusted allowance")
                .arg(reference_date_arg()),
        ))
        .subcommand(Command::new("doctor").about("Check stored data for problems"))
}
