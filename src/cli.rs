// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn date_range(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("from")
            .long("from")
            .value_name("YYYY-MM-DD")
            .help("Start of the date range (inclusive)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .value_name("YYYY-MM-DD")
            .help("End of the date range (inclusive)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .about("Single-user personal finance tracker with a flat-file ledger")
        .version(clap::crate_version!())
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_name("PATH")
                .help("Directory holding the account, category and ledger files"),
        )
        .subcommand(Command::new("init").about("Create the data directory, stores and ledger"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add an account")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("opening")
                                .long("opening")
                                .required(true)
                                .value_name("AMOUNT")
                                .help("Opening balance"),
                        ),
                )
                .subcommand(Command::new("list").about("List accounts and balances")),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_name("expense|income"),
                        )
                        .arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(
                    Command::new("list").about("List categories, defaults first").arg(
                        Arg::new("type")
                            .long("type")
                            .value_name("expense|income")
                            .help("Restrict to one transaction type"),
                    ),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Post a transaction against an account")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .value_name("YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_name("expense|income"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(date_range(
                    Command::new("list")
                        .about("List ledger rows, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))),
        )
        .subcommand(
            Command::new("report")
                .about("Aggregated views over the ledger")
                .subcommand(json_flags(date_range(
                    Command::new("daily").about("Daily Expense and Income sums"),
                )))
                .subcommand(json_flags(date_range(
                    Command::new("monthly").about("Monthly Expense and Income sums"),
                )))
                .subcommand(json_flags(date_range(
                    Command::new("heatmap").about("Category-by-month expense sums"),
                ))),
        )
        .subcommand(
            Command::new("export").about("Export data").subcommand(
                date_range(Command::new("transactions").about("Write filtered ledger rows as CSV"))
                    .arg(
                        Arg::new("out")
                            .long("out")
                            .value_name("PATH")
                            .help("Output file, default transactions_{today}.csv"),
                    ),
            ),
        )
}
