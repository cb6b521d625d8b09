use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::application::{AggregateSnapshot, Session, StatisticsView};
use crate::domain::{Category, Operation, OperationKind, format_cents};

/// Tally - an in-memory income and expense ledger
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Record income and expenses for one session and see the running balance")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Render the operation list and the statistics view as JSON
    #[arg(long)]
    pub json: bool,
}

/// One line typed at the prompt.
#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Record an operation (income unless --expense is given)
    Add {
        /// Amount (e.g., "100" or "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Category: Salary, Food, Transport
        #[arg(default_value = "Salary")]
        category: String,

        /// Record as an expense
        #[arg(short, long)]
        expense: bool,
    },

    /// Delete an operation by id
    #[command(alias = "rm")]
    Remove {
        /// Operation ID
        id: String,
    },

    /// List operations in the order they were added
    #[command(alias = "ls")]
    List,

    /// Show the allowed categories
    Categories,

    /// Show the running income, expense and balance
    Totals,

    /// Open the statistics view with the current totals
    Stats,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

impl Cli {
    /// Run an interactive session on stdin/stdout.
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Drive one session from `input`, writing every view to `output`.
    /// The session and its ledger live exactly as long as this call.
    pub fn run_with<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        let mut session = Session::new();

        writeln!(output, "Finance Manager (type 'help' for commands)")?;
        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }

            let command = match ShellLine::try_parse_from(words) {
                Ok(parsed) => parsed.command,
                Err(err) => {
                    write!(output, "{}", err.render())?;
                    continue;
                }
            };

            match self.execute(&mut session, command, &mut output)? {
                Flow::Continue => {}
                Flow::Quit => break,
            }
        }

        output.flush().context("Failed to flush output")?;
        Ok(())
    }

    fn execute<W: Write>(
        &self,
        session: &mut Session,
        command: ShellCommand,
        output: &mut W,
    ) -> Result<Flow> {
        match command {
            ShellCommand::Add {
                amount,
                category,
                expense,
            } => match session.add_operation(amount.as_str(), &category, !expense) {
                Ok(op) => writeln!(output, "Added {} [{}]", render_operation(&op), op.id())?,
                Err(err) => writeln!(output, "Error: {}", err)?,
            },

            ShellCommand::Remove { id } => {
                // Unparseable ids cannot match any operation, same as an unknown id.
                let removed = Uuid::parse_str(&id)
                    .ok()
                    .and_then(|id| session.delete_operation(id));
                match removed {
                    Some(op) => writeln!(output, "Removed {}", render_operation(&op))?,
                    None => writeln!(output, "No operation with id {}", id)?,
                }
            }

            ShellCommand::List => {
                self.render_operations(output, session.operations())?;
            }

            ShellCommand::Categories => {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                writeln!(output, "Categories: {}", names.join(", "))?;
            }

            ShellCommand::Totals => {
                render_totals(output, &session.totals())?;
            }

            ShellCommand::Stats => {
                let view = session.view_statistics();
                self.render_statistics(output, &view)?;
            }

            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn render_statistics<W: Write>(&self, output: &mut W, view: &StatisticsView) -> Result<()> {
        let snapshot = view.snapshot();
        if self.json {
            writeln!(output, "{}", snapshot.to_json()?)?;
            return Ok(());
        }

        writeln!(output, "Statistics")?;
        let rows = [
            ("Total Income:", snapshot.total_income),
            ("Total Expenses:", snapshot.total_expenses),
            ("Balance:", snapshot.balance),
        ];
        for (label, cents) in rows {
            writeln!(output, "{:<16} {:>14} $", label, format_cents(cents))?;
        }
        Ok(())
    }

    fn render_operations<W: Write>(&self, output: &mut W, operations: &[Operation]) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(operations)
                .context("Failed to serialize operations")?;
            writeln!(output, "{}", json)?;
            return Ok(());
        }

        writeln!(output, "Operations")?;
        if operations.is_empty() {
            writeln!(output, "  (none)")?;
        }
        for op in operations {
            writeln!(output, "  {:<40} {}", render_operation(op), op.id())?;
        }
        Ok(())
    }
}

/// `+100.00 $ (Salary)` for income, `-40.00 $ (Food)` for expenses.
fn render_operation(op: &Operation) -> String {
    let sign = match op.kind() {
        OperationKind::Income => '+',
        OperationKind::Expense => '-',
    };
    format!("{}{} $ ({})", sign, format_cents(op.amount_cents()), op.category())
}

fn render_totals<W: Write>(output: &mut W, totals: &AggregateSnapshot) -> Result<()> {
    writeln!(output, "Income: {} $", format_cents(totals.total_income))?;
    writeln!(output, "Expense: {} $", format_cents(totals.total_expenses))?;
    writeln!(output, "Balance: {} $", format_cents(totals.balance))?;
    Ok(())
}
