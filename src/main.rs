use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use settler::application::service::SettlementService;
use settler::domain::debt::{Amount, Debt};
use settler::domain::request::AllocationMode;
use settler::error::SettlementError;
use settler::infrastructure::in_memory::{InMemoryDebtStore, InMemoryPaymentLedger};
use settler::interfaces::csv::debt_reader::DebtReader;
use settler::interfaces::csv::plan_writer::PlanWriter;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input debts CSV file with an `id,balance` header. Row order is the
    /// allocation priority order.
    input: PathBuf,

    /// Cash amount to distribute over the debt queue
    #[arg(long)]
    amount: Decimal,

    /// Clear credit (negative-balance) debts first and unconditionally
    #[arg(long)]
    priority: bool,

    /// Manual cap for one debt, as ID=AMOUNT. Repeatable; priority mode only.
    #[arg(long = "set-amount", value_parser = parse_override, requires = "priority")]
    set_amount: Vec<(u64, Decimal)>,

    /// Emit the full plan as JSON instead of per-line CSV
    #[arg(long)]
    json: bool,
}

fn parse_override(raw: &str) -> Result<(u64, Decimal), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=AMOUNT, got `{raw}`"))?;
    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("bad debt id `{id}`: {e}"))?;
    let value = value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| format!("bad amount `{value}`: {e}"))?;
    Ok((id, value))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let amount = Amount::new(cli.amount)
        .map_err(SettlementError::from)
        .into_diagnostic()?;

    let file = File::open(cli.input).into_diagnostic()?;
    let mut queue: Vec<Debt> = Vec::new();
    for debt in DebtReader::new(file).debts() {
        queue.push(debt.into_diagnostic()?);
    }

    let debt_ids: Vec<u64> = queue.iter().map(|d| d.id).collect();
    let net_outstanding: Decimal = queue.iter().map(|d| d.balance.value()).sum();

    let service = SettlementService::new(
        Box::new(InMemoryDebtStore::seeded(queue)),
        Box::new(InMemoryPaymentLedger::new()),
    );

    let mode = if cli.priority {
        AllocationMode::Priority
    } else {
        AllocationMode::Sequential
    };
    let overrides: HashMap<u64, Decimal> = cli.set_amount.into_iter().collect();

    let plan = service
        .preview(amount, &debt_ids, overrides, mode)
        .await
        .into_diagnostic()?;

    if cli.amount > net_outstanding {
        eprintln!(
            "warning: payment of {} exceeds net outstanding total of {}; this plan cannot be submitted",
            cli.amount, net_outstanding
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&plan).into_diagnostic()?);
    } else {
        let stdout = io::stdout();
        let mut writer = PlanWriter::new(stdout.lock());
        writer.write_plan(&plan).into_diagnostic()?;
        eprintln!(
            "applied {} of {}, leftover {}",
            plan.total_applied, cli.amount, plan.leftover
        );
    }

    Ok(())
}
