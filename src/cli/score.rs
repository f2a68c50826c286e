//! `tradecraft score`: explain the plan for a single item.

use serde_json::json;
use tabled::Tabled;

use crate::cli::{data, output, ScoreArgs};
use crate::domain::{CartLine, ItemId, ProfitInfo};
use crate::error::Result;

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Per unit")]
    per_unit: String,
    #[tabled(rename = "Cost")]
    cost: String,
}

pub async fn execute(args: ScoreArgs) -> Result<()> {
    let workspace = data::load(&args.data)?;
    let item_id = ItemId::new(args.item_id);

    let profit = workspace.scorer.score(item_id, &workspace.player).await?;
    let arbitrage = if args.arbitrage {
        workspace
            .scorer
            .arbitrage(item_id, &workspace.player)
            .await?
    } else {
        None
    };

    if args.json {
        let body = json!({ "profit": profit, "arbitrage": arbitrage });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let name = workspace
        .scorer
        .table()
        .get(item_id)
        .map(|item| item.name.clone())
        .unwrap_or_default();
    output::section(&format!("{name} ({item_id})"));

    match &profit {
        Some(profit) => print_profit(&workspace, profit),
        None => output::warn("Item cannot be profitably obtained and sold"),
    }

    if let Some(arb) = arbitrage {
        output::section("Arbitrage");
        output::key_value(
            "Buy",
            format!(
                "{} x{} on world {}",
                output::gil(arb.away.price_per_unit),
                arb.away.quantity,
                arb.away.world_id
            ),
        );
        output::key_value(
            "Sell against",
            format!(
                "{} on world {}",
                output::gil(arb.home.price_per_unit),
                arb.home.world_id
            ),
        );
        output::key_value("Margin/unit", output::gil(arb.margin_per_unit));
        output::key_value("Score", arb.score);
    } else if args.arbitrage {
        output::note("No arbitrage opportunity");
    }
    Ok(())
}

fn print_profit(workspace: &data::Workspace, profit: &ProfitInfo) {
    output::key_value("Obtain", &profit.obtain.method);
    output::key_value("Cost", output::gil(profit.obtain.cost()));
    output::key_value("Effort", format!("{:.3}", profit.obtain.effort));
    output::key_value(
        "Sell",
        format!(
            "{} x{} ({})",
            profit.sale.label, profit.sale.quantity, profit.sale.channel
        ),
    );
    output::key_value("Sale value", output::gil(profit.sale.value));
    output::key_value("Margin", output::gil(profit.profit_margin));
    output::key_value("Sales/h", format!("{:.3}", profit.sales_per_hour));
    output::key_value("Competition", format!("{:.2}", profit.competition_factor));
    output::key_value("Score", profit.score);

    output::section("Shopping cart");
    let rows = profit
        .obtain
        .cart
        .sorted_lines()
        .into_iter()
        .map(|line| line_row(workspace, line));
    output::table(rows);
}

fn line_row(workspace: &data::Workspace, line: &CartLine) -> LineRow {
    let name = workspace
        .scorer
        .table()
        .get(line.item_id)
        .map(|item| item.name.as_str())
        .unwrap_or("?");
    LineRow {
        item: name.to_string(),
        quantity: line.quantity,
        source: line.description.clone(),
        per_unit: format!("{:.1}", line.cost_per_unit()),
        cost: output::gil(line.cost()),
    }
}
