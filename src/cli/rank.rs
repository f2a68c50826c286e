//! `tradecraft rank`: score every item and list the most profitable.

use tabled::Tabled;

use crate::cli::{data, output, RankArgs};
use crate::domain::{ItemId, ProfitInfo};
use crate::error::Result;
use crate::resolver::rank_items;

#[derive(Tabled)]
struct RankRow {
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Obtain")]
    obtain: String,
    #[tabled(rename = "Cost")]
    cost: String,
    #[tabled(rename = "Sell")]
    sell: String,
    #[tabled(rename = "Margin")]
    margin: String,
    #[tabled(rename = "Sales/h")]
    velocity: String,
    #[tabled(rename = "Score")]
    score: i64,
}

pub async fn execute(args: RankArgs) -> Result<()> {
    let workspace = data::load(&args.data)?;
    let mut ranking = workspace.config.ranking.clone();
    if args.limit.is_some() {
        ranking.limit = args.limit;
    }

    let items: Vec<ItemId> = workspace
        .scorer
        .table()
        .iter_sorted()
        .filter(|item| item.is_marketable() || !item.exchange_methods.is_empty())
        .map(|item| item.id)
        .collect();

    let ranked = rank_items(&workspace.scorer, &items, &workspace.player, &ranking).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    output::section(&format!("Top {} of {} items", ranked.len(), items.len()));
    if ranked.is_empty() {
        output::warn("No profitable items found");
        return Ok(());
    }
    let rows = ranked.iter().map(|profit| row(&workspace, profit));
    output::table(rows);
    Ok(())
}

fn row(workspace: &data::Workspace, profit: &ProfitInfo) -> RankRow {
    let name = workspace
        .scorer
        .table()
        .get(profit.item_id)
        .map(|item| item.name.as_str())
        .unwrap_or("?");
    RankRow {
        item: format!("{name} ({})", profit.item_id),
        obtain: profit.obtain.method.clone(),
        cost: output::gil(profit.obtain.cost()),
        sell: format!("{} x{}", profit.sale.label, profit.sale.quantity),
        margin: output::gil(profit.profit_margin),
        velocity: format!("{:.2}", profit.sales_per_hour),
        score: profit.score,
    }
}
