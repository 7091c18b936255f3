//! # Rendered Output
//!
//! Pure `String` builders for everything the menus print. Nothing here
//! touches the terminal, so the layouts are unit tested directly.
//!
//! ## Table Layout
//! ```text
//! ┌──────┬──────────────┬───────┬─────┐
//! │ Code │ Name         │ Price │ Qty │
//! ├──────┼──────────────┼───────┼─────┤
//! │ A1   │ Coca-Cola    │ $1.75 │  12 │
//! │ C3   │ M&Ms         │ $1.25 │   0 │
//! └──────┴──────────────┴───────┴─────┘
//! ```
//! Column widths are measured in `char`s so the currency symbol may be any
//! single-width character (`€`, `£`).

use vend_core::{Bill, BillLine, Item, Money, Receipt};

use crate::commands::owner::InventorySummary;

// =============================================================================
// Table Builder
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Table {
    columns: Vec<(&'static str, Align)>,
    rows: Vec<Vec<String>>,
}

impl Table {
    fn new(columns: &[(&'static str, Align)]) -> Self {
        Self {
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, (header, _))| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn render(&self) -> String {
        let widths = self.widths();
        let rule = |left: &str, mid: &str, right: &str| {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}\n", left, segments.join(mid), right)
        };
        let line = |cells: Vec<&str>| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .zip(&self.columns)
                .map(|((cell, width), (_, align))| match align {
                    Align::Left => format!(" {} ", pad_right(cell, *width)),
                    Align::Right => format!(" {} ", pad_left(cell, *width)),
                })
                .collect();
            format!("│{}│\n", padded.join("│"))
        };

        let mut out = rule("┌", "┬", "┐");
        out.push_str(&line(self.columns.iter().map(|(h, _)| *h).collect()));
        out.push_str(&rule("├", "┼", "┤"));
        for row in &self.rows {
            out.push_str(&line(row.iter().map(String::as_str).collect()));
        }
        out.push_str(&rule("└", "┴", "┘"));
        out
    }
}

fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", text, " ".repeat(fill))
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{}{}", " ".repeat(fill), text)
}

// =============================================================================
// Screens
// =============================================================================

/// A one-line title in a double-ruled box.
pub fn render_banner(title: &str) -> String {
    let width = title.chars().count() + 4;
    format!(
        "╔{rule}╗\n║  {title}  ║\n╚{rule}╝\n",
        rule = "═".repeat(width),
        title = title
    )
}

/// Stock listing shown to both the owner and the user.
pub fn render_inventory(items: &[Item], symbol: &str) -> String {
    if items.is_empty() {
        return "No items in the machine.\n".to_string();
    }

    let mut table = Table::new(&[
        ("Code", Align::Left),
        ("Name", Align::Left),
        ("Price", Align::Right),
        ("Qty", Align::Right),
    ]);
    for item in items {
        table.row(vec![
            item.code.clone(),
            item.name.clone(),
            item.price().format_with(symbol),
            if item.is_sold_out() {
                "sold out".to_string()
            } else {
                item.quantity.to_string()
            },
        ]);
    }
    table.render()
}

/// Owner view: the stock table plus its total value.
pub fn render_inventory_summary(summary: &InventorySummary, symbol: &str) -> String {
    let mut out = render_inventory(&summary.items, symbol);
    out.push_str(&format!(
        "Total inventory value: {}\n",
        summary.total_value.format_with(symbol)
    ));
    out
}

pub fn render_bill(bill: &Bill, symbol: &str) -> String {
    priced_lines_table(&bill.lines, bill.total(), symbol)
}

pub fn render_receipt(receipt: &Receipt, machine_name: &str, symbol: &str) -> String {
    let mut out = render_banner(&format!("{} Receipt", machine_name));
    out.push_str(&format!("Transaction: {}\n", receipt.transaction_id));
    out.push_str(&format!("Date:        {}\n", receipt.formatted_timestamp()));
    out.push_str(&priced_lines_table(&receipt.lines, receipt.total(), symbol));

    if !receipt.sold_out.is_empty() {
        out.push_str(&format!("Now sold out: {}\n", receipt.sold_out.join(", ")));
    }
    out.push_str("Thank you for your purchase!\n");
    out
}

/// Line table closed by a TOTAL row; shared by the bill and the receipt.
fn priced_lines_table(lines: &[BillLine], total: Money, symbol: &str) -> String {
    let mut table = Table::new(&[
        ("Code", Align::Left),
        ("Name", Align::Left),
        ("Qty", Align::Right),
        ("Unit", Align::Right),
        ("Total", Align::Right),
    ]);
    for line in lines {
        table.row(vec![
            line.code.clone(),
            line.name.clone(),
            line.quantity.to_string(),
            line.unit_price().format_with(symbol),
            line.line_total().format_with(symbol),
        ]);
    }
    table.row(vec![
        String::new(),
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        total.format_with(symbol),
    ]);
    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vend_core::cart::add_to_cart;
    use vend_core::checkout::{compute_bill, confirm_purchase};
    use vend_core::{Cart, Inventory, PurchaseOptions};

    fn stock() -> Inventory {
        let mut inventory = Inventory::new();
        inventory
            .add_item("A1", "Coca-Cola", Money::from_cents(175), 12)
            .unwrap();
        inventory
            .add_item("C3", "M&Ms", Money::from_cents(125), 2)
            .unwrap();
        inventory
    }

    fn assert_rectangular(table: &str) {
        let widths: Vec<usize> = table
            .lines()
            .filter(|l| l.starts_with(['┌', '│', '├', '└']))
            .map(|l| l.chars().count())
            .collect();
        assert!(!widths.is_empty());
        assert!(widths.iter().all(|w| *w == widths[0]), "{}", table);
    }

    #[test]
    fn test_inventory_table() {
        let items: Vec<Item> = stock().items().cloned().collect();
        let out = render_inventory(&items, "$");

        assert!(out.contains("│ Coca-Cola │"));
        assert!(out.contains("$1.75"));
        assert_rectangular(&out);
    }

    #[test]
    fn test_inventory_table_with_wide_symbol() {
        let items: Vec<Item> = stock().items().cloned().collect();
        let out = render_inventory(&items, "€");
        assert!(out.contains("€1.25"));
        assert_rectangular(&out);
    }

    #[test]
    fn test_sold_out_and_empty() {
        let mut inventory = stock();
        inventory.set_quantity("C3", 0).unwrap();
        let items: Vec<Item> = inventory.items().cloned().collect();
        assert!(render_inventory(&items, "$").contains("sold out"));

        assert_eq!(render_inventory(&[], "$"), "No items in the machine.\n");
    }

    #[test]
    fn test_summary_shows_total_value() {
        let inventory = stock();
        let summary = InventorySummary {
            items: inventory.items().cloned().collect(),
            total_value: inventory.compute_total_stock_value(),
        };
        let out = render_inventory_summary(&summary, "$");
        assert!(out.ends_with("Total inventory value: $23.50\n"));
    }

    #[test]
    fn test_bill_and_receipt() {
        let mut inventory = stock();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, "A1", 2, &inventory).unwrap();
        add_to_cart(&mut cart, "C3", 2, &inventory).unwrap();

        let bill = render_bill(&compute_bill(&cart, &inventory).unwrap(), "$");
        assert!(bill.contains("TOTAL"));
        assert!(bill.contains("$6.00"));
        assert_rectangular(&bill);

        let options = PurchaseOptions::default();
        let receipt = confirm_purchase(&mut cart, &mut inventory, &options).unwrap();
        let out = render_receipt(&receipt, "Lobby Machine", "$");
        assert!(out.contains("Lobby Machine Receipt"));
        let id_line = format!("Transaction: {}", receipt.transaction_id);
        assert!(out.contains(&id_line));
        assert!(out.contains("Now sold out: C3"));
        assert!(out.contains("$6.00"));
    }

    #[test]
    fn test_receipt_reuses_bill_table() {
        let mut inventory = stock();
        let mut cart = Cart::new();
        add_to_cart(&mut cart, "A1", 1, &inventory).unwrap();
        add_to_cart(&mut cart, "C3", 1, &inventory).unwrap();

        let bill = render_bill(&compute_bill(&cart, &inventory).unwrap(), "£");
        let options = PurchaseOptions::default();
        let receipt = confirm_purchase(&mut cart, &mut inventory, &options).unwrap();
        let out = render_receipt(&receipt, "Lobby Machine", "£");

        assert!(out.contains(&bill), "{}\n---\n{}", bill, out);
        assert_eq!(out.matches("TOTAL").count(), 1);
        assert_rectangular(&bill);
    }

    #[test]
    fn test_banner() {
        let banner = render_banner("Vending Machine");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert!(lines[1].contains("Vending Machine"));
    }
}
