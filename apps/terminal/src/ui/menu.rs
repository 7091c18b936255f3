//! Interactive Owner / User menus.
//!
//! ```text
//! Main menu ──┬── Owner ──► setup or login ──► owner menu ──► Save and return
//!             ├── User ───► user menu (one cart per visit) ──► Exit
//!             └── Exit ───► save inventory, end session
//! ```
//!
//! Domain errors are printed and the menu re-prompts. Only terminal
//! failures (closed stdin, no TTY) end the session early.

use dialoguer::{Confirm, Input, Password, Select};
use tracing::info;
use vend_core::validation::{
    parse_quantity, parse_whole_number, validate_item_code, validate_price_cents,
    validate_stock_quantity,
};
use vend_core::{Cart, Money};

use super::render;
use crate::commands::{auth, owner, user};
use crate::error::AppResult;
use crate::state::MachineState;

// =============================================================================
// Session
// =============================================================================

/// Runs the main menu until the operator chooses Exit.
pub fn run_session(state: &mut MachineState) -> AppResult<()> {
    info!(machine = %state.machine_name(), "Session started");

    loop {
        print!("\n{}", render::render_banner(state.machine_name()));

        let selection = Select::new()
            .with_prompt("Who is using the machine?")
            .items(&["Owner", "User", "Exit"])
            .default(1)
            .interact()?;

        match selection {
            0 => report(owner_entry(state))?,
            1 => report(user_session(state))?,
            _ => break,
        }
    }

    state.save_inventory()?;
    info!("Session ended");
    println!("Goodbye!");
    Ok(())
}

/// Prints a recoverable error and carries on; terminal failures propagate.
fn report(result: AppResult<()>) -> AppResult<()> {
    match result {
        Err(err) if !err.is_fatal() => {
            println!("{}", err);
            Ok(())
        }
        other => other,
    }
}

// =============================================================================
// Owner
// =============================================================================

fn owner_entry(state: &mut MachineState) -> AppResult<()> {
    if state.gate.is_initialized() {
        let owner_id = prompt_text("Owner ID")?;
        let password = Password::new().with_prompt("Password").interact()?;
        auth::login_owner(state, &owner_id, &password)?;
        println!("Welcome back, {}.", owner_id);
    } else {
        println!("No owner account exists yet. Create one now.");
        let owner_id = prompt_text("Choose an owner ID")?;
        let password = Password::new()
            .with_prompt("Choose a password")
            .with_confirmation("Repeat the password", "Passwords do not match")
            .interact()?;
        auth::setup_owner(state, &owner_id, &password)?;
        println!("Owner account created.");
    }

    owner_menu(state)
}

fn owner_menu(state: &mut MachineState) -> AppResult<()> {
    let actions = [
        "View inventory",
        "Add item",
        "Adjust stock",
        "Set stock quantity",
        "Update price",
        "Remove item",
        "Save and return",
    ];

    loop {
        let selection = Select::new()
            .with_prompt("Owner menu")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let summary = owner::inventory_summary(state);
                print!(
                    "{}",
                    render::render_inventory_summary(&summary, state.currency_symbol())
                );
            }
            1 => report(owner_add_item(state))?,
            2 => report(owner_adjust_stock(state))?,
            3 => report(owner_set_quantity(state))?,
            4 => report(owner_update_price(state))?,
            5 => report(owner_remove_item(state))?,
            _ => {
                state.save_inventory()?;
                println!("Inventory saved.");
                return Ok(());
            }
        }
    }
}

fn owner_add_item(state: &mut MachineState) -> AppResult<()> {
    let code = prompt_code("Item code")?;

    if let Some(existing) = state.inventory.get(&code).cloned() {
        println!(
            "{} ({}) already exists with {} in stock.",
            existing.name, existing.code, existing.quantity
        );
        let restock = Confirm::new()
            .with_prompt("Add more units to it instead?")
            .default(true)
            .interact()?;
        if restock {
            let quantity = prompt_quantity("Units to add")?;
            let item = owner::restock(state, &code, quantity)?;
            println!("{} now has {} in stock.", item.name, item.quantity);
        }
        return Ok(());
    }

    let name = prompt_text("Item name")?;
    let price = prompt_price("Price")?;
    let quantity = prompt_stock("Quantity")?;

    let item = owner::add_item(state, &code, &name, price, quantity)?;
    println!(
        "Added {} ({}) at {} with {} in stock.",
        item.name,
        item.code,
        state.format_money(item.price()),
        item.quantity
    );
    Ok(())
}

fn owner_adjust_stock(state: &mut MachineState) -> AppResult<()> {
    let code = prompt_code("Item code")?;
    let delta = prompt_whole_number("Units to add (negative to remove)")?;

    let item = owner::adjust_stock(state, &code, delta)?;
    println!("{} now has {} in stock.", item.name, item.quantity);
    Ok(())
}

fn owner_set_quantity(state: &mut MachineState) -> AppResult<()> {
    let code = prompt_code("Item code")?;
    let quantity = prompt_stock("New quantity")?;

    let item = owner::set_quantity(state, &code, quantity)?;
    println!("{} now has {} in stock.", item.name, item.quantity);
    Ok(())
}

fn owner_update_price(state: &mut MachineState) -> AppResult<()> {
    let code = prompt_code("Item code")?;
    let price = prompt_price("New price")?;

    let item = owner::update_price(state, &code, price)?;
    println!(
        "{} now costs {}.",
        item.name,
        state.format_money(item.price())
    );
    Ok(())
}

fn owner_remove_item(state: &mut MachineState) -> AppResult<()> {
    let code = prompt_code("Item code")?;
    let item = state.inventory.require(&code)?.clone();

    let confirmed = Confirm::new()
        .with_prompt(format!("Remove {} ({}) from the machine?", item.name, item.code))
        .default(false)
        .interact()?;
    if confirmed {
        owner::remove_item(state, &code)?;
        println!("Removed {}.", item.name);
    }
    Ok(())
}

// =============================================================================
// User
// =============================================================================

fn user_session(state: &mut MachineState) -> AppResult<()> {
    if state.inventory.is_empty() {
        println!("The machine is empty. Please come back later.");
        return Ok(());
    }

    let actions = [
        "View items",
        "Add to cart",
        "View cart",
        "Manage cart",
        "Checkout",
        "Exit",
    ];
    let mut cart = Cart::new();

    loop {
        let selection = Select::new()
            .with_prompt(format!("User menu ({} in cart)", cart.total_quantity()))
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let items: Vec<_> = state.inventory.items().cloned().collect();
                print!(
                    "{}",
                    render::render_inventory(&items, state.currency_symbol())
                );
            }
            1 => report(user_add_to_cart(state, &mut cart))?,
            2 => report(user_view_cart(state, &cart))?,
            3 => report(user_manage_cart(state, &mut cart))?,
            4 => report(user_checkout(state, &mut cart))?,
            _ => {
                let prompt = if cart.is_empty() {
                    "Leave the user menu?"
                } else {
                    "Leave the user menu? Your cart will be emptied"
                };
                if Confirm::new().with_prompt(prompt).default(false).interact()? {
                    return Ok(());
                }
            }
        }
    }
}

fn user_add_to_cart(state: &MachineState, cart: &mut Cart) -> AppResult<()> {
    let code = prompt_code("Item code")?;
    let item = state.inventory.require(&code)?.clone();
    println!(
        "{} costs {}, {} available.",
        item.name,
        state.format_money(item.price()),
        item.quantity - cart.quantity_of(&code)
    );
    let quantity = prompt_quantity("Quantity")?;

    let in_cart = user::add_to_cart(state, cart, &code, quantity)?;
    println!("{} x {} in your cart.", in_cart, item.name);
    Ok(())
}

fn user_view_cart(state: &MachineState, cart: &Cart) -> AppResult<()> {
    let bill = user::view_bill(state, cart)?;
    print!("{}", render::render_bill(&bill, state.currency_symbol()));
    Ok(())
}

fn user_manage_cart(state: &MachineState, cart: &mut Cart) -> AppResult<()> {
    let bill = user::view_bill(state, cart)?;

    let mut choices: Vec<String> = bill
        .lines
        .iter()
        .map(|line| format!("{} {} x {}", line.code, line.name, line.quantity))
        .collect();
    choices.push("Back".to_string());

    let picked = Select::new()
        .with_prompt("Which item?")
        .items(&choices)
        .default(0)
        .interact()?;
    let Some(line) = bill.lines.get(picked) else {
        return Ok(());
    };

    let action = Select::new()
        .with_prompt(format!("{} x {}", line.name, line.quantity))
        .items(&["Remove from cart", "Change quantity", "Back"])
        .default(0)
        .interact()?;

    match action {
        0 => {
            user::remove_from_cart(cart, &line.code)?;
            println!("Removed {} from your cart.", line.name);
        }
        1 => {
            let quantity = prompt_quantity("New quantity")?;
            user::update_cart_quantity(state, cart, &line.code, quantity)?;
            println!("{} x {} in your cart.", quantity, line.name);
        }
        _ => {}
    }
    Ok(())
}

fn user_checkout(state: &mut MachineState, cart: &mut Cart) -> AppResult<()> {
    let bill = user::view_bill(state, cart)?;
    print!("{}", render::render_bill(&bill, state.currency_symbol()));

    let confirmed = Confirm::new()
        .with_prompt(format!("Pay {}?", state.format_money(bill.total())))
        .default(true)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    let receipt = user::checkout(state, cart)?;
    print!(
        "{}",
        render::render_receipt(&receipt, state.machine_name(), state.currency_symbol())
    );
    Ok(())
}

// =============================================================================
// Prompts
// =============================================================================

fn prompt_text(prompt: &str) -> AppResult<String> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &'static str> {
            if input.trim().is_empty() {
                Err("A value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(text.trim().to_string())
}

fn prompt_code(prompt: &str) -> AppResult<String> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| validate_item_code(input.trim()))
        .interact_text()?;
    Ok(text.trim().to_string())
}

fn prompt_quantity(prompt: &str) -> AppResult<i64> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| parse_quantity(input).map(|_| ()))
        .interact_text()?;
    Ok(parse_quantity(&text)?)
}

fn prompt_whole_number(prompt: &str) -> AppResult<i64> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| parse_whole_number(input).map(|_| ()))
        .interact_text()?;
    Ok(parse_whole_number(&text)?)
}

fn parse_stock(text: &str) -> AppResult<i64> {
    let quantity = parse_whole_number(text)?;
    validate_stock_quantity(quantity)?;
    Ok(quantity)
}

fn prompt_stock(prompt: &str) -> AppResult<i64> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            parse_stock(input).map(|_| ()).map_err(|e| e.message)
        })
        .interact_text()?;
    parse_stock(&text)
}

fn parse_price(text: &str) -> AppResult<Money> {
    let price: Money = text.trim().parse()?;
    validate_price_cents(price.cents())?;
    Ok(price)
}

fn prompt_price(prompt: &str) -> AppResult<Money> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| {
            parse_price(input).map(|_| ()).map_err(|e| e.message)
        })
        .interact_text()?;
    parse_price(&text)
}
